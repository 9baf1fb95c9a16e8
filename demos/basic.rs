//! Basic example demonstrating the DocBase Rust SDK.

use docbase::{Client, ClientOptions, Databases};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct ClientRecord {
    #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
}

#[tokio::main]
async fn main() -> docbase::Result<()> {
    let client = Client::connect(
        ClientOptions::new("https://docbase.example.com/v1")
            .with_project("my-project")
            .with_key("secret-key"),
    );

    // Resolve the database and collection by display name
    let databases = Databases::new(&client);
    let database = databases.get("agreements").await?;
    println!("Resolved database: {}", database.database_id());

    let collections = database.list_collections(None, Default::default()).await?;
    println!("{} collections", collections.total);

    let clients = database.collection::<ClientRecord>("Clients").await?;

    // Create a document; the identifier comes back from the server
    let created = clients
        .create(&ClientRecord {
            id: None,
            name: "Acme".to_string(),
            phone: Some("555-0100".to_string()),
        })
        .await?;
    println!("Created document: {:?}", created.id);

    // Fetch it back by the assigned identifier
    if let Some(id) = &created.id {
        let fetched = clients.get(id).await?;
        println!("Fetched: {}", fetched.name);
    }

    // List a page of documents
    let page = clients.list().await?;
    println!("{} of {} documents", page.documents.len(), page.total);

    Ok(())
}
