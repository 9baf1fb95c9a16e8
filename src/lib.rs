//! DocBase Rust Client SDK
//!
//! A typed async client for DocBase, a document-oriented backend exposing
//! databases, collections, and documents over HTTP. Databases and
//! collections are addressed by display name (resolved to server-assigned
//! identifiers, with the last listing memoized); documents are addressed by
//! identifier and move through serde-typed shapes.
//!
//! # Example
//!
//! ```no_run
//! use docbase::{Client, ClientOptions, Databases};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct ClientRecord {
//!     #[serde(rename = "$id", skip_serializing_if = "Option::is_none")]
//!     id: Option<String>,
//!     name: String,
//! }
//!
//! #[tokio::main]
//! async fn main() -> docbase::Result<()> {
//!     let client = Client::connect(
//!         ClientOptions::new("https://docbase.example.com/v1")
//!             .with_project("my-project")
//!             .with_key("secret-key"),
//!     );
//!
//!     // Resolve by display name
//!     let databases = Databases::new(&client);
//!     let database = databases.get("agreements").await?;
//!     let clients = database.collection::<ClientRecord>("Clients").await?;
//!
//!     // Create a document; the server assigns the identifier
//!     let created = clients
//!         .create(&ClientRecord { id: None, name: "Acme".into() })
//!         .await?;
//!     println!("Created: {:?}", created.id);
//!
//!     let page = clients.list().await?;
//!     println!("{} of {} documents", page.documents.len(), page.total);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod collection;
mod databases;
mod error;
mod models;
pub mod query;
pub mod serialize;
pub mod transport;

pub use client::{Client, ClientOptions};
pub use collection::Collection;
pub use databases::{DatabaseHandle, Databases};
pub use error::{Error, Result};
pub use models::{
    CollectionAttribute, CollectionIndex, CollectionList, CollectionModel, DatabaseList,
    DatabaseModel, DocumentList, ListOptions, OrderType, ResourceMetadata,
};
pub use query::{Query, QueryExpression};
pub use serialize::Action;
pub use transport::{HttpTransport, Method, RawResponse, Transport};
