//! Typed document CRUD over one collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::client::Client;
use crate::error::Result;
use crate::models::{DocumentList, ListOptions};
use crate::serialize::{self, Action};
use crate::transport::{json_headers, listing_params, Method, Transport};

/// A document collection bound to resolved database and collection
/// identifiers, typed by the document shape `T`.
///
/// Documents are addressed by explicit identifier only; name resolution
/// stops at the collection level.
pub struct Collection<T> {
    transport: Arc<dyn Transport>,
    database_id: String,
    collection_id: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("database_id", &self.database_id)
            .field("collection_id", &self.collection_id)
            .finish_non_exhaustive()
    }
}

impl<T> Collection<T> {
    /// Construct from known identifiers, skipping resolution.
    pub fn new(
        client: &Client,
        database_id: impl Into<String>,
        collection_id: impl Into<String>,
    ) -> Self {
        Self::from_parts(client.transport(), database_id.into(), collection_id.into())
    }

    pub(crate) fn from_parts(
        transport: Arc<dyn Transport>,
        database_id: String,
        collection_id: String,
    ) -> Self {
        Self {
            transport,
            database_id,
            collection_id,
            _marker: PhantomData,
        }
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    pub fn collection_id(&self) -> &str {
        &self.collection_id
    }

    fn documents_path(&self) -> String {
        format!(
            "/databases/{}/collections/{}/documents",
            self.database_id, self.collection_id
        )
    }

    fn document_path(&self, document_id: &str) -> String {
        format!("{}/{}", self.documents_path(), document_id)
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned,
{
    /// List documents with default pagination.
    pub async fn list(&self) -> Result<DocumentList<T>> {
        self.list_with(None, ListOptions::default()).await
    }

    /// List documents with filter clauses and pagination.
    ///
    /// The envelope's `total` is the authoritative server-side count and is
    /// independent of how many rows this page actually carries.
    pub async fn list_with(
        &self,
        queries: Option<&[String]>,
        options: ListOptions,
    ) -> Result<DocumentList<T>> {
        let path = self.documents_path();
        let params = listing_params(queries, &options);
        let body = self
            .transport
            .call(Method::Get, &path, &json_headers(), params)
            .await?
            .into_body(&path)?;
        serialize::decode(&body)
    }

    /// Fetch a document by identifier.
    pub async fn get(&self, document_id: &str) -> Result<T> {
        let path = self.document_path(document_id);
        let body = self
            .transport
            .call(Method::Get, &path, &json_headers(), Vec::new())
            .await?
            .into_body(&path)?;
        serialize::decode(&body)
    }

    /// Create a document.
    ///
    /// The payload is encoded with [`Action::Create`], which strips any
    /// identity field; the server assigns the identifier. Returns the
    /// decoded server response, so the assigned identifier and timestamps
    /// are visible to the caller.
    pub async fn create(&self, value: &T) -> Result<T> {
        let data = serialize::encode(value, Action::Create)?;
        let path = self.documents_path();
        let params = vec![
            ("documentId".to_string(), json!("unique()")),
            ("data".to_string(), data),
        ];
        let body = self
            .transport
            .call(Method::Post, &path, &json_headers(), params)
            .await?
            .into_body(&path)?;
        serialize::decode(&body)
    }

    /// Update a document by identifier.
    ///
    /// [`Action::Update`] applies no field exclusion: an identity field
    /// present on the value is sent as-is.
    pub async fn update(&self, document_id: &str, value: &T) -> Result<T> {
        let data = serialize::encode(value, Action::Update)?;
        let path = self.document_path(document_id);
        let params = vec![("data".to_string(), data)];
        let body = self
            .transport
            .call(Method::Patch, &path, &json_headers(), params)
            .await?
            .into_body(&path)?;
        serialize::decode(&body)
    }

    /// Delete a document by identifier.
    pub async fn delete(&self, document_id: &str) -> Result<()> {
        let path = self.document_path(document_id);
        self.transport
            .call(Method::Delete, &path, &json_headers(), Vec::new())
            .await?
            .into_body(&path)?;
        Ok(())
    }
}
