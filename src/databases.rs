//! Database service: listing, name resolution, and collection management.
//!
//! Resolution maps a display name to the server-assigned identifier. The
//! most recent unfiltered database listing is memoized so repeated lookups
//! skip the round trip; the snapshot is overwritten wholesale by the next
//! unfiltered listing and is never evicted on writes, so a resolve can
//! return a stale identifier for a renamed or deleted database.

use std::sync::{Arc, RwLock};
use tracing::debug;

use crate::client::Client;
use crate::collection::Collection;
use crate::error::{Error, Result};
use crate::models::{CollectionList, CollectionModel, DatabaseList, ListOptions};
use crate::query::Query;
use crate::serialize;
use crate::transport::{json_headers, listing_params, Method, Transport};

/// Service over the `/databases` endpoints, with name-to-identifier
/// resolution.
pub struct Databases {
    transport: Arc<dyn Transport>,
    cache: RwLock<Option<DatabaseList>>,
}

impl Databases {
    pub fn new(client: &Client) -> Self {
        Self {
            transport: client.transport(),
            cache: RwLock::new(None),
        }
    }

    /// List databases.
    ///
    /// Only an unfiltered listing overwrites the memoized snapshot used by
    /// [`Databases::get`]; a filtered listing would narrow every later
    /// lookup to its subset, so it is kept cache-neutral.
    pub async fn list(
        &self,
        queries: Option<&[String]>,
        options: ListOptions,
    ) -> Result<DatabaseList> {
        let path = "/databases";
        let params = listing_params(queries, &options);
        let body = self
            .transport
            .call(Method::Get, path, &json_headers(), params)
            .await?
            .into_body(path)?;
        let list: DatabaseList = serialize::decode(&body)?;

        if queries.is_none() {
            let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
            *guard = Some(list.clone());
        }

        Ok(list)
    }

    /// Resolve a database by display name.
    ///
    /// The cached listing is scanned first (exact, case-sensitive match);
    /// on a hit no transport call is made. On a miss, one listing filtered
    /// by an equality clause on `name` is issued. If the name is absent
    /// from both, this is [`Error::NotFound`] — never an invalid handle.
    pub async fn get(&self, name: &str) -> Result<DatabaseHandle> {
        let cached_id = {
            let guard = self.cache.read().unwrap_or_else(|e| e.into_inner());
            guard.as_ref().and_then(|list| {
                list.databases
                    .iter()
                    .find(|db| db.name == name)
                    .map(|db| db.meta.id.clone())
            })
        };

        if let Some(id) = cached_id {
            debug!(name, %id, "database resolved from cache");
            return Ok(DatabaseHandle::from_parts(Arc::clone(&self.transport), id));
        }

        debug!(name, "database not cached, issuing filtered listing");
        let queries = Query::new().equal("name", name).build()?;
        let list = self.list(Some(&queries), ListOptions::default()).await?;

        let database = list
            .databases
            .iter()
            .find(|db| db.name == name)
            .ok_or(Error::NotFound {
                kind: "database",
                name: name.to_string(),
            })?;

        Ok(DatabaseHandle::from_parts(
            Arc::clone(&self.transport),
            database.meta.id.clone(),
        ))
    }

    /// Drop the memoized listing. The next resolve will fetch fresh.
    pub fn invalidate(&self) {
        let mut guard = self.cache.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }
}

/// A handle bound to one resolved database identifier.
///
/// Client-side only: holds no server state and needs no cleanup.
pub struct DatabaseHandle {
    transport: Arc<dyn Transport>,
    database_id: String,
}

impl std::fmt::Debug for DatabaseHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseHandle")
            .field("database_id", &self.database_id)
            .finish_non_exhaustive()
    }
}

impl DatabaseHandle {
    /// Construct directly from a known identifier, skipping resolution.
    pub fn new(client: &Client, database_id: impl Into<String>) -> Self {
        Self::from_parts(client.transport(), database_id.into())
    }

    pub(crate) fn from_parts(transport: Arc<dyn Transport>, database_id: String) -> Self {
        Self {
            transport,
            database_id,
        }
    }

    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    /// List collections in this database.
    pub async fn list_collections(
        &self,
        queries: Option<&[String]>,
        options: ListOptions,
    ) -> Result<CollectionList> {
        let path = format!("/databases/{}/collections", self.database_id);
        let params = listing_params(queries, &options);
        let body = self
            .transport
            .call(Method::Get, &path, &json_headers(), params)
            .await?
            .into_body(&path)?;
        serialize::decode(&body)
    }

    /// Create a collection and return the created resource.
    pub async fn create_collection(
        &self,
        collection_id: &str,
        name: &str,
    ) -> Result<CollectionModel> {
        let path = format!("/databases/{}/collections", self.database_id);
        let params = vec![
            ("collectionId".to_string(), serde_json::json!(collection_id)),
            ("name".to_string(), serde_json::json!(name)),
        ];
        let body = self
            .transport
            .call(Method::Post, &path, &json_headers(), params)
            .await?
            .into_body(&path)?;
        serialize::decode(&body)
    }

    /// Fetch a collection's metadata by identifier.
    pub async fn get_collection(&self, collection_id: &str) -> Result<CollectionModel> {
        let path = format!("/databases/{}/collections/{}", self.database_id, collection_id);
        let body = self
            .transport
            .call(Method::Get, &path, &json_headers(), Vec::new())
            .await?
            .into_body(&path)?;
        serialize::decode(&body)
    }

    /// Rename a collection.
    pub async fn update_collection(
        &self,
        collection_id: &str,
        name: &str,
    ) -> Result<CollectionModel> {
        let path = format!("/databases/{}/collections/{}", self.database_id, collection_id);
        let params = vec![("name".to_string(), serde_json::json!(name))];
        let body = self
            .transport
            .call(Method::Put, &path, &json_headers(), params)
            .await?
            .into_body(&path)?;
        serialize::decode(&body)
    }

    /// Delete a collection by identifier.
    pub async fn delete_collection(&self, collection_id: &str) -> Result<()> {
        let path = format!("/databases/{}/collections/{}", self.database_id, collection_id);
        self.transport
            .call(Method::Delete, &path, &json_headers(), Vec::new())
            .await?
            .into_body(&path)?;
        Ok(())
    }

    /// Resolve a typed document collection by display name.
    ///
    /// Issues one collection listing filtered by an equality clause on
    /// `name` and takes the first exact match. Absent names raise
    /// [`Error::NotFound`].
    pub async fn collection<T>(&self, name: &str) -> Result<Collection<T>> {
        let queries = Query::new().equal("name", name).build()?;
        let list = self
            .list_collections(Some(&queries), ListOptions::default())
            .await?;

        let collection = list
            .collections
            .iter()
            .find(|c| c.name == name)
            .ok_or(Error::NotFound {
                kind: "collection",
                name: name.to_string(),
            })?;

        debug!(name, id = %collection.meta.id, "collection resolved");

        Ok(Collection::from_parts(
            Arc::clone(&self.transport),
            self.database_id.clone(),
            collection.meta.id.clone(),
        ))
    }

    /// Build a typed collection handle from a known identifier.
    pub fn collection_from_id<T>(&self, collection_id: impl Into<String>) -> Collection<T> {
        Collection::from_parts(
            Arc::clone(&self.transport),
            self.database_id.clone(),
            collection_id.into(),
        )
    }
}
