//! Wire types for DocBase resources and listing envelopes.
//!
//! Server-owned fields carry a `$` sigil on the wire (`$id`, `$createdAt`,
//! ...) to keep them distinct from user-defined attributes; the serde
//! renames here must preserve that prefix exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fields common to every addressable remote object.
///
/// The identifier is server-assigned and immutable once created; it is never
/// derived client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceMetadata {
    #[serde(rename = "$id")]
    pub id: String,
    #[serde(rename = "$createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "$updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// A database row as returned by listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseModel {
    #[serde(flatten)]
    pub meta: ResourceMetadata,
    pub name: String,
}

/// An attribute definition on a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionAttribute {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub required: bool,
    pub array: bool,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub default: Option<serde_json::Value>,
    #[serde(default)]
    pub elements: Option<Vec<String>>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub min: Option<i64>,
    #[serde(default)]
    pub max: Option<i64>,
}

/// An index definition on a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionIndex {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub attributes: Vec<String>,
    #[serde(default)]
    pub orders: Vec<String>,
}

/// A collection row as returned by listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionModel {
    #[serde(flatten)]
    pub meta: ResourceMetadata,
    #[serde(rename = "$permissions", default)]
    pub permissions: Vec<serde_json::Value>,
    pub database_id: String,
    pub name: String,
    pub enabled: bool,
    pub document_security: bool,
    #[serde(default)]
    pub attributes: Vec<CollectionAttribute>,
    #[serde(default)]
    pub indexes: Vec<CollectionIndex>,
}

impl fmt::Display for CollectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.meta.id)
    }
}

/// Listing envelope for databases.
///
/// `total` is the authoritative server-side count at listing time; the
/// returned rows may be a truncated page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseList {
    pub total: u64,
    pub databases: Vec<DatabaseModel>,
}

/// Listing envelope for collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionList {
    pub total: u64,
    pub collections: Vec<CollectionModel>,
}

/// Listing envelope for documents of shape `T`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentList<T> {
    pub total: u64,
    pub documents: Vec<T>,
}

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderType {
    Asc,
    Desc,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Asc => write!(f, "ASC"),
            OrderType::Desc => write!(f, "DESC"),
        }
    }
}

/// Pagination and ordering parameters accepted by every listing endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    pub limit: u32,
    pub offset: u32,
    pub order: OrderType,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: 25,
            offset: 0,
            order: OrderType::Asc,
        }
    }
}
