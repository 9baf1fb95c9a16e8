//! Error types for the DocBase client SDK.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("{kind} '{name}' not found")]
  NotFound { kind: &'static str, name: String },

  #[error("Request to {path} failed with status {status}: {body}")]
  Request {
    status: u16,
    path: String,
    body: String,
  },

  #[error("Failed to decode response: {message}")]
  Decode { message: String, payload: String },

  #[error("Filter value for '{property}' cannot be embedded in a query clause: {value:?}")]
  MalformedFilter { property: String, value: String },

  #[error("Serialization error: {0}")]
  Serialization(String),

  #[error("HTTP error: {0}")]
  Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
