//! Client configuration and transport ownership.

use std::collections::HashMap;
use std::sync::Arc;

use crate::transport::{HttpTransport, Transport};

/// Connection options for a DocBase project.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub endpoint: String,
    pub project: Option<String>,
    pub key: Option<String>,
}

impl ClientOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            project: None,
            key: None,
        }
    }

    /// Set the project identifier sent with every request.
    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    /// Set the secret API key sent with every request.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// Entry point for the SDK; owns the transport shared by all services.
///
/// Cloning is cheap and shares the underlying transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Build a client backed by the HTTP transport.
    pub fn connect(options: ClientOptions) -> Self {
        let mut headers = HashMap::new();
        if let Some(project) = &options.project {
            headers.insert("x-docbase-project".to_string(), project.clone());
        }
        if let Some(key) = &options.key {
            headers.insert("x-docbase-key".to_string(), key.clone());
        }

        Self {
            transport: Arc::new(HttpTransport::new(options.endpoint, headers)),
        }
    }

    /// Build a client over a custom transport. Used by tests to substitute
    /// a mock.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub(crate) fn transport(&self) -> Arc<dyn Transport> {
        Arc::clone(&self.transport)
    }
}
