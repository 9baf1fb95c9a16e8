//! HTTP transport boundary.
//!
//! Services issue every remote operation through the [`Transport`] trait and
//! never touch a connection directly. The production implementation is
//! [`HttpTransport`] over reqwest; tests substitute a canned-response mock.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::ListOptions;

/// HTTP verbs used by the DocBase API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Verbs that carry parameters as a JSON body instead of a query string.
    fn has_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A raw transport response: status plus unparsed body.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Return the body on success, or a [`Error::Request`] naming the path.
    pub fn into_body(self, path: &str) -> Result<String> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(Error::Request {
                status: self.status,
                path: path.to_string(),
                body: self.body,
            })
        }
    }
}

/// The remote-call seam consumed by every service.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(
        &self,
        method: Method,
        path: &str,
        headers: &HashMap<String, String>,
        params: Vec<(String, Value)>,
    ) -> Result<RawResponse>;
}

/// Encode `params` as an URL query string.
///
/// Null values are skipped, array values repeat the key with a `[]` suffix,
/// and everything else is percent-encoded as a single `key=value` pair.
fn to_query_string(params: &[(String, Value)]) -> String {
    fn component(value: &Value) -> String {
        match value {
            Value::String(s) => urlencoding::encode(s).into_owned(),
            other => urlencoding::encode(&other.to_string()).into_owned(),
        }
    }

    let mut parts = Vec::new();
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    parts.push(format!("{}[]={}", key, component(item)));
                }
            }
            other => parts.push(format!("{}={}", key, component(other))),
        }
    }
    parts.join("&")
}

/// The standard parameter set for listing endpoints.
pub(crate) fn listing_params(
    queries: Option<&[String]>,
    options: &ListOptions,
) -> Vec<(String, Value)> {
    let mut params = vec![
        ("limit".to_string(), json!(options.limit)),
        ("offset".to_string(), json!(options.offset)),
        ("orderType".to_string(), json!(options.order.to_string())),
    ];
    if let Some(queries) = queries {
        params.push(("queries".to_string(), json!(queries)));
    }
    params
}

pub(crate) fn json_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    headers
}

/// Production transport over reqwest.
///
/// Prefixes the configured endpoint, attaches the project and API-key
/// headers on every call, and reports connection-level failures as
/// [`Error::Http`]. Non-2xx statuses are not an error at this layer; the
/// services turn them into [`Error::Request`] with the request path.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: String,
    base_headers: HashMap<String, String>,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, base_headers: HashMap<String, String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            base_headers,
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(
        &self,
        method: Method,
        path: &str,
        headers: &HashMap<String, String>,
        params: Vec<(String, Value)>,
    ) -> Result<RawResponse> {
        let mut url = format!("{}{}", self.endpoint, path);

        let body = if method.has_body() {
            let fields: serde_json::Map<String, Value> = params
                .into_iter()
                .filter(|(_, v)| !v.is_null())
                .collect();
            Some(Value::Object(fields))
        } else {
            let query = to_query_string(&params);
            if !query.is_empty() {
                url = format!("{}?{}", url, query);
            }
            None
        };

        let mut request = self.http.request(method.into(), url.as_str());
        for (key, value) in self.base_headers.iter().chain(headers.iter()) {
            request = request.header(key, value);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        debug!(%method, %url, "issuing request");

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(%method, %url, status, "received response");

        Ok(RawResponse { status, body })
    }
}
