//! Shared test transport: serves canned responses and records every call.

use async_trait::async_trait;
use docbase::{Method, RawResponse, Result, Transport};
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, Value)>,
}

impl RecordedCall {
    /// Value of a named parameter, if present.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

pub struct MockTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Queue a response; calls consume the queue front-to-back.
    pub fn push_response(&self, status: u16, body: Value) {
        self.responses.lock().unwrap().push_back(RawResponse {
            status,
            body: body.to_string(),
        });
    }

    /// Queue a raw (possibly non-JSON) response body.
    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(RawResponse {
            status,
            body: body.to_string(),
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn call(
        &self,
        method: Method,
        path: &str,
        _headers: &HashMap<String, String>,
        params: Vec<(String, Value)>,
    ) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            params,
        });

        let response = self.responses.lock().unwrap().pop_front();
        Ok(response.unwrap_or(RawResponse {
            status: 404,
            body: "{}".to_string(),
        }))
    }
}
