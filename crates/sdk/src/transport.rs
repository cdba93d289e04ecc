// Transport Port
// Abstraction over the HTTP POST the dispatcher performs (allows mocking in tests)

use crate::config::ClientConfig;
use crate::error::{LbryError, Result};
use async_trait::async_trait;
use tracing::trace;

/// Raw HTTP response as seen by the dispatcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport trait
///
/// Implementations:
/// - HttpTransport: posts to the daemon over HTTP (reqwest)
/// - mocks::MockTransport: replays canned responses, records bodies
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post a JSON body and return status + body
    ///
    /// # Errors
    /// - LbryError::Transport if the connection fails
    async fn post(&self, body: Vec<u8>) -> Result<TransportResponse>;

    /// Endpoint this transport posts to
    fn endpoint(&self) -> &str;
}

/// HTTP transport backed by reqwest
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    /// Build a transport from config
    ///
    /// No timeout is applied unless `request_timeout` is set.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| LbryError::Transport(format!("Failed to create client: {}", e)))?;

        Ok(Self {
            client,
            url: config.base_url.trim().to_string(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, body: Vec<u8>) -> Result<TransportResponse> {
        let response = self
            .client
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        trace!(status, bytes = body.len(), "HTTP response received");

        Ok(TransportResponse { status, body })
    }

    fn endpoint(&self) -> &str {
        &self.url
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Mock transport
    ///
    /// Replays queued responses in order and records every posted body.
    /// Once the queue is empty, posting fails with a transport error.
    #[derive(Default)]
    pub struct MockTransport {
        responses: Mutex<VecDeque<Result<TransportResponse>>>,
        requests: Mutex<Vec<Vec<u8>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Mock answering once with `body` as JSON and HTTP 200
        pub fn with_json(body: serde_json::Value) -> Self {
            Self::with_status_json(200, body)
        }

        pub fn with_status_json(status: u16, body: serde_json::Value) -> Self {
            let mock = Self::new();
            mock.push_json(status, body);
            mock
        }

        /// Mock answering `{"result": value}` once
        pub fn with_result(value: serde_json::Value) -> Self {
            Self::with_json(serde_json::json!({ "result": value }))
        }

        pub fn push_json(&self, status: u16, body: serde_json::Value) {
            self.push_raw(status, body.to_string());
        }

        pub fn push_raw(&self, status: u16, body: impl Into<Vec<u8>>) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(TransportResponse::new(status, body)));
        }

        pub fn push_error(&self, message: impl Into<String>) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Err(LbryError::Transport(message.into())));
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        /// Posted bodies decoded as JSON
        pub fn requests(&self) -> Vec<serde_json::Value> {
            self.requests
                .lock()
                .unwrap()
                .iter()
                .map(|body| serde_json::from_slice(body).unwrap_or(serde_json::Value::Null))
                .collect()
        }

        /// Last posted body decoded as JSON
        pub fn last_request(&self) -> Option<serde_json::Value> {
            self.requests().pop()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn post(&self, body: Vec<u8>) -> Result<TransportResponse> {
            self.requests.lock().unwrap().push(body);

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(LbryError::Transport("no mock response queued".into())))
        }

        fn endpoint(&self) -> &str {
            "mock://lbryapi"
        }
    }
}
