//! Transport seam for remote completions
//!
//! The remote responder only needs one thing from the network: POST a JSON
//! document with a bearer credential and hand back the status and body.
//! Keeping that behind [`ChatTransport`] lets tests count calls and script
//! responses without a server.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Transport-level failures (no response was received)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// DNS, connect, TLS or read failure
    #[error("{0}")]
    Request(String),

    /// The blocking worker running the request died
    #[error("transport worker failed: {0}")]
    Worker(String),
}

/// One outgoing completion request
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub url: String,
    /// Sent as `Authorization: Bearer <token>`
    pub bearer_token: String,
    pub body: Value,
}

/// Whatever the endpoint answered, success or not
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// POST-a-JSON-document capability
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send `request`. Non-2xx statuses are responses, not errors.
    async fn post_json(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: ChatTransport + ?Sized> ChatTransport for std::sync::Arc<T> {
    async fn post_json(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (**self).post_json(request).await
    }
}
