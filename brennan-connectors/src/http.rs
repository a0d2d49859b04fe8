//! HTTP/HTTPS Transport for Remote Completions
//!
//! ## Overview
//!
//! [`UreqTransport`] implements [`ChatTransport`] with the blocking `ureq`
//! client, run on Tokio's blocking pool so the async session never stalls a
//! runtime worker.
//!
//! ## Design Decisions
//!
//! - One attempt per call. Retrying is a user action in the chat session.
//! - No timeout unless configured; a hung endpoint blocks only the send
//!   that issued it.
//! - Non-2xx statuses come back as [`TransportResponse`]s so the responder
//!   can read the provider's error envelope. Only transport failures are
//!   errors.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use brennan_connectors::http::{HttpConfig, UreqTransport};
//!
//! let transport = UreqTransport::new(
//!     HttpConfig::new()
//!         .timeout_secs(60)
//!         .header("OpenAI-Organization", "org-brennan"),
//! );
//! ```

use std::time::Duration;

use async_trait::async_trait;

use crate::transport::{ChatTransport, TransportError, TransportRequest, TransportResponse};

/// Client settings for [`UreqTransport`]
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Overall request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Extra headers sent with every request
    pub headers: Vec<(String, String)>,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    pub fn new() -> Self {
        Self {
            timeout: None,
            headers: Vec::new(),
            user_agent: format!("Brennan-Jarvis/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Add custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Completion transport on the lightweight ureq client
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    headers: Vec<(String, String)>,
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(HttpConfig::default())
    }
}

impl UreqTransport {
    pub fn new(config: HttpConfig) -> Self {
        let mut builder = ureq::AgentBuilder::new().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            headers: config.headers,
        }
    }
}

#[async_trait]
impl ChatTransport for UreqTransport {
    async fn post_json(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let agent = self.agent.clone();
        let headers = self.headers.clone();

        tokio::task::spawn_blocking(move || post_blocking(&agent, &headers, request))
            .await
            .map_err(|e| TransportError::Worker(e.to_string()))?
    }
}

fn post_blocking(
    agent: &ureq::Agent,
    headers: &[(String, String)],
    request: TransportRequest,
) -> Result<TransportResponse, TransportError> {
    let mut call = agent
        .post(&request.url)
        .set("Authorization", &format!("Bearer {}", request.bearer_token))
        .set("Accept", "application/json");
    for (name, value) in headers {
        call = call.set(name, value);
    }

    log::debug!("POST {}", request.url);
    match call.send_json(request.body) {
        Ok(response) => read_response(response),
        // The provider's error envelope is in the body
        Err(ureq::Error::Status(_, response)) => read_response(response),
        Err(ureq::Error::Transport(transport)) => Err(TransportError::Request(transport.to_string())),
    }
}

fn read_response(response: ureq::Response) -> Result<TransportResponse, TransportError> {
    let status = response.status();
    let body = response
        .into_string()
        .map_err(|e| TransportError::Request(e.to_string()))?;
    Ok(TransportResponse { status, body })
}
