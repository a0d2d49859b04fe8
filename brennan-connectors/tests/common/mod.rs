//! Shared fixtures for assistant integration tests
//!
//! - Recording transport with scripted responses and a call counter
//! - Session builders on a pinned clock with no reply latency

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use brennan_connectors::{
    ChatResponder, ChatSession, ChatTransport, SessionConfig, TransportError, TransportRequest,
    TransportResponse,
};
use brennan_core::FixedClock;

pub const EPOCH_MS: i64 = 1_700_000_000_000;

type Scripted = Result<TransportResponse, TransportError>;

/// Transport that records every request and replays scripted outcomes
#[derive(Clone, Default)]
pub struct MockTransport {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<TransportRequest>>>,
    script: Arc<Mutex<VecDeque<Scripted>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a completion whose content is `text`
    pub fn completion(self, text: &str) -> Self {
        let body = serde_json::json!({
            "choices": [{ "message": { "role": "assistant", "content": text } }]
        });
        self.respond(200, &body.to_string())
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(TransportResponse::new(status, body)));
        self
    }

    pub fn fail(self, description: &str) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Request(description.to_string())));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatTransport for MockTransport {
    async fn post_json(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("no scripted response".into())))
    }
}

/// Session with no reply latency on a pinned clock
pub fn session<R: ChatResponder>(responder: R) -> ChatSession<R, FixedClock> {
    ChatSession::with_clock(responder, FixedClock::from_millis(EPOCH_MS))
        .with_config(SessionConfig::instant())
}
