//! Jarvis Assistant Connectors
//!
//! ## Overview
//!
//! Everything between a typed chat message and the reply shown under it.
//! One contract, [`ChatResponder`], has two interchangeable
//! implementations; a deployment picks one and never chains them.
//!
//! ### Keyword responder
//!
//! **When to use:**
//! - Offline demos and kiosks
//! - No credential available
//!
//! **Characteristics:**
//! - Never fails
//! - Canned paragraph per topic, echoing fallback otherwise
//! - `plugin:<id>:<text>` runs a named text transform
//!
//! ### Remote responder
//!
//! **When to use:**
//! - An OpenAI-compatible completion endpoint and API key are available
//!
//! **Characteristics:**
//! - Forwards the full history behind the Jarvis system prompt
//! - Fails with a typed [`ChatError`] (configuration, remote, network)
//! - Transport is pluggable ([`ChatTransport`]); `ureq` behind the `http`
//!   feature
//!
//! ## Sessions
//!
//! A [`ChatSession`] owns the conversation, waits the reply latency, and
//! stores failed replies inline, flagged for retry or deletion.
//!
//! ## Example Usage
//!
//! ```rust
//! use brennan_connectors::{ChatSession, KeywordResponder, SessionConfig};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let mut session = ChatSession::new(KeywordResponder::new()).with_config(SessionConfig::instant());
//! let reply = session.send("Any crypto signals today?").await.unwrap();
//! assert!(reply.content.contains("blockchain analytics"));
//! # });
//! ```

#![deny(unsafe_code)]

use async_trait::async_trait;
use brennan_core::{ChatMessage, ChatResult};

pub mod canned;
pub mod completion;
#[cfg(feature = "http")]
pub mod http;
pub mod plugins;
pub mod session;
pub mod speech;
pub mod transport;

// Re-export common types
pub use canned::KeywordResponder;
pub use completion::{CompletionConfig, RemoteResponder};
#[cfg(feature = "http")]
pub use http::{HttpConfig, UreqTransport};
pub use plugins::PluginRegistry;
pub use session::{ChatSession, SessionConfig};
pub use speech::{ListenConfig, SpeechError, SpeechRecognizer, SpeechSynthesizer, Utterance, VoiceInput};
pub use transport::{ChatTransport, TransportError, TransportRequest, TransportResponse};

/// Produces the assistant's reply to a new user message
///
/// `history` is the conversation before `message`, oldest first.
#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn respond(&self, history: &[ChatMessage], message: &str) -> ChatResult<String>;
}

#[async_trait]
impl<R: ChatResponder + ?Sized> ChatResponder for Box<R> {
    async fn respond(&self, history: &[ChatMessage], message: &str) -> ChatResult<String> {
        (**self).respond(history, message).await
    }
}

/// Request counters of a remote responder
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConnectionStats {
    /// Requests answered with a completion
    pub requests_sent: u64,
    /// Requests that ended in a [`ChatError`](brennan_core::ChatError)
    pub requests_failed: u64,
    /// Total request body bytes
    pub bytes_sent: u64,
    /// Display text of the last failure
    pub last_error: Option<String>,
}
