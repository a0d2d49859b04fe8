//! Error Types for the Assistant Path
//!
//! ## Design Philosophy
//!
//! The synthetic generators never fail, so the only fallible surface is the
//! assistant reply. Its failures fall into three categories:
//!
//! ### Configuration
//! - `Configuration`: a required credential is absent. Detected before any
//!   network attempt; retrying does not help until an operator configures it.
//!
//! ### Remote
//! - `Remote`: the completion endpoint answered but signaled failure. The
//!   provider's own message is passed through.
//!
//! ### Transport
//! - `Network`: the request never completed (DNS, connection refused, TLS,
//!   platform timeout). The transport's description is passed through.
//!
//! Each variant renders with a bracketed tag, so the text stored in a flagged
//! chat entry reads the same as the one users saw before. Callers branch on
//! [`ChatError::kind`] instead of inspecting that prefix.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use brennan_core::{ChatError, ChatErrorKind};
//!
//! fn describe(err: &ChatError) -> &'static str {
//!     match err.kind() {
//!         ChatErrorKind::Configuration => "ask an operator for an API key",
//!         ChatErrorKind::Remote => "the provider rejected the request",
//!         ChatErrorKind::Network => "check connectivity and retry",
//!     }
//! }
//!
//! let err = ChatError::configuration("no API key configured");
//! assert_eq!(describe(&err), "ask an operator for an API key");
//! assert!(err.to_string().starts_with("[ConfigurationError]"));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for assistant replies
pub type ChatResult<T> = Result<T, ChatError>;

/// Failure of a remote assistant reply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    /// Required credential absent
    #[error("[ConfigurationError] {message}")]
    Configuration {
        /// What is missing
        message: String,
    },

    /// Endpoint responded with a failure
    #[error("[RemoteError] {message}")]
    Remote {
        /// Provider message, or the status when the body carried none
        message: String,
    },

    /// Transport failed before a response arrived
    #[error("[NetworkError] {message}")]
    Network {
        /// Transport description
        message: String,
    },
}

/// Discriminant of a [`ChatError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatErrorKind {
    /// See [`ChatError::Configuration`]
    Configuration,
    /// See [`ChatError::Remote`]
    Remote,
    /// See [`ChatError::Network`]
    Network,
}

impl ChatError {
    /// Missing credential or other operator-side setup
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Provider-signaled failure
    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote { message: message.into() }
    }

    /// Transport failure
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Which of the three failure conditions this is
    pub fn kind(&self) -> ChatErrorKind {
        match self {
            Self::Configuration { .. } => ChatErrorKind::Configuration,
            Self::Remote { .. } => ChatErrorKind::Remote,
            Self::Network { .. } => ChatErrorKind::Network,
        }
    }

    /// Message without the bracketed tag
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message }
            | Self::Remote { message }
            | Self::Network { message } => message,
        }
    }

    /// Whether sending again without operator action could succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Configuration { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_bracketed_tag() {
        assert_eq!(
            ChatError::configuration("API key missing").to_string(),
            "[ConfigurationError] API key missing"
        );
        assert_eq!(
            ChatError::remote("Invalid model").to_string(),
            "[RemoteError] Invalid model"
        );
        assert_eq!(
            ChatError::network("connection refused").to_string(),
            "[NetworkError] connection refused"
        );
    }

    #[test]
    fn kind_and_message() {
        let err = ChatError::remote("quota exceeded");
        assert_eq!(err.kind(), ChatErrorKind::Remote);
        assert_eq!(err.message(), "quota exceeded");
    }

    #[test]
    fn configuration_is_not_retryable() {
        assert!(!ChatError::configuration("x").is_retryable());
        assert!(ChatError::remote("x").is_retryable());
        assert!(ChatError::network("x").is_retryable());
    }
}
