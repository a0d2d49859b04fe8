//! Core types for Brennan synthetic insights
//!
//! Holds everything the generator and the assistant exchange: sensor and
//! task inputs, the result shapes the dashboards render, the chat history,
//! the assistant error taxonomy, and the clock and latency seams that make
//! every capability deterministic under test.
//!
//! Key constraints:
//! - Value types only; nothing here keeps state between calls
//! - Every documented range lives in [`constants`]
//! - Time and latency are injected, never read from globals
//!
//! ```no_run
//! use brennan_core::{RiskLevel, SensorReading};
//!
//! let reading = SensorReading::new(62.0, 71.0, 40.0, 55.0);
//!
//! match RiskLevel::from_score(reading.risk_score()) {
//!     RiskLevel::High => {}, // dispatch maintenance
//!     _ => {},               // keep monitoring
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod chat;
pub mod constants;
pub mod errors;
pub mod latency;
pub mod models;
pub mod time;

// Public API
pub use chat::{ChatMessage, Conversation, Role};
pub use errors::{ChatError, ChatErrorKind, ChatResult};
pub use latency::LatencyProfile;
pub use models::*;
pub use time::{Clock, FixedClock, SystemClock, Timestamp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
