//! Shared fixtures for core integration tests

#![allow(dead_code)]

use brennan_core::time::{Clock, FixedClock, Timestamp};
use brennan_core::{ChatError, Conversation};

/// 2023-11-14T22:13:20Z
pub const EPOCH_MS: i64 = 1_700_000_000_000;

pub fn now() -> Timestamp {
    FixedClock::from_millis(EPOCH_MS).now()
}

/// Greeting, two exchanges, one failed reply
pub fn sample_conversation() -> Conversation {
    let mut conversation = Conversation::with_welcome(now());
    conversation.push_user("Show me crypto trends", now());
    conversation.push_reply("Market sentiment is bullish.", now());
    conversation.push_user("And health metrics?", now());
    conversation.push_error(&ChatError::network("connection reset"), now());
    conversation
}
