//! Assistant conversation history
//!
//! The conversation is owned by one chat session and handed to responders as
//! a plain slice. It only grows at the end; entries leave it only through an
//! explicit [`Conversation::remove`] (deleting a failed reply, or replacing
//! it on retry).
//!
//! A reply that failed is stored like any assistant message, with its error
//! text as content and `error: true`, so the user sees it inline and can
//! retry or delete it.
//!
//! ```rust
//! use brennan_core::chat::{Conversation, Role};
//! use brennan_core::time::{Clock, FixedClock};
//!
//! let clock = FixedClock::from_millis(1_700_000_000_000);
//! let mut conversation = Conversation::with_welcome(clock.now());
//! conversation.push_user("Show me crypto trends", clock.now());
//!
//! assert_eq!(conversation.len(), 2);
//! assert_eq!(conversation.messages()[1].role, Role::User);
//! ```

use std::io::Write;

use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::assistant::{WELCOME_MESSAGE, WELCOME_MESSAGE_ID};
use crate::errors::ChatError;
use crate::time::Timestamp;

/// Who authored a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The person at the keyboard
    User,
    /// The assistant
    Ai,
}

/// One entry of the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique within one conversation
    pub id: String,
    /// Author, serialized as `type`
    #[serde(rename = "type")]
    pub role: Role,
    /// Message text, or the error text of a failed reply
    pub content: String,
    /// When the entry was appended
    pub timestamp: Timestamp,
    /// Set on assistant entries that carry a failed reply
    #[serde(default, skip_serializing_if = "is_false")]
    pub error: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

impl ChatMessage {
    /// Unflagged message
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
            timestamp,
            error: false,
        }
    }

    /// Whether the user wrote it
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Ordered message history of one session
///
/// Deserializes from an exported message list; the id sequence resumes
/// after the highest one in the list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    #[serde(skip)]
    next_seq: u64,
}

impl From<Vec<ChatMessage>> for Conversation {
    fn from(messages: Vec<ChatMessage>) -> Self {
        let next_seq = messages.iter().filter_map(|m| sequence_of(&m.id)).max().unwrap_or(0);
        Self { messages, next_seq }
    }
}

impl<'de> Deserialize<'de> for Conversation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ChatMessage>::deserialize(deserializer).map(Self::from)
    }
}

/// Sequence suffix of a `"{millis}-{seq}"` id
fn sequence_of(id: &str) -> Option<u64> {
    id.rsplit_once('-').and_then(|(_, seq)| seq.parse().ok())
}

impl Conversation {
    /// Empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// History opened by the assistant's greeting
    pub fn with_welcome(now: Timestamp) -> Self {
        let mut conversation = Self::new();
        conversation
            .messages
            .push(ChatMessage::new(WELCOME_MESSAGE_ID, Role::Ai, WELCOME_MESSAGE, now));
        conversation
    }

    /// Entries, oldest first
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Entry count
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether there are no entries
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Newest entry
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Entry with `id`
    pub fn get(&self, id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Index of the message with `id`
    pub fn position(&self, id: &str) -> Option<usize> {
        self.messages.iter().position(|m| m.id == id)
    }

    /// Append a user message and return it
    pub fn push_user(&mut self, content: impl Into<String>, now: Timestamp) -> &ChatMessage {
        self.append(Role::User, content.into(), now, false)
    }

    /// Append an assistant reply and return it
    pub fn push_reply(&mut self, content: impl Into<String>, now: Timestamp) -> &ChatMessage {
        self.append(Role::Ai, content.into(), now, false)
    }

    /// Append a failed reply, flagged so it can be retried or deleted
    pub fn push_error(&mut self, error: &ChatError, now: Timestamp) -> &ChatMessage {
        self.append(Role::Ai, error.to_string(), now, true)
    }

    /// Remove the message with `id`
    pub fn remove(&mut self, id: &str) -> Option<ChatMessage> {
        let index = self.position(id)?;
        Some(self.messages.remove(index))
    }

    /// User message directly before the entry with `id`, if that is what precedes it
    pub fn question_for(&self, id: &str) -> Option<&ChatMessage> {
        let index = self.position(id)?;
        let previous = self.messages.get(index.checked_sub(1)?)?;
        previous.is_user().then_some(previous)
    }

    /// Entries flagged as failed replies
    pub fn errors(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.error)
    }

    /// Pretty JSON document of the message list
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.messages)
    }

    /// Write the export document to `writer`
    pub fn export_to<W: Write>(&self, writer: W) -> serde_json::Result<()> {
        serde_json::to_writer_pretty(writer, &self.messages)
    }

    /// Suggested file name for an export made at `now`
    pub fn export_file_name(now: Timestamp) -> String {
        format!("jarvis-chat-{}.json", now.format("%Y-%m-%d"))
    }

    fn append(&mut self, role: Role, content: String, now: Timestamp, error: bool) -> &ChatMessage {
        self.next_seq += 1;
        let id = format!("{}-{}", now.timestamp_millis(), self.next_seq);
        let mut message = ChatMessage::new(id, role, content, now);
        message.error = error;
        log::debug!("conversation += {:?} message {} (error: {})", role, message.id, error);
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{Clock, FixedClock};

    fn now() -> Timestamp {
        FixedClock::from_millis(1_700_000_000_000).now()
    }

    #[test]
    fn welcome_opens_conversation() {
        let conversation = Conversation::with_welcome(now());
        assert_eq!(conversation.len(), 1);
        let welcome = &conversation.messages()[0];
        assert_eq!(welcome.id, "welcome");
        assert_eq!(welcome.role, Role::Ai);
        assert!(welcome.content.starts_with("Hello! I'm Jarvis"));
    }

    #[test]
    fn ids_are_unique_within_one_instant() {
        let mut conversation = Conversation::new();
        let a = conversation.push_user("one", now()).id.clone();
        let b = conversation.push_reply("two", now()).id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn error_entries_are_flagged() {
        let mut conversation = Conversation::new();
        conversation.push_user("hi", now());
        let failed = conversation.push_error(&ChatError::network("connection reset"), now());
        assert!(failed.error);
        assert_eq!(failed.role, Role::Ai);
        assert_eq!(failed.content, "[NetworkError] connection reset");
        assert_eq!(conversation.errors().count(), 1);
    }

    #[test]
    fn question_is_the_directly_preceding_user_message() {
        let mut conversation = Conversation::new();
        let question = conversation.push_user("question", now()).id.clone();
        let failed = conversation.push_error(&ChatError::remote("boom"), now()).id.clone();
        assert_eq!(conversation.question_for(&failed).unwrap().id, question);
        assert!(conversation.question_for(&question).is_none());

        conversation.push_reply("answer", now());
        let orphan = conversation.push_error(&ChatError::remote("boom"), now()).id.clone();
        assert!(conversation.question_for(&orphan).is_none());
    }

    #[test]
    fn remove_by_id() {
        let mut conversation = Conversation::with_welcome(now());
        let id = conversation.push_user("bye", now()).id.clone();
        assert!(conversation.remove(&id).is_some());
        assert!(conversation.remove(&id).is_none());
        assert_eq!(conversation.len(), 1);
    }

    #[test]
    fn export_uses_message_shape() {
        let mut conversation = Conversation::with_welcome(now());
        conversation.push_error(&ChatError::configuration("no key"), now());
        let json: serde_json::Value = serde_json::from_str(&conversation.export_json().unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["type"], "ai");
        assert!(entries[0].get("error").is_none());
        assert_eq!(entries[1]["error"], true);
    }

    #[test]
    fn restored_history_does_not_reuse_ids() {
        let mut original = Conversation::with_welcome(now());
        original.push_user("one", now());
        original.push_reply("two", now());

        let mut restored: Conversation = serde_json::from_str(&original.export_json().unwrap()).unwrap();
        let next = restored.push_user("three", now()).id.clone();

        assert_eq!(next, "1700000000000-3");
        assert_eq!(restored.messages().iter().filter(|m| m.id == next).count(), 1);
    }

    #[test]
    fn export_file_name_uses_date() {
        assert_eq!(Conversation::export_file_name(now()), "jarvis-chat-2023-11-14.json");
    }
}
