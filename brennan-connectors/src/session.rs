//! One user's chat with Jarvis
//!
//! The session owns its [`Conversation`] and is driven through `&mut self`,
//! so a second message cannot be sent while a reply is outstanding.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use brennan_core::constants::time::CHAT_REPLY_LATENCY_MS;
use brennan_core::latency::simulate;
use brennan_core::time::{Clock, SystemClock};
use brennan_core::{ChatMessage, Conversation};

use crate::ChatResponder;

/// Session timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Pause before the responder is asked
    pub reply_latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            reply_latency: Duration::from_millis(CHAT_REPLY_LATENCY_MS),
        }
    }
}

impl SessionConfig {
    /// Reply without the "thinking" pause
    pub fn instant() -> Self {
        Self {
            reply_latency: Duration::ZERO,
        }
    }

    pub fn reply_latency(mut self, delay: Duration) -> Self {
        self.reply_latency = delay;
        self
    }
}

pub struct ChatSession<R, C = SystemClock> {
    responder: R,
    clock: C,
    config: SessionConfig,
    conversation: Conversation,
}

impl<R: ChatResponder> ChatSession<R> {
    /// Session opened by the Jarvis greeting
    pub fn new(responder: R) -> Self {
        Self::with_clock(responder, SystemClock)
    }
}

impl<R: ChatResponder, C: Clock> ChatSession<R, C> {
    pub fn with_clock(responder: R, clock: C) -> Self {
        let conversation = Conversation::with_welcome(clock.now());
        log::info!("chat session opened");
        Self {
            responder,
            clock,
            config: SessionConfig::default(),
            conversation,
        }
    }

    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn responder(&self) -> &R {
        &self.responder
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Send `text` and wait for the reply entry
    ///
    /// Blank input is ignored and returns `None`. A failed reply is still an
    /// entry: its content is the error text and `error` is set.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        let index = self.conversation.len();
        self.conversation.push_user(text, self.clock.now());
        Some(self.reply_to(index).await)
    }

    /// Ask again for a failed reply
    ///
    /// Only entries flagged `error` that directly follow their question can
    /// be retried; once that question is deleted the entry can only be
    /// deleted. The failed entry is removed and the new reply appended.
    pub async fn retry(&mut self, id: &str) -> Option<&ChatMessage> {
        if !self.conversation.get(id)?.error {
            return None;
        }
        let Some(question) = self.conversation.question_for(id) else {
            log::warn!("not retrying {}: its question is gone", id);
            return None;
        };
        let question_id = question.id.clone();
        self.conversation.remove(id);
        log::info!("retrying reply to {}", question_id);

        let index = self.conversation.position(&question_id)?;
        Some(self.reply_to(index).await)
    }

    /// Remove any message
    pub fn delete(&mut self, id: &str) -> Option<ChatMessage> {
        self.conversation.remove(id)
    }

    /// Write the conversation to `dir` under the dated export name
    pub fn export_to_dir(&self, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
        let path = dir
            .as_ref()
            .join(Conversation::export_file_name(self.clock.now()));
        let writer = BufWriter::new(File::create(&path)?);
        self.conversation.export_to(writer)?;
        log::info!("exported {} messages to {}", self.conversation.len(), path.display());
        Ok(path)
    }

    /// Reply to the user message at `index`
    async fn reply_to(&mut self, index: usize) -> &ChatMessage {
        simulate(self.config.reply_latency).await;

        let messages = self.conversation.messages();
        let question = &messages[index];
        let outcome = self
            .responder
            .respond(&messages[..index], &question.content)
            .await;

        let now = self.clock.now();
        match outcome {
            Ok(reply) => self.conversation.push_reply(reply, now),
            Err(err) => {
                log::warn!("assistant reply failed: {}", err);
                self.conversation.push_error(&err, now)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordResponder;
    use brennan_core::{ChatError, ChatResult, FixedClock, Role};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails on the first call, echoes afterwards
    struct Flaky(AtomicUsize);

    #[async_trait]
    impl ChatResponder for Flaky {
        async fn respond(&self, history: &[ChatMessage], message: &str) -> ChatResult<String> {
            if self.0.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(ChatError::network("connection reset"))
            } else {
                Ok(format!("{} after {}", message, history.len()))
            }
        }
    }

    fn session<R: ChatResponder>(responder: R) -> ChatSession<R, FixedClock> {
        ChatSession::with_clock(responder, FixedClock::from_millis(1_700_000_000_000))
            .with_config(SessionConfig::instant())
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let mut session = session(KeywordResponder::new());
        assert!(session.send("   ").await.is_none());
        assert_eq!(session.conversation().len(), 1);
    }

    #[tokio::test]
    async fn send_appends_question_and_reply() {
        let mut session = session(KeywordResponder::new());
        let reply = session.send("medical check").await.unwrap().clone();
        assert_eq!(reply.role, Role::Ai);
        assert!(!reply.error);
        assert_eq!(session.conversation().len(), 3);
        assert!(session.conversation().messages()[1].is_user());
    }

    #[tokio::test]
    async fn failed_reply_can_be_retried() {
        let mut session = session(Flaky(AtomicUsize::new(0)));
        let failed = session.send("status?").await.unwrap().clone();
        assert!(failed.error);
        assert_eq!(failed.content, "[NetworkError] connection reset");

        let retried = session.retry(&failed.id).await.unwrap().clone();
        assert!(!retried.error);
        // history before the question: the greeting
        assert_eq!(retried.content, "status? after 1");
        assert!(session.conversation().get(&failed.id).is_none());
        assert_eq!(session.conversation().len(), 3);
    }

    #[tokio::test]
    async fn only_errors_are_retried() {
        let mut session = session(KeywordResponder::new());
        let reply = session.send("hello").await.unwrap().id.clone();
        assert!(session.retry(&reply).await.is_none());
        assert!(session.retry("missing").await.is_none());
    }

    #[tokio::test]
    async fn retry_refused_once_question_is_deleted() {
        let mut session = session(Flaky(AtomicUsize::new(0)));
        let failed = session.send("first").await.unwrap().id.clone();
        let question = session.conversation().messages()[1].id.clone();

        session.delete(&question);
        // the greeting now precedes the failed entry
        assert!(session.retry(&failed).await.is_none());
        assert_eq!(session.conversation().len(), 2);
        assert!(session.conversation().get(&failed).is_some());
    }

    #[tokio::test]
    async fn delete_removes_any_message() {
        let mut session = session(KeywordResponder::new());
        let id = session.send("hello").await.unwrap().id.clone();
        assert!(session.delete(&id).is_some());
        assert_eq!(session.conversation().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn reply_waits_configured_latency() {
        let mut session = ChatSession::with_clock(KeywordResponder::new(), FixedClock::from_millis(0));
        let start = tokio::time::Instant::now();
        session.send("hello").await;
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }
}
