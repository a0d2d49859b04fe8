//! Keyword-routed canned replies
//!
//! Offline responder: the message is matched case-insensitively against the
//! ordered topic table and answered with that topic's paragraph. Anything
//! else gets a fallback that echoes the question. Plugin invocations are
//! handed to the [`PluginRegistry`]. This responder never fails.

use async_trait::async_trait;
use brennan_core::constants::assistant::{FALLBACK_PREFIX, FALLBACK_SUFFIX, TOPICS};
use brennan_core::{ChatMessage, ChatResult};

use crate::plugins::{parse_invocation, PluginRegistry};
use crate::ChatResponder;

#[derive(Debug, Default)]
pub struct KeywordResponder {
    plugins: PluginRegistry,
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_plugins(plugins: PluginRegistry) -> Self {
        Self { plugins }
    }

    pub fn plugins(&self) -> &PluginRegistry {
        &self.plugins
    }

    pub fn plugins_mut(&mut self) -> &mut PluginRegistry {
        &mut self.plugins
    }

    /// Reply to `message` without any history
    pub fn reply(&self, message: &str) -> String {
        if let Some((id, input)) = parse_invocation(message) {
            return self.plugins.run(id, input);
        }

        let lowered = message.to_lowercase();
        TOPICS
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
            .map(|(_, reply)| reply.to_string())
            .unwrap_or_else(|| format!("{FALLBACK_PREFIX}{message}{FALLBACK_SUFFIX}"))
    }
}

#[async_trait]
impl ChatResponder for KeywordResponder {
    async fn respond(&self, _history: &[ChatMessage], message: &str) -> ChatResult<String> {
        Ok(self.reply(message))
    }
}
