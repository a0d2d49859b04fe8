//! Remote chat-completion responder
//!
//! Forwards the conversation to an OpenAI-style `chat/completions` endpoint
//! behind the persona system prompt and returns the completion verbatim.
//!
//! ## Failure mapping
//!
//! | Condition | Error |
//! |-----------|-------|
//! | no API key configured | [`ChatError::Configuration`], nothing is sent |
//! | transport failed | [`ChatError::Network`] with the transport's text |
//! | non-2xx status | [`ChatError::Remote`] with `error.message`, else the body, else the status |
//! | 2xx without `choices[0].message.content` | [`ChatError::Remote`] |
//!
//! ## Configuration
//!
//! [`CompletionConfig::from_env`] reads `BRENNAN_CHAT_API_KEY`,
//! `BRENNAN_CHAT_ENDPOINT` and `BRENNAN_CHAT_MODEL`. Missing endpoint and
//! model fall back to the defaults; a missing or blank key leaves the
//! responder unconfigured.

use std::sync::Mutex;

use async_trait::async_trait;
use brennan_core::constants::assistant::{
    API_KEY_VAR, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    ENDPOINT_VAR, MODEL_VAR, SYSTEM_PROMPT,
};
use brennan_core::{ChatError, ChatMessage, ChatResult, Role};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::transport::{ChatTransport, TransportRequest, TransportResponse};
use crate::{ChatResponder, ConnectionStats};

/// Reply text when a 2xx body has no completion in it
pub const MALFORMED_RESPONSE: &str = "malformed completion response";

/// Remote completion settings
#[derive(Clone, PartialEq)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub model: String,
    /// Bearer credential; `None` leaves the responder unconfigured
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub system_prompt: String,
}

impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            system_prompt: SYSTEM_PROMPT.to_string(),
        }
    }
}

impl CompletionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by `lookup(variable)`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        config.api_key = present(API_KEY_VAR);
        if let Some(endpoint) = present(ENDPOINT_VAR) {
            config.endpoint = endpoint;
        }
        if let Some(model) = present(MODEL_VAR) {
            config.model = model;
        }
        config
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Responder that delegates to a remote completion endpoint
#[derive(Debug)]
pub struct RemoteResponder<T> {
    config: CompletionConfig,
    transport: T,
    stats: Mutex<ConnectionStats>,
}

#[cfg(feature = "http")]
impl RemoteResponder<crate::http::UreqTransport> {
    /// Environment-configured responder on the default HTTP transport
    pub fn from_env() -> Self {
        Self::new(CompletionConfig::from_env(), crate::http::UreqTransport::default())
    }
}

impl<T: ChatTransport> RemoteResponder<T> {
    pub fn new(config: CompletionConfig, transport: T) -> Self {
        if !config.is_configured() {
            log::warn!("remote responder has no API key; every reply will fail until {} is set", API_KEY_VAR);
        }
        Self {
            config,
            transport,
            stats: Mutex::new(ConnectionStats::default()),
        }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Snapshot of request counters
    pub fn stats(&self) -> ConnectionStats {
        match self.stats.lock() {
            Ok(stats) => stats.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Completion request body for `message` following `history`
    ///
    /// Failed replies in the history are not forwarded.
    pub fn request_body(&self, history: &[ChatMessage], message: &str) -> Value {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(json!({ "role": "system", "content": self.config.system_prompt }));
        messages.extend(history.iter().filter(|m| !m.error).map(|m| {
            json!({ "role": wire_role(m.role), "content": m.content })
        }));
        messages.push(json!({ "role": "user", "content": message }));

        json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }

    fn record(&self, bytes: usize, failure: Option<&ChatError>) {
        let mut stats = match self.stats.lock() {
            Ok(stats) => stats,
            Err(poisoned) => poisoned.into_inner(),
        };
        stats.bytes_sent += bytes as u64;
        match failure {
            None => stats.requests_sent += 1,
            Some(err) => {
                stats.requests_failed += 1;
                stats.last_error = Some(err.to_string());
            }
        }
    }
}

#[async_trait]
impl<T: ChatTransport> ChatResponder for RemoteResponder<T> {
    async fn respond(&self, history: &[ChatMessage], message: &str) -> ChatResult<String> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(ChatError::configuration(format!(
                "No API key configured. Set {API_KEY_VAR} to enable remote replies."
            )));
        };

        let body = self.request_body(history, message);
        let bytes = body.to_string().len();
        let request = TransportRequest {
            url: self.config.endpoint.clone(),
            bearer_token: api_key.to_string(),
            body,
        };

        let result = match self.transport.post_json(request).await {
            Ok(response) => interpret(&response),
            Err(err) => Err(ChatError::network(err.to_string())),
        };
        self.record(bytes, result.as_ref().err());
        result
    }
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Ai => "assistant",
    }
}

#[derive(Deserialize)]
struct CompletionBody {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

fn interpret(response: &TransportResponse) -> ChatResult<String> {
    if !response.is_success() {
        return Err(ChatError::remote(remote_message(response)));
    }

    serde_json::from_str::<CompletionBody>(&response.body)
        .ok()
        .and_then(|body| body.choices.into_iter().next())
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| ChatError::remote(MALFORMED_RESPONSE))
}

fn remote_message(response: &TransportResponse) -> String {
    if let Ok(ErrorEnvelope {
        error: ErrorDetail { message: Some(message) },
    }) = serde_json::from_str::<ErrorEnvelope>(&response.body)
    {
        return message;
    }

    let body = response.body.trim();
    if body.is_empty() {
        format!("HTTP {}", response.status)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brennan_core::{ChatErrorKind, Conversation, FixedClock};
    use brennan_core::time::Clock;
    use std::collections::HashMap;

    struct Scripted(TransportResponse);

    #[async_trait]
    impl ChatTransport for Scripted {
        async fn post_json(&self, _: TransportRequest) -> Result<TransportResponse, crate::TransportError> {
            Ok(self.0.clone())
        }
    }

    fn responder(status: u16, body: &str) -> RemoteResponder<Scripted> {
        RemoteResponder::new(
            CompletionConfig::new().api_key("sk-test"),
            Scripted(TransportResponse::new(status, body)),
        )
    }

    #[test]
    fn env_lookup() {
        let vars: HashMap<&str, &str> = [
            ("BRENNAN_CHAT_API_KEY", "sk-live"),
            ("BRENNAN_CHAT_MODEL", "gpt-4o"),
            ("BRENNAN_CHAT_ENDPOINT", "  "),
        ]
        .into_iter()
        .collect();
        let config = CompletionConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.api_key.as_deref(), Some("sk-live"));
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.max_tokens, 500);
    }

    #[test]
    fn debug_redacts_key() {
        let rendered = format!("{:?}", CompletionConfig::new().api_key("sk-secret"));
        assert!(!rendered.contains("sk-secret"));
    }

    #[test]
    fn body_maps_roles_and_skips_failures() {
        let clock = FixedClock::from_millis(0);
        let mut conversation = Conversation::with_welcome(clock.now());
        conversation.push_user("hi", clock.now());
        conversation.push_error(&ChatError::network("reset"), clock.now());

        let body = responder(200, "").request_body(conversation.messages(), "again");
        let messages = body["messages"].as_array().unwrap();
        let roles: Vec<_> = messages.iter().map(|m| m["role"].as_str().unwrap()).collect();
        assert_eq!(roles, ["system", "assistant", "user", "user"]);
        assert_eq!(messages[3]["content"], "again");
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["max_tokens"], 500);
        assert_eq!(body["temperature"].as_f64(), Some(0.7));
    }

    #[tokio::test]
    async fn returns_completion_verbatim() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"  Hello **there**  "}}]}"#;
        let reply = responder(200, body).respond(&[], "hi").await.unwrap();
        assert_eq!(reply, "  Hello **there**  ");
    }

    #[tokio::test]
    async fn remote_error_uses_provider_message() {
        let body = r#"{"error":{"message":"Invalid API key","type":"auth"}}"#;
        let err = responder(401, body).respond(&[], "hi").await.unwrap_err();
        assert_eq!(err.kind(), ChatErrorKind::Remote);
        assert_eq!(err.message(), "Invalid API key");
    }

    #[tokio::test]
    async fn remote_error_falls_back_to_body_then_status() {
        let err = responder(502, "Bad Gateway").respond(&[], "hi").await.unwrap_err();
        assert_eq!(err.message(), "Bad Gateway");

        let err = responder(503, "").respond(&[], "hi").await.unwrap_err();
        assert_eq!(err.message(), "HTTP 503");
    }

    #[tokio::test]
    async fn success_without_content_is_malformed() {
        let responder = responder(200, r#"{"choices":[]}"#);
        let err = responder.respond(&[], "hi").await.unwrap_err();
        assert_eq!(err, ChatError::remote(MALFORMED_RESPONSE));
        assert_eq!(responder.stats().requests_failed, 1);
    }
}
