//! Jarvis Assistant Text
//!
//! Persona text, keyword routing table and plugin parameters for the
//! interactive assistant.

/// Greeting that opens every conversation.
pub const WELCOME_MESSAGE: &str = "Hello! I'm Jarvis, your AI-powered virtual assistant. I can help you with analytics, blockchain operations, medical diagnosis, business intelligence, and much more. How can I assist you today?";

/// Identifier of the greeting message.
pub const WELCOME_MESSAGE_ID: &str = "welcome";

/// System prompt sent with every remote completion.
pub const SYSTEM_PROMPT: &str = "You are Jarvis, the AI assistant of Brennan AI, an industrial AI company. You help with predictive maintenance, quality control, IoT analytics, business intelligence, blockchain analytics and medical AI. Answer concisely and professionally.";

/// Keyword routing table, checked in order. A message matching any keyword of
/// a topic (case-insensitive substring) gets that topic's canned reply.
pub const TOPICS: [(&[&str], &str); 4] = [
    (
        &["blockchain", "crypto"],
        "Based on current blockchain analytics, I've identified several trading opportunities. The market sentiment is currently bullish with a 78% confidence rate. Would you like me to execute any trades or provide detailed market analysis?",
    ),
    (
        &["health", "medical"],
        "I've analyzed the medical data. Based on the symptoms and parameters provided, my medical AI suggests scheduling a consultation. The risk assessment shows moderate attention needed. Shall I prepare a detailed health report?",
    ),
    (
        &["business", "analytics"],
        "Business intelligence analysis complete. Revenue is up 23% this quarter, with customer satisfaction at 94%. I've identified 3 key optimization opportunities that could increase efficiency by 15%. Would you like the detailed BI dashboard?",
    ),
    (
        &["image", "vision"],
        "Computer vision analysis complete. I've processed the images and identified 12 objects with 97% accuracy. The quality control system flagged 2 items for review. Shall I generate the detailed vision report?",
    ),
];

/// Text before the echoed user message in the fallback reply.
pub const FALLBACK_PREFIX: &str = "I understand you're asking about \"";

/// Text after the echoed user message in the fallback reply.
pub const FALLBACK_SUFFIX: &str = "\". I'm processing this through my neural networks and can provide comprehensive analysis including predictive modeling, natural language generation, and real-time insights. What specific aspect would you like me to focus on?";

/// Prefix that routes a message to the plugin registry.
pub const PLUGIN_PREFIX: &str = "plugin:";

/// Words kept by the summarize plugin.
pub const SUMMARY_WORDS: usize = 10;

/// Substring the sentiment plugin treats as positive.
pub const POSITIVE_MARKER: &str = "good";

// ===== REMOTE COMPLETION DEFAULTS =====

/// Default chat-completion endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Completion token cap.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Environment variable holding the bearer credential.
pub const API_KEY_VAR: &str = "BRENNAN_CHAT_API_KEY";

/// Environment variable overriding the endpoint.
pub const ENDPOINT_VAR: &str = "BRENNAN_CHAT_ENDPOINT";

/// Environment variable overriding the model.
pub const MODEL_VAR: &str = "BRENNAN_CHAT_MODEL";

// ===== SPEECH =====

/// Speaking rate for replies read aloud.
pub const SPEECH_RATE: f32 = 0.9;

/// Speaking pitch for replies read aloud.
pub const SPEECH_PITCH: f32 = 1.0;
