//! Voice input and spoken replies
//!
//! Speech engines are platform services, so only their seams live here:
//! [`SpeechSynthesizer`] reads replies aloud, [`SpeechRecognizer`] turns one
//! spoken phrase into text. [`UnsupportedSpeech`] stands in on platforms
//! without either.

use std::time::Duration;

use async_trait::async_trait;
use brennan_core::constants::assistant::{SPEECH_PITCH, SPEECH_RATE};
use brennan_core::constants::time::LISTEN_WINDOW_MS;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// The platform offers no speech engine
    #[error("speech is not supported on this platform")]
    Unsupported,

    #[error("speech recognition failed: {0}")]
    Recognition(String),

    #[error("speech synthesis failed: {0}")]
    Synthesis(String),
}

/// Text prepared for reading aloud
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    /// `text` without markdown emphasis, at the Jarvis voice settings
    pub fn new(text: &str) -> Self {
        Self {
            text: strip_emphasis(text),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
        }
    }

    pub fn rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    pub fn pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }
}

/// Drop markdown emphasis markers so they are not read out
///
/// Removes `**`, `__`, `~~`, backticks and `*` everywhere, and `_` when it
/// sits at a word boundary (so `snake_case` survives).
pub fn strip_emphasis(text: &str) -> String {
    let cleaned = text
        .replace("**", "")
        .replace("__", "")
        .replace("~~", "")
        .replace(['`', '*'], "");

    let chars: Vec<char> = cleaned.chars().collect();
    let word = |c: Option<&char>| c.map_or(false, |c| c.is_alphanumeric());
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            c != '_' || (i > 0 && word(chars.get(i - 1)) && word(chars.get(i + 1)))
        })
        .map(|(_, &c)| c)
        .collect()
}

/// Text-to-speech engine
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak `utterance`, returning once playback finished or was cancelled
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;

    /// Stop any ongoing playback
    fn cancel(&self);
}

/// Speech-to-text engine producing one transcript per session
#[async_trait]
pub trait SpeechRecognizer: Send {
    async fn start(&mut self) -> Result<(), SpeechError>;

    async fn stop(&mut self);

    /// Next final transcript; `None` when the platform ended the session
    async fn next_transcript(&mut self) -> Option<Result<String, SpeechError>>;
}

/// Placeholder engine for platforms without speech support
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSpeech;

#[async_trait]
impl SpeechSynthesizer for UnsupportedSpeech {
    async fn speak(&self, _utterance: &Utterance) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    fn cancel(&self) {}
}

#[async_trait]
impl SpeechRecognizer for UnsupportedSpeech {
    async fn start(&mut self) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }

    async fn stop(&mut self) {}

    async fn next_transcript(&mut self) -> Option<Result<String, SpeechError>> {
        Some(Err(SpeechError::Unsupported))
    }
}

/// Listening settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenConfig {
    /// Recognition stops on its own after this long
    pub window: Duration,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_millis(LISTEN_WINDOW_MS),
        }
    }
}

impl ListenConfig {
    pub fn window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }
}

/// Push-to-talk input over a [`SpeechRecognizer`]
#[derive(Debug)]
pub struct VoiceInput<S> {
    recognizer: S,
    config: ListenConfig,
}

impl<S: SpeechRecognizer> VoiceInput<S> {
    pub fn new(recognizer: S) -> Self {
        Self::with_config(recognizer, ListenConfig::default())
    }

    pub fn with_config(recognizer: S, config: ListenConfig) -> Self {
        Self { recognizer, config }
    }

    pub fn config(&self) -> &ListenConfig {
        &self.config
    }

    /// Listen for one phrase
    ///
    /// Returns `Ok(None)` when the window elapsed or the platform ended the
    /// session without a transcript. The recognizer is always stopped.
    pub async fn listen(&mut self) -> Result<Option<String>, SpeechError> {
        self.recognizer.start().await?;
        log::debug!("listening for up to {:?}", self.config.window);

        let heard = tokio::time::timeout(self.config.window, self.recognizer.next_transcript()).await;
        self.recognizer.stop().await;

        match heard {
            Ok(Some(Ok(transcript))) => Ok(Some(transcript)),
            Ok(Some(Err(err))) => Err(err),
            Ok(None) => Ok(None),
            Err(_) => {
                log::debug!("listen window elapsed without a transcript");
                Ok(None)
            }
        }
    }
}

/// Read `reply` aloud after stripping emphasis
pub async fn speak_reply<S>(synthesizer: &S, reply: &str) -> Result<(), SpeechError>
where
    S: SpeechSynthesizer + ?Sized,
{
    synthesizer.cancel();
    synthesizer.speak(&Utterance::new(reply)).await
}
