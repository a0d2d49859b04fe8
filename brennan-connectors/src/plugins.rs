//! Named text transforms reachable with `plugin:<id>:<text>`

use std::collections::BTreeMap;
use std::fmt;

use brennan_core::constants::assistant::{PLUGIN_PREFIX, POSITIVE_MARKER, SUMMARY_WORDS};

type Transform = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Registry of text plugins keyed by id
pub struct PluginRegistry {
    plugins: BTreeMap<String, Transform>,
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl PluginRegistry {
    /// No plugins
    pub fn empty() -> Self {
        Self {
            plugins: BTreeMap::new(),
        }
    }

    /// `summarize` and `sentiment`
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register("summarize", summarize);
        registry.register("sentiment", sentiment);
        registry
    }

    /// Add or replace the plugin `id`
    pub fn register<F>(&mut self, id: impl Into<String>, transform: F)
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.plugins.insert(id.into(), Box::new(transform));
    }

    /// Registered ids in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.plugins.keys().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.plugins.contains_key(id)
    }

    /// Run `id` on `input`, or list what is available
    pub fn run(&self, id: &str, input: &str) -> String {
        match self.plugins.get(id) {
            Some(transform) => transform(input),
            None => format!(
                "Unknown plugin \"{}\". Available plugins: {}",
                id,
                self.names().collect::<Vec<_>>().join(", ")
            ),
        }
    }
}

/// Split `plugin:<id>:<rest>` into `(id, rest)`
///
/// A missing second colon means an empty argument.
pub fn parse_invocation(message: &str) -> Option<(&str, &str)> {
    let invocation = message.trim_start().strip_prefix(PLUGIN_PREFIX)?;
    Some(match invocation.split_once(':') {
        Some((id, rest)) => (id.trim(), rest.trim()),
        None => (invocation.trim(), ""),
    })
}

/// First ten whitespace-separated words
pub fn summarize(text: &str) -> String {
    text.split_whitespace()
        .take(SUMMARY_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `positive` if the text mentions "good", else `neutral`
pub fn sentiment(text: &str) -> String {
    if text.to_lowercase().contains(POSITIVE_MARKER) {
        "positive".to_string()
    } else {
        "neutral".to_string()
    }
}
