//! Configuration options for conversion

use std::fmt;
use std::sync::Arc;

use crate::rules::Rule;

/// Boxed error returned by a language guesser
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Guesses the language of a code block from its text
pub type GuessLang = Arc<dyn Fn(&str) -> Result<String, BoxError> + Send + Sync>;

/// Default limit on tree depth, both when parsing and when walking
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options for a conversion
#[derive(Clone)]
pub struct Options {
    /// Language guesser for fenced code blocks; a failed guess leaves the
    /// fence untagged
    pub guess_lang: Option<GuessLang>,

    /// Pass `<script>` elements through as raw HTML
    pub script: bool,

    /// Pass `<style>` elements through as raw HTML
    pub style: bool,

    /// Drop whitespace-only text and force newlines at block boundaries
    pub trim_space: bool,

    /// Extension rules, in registration order
    pub rules: Vec<Rule>,

    /// Maximum element nesting before the conversion fails
    pub max_depth: usize,
}

impl Options {
    /// Set the language guesser
    pub fn with_guess_lang<F>(mut self, guess: F) -> Self
    where
        F: Fn(&str) -> Result<String, BoxError> + Send + Sync + 'static,
    {
        self.guess_lang = Some(Arc::new(guess));
        self
    }

    /// Register an extension rule
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Register an extension rule in place
    pub fn add_rule(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            guess_lang: None,
            script: false,
            style: false,
            trim_space: false,
            rules: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("guess_lang", &self.guess_lang.as_ref().map(|_| ".."))
            .field("script", &self.script)
            .field("style", &self.style)
            .field("trim_space", &self.trim_space)
            .field("rules", &self.rules)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
