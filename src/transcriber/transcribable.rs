//! 可链式调用的文本包装

use std::fmt;

use crate::transcriber::currency::place_currency;
use crate::transcriber::replacer::QuoteAwareReplacer;
use crate::transcriber::types::QuotePolicy;

/// 待转译文本
///
/// ```ignore
/// let out = Transcribable::new("catch x")
///     .replace_word("catch", "let")
///     .place_currency("€")
///     .into_string();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcribable {
    text: String,
    policy: QuotePolicy,
}

impl Transcribable {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            policy: QuotePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: QuotePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn replace_word(self, keyword: &str, replacement: &str) -> Self {
        let text = QuoteAwareReplacer::new(self.policy).replace_word(&self.text, keyword, replacement);
        Self { text, ..self }
    }

    pub fn place_currency(self, symbol: &str) -> Self {
        let text = place_currency(&self.text, symbol);
        Self { text, ..self }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl From<&str> for Transcribable {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Transcribable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
