//! Literal placeholder substitution over text or raw bytes.

use crate::error::ConfigError;
use regex::bytes::Regex as BytesRegex;
use regex::Regex;
use std::borrow::Cow;

/// Placeholder recognized when configuration does not name one.
pub const DEFAULT_PLACEHOLDER: &str = "{{sitebaseurl}}";

/// A compiled literal replacement: every `token` becomes `replacement`.
///
/// The token is escaped before compiling, so only the exact literal matches.
/// The replacement is inserted verbatim; `$1` or `$name` in it are not expanded.
#[derive(Debug, Clone)]
pub struct Substitution {
    token: String,
    replacement: String,
    text: Regex,
    bytes: BytesRegex,
}

impl Substitution {
    pub fn new(token: &str, replacement: &str) -> Result<Self, ConfigError> {
        if token.is_empty() {
            return Err(ConfigError::EmptyPlaceholder);
        }
        let pattern = regex::escape(token);
        let compile_err = |source| ConfigError::Placeholder {
            token: token.to_string(),
            source,
        };
        let text = Regex::new(&pattern).map_err(compile_err)?;
        let bytes = BytesRegex::new(&pattern).map_err(compile_err)?;
        Ok(Self {
            token: token.to_string(),
            replacement: replacement.to_string(),
            text,
            bytes,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every occurrence in `text`. Borrows when nothing matched.
    pub fn apply_str<'a>(&self, text: &'a str) -> Cow<'a, str> {
        self.text
            .replace_all(text, regex::NoExpand(self.replacement.as_str()))
    }

    /// Replace every occurrence in `input`, copying all other bytes unchanged.
    pub fn apply_bytes<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
        self.bytes
            .replace_all(input, regex::bytes::NoExpand(self.replacement.as_bytes()))
    }

    pub fn count_str(&self, text: &str) -> usize {
        self.text.find_iter(text).count()
    }

    pub fn count_bytes(&self, input: &[u8]) -> usize {
        self.bytes.find_iter(input).count()
    }
}
