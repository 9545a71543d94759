//! Error types for the filter and its configuration.

use std::str::Utf8Error;
use thiserror::Error;

/// Input bytes could not be interpreted as UTF-8.
///
/// Always recovered by the decode policy; never reaches the caller of the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input is not valid UTF-8 after {valid_up_to} bytes")]
pub struct EncodingCoercionFailure {
    /// Length of the longest valid UTF-8 prefix.
    pub valid_up_to: usize,
    /// Length of the invalid sequence, or `None` if input ended mid-sequence.
    pub error_len: Option<usize>,
}

impl From<Utf8Error> for EncodingCoercionFailure {
    fn from(err: Utf8Error) -> Self {
        Self {
            valid_up_to: err.valid_up_to(),
            error_len: err.error_len(),
        }
    }
}

/// Configuration that cannot produce a working filter.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("placeholder token must not be empty")]
    EmptyPlaceholder,
    #[error(
        "no replacement path configured; pass --path, set SITEBASE_PATH, \
         or set replacement_path in {config_path}"
    )]
    MissingReplacementPath { config_path: String },
    #[error("cannot compile placeholder {token:?}")]
    Placeholder {
        token: String,
        #[source]
        source: regex::Error,
    },
}
