//! UTF-8 coercion of raw input with an explicit fallback policy.
//!
//! Input is decoded locally; nothing here touches process-wide state.
//! Valid UTF-8 is always borrowed as-is, so already-valid input comes out
//! byte-identical whichever policy is configured.

use crate::error::EncodingCoercionFailure;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// What to do with input that is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidUtf8Policy {
    /// Keep the original bytes untouched and substitute at byte level.
    #[default]
    Raw,
    /// Replace each invalid sequence with U+FFFD, then substitute as text.
    Lossy,
}

impl InvalidUtf8Policy {
    pub fn as_str(self) -> &'static str {
        match self {
            InvalidUtf8Policy::Raw => "raw",
            InvalidUtf8Policy::Lossy => "lossy",
        }
    }
}

/// Outcome of the decode step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<'a> {
    /// UTF-8 text: borrowed when the input was valid, owned when repaired.
    Text(Cow<'a, str>),
    /// Input that failed coercion, passed through unchanged.
    Raw(&'a [u8]),
}

/// Which branch the decode step took. Reported in logs and run summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeBranch {
    Utf8,
    Repaired,
    Raw,
}

impl Decoded<'_> {
    pub fn branch(&self) -> DecodeBranch {
        match self {
            Decoded::Text(Cow::Borrowed(_)) => DecodeBranch::Utf8,
            Decoded::Text(Cow::Owned(_)) => DecodeBranch::Repaired,
            Decoded::Raw(_) => DecodeBranch::Raw,
        }
    }
}

/// Interpret `input` as UTF-8 without copying.
pub fn coerce_utf8(input: &[u8]) -> Result<&str, EncodingCoercionFailure> {
    Ok(std::str::from_utf8(input)?)
}

/// Decode `input`, downgrading a coercion failure to the fallback chosen by `policy`.
pub fn decode(input: &[u8], policy: InvalidUtf8Policy) -> Decoded<'_> {
    match coerce_utf8(input) {
        Ok(text) => {
            tracing::debug!(bytes = input.len(), "input decoded as UTF-8");
            Decoded::Text(Cow::Borrowed(text))
        }
        Err(failure) => {
            tracing::info!(
                valid_up_to = failure.valid_up_to,
                policy = policy.as_str(),
                "{failure}; falling back"
            );
            match policy {
                InvalidUtf8Policy::Raw => Decoded::Raw(input),
                InvalidUtf8Policy::Lossy => Decoded::Text(String::from_utf8_lossy(input)),
            }
        }
    }
}
