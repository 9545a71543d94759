//! The stdin-to-stdout filter: decode, substitute, write.
//!
//! One pass per invocation. The whole input is read before anything is
//! written, so the output never interleaves with a partial read.

use crate::config::SitebaseConfig;
use crate::encoding::{self, DecodeBranch, Decoded, InvalidUtf8Policy};
use crate::substitute::Substitution;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::{Read, Write};

/// Transformed bytes plus what happened while producing them.
#[derive(Debug)]
pub struct Filtered<'a> {
    pub output: Cow<'a, [u8]>,
    pub replacements: usize,
    pub branch: DecodeBranch,
}

/// Summary of one [`TextFilter::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    pub input_bytes: usize,
    pub output_bytes: usize,
    pub replacements: usize,
    pub branch: DecodeBranch,
}

#[derive(Debug, Clone)]
pub struct TextFilter {
    substitution: Substitution,
    policy: InvalidUtf8Policy,
}

impl TextFilter {
    pub fn new(substitution: Substitution, policy: InvalidUtf8Policy) -> Self {
        Self {
            substitution,
            policy,
        }
    }

    /// Build a filter from resolved configuration. Fails if no replacement path is set
    /// or the placeholder is empty.
    pub fn from_config(cfg: &SitebaseConfig) -> Result<Self> {
        let path = cfg.require_replacement_path()?;
        let substitution = Substitution::new(&cfg.placeholder, path)?;
        Ok(Self::new(substitution, cfg.on_invalid_utf8))
    }

    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    pub fn policy(&self) -> InvalidUtf8Policy {
        self.policy
    }

    /// Decode `input` and replace every placeholder in it.
    ///
    /// Valid UTF-8 without placeholders comes back borrowed and byte-identical.
    /// Under the raw policy, invalid input is substituted at byte level and
    /// every non-token byte is kept.
    pub fn apply<'a>(&self, input: &'a [u8]) -> Filtered<'a> {
        let decoded = encoding::decode(input, self.policy);
        let branch = decoded.branch();
        let (output, replacements) = match decoded {
            Decoded::Text(Cow::Borrowed(text)) => {
                let count = self.substitution.count_str(text);
                let out = match self.substitution.apply_str(text) {
                    Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
                    Cow::Owned(s) => Cow::Owned(s.into_bytes()),
                };
                (out, count)
            }
            Decoded::Text(Cow::Owned(text)) => {
                let count = self.substitution.count_str(&text);
                let out = self.substitution.apply_str(&text).into_owned();
                (Cow::Owned(out.into_bytes()), count)
            }
            Decoded::Raw(bytes) => {
                let count = self.substitution.count_bytes(bytes);
                (self.substitution.apply_bytes(bytes), count)
            }
        };
        Filtered {
            output,
            replacements,
            branch,
        }
    }

    /// Read `reader` to end, filter, and write everything to `writer`.
    pub fn run<R: Read, W: Write>(&self, mut reader: R, mut writer: W) -> Result<FilterReport> {
        let mut input = Vec::new();
        reader
            .read_to_end(&mut input)
            .context("read standard input")?;

        let filtered = self.apply(&input);
        writer
            .write_all(&filtered.output)
            .context("write standard output")?;
        writer.flush().context("flush standard output")?;

        let report = FilterReport {
            input_bytes: input.len(),
            output_bytes: filtered.output.len(),
            replacements: filtered.replacements,
            branch: filtered.branch,
        };
        tracing::info!(
            input_bytes = report.input_bytes,
            output_bytes = report.output_bytes,
            replacements = report.replacements,
            branch = ?report.branch,
            "filter complete"
        );
        Ok(report)
    }
}
