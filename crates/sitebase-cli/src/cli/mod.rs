//! CLI for the sitebase placeholder filter.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use sitebase_core::config::{self, Overrides, SitebaseConfig};
use sitebase_core::encoding::InvalidUtf8Policy;
use std::path::PathBuf;

use commands::{run_completions, run_filter, run_man, run_show_config};

/// Top-level CLI. With no subcommand, filters stdin to stdout.
#[derive(Debug, Parser)]
#[command(name = "sitebase", version)]
#[command(
    about = "Replace {{sitebaseurl}} placeholders on stdin with an absolute path",
    long_about = None
)]
pub struct Cli {
    /// Absolute path substituted for every placeholder.
    #[arg(long, env = "SITEBASE_PATH", global = true, value_name = "PATH")]
    pub path: Option<String>,

    /// Literal token to replace (default: {{sitebaseurl}}).
    #[arg(long, env = "SITEBASE_PLACEHOLDER", global = true, value_name = "TOKEN")]
    pub placeholder: Option<String>,

    /// What to do with input that is not valid UTF-8.
    #[arg(long, env = "SITEBASE_ON_INVALID_UTF8", global = true, value_enum)]
    pub on_invalid_utf8: Option<InvalidUtf8Arg>,

    /// Read configuration from this file instead of the XDG config dir.
    #[arg(long, env = "SITEBASE_CONFIG", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the effective configuration as TOML.
    ShowConfig,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InvalidUtf8Arg {
    /// Pass invalid bytes through untouched.
    Raw,
    /// Replace invalid sequences with U+FFFD.
    Lossy,
}

impl From<InvalidUtf8Arg> for InvalidUtf8Policy {
    fn from(arg: InvalidUtf8Arg) -> Self {
        match arg {
            InvalidUtf8Arg::Raw => InvalidUtf8Policy::Raw,
            InvalidUtf8Arg::Lossy => InvalidUtf8Policy::Lossy,
        }
    }
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match &cli.command {
            Some(CliCommand::Completions { shell }) => run_completions(*shell)?,
            Some(CliCommand::Man) => run_man()?,
            Some(CliCommand::ShowConfig) => {
                let cfg = cli.resolve_config()?;
                run_show_config(&cfg, cli.config.as_deref())?;
            }
            None => {
                let cfg = cli.resolve_config()?;
                tracing::debug!("effective config: {:?}", cfg);
                run_filter(&cfg)?;
            }
        }

        Ok(())
    }

    /// Config file (explicit or XDG) with argument/environment overrides applied.
    pub fn resolve_config(&self) -> Result<SitebaseConfig> {
        let base = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        };
        Ok(base.apply_overrides(self.overrides()))
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            replacement_path: self.path.clone(),
            placeholder: self.placeholder.clone(),
            on_invalid_utf8: self.on_invalid_utf8.map(InvalidUtf8Policy::from),
        }
    }
}

#[cfg(test)]
mod tests;
