use crate::encoding::InvalidUtf8Policy;
use crate::error::ConfigError;
use crate::substitute::DEFAULT_PLACEHOLDER;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

/// Filter configuration loaded from `~/.config/sitebase/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitebaseConfig {
    /// Absolute path substituted for every placeholder. Required before filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_path: Option<String>,
    /// Literal token to replace.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Fallback for input that is not valid UTF-8: "raw" (default) or "lossy".
    #[serde(default)]
    pub on_invalid_utf8: InvalidUtf8Policy,
}

impl Default for SitebaseConfig {
    fn default() -> Self {
        Self {
            replacement_path: None,
            placeholder: default_placeholder(),
            on_invalid_utf8: InvalidUtf8Policy::default(),
        }
    }
}

/// Values supplied on the command line or through the environment.
/// Each one that is set wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub replacement_path: Option<String>,
    pub placeholder: Option<String>,
    pub on_invalid_utf8: Option<InvalidUtf8Policy>,
}

impl SitebaseConfig {
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(path) = overrides.replacement_path {
            self.replacement_path = Some(path);
        }
        if let Some(token) = overrides.placeholder {
            self.placeholder = token;
        }
        if let Some(policy) = overrides.on_invalid_utf8 {
            self.on_invalid_utf8 = policy;
        }
        self
    }

    /// The configured replacement path, or an error naming where it could come from.
    pub fn require_replacement_path(&self) -> Result<&str, ConfigError> {
        self.replacement_path
            .as_deref()
            .ok_or_else(|| ConfigError::MissingReplacementPath {
                config_path: config_path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| "config.toml".to_string()),
            })
    }
}

/// Default location of the config file (may not exist).
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitebase")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from the XDG search path, falling back to defaults if none exists.
///
/// Never creates a file: a filter run must not leave anything behind on disk.
pub fn load() -> Result<SitebaseConfig> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sitebase")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file found; using defaults");
            Ok(SitebaseConfig::default())
        }
    }
}

/// Load configuration from an explicit file, which must exist.
pub fn load_from(path: &Path) -> Result<SitebaseConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: SitebaseConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
