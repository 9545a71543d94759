//! `sitebase show-config` – print the effective configuration.

use anyhow::Result;
use sitebase_core::config::{self, SitebaseConfig};
use std::path::Path;

/// Print where configuration is read from, then the merged values as TOML.
pub fn run_show_config(cfg: &SitebaseConfig, explicit: Option<&Path>) -> Result<()> {
    let source = match explicit {
        Some(path) => path.to_path_buf(),
        None => config::config_path()?,
    };
    let exists = if source.exists() { "" } else { " (not found)" };
    println!("# config file: {}{}", source.display(), exists);
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
