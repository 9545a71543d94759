//! Default command: filter stdin to stdout.

use anyhow::Result;
use sitebase_core::config::SitebaseConfig;
use sitebase_core::filter::TextFilter;
use std::io;

pub fn run_filter(cfg: &SitebaseConfig) -> Result<()> {
    let filter = TextFilter::from_config(cfg)?;
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let report = filter.run(stdin, stdout)?;
    tracing::debug!("filter report: {:?}", report);
    Ok(())
}
