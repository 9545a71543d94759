//! CLI command handlers, one per file.

mod completions;
mod filter;
mod man;
mod show_config;

pub use completions::run_completions;
pub use filter::run_filter;
pub use man::run_man;
pub use show_config::run_show_config;
