pub mod config;
pub mod logging;

pub mod encoding;
pub mod error;
pub mod filter;
pub mod substitute;
