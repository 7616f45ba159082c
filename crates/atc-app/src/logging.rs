//! Logging setup for the `atc` binary.
//!
//! Log lines go to stderr so that JSON frames on stdout stay machine-readable.
//! The level comes from `RUST_LOG` and defaults to `info`.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
