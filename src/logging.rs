//! Logging initialization
//!
//! All logs go to stderr: stdout carries the hook output protocol and must
//! stay clean. Verbosity is controlled through `RUST_LOG`.

use anyhow::{Context, Result};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set
const DEFAULT_FILTER: &str = "toolgate=info";

/// Initialize the logging system
pub fn init_logging() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_installs_once() {
        assert!(init_logging().is_ok());
        // The global subscriber cannot be replaced
        assert!(init_logging().is_err());
    }
}
