//! Tracing subscriber initialisation
//!
//! Logs go to stderr so that stdout only carries session output.

use crate::{Error, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` wins, otherwise `default_level` for all DSC crates
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "dsc={level},dsc_cli={level},dsc_engine={level},dsc_common={level}",
            level = default_level
        ))
    })
}

/// Install the global tracing subscriber
///
/// Fails if a global subscriber is already installed.
pub fn init(default_level: &str) -> Result<()> {
    crate::config::validate_log_level(default_level)?;

    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialise logging: {}", e)))
}
