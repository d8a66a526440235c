//! # Logging Setup
//!
//! Installs a `tracing-subscriber` formatter as the global subscriber and
//! bridges records from the `log` facade into it, so failures written by
//! [`Reporter`](crate::report::Reporter) end up next to the host
//! application's own traces.
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ReportConfig;
use crate::error::{Error, Result};

/// Build the filter: `RUST_LOG` when set, otherwise the configured directive.
pub fn env_filter(config: &ReportConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_filter(config.log_filter()),
    }
}

fn parse_filter(directive: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| Error::Other(format!("Invalid log filter '{}': {}", directive, e)))
}

/// Install the global subscriber. Fails if logging was already set up.
pub fn init(config: &ReportConfig) -> Result<()> {
    let filter = env_filter(config)?;

    tracing_log::LogTracer::init()
        .map_err(|e| Error::Other(format!("Failed to bridge log records: {}", e)))?;

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true));
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to install tracing subscriber: {}", e)))?;

    tracing::debug!(target: "iri_events", "Logging initialized with filter '{}'", config.log_filter());
    Ok(())
}
