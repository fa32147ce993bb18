//! Tracing subscriber setup for the command-line binary.
//!
//! The library only emits events; installing a subscriber is left to
//! whoever embeds it. Browser builds never call this.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter {filter:?}: {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Filter used when RUST_LOG is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "multitool=debug"
    } else {
        "warn"
    }
}

/// Install a stderr subscriber. RUST_LOG wins over the verbosity flag.
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    let env_filter = match std::env::var("RUST_LOG") {
        Ok(filter) if !filter.is_empty() => {
            EnvFilter::try_new(&filter).map_err(|source| LoggingError::InvalidFilter {
                filter,
                source,
            })?
        }
        _ => EnvFilter::new(default_filter(verbose)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
