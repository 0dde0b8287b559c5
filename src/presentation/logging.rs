//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays clean for NDJSON. `RUST_LOG` wins over
//! both `-v` and the configured verbosity.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;

/// Filter directive for the given `-v` count and configured verbosity
pub fn filter_directive(verbose: u8, configured: Verbosity) -> String {
    let level = match (verbose, configured) {
        (0, Verbosity::Quiet) => "error",
        (0, Verbosity::Normal) => "warn",
        (0, Verbosity::Verbose) => "info",
        (0, Verbosity::Debug) | (1, _) => "debug",
        _ => "trace",
    };
    format!("warn,permtree={}", level)
}

pub fn setup_logging(verbose: u8, configured: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, configured)));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .try_init()
        .ok();
}
