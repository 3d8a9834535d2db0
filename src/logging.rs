//! Logging setup shared by the probe binaries.
//!
//! Logs go to stderr so stdout carries only the report.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Default filter directive for a verbosity level.
///
/// `0` = warnings only, `1` = info, `2` = debug, `3+` = trace.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initializes structured logging.
///
/// `RUST_LOG` takes precedence over the verbosity flag when set.
///
/// ```rust,no_run
/// use volunteer_probe::logging::init_logging;
///
/// init_logging(1).expect("Failed to initialize logging");
/// ```
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::operation_failed(format!("Failed to initialize logging: {e}")))?;

    Ok(())
}
