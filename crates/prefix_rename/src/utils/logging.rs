use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{PrefixRenameError, PrefixRenameResult};

/// Initialize logging based on environment configuration
///
/// Logs go to stderr without colours so they interleave cleanly with the
/// progress lines.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(PrefixRenameError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> PrefixRenameResult<()> {
    // Skip logging entirely unless RUST_LOG is set
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| PrefixRenameError::LoggingInitialization(e.to_string()))?;

    Ok(())
}
