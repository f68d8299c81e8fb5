use crate::error::{AppError, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Events go to stderr so stdout carries only the menu transcript.
pub fn init(log_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(log_level)
        .map_err(|e| AppError::Telemetry(format!("invalid log filter '{log_level}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::Telemetry(e.to_string()))
}
