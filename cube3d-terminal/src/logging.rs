/// Logger setup.
///
/// The terminal is in raw mode on the alternate screen while the app runs, so
/// log records go to a file instead of stderr.
use std::fs::OpenOptions;

use crate::config::DebugConfig;
use crate::error::AppError;

/// Install `env_logger`, writing to `config.log_file`.
///
/// `RUST_LOG` overrides `config.log_level` when set.
pub fn init(config: &DebugConfig) -> Result<(), AppError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
