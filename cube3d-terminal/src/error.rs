/// Error type for the terminal application
use std::io;
use thiserror::Error;

use crate::config::ConfigError;
use cube3d_core::GeometryError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
