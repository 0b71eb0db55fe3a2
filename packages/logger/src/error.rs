//! Logger setup errors

use std::io;
use thiserror::Error;

/// Failures while building or installing a [`Logger`](crate::Logger)
///
/// Emitting log records never fails; only setup does.
#[derive(Debug, Error)]
pub enum LoggerError {
    /// An output file could not be opened or rotated
    #[error("log output error: {0}")]
    Io(#[from] io::Error),

    /// Buffer limits violate `1 <= trim <= max`
    #[error("invalid buffer limits: trim {trim} must be between 1 and max {max}")]
    InvalidBufferLimits {
        /// Requested capacity
        max: usize,
        /// Requested trim batch
        trim: usize,
    },

    /// Level name not one of `debug`, `info`, `warn`, `error`
    #[error("unknown log level: {0}")]
    UnknownLevel(String),

    /// [`install`](crate::install) was already called in this process
    #[error("a logger is already installed")]
    AlreadyInstalled,

    /// Another `log` implementation owns the facade
    #[error("log facade rejected logger: {0}")]
    Facade(#[from] log::SetLoggerError),
}
