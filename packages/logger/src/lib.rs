//! Leveled logger with an in-memory buffer of recent entries
//!
//! Every leveled call does two things:
//! - records a [`LogEntry`] into the shared [`LogBuffer`] (bounded, batched trim)
//! - forwards a structured JSON record to the sink when the level passes the
//!   configured threshold
//!
//! The sink is any [`log::Log`]; by default an `env_logger` instance writing
//! JSON lines to stdout, stderr, a file, and optionally a size-rotated file.
//! Sink failures never reach the caller.
//!
//! Configure via environment:
//! - `LOG_LEVEL=debug|info|warn|error` (default `info`)
//! - `LOG_OUTPUT=stdout|stderr|<path>` (default `stdout`)
//!
//! ```no_run
//! use services_utils_logger::{Field, Logger};
//!
//! # fn main() -> Result<(), services_utils_logger::LoggerError> {
//! let logger = Logger::from_env()?;
//! logger.info("service started", &[Field::new("port", 8080)]);
//! let recent = logger.buffer().snapshot();
//! # let _ = recent;
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod classify;
pub mod config;
pub mod entry;
pub mod error;
pub mod field;
pub mod global;
pub mod level;
pub mod logger;
#[doc(hidden)]
pub mod macros;
pub mod sink;

pub use buffer::{LogBuffer, DEFAULT_MAX_ENTRIES, DEFAULT_TRIM_BY};
pub use classify::classify;
pub use config::{LoggerConfig, Output, ENV_LOG_LEVEL, ENV_LOG_OUTPUT};
pub use entry::LogEntry;
pub use error::LoggerError;
pub use field::Field;
pub use global::{global, init_from_env, install};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use sink::{MemorySink, RotatingFile, RotationPolicy};
