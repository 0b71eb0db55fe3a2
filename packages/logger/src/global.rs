//! Process-wide logger slot
//!
//! Installing is explicit and happens once, typically from `main`. The
//! installed logger also becomes the `log` facade target, so `log::info!`
//! from dependencies lands in the same buffer and sink.

use crate::error::LoggerError;
use crate::logger::Logger;
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::OnceCell;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// `log` facade target forwarding to the installed logger
struct Facade;

static FACADE: Facade = Facade;

impl Log for Facade {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        GLOBAL.get().is_some_and(|logger| logger.enabled(metadata))
    }

    fn log(&self, record: &Record<'_>) {
        if let Some(logger) = GLOBAL.get() {
            logger.log(record);
        }
    }

    fn flush(&self) {
        if let Some(logger) = GLOBAL.get() {
            Log::flush(logger);
        }
    }
}

/// Install `logger` for the whole process
///
/// The `log` facade is claimed first; when another `log` implementation
/// already owns it, nothing is installed and [`global`] stays `None`.
pub fn install(logger: Logger) -> Result<&'static Logger, LoggerError> {
    if GLOBAL.get().is_some() {
        return Err(LoggerError::AlreadyInstalled);
    }
    log::set_logger(&FACADE).map_err(|e| {
        if GLOBAL.get().is_some() {
            LoggerError::AlreadyInstalled
        } else {
            LoggerError::Facade(e)
        }
    })?;
    // Only the caller that won the facade reaches this point.
    let installed = GLOBAL.try_insert(logger).map_err(|_| LoggerError::AlreadyInstalled)?;
    // Trace and debug records still reach the buffer when the sink threshold is higher.
    log::set_max_level(LevelFilter::Trace);
    Ok(installed)
}

/// Build a logger from the environment and install it
pub fn init_from_env() -> Result<&'static Logger, LoggerError> {
    install(Logger::from_env()?)
}

/// The installed logger, if any
#[must_use]
pub fn global() -> Option<&'static Logger> {
    GLOBAL.get()
}
