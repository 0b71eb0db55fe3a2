//! Buffered log entries

use crate::level::Level;
use serde::{Deserialize, Serialize};

/// One line of recent log history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    timestamp: String,
    level: Level,
    message: String,
}

impl LogEntry {
    pub(crate) fn new(timestamp: String, level: Level, message: String) -> Self {
        Self {
            timestamp,
            level,
            message,
        }
    }

    /// RFC 3339 UTC time the entry was recorded
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Severity
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Message text, including the cause for errors
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
