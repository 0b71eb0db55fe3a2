//! Bounded in-memory history of recent log entries
//!
//! The buffer keeps at most `max` entries. When an append pushes it past
//! `max`, the oldest `trim` entries are dropped in one go, so in steady state
//! the length moves between `max - trim + 1` and `max`.

use crate::entry::LogEntry;
use crate::error::LoggerError;
use crate::level::Level;
use services_utils_common::now_utc_string;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Default capacity
pub const DEFAULT_MAX_ENTRIES: usize = 700;

/// Default number of entries dropped per trim
pub const DEFAULT_TRIM_BY: usize = 100;

/// Thread-safe, capacity-bounded FIFO of [`LogEntry`]
#[derive(Debug)]
pub struct LogBuffer {
    entries: Mutex<VecDeque<LogEntry>>,
    max: usize,
    trim: usize,
}

impl LogBuffer {
    /// Empty buffer with the default limits
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(DEFAULT_MAX_ENTRIES + 1)),
            max: DEFAULT_MAX_ENTRIES,
            trim: DEFAULT_TRIM_BY,
        }
    }

    /// Empty buffer with custom limits; requires `1 <= trim <= max`
    pub fn with_limits(max: usize, trim: usize) -> Result<Self, LoggerError> {
        if trim == 0 || trim > max {
            return Err(LoggerError::InvalidBufferLimits { max, trim });
        }
        Ok(Self {
            entries: Mutex::new(VecDeque::with_capacity(max + 1)),
            max,
            trim,
        })
    }

    /// Stamp, append and trim as one step
    pub fn append<M: Into<String>>(&self, level: Level, message: M) {
        let entry = LogEntry::new(now_utc_string(), level, message.into());
        let mut entries = self.lock();
        entries.push_back(entry);
        if entries.len() > self.max {
            entries.drain(..self.trim);
        }
    }

    /// Copy of the current entries, oldest first
    #[must_use]
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.lock().iter().cloned().collect()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Current number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the buffer holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Capacity
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max
    }

    /// Entries dropped per trim
    #[must_use]
    pub fn trim_by(&self) -> usize {
        self.trim
    }

    // Entries are plain data; a panic mid-append cannot leave them inconsistent.
    fn lock(&self) -> MutexGuard<'_, VecDeque<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}
