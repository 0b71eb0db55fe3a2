//! In-memory sink for tests and debug tooling

use super::encode_record;
use log::{Log, Metadata, Record};
use serde_json::{Map, Value};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Sink that keeps encoded JSON records in memory
///
/// Clones share the same storage, so a test can hand one clone to the
/// logger and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<Map<String, Value>>>>,
}

impl MemorySink {
    /// Empty sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, oldest first
    #[must_use]
    pub fn records(&self) -> Vec<Map<String, Value>> {
        self.lock().clone()
    }

    /// Most recent record
    #[must_use]
    pub fn last(&self) -> Option<Map<String, Value>> {
        self.lock().last().cloned()
    }

    /// Records rendered as JSON lines
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lock()
            .iter()
            .map(|record| Value::Object(record.clone()).to_string())
            .collect()
    }

    /// Forget every record
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Map<String, Value>>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Log for MemorySink {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        let encoded = encode_record(record);
        self.lock().push(encoded);
    }

    fn flush(&self) {}
}
