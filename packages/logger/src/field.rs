//! Structured key/value fields attached to sink records

use log::kv::{self, Key, Source, Value as KvValue, VisitSource};
use serde_json::Value;

/// A key/value pair forwarded to the sink alongside the message
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name in the JSON record
    pub key: String,
    /// Field value, any JSON
    pub value: Value,
}

impl Field {
    /// Create a field
    pub fn new<K: Into<String>, V: Into<Value>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Borrowed field list exposed to `log` as record key/values
pub(crate) struct FieldSet<'a>(pub(crate) &'a [Field]);

impl Source for FieldSet<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        for field in self.0 {
            visitor.visit_pair(Key::from_str(&field.key), KvValue::from_serde(&field.value))?;
        }
        Ok(())
    }

    fn count(&self) -> usize {
        self.0.len()
    }
}
