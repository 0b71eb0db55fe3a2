//! Index/value enumerations loaded at runtime
//!
//! An [`Enum`] is an ordered list of `(index, value)` pairs, typically loaded
//! from configuration or a lookup table:
//!
//! ```
//! use services_utils_enums::Enum;
//!
//! let account_types: Enum = [(0, "Basic"), (1, "Advanced")].into_iter().collect();
//! assert_eq!(account_types.as_value(1).ok(), Some("Advanced"));
//! assert_eq!(account_types.as_index("basic").ok(), Some(0));
//! ```
//!
//! Failed lookups return a 404 [`ApiError`] naming the missing key.

use serde::{Deserialize, Serialize};
use services_utils_api_error::{api_err, ApiError};
use std::collections::HashMap;

/// One `(index, value)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumItem {
    /// Numeric index
    pub idx: i32,
    /// Display value
    pub val: String,
}

impl EnumItem {
    /// Create an item
    pub fn new<V: Into<String>>(idx: i32, val: V) -> Self {
        Self {
            idx,
            val: val.into(),
        }
    }
}

/// Ordered collection of [`EnumItem`]s
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    items: Vec<EnumItem>,
}

impl Enum {
    /// Create an enumeration from items, keeping their order
    #[must_use]
    pub fn new(items: Vec<EnumItem>) -> Self {
        Self { items }
    }

    /// Items in insertion order
    #[must_use]
    pub fn items(&self) -> &[EnumItem] {
        &self.items
    }

    /// Append an item
    pub fn push(&mut self, item: EnumItem) {
        self.items.push(item);
    }

    /// Number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the enumeration has no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value for an index
    pub fn as_value(&self, idx: i32) -> Result<&str, ApiError> {
        self.item_by_index(idx).map(|item| item.val.as_str())
    }

    /// Index for a value, compared case-insensitively
    pub fn as_index(&self, val: &str) -> Result<i32, ApiError> {
        self.item_by_value(val).map(|item| item.idx)
    }

    /// All values in insertion order
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.val.as_str()).collect()
    }

    /// Index to value map
    #[must_use]
    pub fn as_map(&self) -> HashMap<i32, String> {
        self.items
            .iter()
            .map(|item| (item.idx, item.val.clone()))
            .collect()
    }

    /// Append every entry of `map`, in ascending index order
    pub fn extend_from_map(&mut self, map: &HashMap<i32, String>) {
        let mut entries: Vec<_> = map.iter().collect();
        entries.sort_by_key(|(idx, _)| **idx);
        self.items
            .extend(entries.into_iter().map(|(idx, val)| EnumItem::new(*idx, val.clone())));
    }

    /// First item whose value matches `val`, ignoring case
    pub fn item_by_value(&self, val: &str) -> Result<&EnumItem, ApiError> {
        let wanted = val.to_lowercase();
        self.items
            .iter()
            .find(|item| item.val.to_lowercase() == wanted)
            .ok_or_else(|| api_err!(not_found, "No item with value {} found", val))
    }

    /// First item with index `idx`
    pub fn item_by_index(&self, idx: i32) -> Result<&EnumItem, ApiError> {
        self.items
            .iter()
            .find(|item| item.idx == idx)
            .ok_or_else(|| api_err!(not_found, "No item with index {} found", idx))
    }
}

impl From<HashMap<i32, String>> for Enum {
    fn from(map: HashMap<i32, String>) -> Self {
        let mut e = Self::default();
        e.extend_from_map(&map);
        e
    }
}

impl<V: Into<String>> FromIterator<(i32, V)> for Enum {
    fn from_iter<I: IntoIterator<Item = (i32, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(idx, val)| EnumItem::new(idx, val))
                .collect(),
        )
    }
}

impl Extend<EnumItem> for Enum {
    fn extend<I: IntoIterator<Item = EnumItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
