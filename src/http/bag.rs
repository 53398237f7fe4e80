//! Ordered key/value store for request parameters.
//!
//! # Responsibilities
//! - Back the five request parameter collections (server params, cookies,
//!   query params, parsed body, attributes)
//! - Preserve insertion order
//! - Overwrite on re-insertion of an existing key, keeping its position
//!
//! # Design Decisions
//! - Values are `serde_json::Value` so string, list and structured entries
//!   share one representation
//! - Linear scans instead of hashing; bags hold a handful of entries

use serde_json::Value;

/// Ordered mapping from string keys to JSON-like values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bag {
    items: Vec<(String, Value)>,
}

impl Bag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. Re-adding an existing key overwrites its value while
    /// keeping the key's original position.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        match self.items.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.items.push((key, value)),
        }
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up an entry and view it as a string, if it is one.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Check whether the bag contains a key.
    pub fn has(&self, key: &str) -> bool {
        self.items.iter().any(|(k, _)| k == key)
    }

    /// Remove an entry, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.items.iter().position(|(k, _)| k == key)?;
        Some(self.items.remove(index).1)
    }

    /// All entries in insertion order.
    pub fn all(&self) -> &[(String, Value)] {
        &self.items
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.items.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bag holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for Bag {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Bag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = Bag::new();
        for (key, value) in iter {
            bag.add(key, value);
        }
        bag
    }
}
