//! Case-insensitive multi-valued header store.
//!
//! # Responsibilities
//! - Store headers as normalized name → ordered value list
//! - Normalize names on every read, write, check and removal
//! - Build the header set from `HTTP_*`-prefixed server params
//!
//! # Design Decisions
//! - One pure normalization function is used for storage keys and lookups
//! - `add` always appends; replace is `remove` followed by `add`
//! - Values are never deduplicated

use crate::http::bag::Bag;

/// Normalize a header name to its canonical `Ab-Cd` form: each
/// hyphen-delimited segment lowercased, then its first character
/// capitalized.
pub fn normalize_name(name: &str) -> String {
    name.split('-')
        .map(|segment| {
            let lower = segment.to_ascii_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Ordered, case-insensitive mapping from header name to value list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderBag {
    items: Vec<(String, Vec<String>)>,
}

impl HeaderBag {
    /// Create an empty header bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a header bag from an environment snapshot: every server param
    /// key prefixed `HTTP_` becomes a header, with `_` replaced by `-` and
    /// the name normalized.
    pub fn from_environment(server_params: &Bag) -> Self {
        let mut headers = HeaderBag::new();
        for (key, value) in server_params.iter() {
            if let Some(raw_name) = key.strip_prefix("HTTP_") {
                if let Some(value) = value.as_str() {
                    headers.add(&raw_name.replace('_', "-"), value);
                }
            }
        }
        headers
    }

    /// Append a value to the named header, creating the header if absent.
    pub fn add(&mut self, name: &str, value: impl Into<String>) {
        let name = normalize_name(name);
        let value = value.into();
        match self.items.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value),
            None => self.items.push((name, vec![value])),
        }
    }

    /// Values for the named header, empty when the header is absent.
    pub fn get(&self, name: &str) -> &[String] {
        let name = normalize_name(name);
        self.items
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether the named header is present.
    pub fn has(&self, name: &str) -> bool {
        let name = normalize_name(name);
        self.items.iter().any(|(n, _)| *n == name)
    }

    /// Remove the named header, returning the values it held.
    pub fn remove(&mut self, name: &str) -> Vec<String> {
        let name = normalize_name(name);
        match self.items.iter().position(|(n, _)| *n == name) {
            Some(index) => self.items.remove(index).1,
            None => Vec::new(),
        }
    }

    /// All headers in insertion order.
    pub fn all(&self) -> &[(String, Vec<String>)] {
        &self.items
    }

    /// Iterate over `(name, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.items.iter().map(|(n, v)| (n.as_str(), v.as_slice()))
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the bag holds no headers.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<N: AsRef<str>, V: Into<String>> FromIterator<(N, V)> for HeaderBag {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut headers = HeaderBag::new();
        for (name, value) in iter {
            headers.add(name.as_ref(), value);
        }
        headers
    }
}
