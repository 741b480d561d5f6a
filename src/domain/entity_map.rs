//! Reversible label-to-value mapping
//!
//! One entity map exists per document and is never merged across
//! documents. The engine never persists maps; retention and deletion
//! are the caller's responsibility. Raw values are wiped from memory
//! when the map is dropped.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use zeroize::Zeroize;

/// Mapping from indexed entity label (e.g. `[PERSON_0]`) to the
/// original text it replaced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMap {
    entries: HashMap<String, String>,
}

impl EntityMap {
    /// Creates an empty entity map
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the original value for a label, keeping the first
    /// assignment when the label was already present
    pub fn insert_if_absent(&mut self, label: &str, original: &str) {
        self.entries
            .entry(label.to_string())
            .or_insert_with(|| original.to_string());
    }

    /// Looks up the original value for a label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Number of distinct labels in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no labels have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (label, original value) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, original)| (label.as_str(), original.as_str()))
    }
}

impl FromIterator<(String, String)> for EntityMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Drop for EntityMap {
    fn drop(&mut self) {
        for value in self.entries.values_mut() {
            value.zeroize();
        }
    }
}
