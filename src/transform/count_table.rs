//! Insertion-ordered key counts

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from record key to its count, in first-seen order
///
/// Serializes as a plain JSON object so the on-disk form is
/// `{"key": count, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountTable {
    counts: IndexMap<String, u64>,
}

impl CountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`
    ///
    /// A new key starts at `initial`; a known key is incremented by one.
    pub fn record(&mut self, key: &str, initial: u64) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_string(), initial);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<u64> {
        self.counts.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all stored counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for CountTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
