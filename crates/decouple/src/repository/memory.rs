//! In-memory repository

use super::Source;
use std::collections::HashMap;

/// A repository over a caller supplied map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRepository {
    values: HashMap<String, String>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryRepository
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for MemoryRepository {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl Source for MemoryRepository {
    fn has_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get_item(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}
