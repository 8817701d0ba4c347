//! Loaded datasets, keyed by input file name

use std::collections::BTreeMap;

use super::table::BenchmarkTable;

/// All datasets loaded during a run
///
/// Tables are inserted once per input file and only read afterwards.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    datasets: BTreeMap<String, BenchmarkTable>,
}

impl DatasetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `table` under `key`, replacing any table loaded earlier under the same key
    pub fn insert(&mut self, key: impl Into<String>, table: BenchmarkTable) {
        let key = key.into();
        if self.datasets.insert(key.clone(), table).is_some() {
            log::warn!("dataset '{}' loaded twice; keeping the latest file", key);
        }
    }

    pub fn get(&self, key: &str) -> Option<&BenchmarkTable> {
        self.datasets.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.datasets.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
