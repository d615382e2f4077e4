//! Recent-search ledger: most-recent-first, unique, at most
//! [`MAX_RECENT_SEARCHES`] entries, written through to a [`KeyValueStore`]
//! on every change.

use std::collections::HashSet;

use crate::storage::KeyValueStore;

pub const MAX_RECENT_SEARCHES: usize = 5;

pub const STORAGE_KEY: &str = "recent_searches";

#[derive(Debug)]
pub struct RecentSearches<S: KeyValueStore> {
    entries: Vec<String>,
    store: S,
}

impl<S: KeyValueStore> RecentSearches<S> {
    /// Restore the ledger from `store`.
    ///
    /// Missing or unreadable data gives an empty ledger. Stored entries are
    /// taken as-is.
    pub fn load(store: S) -> Self {
        let entries = match store.get(STORAGE_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable recent searches: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        tracing::debug!(count = entries.len(), "Loaded recent searches");
        Self { entries, store }
    }

    /// Move `city` to the front, keep only the first occurrence of every
    /// entry, drop anything past the cap, then persist.
    pub fn record(&mut self, city: &str) {
        self.entries.insert(0, city.to_string());

        let mut seen = HashSet::new();
        self.entries.retain(|entry| seen.insert(entry.clone()));
        self.entries.truncate(MAX_RECENT_SEARCHES);

        self.persist();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entry by zero-based position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Failed to serialize recent searches: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(STORAGE_KEY, &serialized) {
            tracing::warn!("Failed to save recent searches: {:#}", e);
        }
    }
}
