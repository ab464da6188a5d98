//! Navigation history
//!
//! A bounded back/forward list of visited container paths with a cursor.
//! Navigating from anywhere but the tail discards the forward entries.

use log::debug;

use crate::error::Result;
use crate::logic::path;
use crate::store::HierarchyStore;

/// Default number of entries kept before the oldest is dropped
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Back/forward history over container paths
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Vec<String>,
    /// Index of the current entry (None while empty)
    index: Option<usize>,
    limit: usize,
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl NavigationHistory {
    /// Empty history holding at most `limit` entries (minimum 1)
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            index: None,
            limit: limit.max(1),
        }
    }

    /// Push a container path, discarding any forward entries
    ///
    /// The path must resolve to a container in `store`; otherwise the
    /// history is left untouched and the error returned.
    pub fn navigate(&mut self, target: &str, store: &HierarchyStore) -> Result<&str> {
        let container = store.get_container(target)?;
        let target = container.path().to_string();

        if let Some(i) = self.index {
            self.entries.truncate(i + 1);
        }
        self.entries.push(target);

        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        let tail = self.entries.len() - 1;
        self.index = Some(tail);
        debug!("history: navigate to {} ({} entries)", self.entries[tail], self.entries.len());

        Ok(&self.entries[tail])
    }

    /// Step back one entry; None when already at the first entry
    pub fn back(&mut self) -> Option<&str> {
        match self.index {
            Some(i) if i > 0 => {
                self.index = Some(i - 1);
                Some(&self.entries[i - 1])
            }
            _ => None,
        }
    }

    /// Step forward one entry; None when already at the tail
    pub fn forward(&mut self) -> Option<&str> {
        match self.index {
            Some(i) if i + 1 < self.entries.len() => {
                self.index = Some(i + 1);
                Some(&self.entries[i + 1])
            }
            _ => None,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.index.map(|i| self.entries[i].as_str())
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.index, Some(i) if i + 1 < self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Drop entries that no longer name a container in `store`
    ///
    /// The cursor follows the current entry if it survives, otherwise it
    /// lands on the nearest surviving entry before it. Two surviving entries
    /// made adjacent by a removal collapse into one; duplicates the user
    /// navigated to back to back are kept.
    pub fn prune(&mut self, store: &HierarchyStore) {
        let Some(current) = self.index else {
            return;
        };

        let mut kept: Vec<String> = Vec::with_capacity(self.entries.len());
        let mut new_index: Option<usize> = None;
        let mut gap = false;

        for (i, entry) in self.entries.drain(..).enumerate() {
            if !store.is_container(&entry) {
                gap = true;
                continue;
            }
            if !(gap && kept.last() == Some(&entry)) {
                kept.push(entry);
            }
            gap = false;
            if i <= current {
                new_index = Some(kept.len() - 1);
            }
        }

        if kept.is_empty() {
            self.index = None;
        } else {
            self.index = Some(new_index.unwrap_or(0));
        }
        self.entries = kept;
    }

    /// Rewrite entries under `old` to live under `new` after a rename or move
    pub fn rebase(&mut self, old: &str, new: &str) {
        for entry in self.entries.iter_mut() {
            if path::is_same_or_descendant(entry, old) {
                *entry = path::rebase(entry, old, new);
            }
        }
    }
}
