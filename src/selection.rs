//! Selection model
//!
//! Selected items are tracked by path, in the order they were selected. The
//! most recently selected path is the anchor for range selection.

use crate::logic::path;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionModel {
    paths: Vec<String>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, target: &str) {
        // Re-selecting moves the path to the end so it becomes the anchor
        self.paths.retain(|p| p != target);
        self.paths.push(target.to_string());
    }

    /// Select one path; without `additive` the previous selection is replaced
    pub fn select(&mut self, target: &str, additive: bool) {
        if !additive {
            self.paths.clear();
        }
        self.insert(target);
    }

    /// Add the path if absent, remove it if present
    pub fn toggle(&mut self, target: &str) {
        if self.contains(target) {
            self.paths.retain(|p| p != target);
        } else {
            self.paths.push(target.to_string());
        }
    }

    /// Select the contiguous run from the anchor to `target` in `visible` order
    ///
    /// With an empty selection this behaves like a plain `select`. When the
    /// anchor or target is not in `visible` the selection is left alone.
    /// Otherwise the target ends up as the new anchor.
    pub fn select_range<S: AsRef<str>>(&mut self, target: &str, visible: &[S]) {
        let anchor = match self.paths.last() {
            Some(anchor) => anchor.clone(),
            None => return self.select(target, false),
        };

        let position = |p: &str| visible.iter().position(|v| v.as_ref() == p);
        let (Some(from), Some(to)) = (position(anchor.as_str()), position(target)) else {
            return;
        };

        let (start, end) = if from <= to { (from, to) } else { (to, from) };
        for item in &visible[start..=end] {
            let item = item.as_ref();
            if item != target && !self.contains(item) {
                self.paths.push(item.to_string());
            }
        }
        self.insert(target);
    }

    /// Replace the selection with every visible path
    pub fn select_all<S: AsRef<str>>(&mut self, visible: &[S]) {
        self.paths = visible.iter().map(|p| p.as_ref().to_string()).collect();
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn contains(&self, target: &str) -> bool {
        self.paths.iter().any(|p| p == target)
    }

    /// Selected paths in selection order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// The range anchor
    pub fn last(&self) -> Option<&str> {
        self.paths.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Drop any selected path at or below `removed`
    pub fn forget(&mut self, removed: &str) {
        self.paths
            .retain(|p| !path::is_same_or_descendant(p, removed));
    }

    /// Follow a rename of `old` to `new`
    pub fn rename(&mut self, old: &str, new: &str) {
        for p in self.paths.iter_mut() {
            if p == old {
                *p = new.to_string();
            }
        }
    }
}
