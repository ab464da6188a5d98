//! Explorer
//!
//! The surface a view layer drives: one hierarchy plus the navigation,
//! selection, clipboard and sort state that go with a single window onto it.
//! The lower-level components take every path explicitly; this type supplies
//! the current container for them and keeps their state consistent after
//! structural changes.

use log::debug;

use crate::clipboard::{ClipboardController, ClipboardIntent, PasteReport};
use crate::error::{HierarchyError, Result};
use crate::history::NavigationHistory;
use crate::logic::path;
use crate::logic::properties::{self, Properties};
use crate::logic::search;
use crate::logic::sorting::{SortColumn, SortDirection, SortSpec};
use crate::model::{Node, NodeSummary};
use crate::selection::SelectionModel;
use crate::store::{HierarchyStore, RemoveReport};

/// Result of opening an item
#[derive(Debug, Clone, PartialEq)]
pub enum OpenOutcome {
    /// A container was entered; holds its path
    Entered(String),
    /// A leaf was opened; holds its summary
    Opened(NodeSummary),
}

/// Counts for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub items: usize,
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct Explorer {
    store: HierarchyStore,
    history: NavigationHistory,
    selection: SelectionModel,
    clipboard: ClipboardController,
    sort: SortSpec,
    search: String,
    current: String,
}

impl Explorer {
    /// Wrap a store, starting at the root
    pub fn new(store: HierarchyStore, history_limit: usize) -> Self {
        let mut history = NavigationHistory::new(history_limit);
        let current = match history.navigate(path::ROOT, &store) {
            Ok(p) => p.to_string(),
            Err(_) => path::ROOT.to_string(),
        };
        Self {
            store,
            history,
            selection: SelectionModel::new(),
            clipboard: ClipboardController::new(),
            sort: SortSpec::default(),
            search: String::new(),
            current,
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn store(&self) -> &HierarchyStore {
        &self.store
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn clipboard(&self) -> &ClipboardController {
        &self.clipboard
    }

    pub fn sort_spec(&self) -> SortSpec {
        self.sort
    }

    pub fn search_query(&self) -> &str {
        &self.search
    }

    /// Path of the container being displayed
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn current_node(&self) -> Result<&Node> {
        self.store.get_container(&self.current)
    }

    // ---- Navigation ----

    /// Enter a container, recording it in history
    pub fn navigate_to(&mut self, target: &str) -> Result<&str> {
        let entered = self.history.navigate(target, &self.store)?.to_string();
        self.enter(entered);
        Ok(&self.current)
    }

    /// Make `target` current without touching history
    fn enter(&mut self, target: String) {
        debug!("enter {}", target);
        self.current = target;
        self.selection.clear();
        self.search.clear();
    }

    /// Previous location, or None when there is nothing to go back to
    pub fn back(&mut self) -> Option<&str> {
        self.history.prune(&self.store);
        let target = self.history.back()?.to_string();
        self.enter(target);
        Some(&self.current)
    }

    /// Next location, or None at the end of history
    pub fn forward(&mut self) -> Option<&str> {
        self.history.prune(&self.store);
        let target = self.history.forward()?.to_string();
        self.enter(target);
        Some(&self.current)
    }

    /// Parent of the current container, or None at the root
    pub fn up(&mut self) -> Option<&str> {
        if path::is_root(&self.current) {
            return None;
        }
        let parent = path::parent_path(&self.current);
        self.navigate_to(&parent).ok()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    pub fn can_go_up(&self) -> bool {
        !path::is_root(&self.current)
    }

    /// Enter a container or report a leaf as opened
    pub fn open(&mut self, target: &str) -> Result<OpenOutcome> {
        let node = self.store.get(target)?;
        if node.is_container() {
            let entered = self.navigate_to(target)?.to_string();
            Ok(OpenOutcome::Entered(entered))
        } else {
            debug!("open leaf {}", node.path());
            Ok(OpenOutcome::Opened(node.summary()))
        }
    }

    // ---- Listing ----

    /// Children of any container, ordered by the active sort
    pub fn list_children(&self, container: &str) -> Result<Vec<NodeSummary>> {
        self.store.list_children(container, self.sort)
    }

    /// What the view shows: current children, sorted, filtered by search
    pub fn list(&self) -> Result<Vec<NodeSummary>> {
        let items = self.list_children(&self.current)?;
        Ok(search::filter_summaries(items, &self.search))
    }

    /// Paths of the displayed items in display order
    pub fn visible_paths(&self) -> Vec<String> {
        self.list()
            .map(|items| items.into_iter().map(|item| item.path).collect())
            .unwrap_or_default()
    }

    /// Sort request with header-click semantics
    pub fn sort_by(&mut self, column: SortColumn, direction: Option<SortDirection>) -> SortSpec {
        self.sort.request(column, direction);
        self.sort
    }

    pub fn set_search(&mut self, query: &str) {
        self.search = query.to_string();
        // Selection only covers what is displayed
        let visible = self.visible_paths();
        let kept: Vec<String> = self
            .selection
            .paths()
            .iter()
            .filter(|p| visible.contains(p))
            .cloned()
            .collect();
        if kept.len() != self.selection.len() {
            self.selection.clear();
            for p in kept {
                self.selection.select(&p, true);
            }
        }
    }

    /// Search the whole subtree below the current container
    pub fn find(&self, query: &str) -> Vec<NodeSummary> {
        match self.current_node() {
            Ok(node) => search::find_in_subtree(node, query)
                .into_iter()
                .map(Node::summary)
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    // ---- Mutation ----

    /// New empty container in the current container
    pub fn create_container(&mut self, name: &str) -> Result<NodeSummary> {
        let current = self.current.clone();
        let node = self.store.create_container(&current, name)?;
        Ok(node.summary())
    }

    /// Rename a node, keeping history, selection and the current path valid
    pub fn rename(&mut self, target: &str, new_name: &str) -> Result<NodeSummary> {
        let old = self.store.get(target)?.path().to_string();
        let summary = self.store.rename(&old, new_name)?.summary();

        self.follow(&old, &summary.path);
        Ok(summary)
    }

    /// Remove a batch of paths
    pub fn remove<S: AsRef<str>>(&mut self, paths: &[S]) -> RemoveReport {
        let report = self.store.remove(paths);
        for removed in &report.removed {
            self.selection.forget(removed);
        }
        self.refresh();
        report
    }

    /// Remove everything selected
    pub fn remove_selected(&mut self) -> RemoveReport {
        let paths = self.selection.paths().to_vec();
        self.remove(&paths)
    }

    pub fn stage_clipboard<S: AsRef<str>>(&mut self, paths: &[S], intent: ClipboardIntent) {
        self.clipboard.stage(paths, intent);
    }

    /// Stage the selection; returns how many paths were staged
    pub fn stage_selection(&mut self, intent: ClipboardIntent) -> usize {
        let paths = self.selection.paths().to_vec();
        if !paths.is_empty() {
            self.clipboard.stage(&paths, intent);
        }
        paths.len()
    }

    /// Paste into `destination`, or the current container when None
    pub fn paste_clipboard(&mut self, destination: Option<&str>) -> Result<PasteReport> {
        let destination = destination.unwrap_or(self.current.as_str()).to_string();
        let report = self.clipboard.paste(&mut self.store, &destination)?;
        for (old, new) in &report.moved {
            self.follow(old, new);
        }
        self.refresh();
        Ok(report)
    }

    /// Keep history, selection and the current path on a node that now
    /// lives at `new` instead of `old`
    fn follow(&mut self, old: &str, new: &str) {
        if old == new {
            return;
        }
        self.history.rebase(old, new);
        self.selection.rename(old, new);
        if path::is_same_or_descendant(&self.current, old) {
            self.current = path::rebase(&self.current, old, new);
        }
    }

    // ---- Selection ----

    pub fn select(&mut self, target: &str, additive: bool) {
        self.selection.select(target, additive);
    }

    pub fn toggle(&mut self, target: &str) {
        self.selection.toggle(target);
    }

    /// Range select against the displayed ordering
    pub fn select_range(&mut self, target: &str) {
        let visible = self.visible_paths();
        self.selection.select_range(target, &visible);
    }

    pub fn select_all(&mut self) {
        let visible = self.visible_paths();
        self.selection.select_all(&visible);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ---- Misc ----

    /// Reconcile derived state with the store
    ///
    /// Drops dead history entries and selected paths, and climbs to the
    /// nearest surviving ancestor if the current container is gone.
    pub fn refresh(&mut self) {
        self.history.prune(&self.store);

        if !self.store.is_container(&self.current) {
            let mut target = path::parent_path(&self.current);
            while !self.store.is_container(&target) {
                target = path::parent_path(&target);
            }
            if self.history.current() == Some(target.as_str()) {
                self.enter(target);
            } else {
                let _ = self.navigate_to(&target);
            }
        }

        let dead: Vec<String> = self
            .selection
            .paths()
            .iter()
            .filter(|p| !self.store.exists(p))
            .cloned()
            .collect();
        for p in dead {
            self.selection.forget(&p);
        }
    }

    /// Properties of the selection, or of the current container if none
    pub fn properties(&self) -> Result<Properties> {
        let nodes: Vec<&Node> = if self.selection.is_empty() {
            vec![self.current_node()?]
        } else {
            self.selection
                .paths()
                .iter()
                .filter_map(|p| self.store.get(p).ok())
                .collect()
        };
        properties::properties(&nodes)
            .ok_or_else(|| HierarchyError::NotFound(self.current.clone()))
    }

    pub fn status(&self) -> StatusCounts {
        StatusCounts {
            items: self.list().map(|items| items.len()).unwrap_or(0),
            selected: self.selection.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemCategory;

    fn explorer() -> Explorer {
        let mut s = HierarchyStore::new();
        s.create_container("/", "A").unwrap();
        s.create_container("/A", "B").unwrap();
        s.create_container("/A", "C").unwrap();
        s.create_leaf("/A", "x.txt", ItemCategory::Document, Some(10), None)
            .unwrap();
        s.create_leaf("/A", "y.png", ItemCategory::Image, Some(20), None)
            .unwrap();
        Explorer::new(s, 50)
    }

    #[test]
    fn test_starts_at_root() {
        let e = explorer();
        assert_eq!(e.current(), "/");
        assert!(!e.can_go_back());
        assert!(!e.can_go_up());
    }

    #[test]
    fn test_navigation_clears_selection() {
        let mut e = explorer();
        e.select("/A", false);
        e.navigate_to("/A").unwrap();
        assert!(e.selection().is_empty());
    }

    #[test]
    fn test_failed_navigation_keeps_state() {
        let mut e = explorer();
        e.navigate_to("/A").unwrap();
        e.select("/A/B", false);
        assert!(matches!(
            e.navigate_to("/A/x.txt"),
            Err(HierarchyError::NotAContainer(_))
        ));
        assert_eq!(e.current(), "/A");
        assert_eq!(e.selection().len(), 1);
    }

    #[test]
    fn test_up_and_back() {
        let mut e = explorer();
        e.navigate_to("/A/B").unwrap();
        assert_eq!(e.up(), Some("/A"));
        assert_eq!(e.back(), Some("/A/B"));
        assert_eq!(e.forward(), Some("/A"));
        assert_eq!(e.forward(), None);
    }

    #[test]
    fn test_up_at_root_is_noop() {
        let mut e = explorer();
        assert_eq!(e.up(), None);
        assert_eq!(e.history().len(), 1);
    }

    #[test]
    fn test_open_leaf_does_not_navigate() {
        let mut e = explorer();
        e.navigate_to("/A").unwrap();
        match e.open("/A/x.txt").unwrap() {
            OpenOutcome::Opened(summary) => assert_eq!(summary.name, "x.txt"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(e.current(), "/A");
        assert_eq!(
            e.open("/A/B").unwrap(),
            OpenOutcome::Entered("/A/B".to_string())
        );
    }

    #[test]
    fn test_select_range_uses_display_order() {
        let mut e = explorer();
        e.navigate_to("/A").unwrap();
        e.sort_by(SortColumn::Name, Some(SortDirection::Ascending));
        e.select("/A/B", false);
        e.select_range("/A/x.txt");
        assert_eq!(
            e.selection().paths(),
            &["/A/B", "/A/C", "/A/x.txt"].map(String::from)
        );
    }

    #[test]
    fn test_search_filters_listing() {
        let mut e = explorer();
        e.navigate_to("/A").unwrap();
        e.set_search("*.png");
        let names: Vec<String> = e.list().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["y.png"]);
        e.navigate_to("/A/B").unwrap();
        assert_eq!(e.search_query(), "");
    }

    #[test]
    fn test_rename_current_ancestor_follows() {
        let mut e = explorer();
        e.navigate_to("/A/B").unwrap();
        e.rename("/A", "Z").unwrap();
        assert_eq!(e.current(), "/Z/B");
        assert_eq!(e.back(), Some("/Z"));
    }

    #[test]
    fn test_remove_current_climbs_to_parent() {
        let mut e = explorer();
        e.navigate_to("/A/B").unwrap();
        let report = e.remove(&["/A/B"]);
        assert_eq!(report.removed_count(), 1);
        assert_eq!(e.current(), "/A");
        assert_eq!(e.history().entries(), &["/".to_string(), "/A".to_string()]);
    }

    #[test]
    fn test_cut_paste_selection() {
        let mut e = explorer();
        e.navigate_to("/A").unwrap();
        e.select("/A/x.txt", false);
        e.toggle("/A/y.png");
        assert_eq!(e.stage_selection(ClipboardIntent::Move), 2);
        let report = e.paste_clipboard(Some("/A/C")).unwrap();
        assert_eq!(report.pasted, vec!["/A/C/x.txt", "/A/C/y.png"]);
        assert!(e.selection().is_empty());
        assert!(e.clipboard().is_empty());
    }

    #[test]
    fn test_properties_of_selection() {
        let mut e = explorer();
        e.navigate_to("/A").unwrap();
        e.select_all();
        match e.properties().unwrap() {
            Properties::Multiple(p) => {
                assert_eq!(p.count, 4);
                assert_eq!(p.total_bytes, 30);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(e.status(), StatusCounts { items: 4, selected: 4 });
    }

    #[test]
    fn test_properties_without_selection_describe_current() {
        let mut e = explorer();
        e.navigate_to("/A").unwrap();
        match e.properties().unwrap() {
            Properties::Single(p) => {
                assert_eq!(p.name, "A");
                assert_eq!(p.items, Some(4));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
