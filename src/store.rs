//! Hierarchy store
//!
//! Owns the whole tree and exposes the structural mutations everything else
//! builds on: create, rename, remove, copy and move. Every single-node
//! mutation validates first and only then touches the tree, so a failed
//! call leaves the hierarchy exactly as it was.

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::error::{HierarchyError, Result};
use crate::logic::path;
use crate::logic::sorting::{self, SortSpec};
use crate::model::{ItemCategory, Node, NodeSummary};

/// Prefix used to derive the name of a copy
pub const DEFAULT_COPY_PREFIX: &str = "Copy of ";

/// How many times the copy prefix may be applied before giving up
const MAX_COPY_PREFIXES: usize = 2;

/// Outcome of a batch remove
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoveReport {
    /// Paths that were removed
    pub removed: Vec<String>,
    /// Paths that were skipped, with the reason
    pub skipped: Vec<(String, HierarchyError)>,
}

impl RemoveReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// In-memory tree of containers and leaves
#[derive(Debug, Clone)]
pub struct HierarchyStore {
    root: Node,
    copy_prefix: String,
    clock: fn() -> DateTime<Utc>,
}

impl Default for HierarchyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HierarchyStore {
    /// Empty hierarchy containing only the root
    pub fn new() -> Self {
        Self {
            root: Node::root(Utc::now()),
            copy_prefix: DEFAULT_COPY_PREFIX.to_string(),
            clock: Utc::now,
        }
    }

    /// Use a different prefix for derived copy names
    pub fn with_copy_prefix(mut self, prefix: &str) -> Self {
        self.copy_prefix = prefix.to_string();
        self
    }

    /// Use a fixed time source (tests, reproducible seeds)
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self.root.modified = clock();
        self
    }

    fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.root.subtree_len()
    }

    /// True when the root has no children
    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }

    pub fn get(&self, path: &str) -> Result<&Node> {
        path::resolve(&self.root, path)
    }

    /// Resolve a path that must be a container
    pub fn get_container(&self, path: &str) -> Result<&Node> {
        path::resolve_container(&self.root, path)
    }

    pub fn exists(&self, path: &str) -> bool {
        self.get(path).is_ok()
    }

    pub fn is_container(&self, path: &str) -> bool {
        self.get_container(path).is_ok()
    }

    /// Direct children of a container in stored order
    pub fn children(&self, path: &str) -> Result<&[Node]> {
        Ok(self.get_container(path)?.children())
    }

    /// Sorted summaries of a container's direct children
    pub fn list_children(&self, path: &str, spec: SortSpec) -> Result<Vec<NodeSummary>> {
        let children = self.children(path)?;
        Ok(sorting::sorted(children, spec)
            .into_iter()
            .map(Node::summary)
            .collect())
    }

    /// Check a candidate child name
    fn validate_name(name: &str) -> Result<()> {
        if name.trim().is_empty()
            || name.contains(path::SEPARATOR)
            || name == "."
            || name == ".."
        {
            return Err(HierarchyError::InvalidName(name.to_string()));
        }
        Ok(())
    }

    /// Resolve `parent` as a container and ensure `name` is free in it
    fn check_insert(&self, parent: &str, name: &str) -> Result<String> {
        Self::validate_name(name)?;
        let container = self.get_container(parent)?;
        if container.has_child(name) {
            return Err(HierarchyError::duplicate(container.path(), name));
        }
        Ok(container.path().to_string())
    }

    /// Append an already-anchored node to a container and return it
    fn attach(&mut self, parent: &str, node: Node) -> Result<&Node> {
        let container = path::resolve_mut(&mut self.root, parent)?;
        let container_path = container.path().to_string();
        let children = container
            .children_mut()
            .ok_or(HierarchyError::NotAContainer(container_path))?;
        children.push(node);
        let idx = children.len() - 1;
        Ok(&children[idx])
    }

    /// Create an empty container under `parent`
    pub fn create_container(&mut self, parent: &str, name: &str) -> Result<&Node> {
        let parent_path = self.check_insert(parent, name)?;
        let node = Node::container(&parent_path, name, self.now());
        debug!("create container {}", node.path());
        self.attach(&parent_path, node)
    }

    /// Create a leaf under `parent`; `modified` defaults to now
    pub fn create_leaf(
        &mut self,
        parent: &str,
        name: &str,
        category: ItemCategory,
        size: Option<u64>,
        modified: Option<DateTime<Utc>>,
    ) -> Result<&Node> {
        let parent_path = self.check_insert(parent, name)?;
        let modified = modified.unwrap_or_else(|| self.now());
        let node = Node::leaf(&parent_path, name, category, size, modified);
        debug!("create leaf {}", node.path());
        self.attach(&parent_path, node)
    }

    /// Set an explicit modification time (seeding)
    pub fn set_modified(&mut self, path: &str, modified: DateTime<Utc>) -> Result<()> {
        path::resolve_mut(&mut self.root, path)?.modified = modified;
        Ok(())
    }

    /// Rename a node and rewrite the paths of its whole subtree
    pub fn rename(&mut self, target: &str, new_name: &str) -> Result<&Node> {
        let node = self.get(target)?;
        if node.is_root() {
            return Err(HierarchyError::InvalidTarget(
                "the root cannot be renamed".to_string(),
            ));
        }
        Self::validate_name(new_name)?;

        let old_path = node.path().to_string();
        let parent_path = path::parent_path(&old_path);
        let parent = self.get_container(&parent_path)?;
        if parent
            .children()
            .iter()
            .any(|c| c.path() != old_path && c.name() == new_name)
        {
            return Err(HierarchyError::duplicate(parent.path(), new_name));
        }

        let now = self.now();
        let node = path::resolve_mut(&mut self.root, &old_path)?;
        node.reanchor(&parent_path, new_name);
        node.modified = now;
        debug!("rename {} -> {}", old_path, node.path());
        Ok(&*node)
    }

    /// Detach a single node from its parent
    fn detach(&mut self, target: &str) -> Result<Node> {
        let target = path::normalize(target);
        if path::is_root(&target) {
            return Err(HierarchyError::InvalidTarget(
                "the root cannot be removed".to_string(),
            ));
        }
        let parent_path = path::parent_path(&target);
        let parent = path::resolve_mut(&mut self.root, &parent_path)?;
        let children = parent
            .children_mut()
            .ok_or_else(|| HierarchyError::NotFound(target.clone()))?;
        let idx = children
            .iter()
            .position(|c| c.path() == target)
            .ok_or_else(|| HierarchyError::NotFound(target.clone()))?;
        Ok(children.remove(idx))
    }

    /// Remove every path that still resolves; the rest are reported, not fatal
    pub fn remove<S: AsRef<str>>(&mut self, paths: &[S]) -> RemoveReport {
        let mut report = RemoveReport::default();

        for target in paths {
            let target = target.as_ref();
            match self.detach(target) {
                Ok(node) => {
                    debug!("remove {} ({} nodes)", node.path(), node.subtree_len());
                    report.removed.push(node.path().to_string());
                }
                Err(e) => {
                    warn!("remove skipped {}: {}", target, e);
                    report.skipped.push((target.to_string(), e));
                }
            }
        }

        report
    }

    /// Derive a free name for a copy of `name` inside `container`
    fn copy_name(&self, container: &Node, name: &str) -> Result<String> {
        let mut candidate = name.to_string();
        for _ in 0..MAX_COPY_PREFIXES {
            candidate = format!("{}{}", self.copy_prefix, candidate);
            Self::validate_name(&candidate)?;
            if !container.has_child(&candidate) {
                return Ok(candidate);
            }
        }
        Err(HierarchyError::duplicate(container.path(), &candidate))
    }

    /// Deep-copy a subtree into `destination` under a derived name
    pub fn copy(&mut self, source: &str, destination: &str) -> Result<&Node> {
        let original = self.get(source)?;
        if original.is_root() {
            return Err(HierarchyError::InvalidTarget(
                "the root cannot be copied".to_string(),
            ));
        }
        let dest = self.get_container(destination)?;
        let name = self.copy_name(dest, original.name())?;
        let dest_path = dest.path().to_string();

        let mut clone = original.clone();
        clone.reanchor(&dest_path, &name);
        clone.modified = self.now();
        debug!("copy {} -> {}", original.path(), clone.path());
        self.attach(&dest_path, clone)
    }

    /// Relocate a subtree into `destination`, keeping its name
    ///
    /// Moving into the current parent is a no-op. Moving a container into
    /// itself or one of its descendants is rejected.
    pub fn move_node(&mut self, source: &str, destination: &str) -> Result<&Node> {
        let node = self.get(source)?;
        if node.is_root() {
            return Err(HierarchyError::InvalidTarget(
                "the root cannot be moved".to_string(),
            ));
        }
        let source_path = node.path().to_string();
        let name = node.name().to_string();

        let dest = self.get_container(destination)?;
        let dest_path = dest.path().to_string();

        if path::parent_path(&source_path) == dest_path {
            return self.get(&source_path);
        }
        if path::is_same_or_descendant(&dest_path, &source_path) {
            return Err(HierarchyError::InvalidTarget(format!(
                "cannot move '{}' into itself",
                source_path
            )));
        }
        if dest.has_child(&name) {
            return Err(HierarchyError::duplicate(&dest_path, &name));
        }

        let now = self.now();
        let mut node = self.detach(&source_path)?;
        node.reanchor(&dest_path, &name);
        node.modified = now;
        debug!("move {} -> {}", source_path, node.path());
        self.attach(&dest_path, node)
    }

    /// Check that every stored path matches the node's position
    pub fn verify_paths(&self) -> bool {
        let mut stack: Vec<(&Node, String)> = vec![(&self.root, path::ROOT.to_string())];
        while let Some((node, expected)) = stack.pop() {
            if node.path() != expected {
                return false;
            }
            for child in node.children() {
                stack.push((child, path::join(&expected, child.name())));
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 12, 0, 0).unwrap()
    }

    fn store() -> HierarchyStore {
        let mut s = HierarchyStore::new();
        s.create_container("/", "A").unwrap();
        s.create_container("/A", "B").unwrap();
        s.create_container("/A/B", "C").unwrap();
        s.create_leaf("/A/B", "notes.txt", ItemCategory::Document, Some(12), None)
            .unwrap();
        s.create_container("/", "D").unwrap();
        s
    }

    #[test]
    fn test_create_container_computes_path() {
        let s = store();
        assert_eq!(s.get("/A/B/C").unwrap().path(), "/A/B/C");
        assert!(s.is_container("/A/B/C"));
        assert!(s.verify_paths());
    }

    #[test]
    fn test_create_duplicate_rejected() {
        let mut s = store();
        let before = s.len();
        assert_eq!(
            s.create_container("/A", "B").unwrap_err(),
            HierarchyError::duplicate("/A", "B")
        );
        assert_eq!(s.len(), before);
    }

    #[test]
    fn test_create_names_are_case_sensitive() {
        let mut s = store();
        assert!(s.create_container("/A", "b").is_ok());
    }

    #[test]
    fn test_create_under_leaf_fails() {
        let mut s = store();
        assert_eq!(
            s.create_container("/A/B/notes.txt", "x").unwrap_err(),
            HierarchyError::NotAContainer("/A/B/notes.txt".to_string())
        );
    }

    #[test]
    fn test_create_rejects_bad_names() {
        let mut s = store();
        for bad in ["", "   ", "a/b", ".", ".."] {
            assert_eq!(
                s.create_container("/", bad).unwrap_err(),
                HierarchyError::InvalidName(bad.to_string())
            );
        }
    }

    #[test]
    fn test_create_uses_clock() {
        let mut s = HierarchyStore::new().with_clock(fixed);
        let node = s.create_container("/", "A").unwrap();
        assert_eq!(node.modified(), fixed());
    }

    #[test]
    fn test_rename_propagates_to_descendants() {
        let mut s = store();
        s.rename("/A", "X").unwrap();
        assert!(s.get("/X/B/C").is_ok());
        assert!(s.get("/X/B/notes.txt").is_ok());
        assert!(s.get("/A").is_err());
        assert!(s.verify_paths());
    }

    #[test]
    fn test_rename_root_rejected() {
        let mut s = store();
        assert!(matches!(
            s.rename("/", "Top"),
            Err(HierarchyError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_rename_to_sibling_name_rejected() {
        let mut s = store();
        assert_eq!(
            s.rename("/A", "D").unwrap_err(),
            HierarchyError::duplicate("/", "D")
        );
        assert!(s.get("/A/B").is_ok());
    }

    #[test]
    fn test_rename_to_same_name_allowed() {
        let mut s = HierarchyStore::new().with_clock(fixed);
        s.create_container("/", "A").unwrap();
        let node = s.rename("/A", "A").unwrap();
        assert_eq!(node.path(), "/A");
    }

    #[test]
    fn test_remove_mixed_batch() {
        let mut s = store();
        let report = s.remove(&["/A/B/C", "/missing", "/D", "/D"]);
        assert_eq!(report.removed, vec!["/A/B/C", "/D"]);
        assert_eq!(report.skipped.len(), 2);
        assert!(report
            .skipped
            .iter()
            .all(|(_, e)| matches!(e, HierarchyError::NotFound(_))));
        assert!(!s.exists("/D"));
    }

    #[test]
    fn test_remove_root_is_skipped() {
        let mut s = store();
        let report = s.remove(&["/"]);
        assert_eq!(report.removed_count(), 0);
        assert!(matches!(report.skipped[0].1, HierarchyError::InvalidTarget(_)));
        assert!(s.exists("/A"));
    }

    #[test]
    fn test_copy_into_same_parent_derives_name() {
        let mut s = store();
        let copy = s.copy("/A/B", "/A").unwrap();
        assert_eq!(copy.path(), "/A/Copy of B");
        assert!(s.get("/A/Copy of B/C").is_ok());
        assert!(s.get("/A/Copy of B/notes.txt").is_ok());
        assert!(s.get("/A/B/C").is_ok());
        assert!(s.verify_paths());
    }

    #[test]
    fn test_copy_prefix_applied_at_most_twice() {
        let mut s = store();
        assert_eq!(s.copy("/D", "/").unwrap().name(), "Copy of D");
        assert_eq!(s.copy("/D", "/").unwrap().name(), "Copy of Copy of D");
        assert_eq!(
            s.copy("/D", "/").unwrap_err(),
            HierarchyError::duplicate("/", "Copy of Copy of D")
        );
    }

    #[test]
    fn test_copy_into_own_descendant() {
        let mut s = store();
        s.copy("/A", "/A/B/C").unwrap();
        assert!(s.get("/A/B/C/Copy of A/B/C").is_ok());
        assert!(s.verify_paths());
    }

    #[test]
    fn test_copy_custom_prefix() {
        let mut s = HierarchyStore::new().with_copy_prefix("dup-");
        s.create_container("/", "A").unwrap();
        assert_eq!(s.copy("/A", "/").unwrap().path(), "/dup-A");
    }

    #[test]
    fn test_copy_prefix_with_separator_rejected() {
        let mut s = store().with_copy_prefix("backup/");
        let before = s.len();
        assert!(matches!(
            s.copy("/A/B", "/A"),
            Err(HierarchyError::InvalidName(_))
        ));
        assert_eq!(s.len(), before);
        assert!(s.verify_paths());
    }

    #[test]
    fn test_copy_root_rejected() {
        let mut s = store();
        assert!(matches!(
            s.copy("/", "/A"),
            Err(HierarchyError::InvalidTarget(_))
        ));
    }

    #[test]
    fn test_move_relocates_subtree() {
        let mut s = store();
        let moved = s.move_node("/A/B", "/D").unwrap();
        assert_eq!(moved.path(), "/D/B");
        assert!(s.get("/D/B/C").is_ok());
        assert!(s.get("/A/B").is_err());
        assert!(s.verify_paths());
    }

    #[test]
    fn test_move_collision_leaves_source() {
        let mut s = store();
        s.create_container("/D", "B").unwrap();
        assert_eq!(
            s.move_node("/A/B", "/D").unwrap_err(),
            HierarchyError::duplicate("/D", "B")
        );
        assert!(s.get("/A/B/C").is_ok());
    }

    #[test]
    fn test_move_into_descendant_rejected() {
        let mut s = store();
        assert!(matches!(
            s.move_node("/A", "/A/B/C"),
            Err(HierarchyError::InvalidTarget(_))
        ));
        assert!(s.get("/A/B/C").is_ok());
    }

    #[test]
    fn test_move_into_current_parent_is_noop() {
        let mut s = store();
        let before = s.get("/A/B").unwrap().modified();
        let node = s.move_node("/A/B", "/A").unwrap();
        assert_eq!(node.path(), "/A/B");
        assert_eq!(node.modified(), before);
    }

    #[test]
    fn test_move_updates_modified() {
        let mut s = store().with_clock(fixed);
        let moved = s.move_node("/A/B/notes.txt", "/").unwrap();
        assert_eq!(moved.modified(), fixed());
    }

    #[test]
    fn test_list_children_sorted() {
        let mut s = store();
        s.create_container("/", "b-folder").unwrap();
        let listing = s.list_children("/", SortSpec::default()).unwrap();
        let names: Vec<&str> = listing.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["A", "b-folder", "D"]);
    }

    #[test]
    fn test_list_children_of_leaf_fails() {
        let s = store();
        assert!(matches!(
            s.list_children("/A/B/notes.txt", SortSpec::default()),
            Err(HierarchyError::NotAContainer(_))
        ));
    }
}
