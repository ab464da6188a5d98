//! Tree node
//!
//! A node is either a container owning an ordered list of children, or a
//! leaf carrying a category and an optional byte size. The `path` field is
//! stored, not derived on read; only the store rewrites it.

use chrono::{DateTime, Utc};

use super::types::{ItemCategory, NodeSummary, CONTAINER_LABEL};
use crate::logic::{formatting, path};

/// Structural kind of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Container {
        children: Vec<Node>,
    },
    Leaf {
        category: ItemCategory,
        size: Option<u64>,
    },
}

/// A named entry in the hierarchy
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) path: String,
    pub(crate) modified: DateTime<Utc>,
    pub(crate) kind: NodeKind,
}

impl Node {
    /// Root container (path "/", empty name)
    pub(crate) fn root(modified: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            path: path::ROOT.to_string(),
            modified,
            kind: NodeKind::Container {
                children: Vec::new(),
            },
        }
    }

    pub(crate) fn container(parent_path: &str, name: &str, modified: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            path: path::join(parent_path, name),
            modified,
            kind: NodeKind::Container {
                children: Vec::new(),
            },
        }
    }

    pub(crate) fn leaf(
        parent_path: &str,
        name: &str,
        category: ItemCategory,
        size: Option<u64>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.to_string(),
            path: path::join(parent_path, name),
            modified,
            kind: NodeKind::Leaf { category, size },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, NodeKind::Container { .. })
    }

    pub fn is_root(&self) -> bool {
        path::is_root(&self.path)
    }

    /// Byte size for leaves; containers have none
    pub fn size(&self) -> Option<u64> {
        match self.kind {
            NodeKind::Leaf { size, .. } => size,
            NodeKind::Container { .. } => None,
        }
    }

    /// Leaf category (None for containers)
    pub fn category(&self) -> Option<ItemCategory> {
        match self.kind {
            NodeKind::Leaf { category, .. } => Some(category),
            NodeKind::Container { .. } => None,
        }
    }

    /// Label for the type column ("Folder" for containers)
    pub fn type_label(&self) -> &'static str {
        match &self.kind {
            NodeKind::Container { .. } => CONTAINER_LABEL,
            NodeKind::Leaf { category, .. } => category.label(),
        }
    }

    /// Direct children; empty slice for leaves
    pub fn children(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Container { children } => children,
            NodeKind::Leaf { .. } => &[],
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.kind {
            NodeKind::Container { children } => Some(children),
            NodeKind::Leaf { .. } => None,
        }
    }

    /// Direct child by exact (case-sensitive) name
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children().iter().find(|c| c.name == name)
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children().iter().map(Node::subtree_len).sum::<usize>()
    }

    /// Rewrite `path` for every descendant from this node's own path.
    ///
    /// Depth-first, parent before children; uses an explicit stack so deep
    /// trees do not recurse.
    pub(crate) fn reanchor_descendants(&mut self) {
        let mut stack: Vec<&mut Node> = vec![self];
        while let Some(node) = stack.pop() {
            let parent_path = node.path.clone();
            if let NodeKind::Container { children } = &mut node.kind {
                for child in children.iter_mut() {
                    child.path = path::join(&parent_path, &child.name);
                    stack.push(child);
                }
            }
        }
    }

    /// Give this node a new name and parent, recomputing all paths below it
    pub(crate) fn reanchor(&mut self, parent_path: &str, name: &str) {
        self.name = name.to_string();
        self.path = path::join(parent_path, name);
        self.reanchor_descendants();
    }

    /// Flatten into a display summary
    pub fn summary(&self) -> NodeSummary {
        NodeSummary {
            name: self.name.clone(),
            path: self.path.clone(),
            is_container: self.is_container(),
            type_label: self.type_label().to_string(),
            size: self.size(),
            size_display: formatting::format_size(self.size(), self.is_container()),
            modified: self.modified,
            modified_display: formatting::format_date(self.modified),
            child_count: match &self.kind {
                NodeKind::Container { children } => Some(children.len()),
                NodeKind::Leaf { .. } => None,
            },
        }
    }
}
