//! Error taxonomy for the hierarchy engine
//!
//! Every failure the core can produce is a value of [`HierarchyError`].
//! Single-item operations return it directly; batch operations collect it
//! per item in their report types.

use thiserror::Error;

/// Errors produced by hierarchy operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// Path does not resolve to any node
    #[error("no such item: {0}")]
    NotFound(String),

    /// A sibling with the same name already exists under `parent`
    #[error("an item named '{name}' already exists in {parent}")]
    DuplicateName { parent: String, name: String },

    /// Operation not allowed on this target (root, descent through a leaf, move into self)
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// Path resolves, but to a leaf where a container was required
    #[error("not a folder: {0}")]
    NotAContainer(String),

    /// Name is empty, contains the separator, or is reserved
    #[error("invalid name: '{0}'")]
    InvalidName(String),
}

impl HierarchyError {
    pub(crate) fn duplicate(parent: &str, name: &str) -> Self {
        HierarchyError::DuplicateName {
            parent: parent.to_string(),
            name: name.to_string(),
        }
    }

    /// Batch operations skip these instead of failing the whole call
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HierarchyError::NotFound(_) | HierarchyError::DuplicateName { .. }
        )
    }
}

/// Result alias used across the engine
pub type Result<T> = std::result::Result<T, HierarchyError>;
