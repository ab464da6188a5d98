//! Hierarchy data model
//!
//! - **Node** / **NodeKind**: the owned tree, containers own their children
//! - **ItemCategory**: leaf category behind the type label
//! - **NodeSummary**: flattened, display-ready view of a node
//!
//! Nodes are only mutated by the store; everything outside the crate reads
//! them through accessors.

pub mod node;
pub mod types;

pub use node::{Node, NodeKind};
pub use types::{ItemCategory, NodeSummary, CONTAINER_LABEL};
