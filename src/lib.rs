//! Arbor
//!
//! An in-memory hierarchy of containers and leaves with the operations a
//! file-explorer style view needs: path resolution, structural mutation,
//! back/forward navigation, multi-selection, a copy/cut clipboard and
//! column sorting. The `arbor` binary puts a terminal UI on top.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod explorer;
pub mod history;
pub mod logic;
pub mod model;
pub mod seed;
pub mod selection;
pub mod store;

pub use clipboard::{ClipboardController, ClipboardIntent, PasteReport};
pub use error::{HierarchyError, Result};
pub use explorer::{Explorer, OpenOutcome};
pub use history::NavigationHistory;
pub use logic::sorting::{SortColumn, SortDirection, SortSpec};
pub use model::{ItemCategory, Node, NodeKind, NodeSummary};
pub use selection::SelectionModel;
pub use store::{HierarchyStore, RemoveReport};

use serde::Deserialize;

/// File info display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Off,              // No timestamp or size
    TimestampOnly,    // Show timestamp only
    #[default]
    TimestampAndSize, // Show both size and timestamp
}
