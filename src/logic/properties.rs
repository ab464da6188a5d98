//! Properties summaries
//!
//! Builds the details shown for one item, or the aggregate view shown when
//! several items are selected.

use std::collections::BTreeMap;

use serde::Serialize;

use super::formatting;
use super::path;
use crate::model::Node;

/// Details of a single item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemProperties {
    pub name: String,
    pub type_label: String,
    /// Display size; "-" for containers
    pub size: String,
    /// Path of the containing folder
    pub location: String,
    pub modified: String,
    /// Direct children for containers
    pub items: Option<usize>,
}

/// Aggregate over several items
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionProperties {
    pub count: usize,
    /// Count per type label, alphabetical by label
    pub by_type: BTreeMap<String, usize>,
    /// Sum of the selected leaves' sizes, containers not included
    pub total_bytes: u64,
    pub total_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Properties {
    Single(ItemProperties),
    Multiple(SelectionProperties),
}

/// Build the properties for a set of nodes
///
/// Returns `None` for an empty set.
pub fn properties(nodes: &[&Node]) -> Option<Properties> {
    match nodes {
        [] => None,
        [node] => Some(Properties::Single(item_properties(node))),
        many => Some(Properties::Multiple(selection_properties(many))),
    }
}

fn item_properties(node: &Node) -> ItemProperties {
    ItemProperties {
        name: if node.is_root() {
            path::ROOT.to_string()
        } else {
            node.name().to_string()
        },
        type_label: node.type_label().to_string(),
        size: formatting::format_size(node.size(), node.is_container()),
        location: path::parent_path(node.path()),
        modified: formatting::format_date(node.modified()),
        items: if node.is_container() {
            Some(node.children().len())
        } else {
            None
        },
    }
}

fn selection_properties(nodes: &[&Node]) -> SelectionProperties {
    let mut by_type = BTreeMap::new();
    let mut total_bytes = 0u64;

    for node in nodes {
        *by_type.entry(node.type_label().to_string()).or_insert(0) += 1;
        total_bytes = total_bytes.saturating_add(node.size().unwrap_or(0));
    }

    SelectionProperties {
        count: nodes.len(),
        by_type,
        total_bytes,
        total_display: formatting::format_bytes(total_bytes),
    }
}
