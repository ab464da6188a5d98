//! Sorting comparison logic
//!
//! Pure functions for ordering a container's direct children by one column.
//! Sorting is stable: items that compare equal keep their relative order in
//! both directions, there is no secondary key.

use crate::model::Node;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column a listing is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    #[default]
    Name,
    Modified,
    Size,
    Type,
}

impl SortColumn {
    pub fn as_str(&self) -> &str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Modified => "Modified",
            SortColumn::Size => "Size",
            SortColumn::Type => "Type",
        }
    }

    /// Next column in the cycle Name → Modified → Size → Type → Name
    pub fn next(&self) -> Self {
        match self {
            SortColumn::Name => SortColumn::Modified,
            SortColumn::Modified => SortColumn::Size,
            SortColumn::Size => SortColumn::Type,
            SortColumn::Type => SortColumn::Name,
        }
    }
}

/// Direction applied uniformly to the column comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(&self) -> &str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Apply a sort request the way a clickable column header does
    ///
    /// Same column: use `direction` if given, otherwise flip. Different
    /// column: switch to it, in `direction` if given, otherwise ascending.
    ///
    /// # Examples
    /// ```
    /// use arbor::logic::sorting::{SortColumn, SortDirection, SortSpec};
    ///
    /// let mut spec = SortSpec::default();
    /// spec.request(SortColumn::Name, None);
    /// assert_eq!(spec.direction, SortDirection::Descending);
    ///
    /// spec.request(SortColumn::Size, None);
    /// assert_eq!(spec, SortSpec::new(SortColumn::Size, SortDirection::Ascending));
    ///
    /// spec.request(SortColumn::Size, Some(SortDirection::Ascending));
    /// assert_eq!(spec.direction, SortDirection::Ascending);
    /// ```
    pub fn request(&mut self, column: SortColumn, direction: Option<SortDirection>) {
        if column == self.column {
            self.direction = direction.unwrap_or_else(|| self.direction.toggled());
        } else {
            self.column = column;
            self.direction = direction.unwrap_or(SortDirection::Ascending);
        }
    }
}

/// Size key: leaf bytes, containers and unsized leaves count as 0
fn size_key(node: &Node) -> u64 {
    node.size().unwrap_or(0)
}

/// Compare two nodes on a column, ascending
pub fn compare_nodes(a: &Node, b: &Node, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortColumn::Modified => a.modified().cmp(&b.modified()),
        SortColumn::Size => size_key(a).cmp(&size_key(b)),
        SortColumn::Type => a
            .type_label()
            .to_lowercase()
            .cmp(&b.type_label().to_lowercase()),
    }
}

/// Sort node references in place (stable)
pub fn sort_nodes(nodes: &mut [&Node], spec: SortSpec) {
    nodes.sort_by(|a, b| {
        let result = compare_nodes(a, b, spec.column);
        match spec.direction {
            SortDirection::Ascending => result,
            SortDirection::Descending => result.reverse(),
        }
    });
}

/// Ordered view over a slice of children
pub fn sorted(children: &[Node], spec: SortSpec) -> Vec<&Node> {
    let mut nodes: Vec<&Node> = children.iter().collect();
    sort_nodes(&mut nodes, spec);
    nodes
}
