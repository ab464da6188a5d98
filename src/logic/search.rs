//! Search Logic
//!
//! Pure functions for filtering nodes by search queries.
//! Supports wildcard patterns using the glob crate.

use crate::model::{Node, NodeSummary};

/// Match a search query against an item name
///
/// # Pattern Rules
/// - "*" and "?" are wildcards over the whole name
/// - Matches are case-insensitive
/// - A plain query without wildcards matches any substring of the name
///
/// # Examples
/// ```
/// use arbor::logic::search::name_matches;
///
/// assert!(name_matches("report", "Report.pdf"));
/// assert!(name_matches("*.txt", "Notes.txt"));
/// assert!(!name_matches("*.txt", "Notes.txt.bak"));
/// assert!(name_matches("", "anything"));
/// ```
pub fn name_matches(query: &str, name: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();
    let name_lower = name.to_lowercase();

    if let Ok(pattern) = glob::Pattern::new(&query_lower) {
        if pattern.matches(&name_lower) {
            return true;
        }
    }

    // Wildcard queries must match as patterns, plain ones as substrings
    if has_wildcards(&query_lower) {
        return false;
    }
    name_lower.contains(&query_lower)
}

fn has_wildcards(query: &str) -> bool {
    query.contains(['*', '?', '['])
}

/// Keep only summaries whose name matches the query (order preserved)
pub fn filter_summaries(items: Vec<NodeSummary>, query: &str) -> Vec<NodeSummary> {
    if query.is_empty() {
        return items;
    }
    items
        .into_iter()
        .filter(|item| name_matches(query, &item.name))
        .collect()
}

/// All descendants of `node` whose name matches, depth-first pre-order
///
/// `node` itself is not a candidate.
pub fn find_in_subtree<'a>(node: &'a Node, query: &str) -> Vec<&'a Node> {
    let mut found = Vec::new();
    let mut stack: Vec<&Node> = node.children().iter().rev().collect();

    while let Some(current) = stack.pop() {
        if name_matches(query, current.name()) {
            found.push(current);
        }
        stack.extend(current.children().iter().rev());
    }

    found
}
