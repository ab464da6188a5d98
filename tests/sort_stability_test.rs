//! Tests for listing order
//!
//! Sorting is stable in both directions: items that compare equal keep the
//! order they were inserted in. Sorting only affects listings, never the
//! stored child order.

use arbor::logic::sorting::{sort_nodes, sorted};
use arbor::{HierarchyStore, ItemCategory, SortColumn, SortDirection, SortSpec};
use chrono::{DateTime, TimeZone, Utc};

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
}

/// Leaves with two modified-time ties: (first, second) at 10:00, (third, fourth) at 09:00
fn build_store() -> HierarchyStore {
    let mut store = HierarchyStore::new();
    for (name, hour, size) in [
        ("first.txt", 10, 300),
        ("third.txt", 9, 100),
        ("second.txt", 10, 200),
        ("fourth.txt", 9, 400),
    ] {
        store
            .create_leaf("/", name, ItemCategory::Document, Some(size), Some(at(hour)))
            .unwrap();
    }
    store
}

fn names(store: &HierarchyStore, spec: SortSpec) -> Vec<String> {
    store
        .list_children("/", spec)
        .unwrap()
        .into_iter()
        .map(|item| item.name)
        .collect()
}

#[test]
fn test_modified_ties_keep_insertion_order_ascending() {
    let store = build_store();
    let order = names(
        &store,
        SortSpec::new(SortColumn::Modified, SortDirection::Ascending),
    );
    assert_eq!(order, ["third.txt", "fourth.txt", "first.txt", "second.txt"]);
}

#[test]
fn test_modified_ties_keep_insertion_order_descending() {
    let store = build_store();
    let order = names(
        &store,
        SortSpec::new(SortColumn::Modified, SortDirection::Descending),
    );
    assert_eq!(order, ["first.txt", "second.txt", "third.txt", "fourth.txt"]);
}

#[test]
fn test_size_and_name_orders() {
    let store = build_store();
    assert_eq!(
        names(&store, SortSpec::new(SortColumn::Size, SortDirection::Descending)),
        ["fourth.txt", "first.txt", "second.txt", "third.txt"]
    );
    assert_eq!(
        names(&store, SortSpec::new(SortColumn::Name, SortDirection::Ascending)),
        ["first.txt", "fourth.txt", "second.txt", "third.txt"]
    );
}

#[test]
fn test_type_ties_keep_insertion_order() {
    let store = build_store();
    // Every leaf shares one type label
    assert_eq!(
        names(&store, SortSpec::new(SortColumn::Type, SortDirection::Descending)),
        ["first.txt", "third.txt", "second.txt", "fourth.txt"]
    );
}

#[test]
fn test_sorting_does_not_reorder_storage() {
    let store = build_store();
    let children = store.children("/").unwrap();

    let mut refs: Vec<_> = children.iter().collect();
    sort_nodes(
        &mut refs,
        SortSpec::new(SortColumn::Size, SortDirection::Ascending),
    );
    assert_eq!(refs[0].name(), "third.txt");

    let view = sorted(children, SortSpec::default());
    assert_eq!(view[0].name(), "first.txt");

    let stored: Vec<&str> = store
        .children("/")
        .unwrap()
        .iter()
        .map(|node| node.name())
        .collect();
    assert_eq!(stored, ["first.txt", "third.txt", "second.txt", "fourth.txt"]);
}
