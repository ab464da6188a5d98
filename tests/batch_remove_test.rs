//! Tests for batch removal
//!
//! Removing a mix of valid, missing and already-removed paths removes the
//! valid ones, reports the rest, and never fails the whole call. Removing a
//! container takes its whole subtree with it. The explorer drops removed
//! paths from the selection.

use arbor::{Explorer, HierarchyError, HierarchyStore, ItemCategory};

fn build_store() -> HierarchyStore {
    let mut store = HierarchyStore::new();
    store.create_container("/", "A").unwrap();
    store.create_container("/A", "B").unwrap();
    store
        .create_leaf("/A/B", "one.txt", ItemCategory::Document, Some(1), None)
        .unwrap();
    store
        .create_leaf("/A", "two.txt", ItemCategory::Document, Some(2), None)
        .unwrap();
    store
        .create_leaf("/", "three.png", ItemCategory::Image, Some(3), None)
        .unwrap();
    store
}

#[test]
fn test_mixed_batch_reports_invalid_paths() {
    let mut store = build_store();

    let report = store.remove(&["/A/two.txt", "/missing", "/three.png", "/A/two.txt"]);

    assert_eq!(report.removed, vec!["/A/two.txt", "/three.png"]);
    assert_eq!(report.removed_count(), 2);
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].0, "/missing");
    assert!(matches!(report.skipped[1].1, HierarchyError::NotFound(_)));
    assert!(store.exists("/A/B/one.txt"));
}

#[test]
fn test_ancestor_then_descendant() {
    let mut store = build_store();

    // The descendant is gone by the time it is reached
    let report = store.remove(&["/A", "/A/B/one.txt"]);

    assert_eq!(report.removed, vec!["/A"]);
    assert_eq!(report.skipped.len(), 1);
    assert!(!store.exists("/A/B"));
    assert!(store.verify_paths());
}

#[test]
fn test_root_cannot_be_removed() {
    let mut store = build_store();
    let before = store.len();

    let report = store.remove(&["/"]);

    assert!(report.removed.is_empty());
    assert!(matches!(
        report.skipped[0].1,
        HierarchyError::InvalidTarget(_)
    ));
    assert_eq!(store.len(), before);
}

#[test]
fn test_explorer_remove_selected_clears_selection() {
    let mut explorer = Explorer::new(build_store(), 100);
    explorer.navigate_to("/A").unwrap();
    explorer.select_all();
    assert_eq!(explorer.selection().len(), 2);

    let report = explorer.remove_selected();

    assert_eq!(report.removed_count(), 2);
    assert!(explorer.selection().is_empty());
    assert!(explorer.list().unwrap().is_empty());
}
