//! Tests for clipboard staging and paste
//!
//! Copy-intent pastes duplicate the staged subtrees under derived names and
//! keep the clipboard staged, so pasting twice yields two distinct copies.
//! Move-intent pastes relocate and then clear the clipboard. Items that no
//! longer resolve or collide are reported per item without aborting the
//! batch.

use arbor::{ClipboardController, ClipboardIntent, HierarchyError, HierarchyStore, ItemCategory};

fn build_store() -> HierarchyStore {
    let mut store = HierarchyStore::new();
    store.create_container("/", "A").unwrap();
    store.create_container("/A", "B").unwrap();
    store
        .create_leaf("/A/B", "notes.txt", ItemCategory::Document, Some(12), None)
        .unwrap();
    store.create_container("/", "C").unwrap();
    store
}

#[test]
fn test_copy_paste_twice_gives_distinct_names() {
    let mut store = build_store();
    let mut clipboard = ClipboardController::new();
    clipboard.stage(&["/A/B"], ClipboardIntent::Copy);

    let first = clipboard.paste(&mut store, "/A").unwrap();
    let second = clipboard.paste(&mut store, "/A").unwrap();

    assert_eq!(first.pasted, vec!["/A/Copy of B".to_string()]);
    assert_eq!(second.pasted, vec!["/A/Copy of Copy of B".to_string()]);
    assert!(store.exists("/A/B/notes.txt"));
    assert!(store.exists("/A/Copy of B/notes.txt"));
    assert!(store.exists("/A/Copy of Copy of B/notes.txt"));
    assert!(!clipboard.is_empty());
    assert!(store.verify_paths());
}

#[test]
fn test_third_copy_reports_duplicate() {
    let mut store = build_store();
    let mut clipboard = ClipboardController::new();
    clipboard.stage(&["/A/B"], ClipboardIntent::Copy);

    clipboard.paste(&mut store, "/A").unwrap();
    clipboard.paste(&mut store, "/A").unwrap();
    let third = clipboard.paste(&mut store, "/A").unwrap();

    assert!(third.pasted.is_empty());
    assert_eq!(third.failed.len(), 1);
    assert!(matches!(
        third.failed[0].1,
        HierarchyError::DuplicateName { .. }
    ));
}

#[test]
fn test_cut_paste_moves_and_clears() {
    let mut store = build_store();
    let mut clipboard = ClipboardController::new();
    clipboard.stage(&["/A/B"], ClipboardIntent::Move);

    let report = clipboard.paste(&mut store, "/C").unwrap();

    assert!(report.is_clean());
    assert!(store.exists("/C/B/notes.txt"));
    assert!(!store.exists("/A/B"));
    assert!(clipboard.is_empty());
}

#[test]
fn test_paste_skips_vanished_sources() {
    let mut store = build_store();
    let mut clipboard = ClipboardController::new();
    clipboard.stage(&["/A/B", "/A/gone"], ClipboardIntent::Copy);

    let report = clipboard.paste(&mut store, "/C").unwrap();

    assert_eq!(report.pasted, vec!["/C/Copy of B".to_string()]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "/A/gone");
    assert!(!report.is_clean());
}

#[test]
fn test_paste_into_leaf_fails_and_keeps_clipboard() {
    let mut store = build_store();
    let mut clipboard = ClipboardController::new();
    clipboard.stage(&["/A/B"], ClipboardIntent::Move);

    let err = clipboard
        .paste(&mut store, "/A/B/notes.txt")
        .unwrap_err();

    assert!(matches!(err, HierarchyError::NotAContainer(_)));
    assert!(!clipboard.is_empty());
    assert!(store.exists("/A/B"));
}

#[test]
fn test_empty_clipboard_pastes_nothing() {
    let mut store = build_store();
    let before = store.len();
    let mut clipboard = ClipboardController::new();

    let report = clipboard.paste(&mut store, "/").unwrap();

    assert!(report.pasted.is_empty());
    assert!(report.failed.is_empty());
    assert_eq!(store.len(), before);
}
