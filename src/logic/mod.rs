//! Business Logic
//!
//! This module contains pure functions that can be unit tested without a
//! store or a terminal:
//! - formatting: size and date display, size string normalization
//! - navigation: list cursor movement with wrapping
//! - path: path splitting, joining and resolution against a tree
//! - properties: single-item and multi-item property summaries
//! - search: wildcard name matching
//! - sorting: column comparators and stable ordering
//! - ui: UI state transitions and cycling

pub mod formatting;
pub mod navigation;
pub mod path;
pub mod properties;
pub mod search;
pub mod sorting;
pub mod ui;
