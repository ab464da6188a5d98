//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule orchestrates between:
//! - The explorer (hierarchy, history, selection, clipboard, sort)
//! - UI state (cursor, prompts, popups, toast)
//! - Logic (pure functions in arbor::logic)
//!
//! Methods are kept as `impl App` but organized by functional domain.

pub(crate) mod file_ops;
pub(crate) mod filters;
pub(crate) mod navigation;
pub(crate) mod sorting;
