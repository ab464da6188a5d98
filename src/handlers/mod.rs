//! Event Handlers
//!
//! This module contains handlers for different types of events:
//! - keyboard: User keyboard input
//!
//! Handlers are functions that take &mut App and dispatch to the
//! orchestration methods in `app/`.

pub mod keyboard;
