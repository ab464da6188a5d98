//! Clipboard controller
//!
//! Holds at most one staged operation: a list of source paths and whether
//! pasting copies or moves them.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{HierarchyError, Result};
use crate::logic::path;
use crate::store::HierarchyStore;

/// What a paste does with the staged paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardIntent {
    Copy,
    Move,
}

impl ClipboardIntent {
    pub fn as_str(&self) -> &str {
        match self {
            ClipboardIntent::Copy => "copy",
            ClipboardIntent::Move => "cut",
        }
    }
}

/// Staged paths plus intent
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardState {
    pub paths: Vec<String>,
    pub intent: ClipboardIntent,
}

/// Outcome of a paste
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PasteReport {
    /// Paths of the nodes created or relocated in the destination
    pub pasted: Vec<String>,
    /// Source paths that could not be pasted, with the reason
    pub failed: Vec<(String, HierarchyError)>,
    /// For a move, each relocated source path with its new path
    pub moved: Vec<(String, String)>,
}

impl PasteReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClipboardController {
    state: Option<ClipboardState>,
}

impl ClipboardController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record paths and intent, replacing whatever was staged before
    pub fn stage<S: AsRef<str>>(&mut self, paths: &[S], intent: ClipboardIntent) {
        let paths: Vec<String> = paths.iter().map(|p| p.as_ref().to_string()).collect();
        debug!("clipboard: stage {} item(s) for {}", paths.len(), intent.as_str());
        self.state = Some(ClipboardState { paths, intent });
    }

    pub fn pending(&self) -> Option<&ClipboardState> {
        self.state.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_none()
    }

    pub fn clear(&mut self) {
        self.state = None;
    }

    /// Paste every staged path into `destination`
    ///
    /// Items that no longer resolve or collide are reported and skipped; the
    /// rest of the batch still runs. A destination that is not a container
    /// fails the whole paste up front and leaves the clipboard as it was.
    /// A move clears the clipboard afterwards, a copy keeps it staged.
    pub fn paste(
        &mut self,
        store: &mut HierarchyStore,
        destination: &str,
    ) -> Result<PasteReport> {
        let mut report = PasteReport::default();
        let Some(state) = self.state.as_ref() else {
            return Ok(report);
        };
        store.get_container(destination)?;

        let intent = state.intent;
        for source in &state.paths {
            let result = match intent {
                ClipboardIntent::Copy => store.copy(source, destination),
                ClipboardIntent::Move => store.move_node(source, destination),
            };
            match result {
                Ok(node) => {
                    let pasted = node.path().to_string();
                    if intent == ClipboardIntent::Move {
                        report.moved.push((path::normalize(source), pasted.clone()));
                    }
                    report.pasted.push(pasted);
                }
                Err(e) => {
                    warn!("paste skipped {}: {}", source, e);
                    report.failed.push((source.clone(), e));
                }
            }
        }

        if intent == ClipboardIntent::Move {
            self.state = None;
        }
        debug!(
            "clipboard: pasted {} item(s) into {}, {} failed",
            report.pasted.len(),
            destination,
            report.failed.len()
        );
        Ok(report)
    }
}
