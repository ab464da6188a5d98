//! File operation orchestration methods
//!
//! Methods that mutate the hierarchy on behalf of the user:
//! - New folder and rename (via the text prompt)
//! - Delete (via confirmation)
//! - Copy, cut and paste
//! - Selection toggling and the properties popup

use arbor::logic::path;
use arbor::{ClipboardIntent, HierarchyError};
use log::debug;

use crate::state::{Prompt, PromptKind};
use crate::App;

/// One-line summary of a batch outcome for the toast
fn batch_message(verb: &str, done: usize, failed: &[(String, HierarchyError)]) -> String {
    match failed.first() {
        None => format!("{} {} item(s)", verb, done),
        Some((first_path, first_err)) => format!(
            "Error: {} {} item(s), {} failed ({}: {})",
            verb,
            done,
            failed.len(),
            path::file_name(first_path).unwrap_or(first_path.as_str()),
            first_err
        ),
    }
}

impl App {
    pub(crate) fn start_new_folder(&mut self) {
        self.ui.prompt = Some(Prompt {
            kind: PromptKind::NewFolder,
            input: String::new(),
        });
    }

    pub(crate) fn start_rename(&mut self) {
        let Some(item) = self.cursor_item() else {
            return;
        };
        self.ui.prompt = Some(Prompt {
            kind: PromptKind::Rename { path: item.path },
            input: item.name,
        });
    }

    /// Apply the confirmed prompt; on error the prompt stays open
    pub(crate) fn submit_prompt(&mut self) {
        let Some(prompt) = self.ui.prompt.clone() else {
            return;
        };
        let name = prompt.input.trim();

        let result = match &prompt.kind {
            PromptKind::NewFolder => self.explorer.create_container(name),
            PromptKind::Rename { path } => self.explorer.rename(path, name),
        };

        match result {
            Ok(summary) => {
                self.ui.prompt = None;
                self.focus_path(&summary.path);
                let verb = match prompt.kind {
                    PromptKind::NewFolder => "Created",
                    PromptKind::Rename { .. } => "Renamed to",
                };
                self.ui.show_toast(format!("{} {}", verb, summary.name));
            }
            Err(e) => self.ui.show_error(e),
        }
    }

    /// Ask for confirmation before deleting the targets
    pub(crate) fn request_delete(&mut self) {
        let targets = self.target_paths();
        if !targets.is_empty() {
            self.ui.confirm_delete = Some(targets);
        }
    }

    pub(crate) fn confirm_delete(&mut self) {
        let Some(targets) = self.ui.confirm_delete.take() else {
            return;
        };
        let report = self.explorer.remove(&targets);
        debug!(
            "delete: {} removed, {} skipped",
            report.removed.len(),
            report.skipped.len()
        );
        self.clamp_cursor();
        self.ui
            .show_toast(batch_message("Deleted", report.removed_count(), &report.skipped));
    }

    /// Stage the targets on the clipboard
    pub(crate) fn stage(&mut self, intent: ClipboardIntent) {
        let targets = self.target_paths();
        if targets.is_empty() {
            return;
        }
        self.explorer.stage_clipboard(&targets, intent);
        let verb = match intent {
            ClipboardIntent::Copy => "Copied",
            ClipboardIntent::Move => "Cut",
        };
        self.ui
            .show_toast(format!("{} {} item(s) to clipboard", verb, targets.len()));
    }

    /// Paste into the current container
    pub(crate) fn paste(&mut self) {
        if self.explorer.clipboard().is_empty() {
            self.ui.show_toast("Clipboard is empty".to_string());
            return;
        }
        match self.explorer.paste_clipboard(None) {
            Ok(report) => {
                if let Some(last) = report.pasted.last() {
                    let last = last.clone();
                    self.focus_path(&last);
                } else {
                    self.clamp_cursor();
                }
                self.ui
                    .show_toast(batch_message("Pasted", report.pasted.len(), &report.failed));
            }
            Err(e) => self.ui.show_error(e),
        }
    }

    /// Toggle the cursor item in the selection
    pub(crate) fn toggle_cursor_selection(&mut self) {
        if let Some(item) = self.cursor_item() {
            self.explorer.toggle(&item.path);
        }
    }

    /// Extend the selection to the cursor item, then move the cursor
    pub(crate) fn extend_selection(&mut self, down: bool) {
        if let Some(item) = self.cursor_item() {
            if self.explorer.selection().is_empty() {
                self.explorer.select(&item.path, false);
            }
        }
        if down {
            self.next_item();
        } else {
            self.previous_item();
        }
        if let Some(item) = self.cursor_item() {
            self.explorer.select_range(&item.path);
        }
    }

    pub(crate) fn select_all(&mut self) {
        self.explorer.select_all();
    }

    pub(crate) fn clear_selection(&mut self) {
        self.explorer.clear_selection();
    }

    pub(crate) fn show_properties(&mut self) {
        match self.explorer.properties() {
            Ok(props) => self.ui.properties = Some(props),
            Err(e) => self.ui.show_error(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_message_clean() {
        assert_eq!(batch_message("Deleted", 3, &[]), "Deleted 3 item(s)");
    }

    #[test]
    fn test_batch_message_with_failures_is_error() {
        let failed = vec![(
            "/Docs/a.txt".to_string(),
            HierarchyError::NotFound("/Docs/a.txt".to_string()),
        )];
        let message = batch_message("Pasted", 1, &failed);
        assert!(message.starts_with("Error: Pasted 1 item(s), 1 failed (a.txt:"));
    }
}
