//! Navigation orchestration methods
//!
//! Methods for traversing the hierarchy:
//! - Entering containers, going up, back and forward
//! - Moving the cursor up/down/page/jump
//! - Keeping the cursor on a sensible row after the listing changes

use arbor::logic::{self, path};
use arbor::{NodeSummary, OpenOutcome};
use log::debug;

use crate::App;

impl App {
    /// Displayed listing (sorted and filtered)
    pub(crate) fn visible_items(&self) -> Vec<NodeSummary> {
        match self.explorer.list() {
            Ok(items) => items,
            Err(e) => {
                debug!("listing {} failed: {}", self.explorer.current(), e);
                Vec::new()
            }
        }
    }

    /// Item under the cursor
    pub(crate) fn cursor_item(&self) -> Option<NodeSummary> {
        let idx = self.ui.cursor?;
        self.visible_items().into_iter().nth(idx)
    }

    /// Selection if any, otherwise the item under the cursor
    pub(crate) fn target_paths(&self) -> Vec<String> {
        if !self.explorer.selection().is_empty() {
            return self.explorer.selection().paths().to_vec();
        }
        self.cursor_item().map(|item| vec![item.path]).unwrap_or_default()
    }

    pub(crate) fn clamp_cursor(&mut self) {
        let len = self.visible_items().len();
        self.ui.cursor = logic::navigation::clamp_selection(self.ui.cursor, len);
    }

    /// Put the cursor on the item at `target`, or the first row
    pub(crate) fn focus_path(&mut self, target: &str) {
        let items = self.visible_items();
        self.ui.cursor = items
            .iter()
            .position(|item| item.path == target)
            .or(if items.is_empty() { None } else { Some(0) });
    }

    pub(crate) fn next_item(&mut self) {
        let len = self.visible_items().len();
        self.ui.cursor = logic::navigation::next_selection(self.ui.cursor, len);
    }

    pub(crate) fn previous_item(&mut self) {
        let len = self.visible_items().len();
        self.ui.cursor = logic::navigation::prev_selection(self.ui.cursor, len);
    }

    pub(crate) fn page_down(&mut self, rows: usize) {
        let len = self.visible_items().len();
        self.ui.cursor = logic::navigation::page_selection(self.ui.cursor, len, rows as isize);
    }

    pub(crate) fn page_up(&mut self, rows: usize) {
        let len = self.visible_items().len();
        self.ui.cursor = logic::navigation::page_selection(self.ui.cursor, len, -(rows as isize));
    }

    pub(crate) fn jump_to_first(&mut self) {
        let len = self.visible_items().len();
        self.ui.cursor = if len > 0 { Some(0) } else { None };
    }

    pub(crate) fn jump_to_last(&mut self) {
        let len = self.visible_items().len();
        self.ui.cursor = len.checked_sub(1);
    }

    /// Enter the container under the cursor, or report the opened leaf
    pub(crate) fn open_cursor_item(&mut self) {
        let Some(item) = self.cursor_item() else {
            return;
        };
        match self.explorer.open(&item.path) {
            Ok(OpenOutcome::Entered(_)) => self.jump_to_first(),
            Ok(OpenOutcome::Opened(summary)) => {
                self.ui.show_toast(format!("Opened {}", summary.name));
            }
            Err(e) => self.ui.show_error(e),
        }
    }

    /// Go to the parent and keep the cursor on the folder just left
    pub(crate) fn go_up(&mut self) {
        let left = self.explorer.current().to_string();
        if self.explorer.up().is_some() {
            self.focus_path(&left);
        }
    }

    pub(crate) fn go_back(&mut self) {
        let left = self.explorer.current().to_string();
        if self.explorer.back().is_some() {
            self.focus_path(&left);
        } else {
            self.ui.show_toast("Nothing to go back to".to_string());
        }
    }

    pub(crate) fn go_forward(&mut self) {
        let left = self.explorer.current().to_string();
        if self.explorer.forward().is_some() {
            self.focus_path(&left);
        } else {
            self.ui.show_toast("Nothing to go forward to".to_string());
        }
    }

    /// Jump to the root container
    pub(crate) fn go_home(&mut self) {
        if path::is_root(self.explorer.current()) {
            return;
        }
        if let Err(e) = self.explorer.navigate_to(path::ROOT) {
            self.ui.show_error(e);
            return;
        }
        self.jump_to_first();
    }
}
