//! Sorting orchestration methods
//!
//! Methods for changing the listing order:
//! - Cycling the sort column (resets to ascending)
//! - Reversing the direction
//! - Selection preservation across sorts

use arbor::SortSpec;

use crate::App;

impl App {
    /// Re-apply a sort change and keep the cursor on the same item
    fn resort(&mut self, change: impl FnOnce(&mut Self) -> SortSpec) {
        let focused = self.cursor_item().map(|item| item.path);
        let spec = change(self);
        match focused {
            Some(path) => self.focus_path(&path),
            None => self.clamp_cursor(),
        }
        self.ui.show_toast(format!(
            "Sort: {} {}",
            spec.column.as_str(),
            spec.direction.arrow()
        ));
    }

    pub(crate) fn cycle_sort_column(&mut self) {
        self.resort(|app| {
            let next = app.explorer.sort_spec().column.next();
            app.explorer.sort_by(next, None)
        });
    }

    pub(crate) fn toggle_sort_reverse(&mut self) {
        self.resort(|app| {
            let current = app.explorer.sort_spec().column;
            app.explorer.sort_by(current, None)
        });
    }
}
