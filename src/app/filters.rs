//! Search filter orchestration methods
//!
//! Methods for the incremental name filter on the current listing.

use log::debug;

use crate::App;

impl App {
    pub(crate) fn start_search(&mut self) {
        self.ui.search_mode = true;
    }

    /// Append a character to the query and re-filter
    pub(crate) fn search_push(&mut self, c: char) {
        let mut query = self.explorer.search_query().to_string();
        query.push(c);
        self.apply_search_filter(&query);
    }

    pub(crate) fn search_pop(&mut self) {
        let mut query = self.explorer.search_query().to_string();
        query.pop();
        self.apply_search_filter(&query);
    }

    /// Keep the filter, stop typing
    pub(crate) fn accept_search(&mut self) {
        self.ui.search_mode = false;
    }

    pub(crate) fn clear_search(&mut self) {
        self.ui.search_mode = false;
        self.apply_search_filter("");
    }

    fn apply_search_filter(&mut self, query: &str) {
        let focused = self.cursor_item().map(|item| item.path);
        self.explorer.set_search(query);
        debug!(
            "search '{}' in {}: {} match(es)",
            query,
            self.explorer.current(),
            self.visible_items().len()
        );
        match focused {
            Some(path) => self.focus_path(&path),
            None => self.clamp_cursor(),
        }
    }
}
