//! UI State
//!
//! Everything the terminal front end tracks on top of the explorer:
//! preferences, the list cursor, prompts and popups, and the toast.

use std::time::Instant;

use arbor::logic::properties::Properties;
use arbor::DisplayMode;

/// What a text prompt will do once confirmed
#[derive(Clone, Debug, PartialEq)]
pub enum PromptKind {
    /// Create a folder in the current container
    NewFolder,
    /// Rename the item at this path
    Rename { path: String },
}

/// Single-line text input dialog
#[derive(Clone, Debug)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

impl Prompt {
    pub fn title(&self) -> &str {
        match self.kind {
            PromptKind::NewFolder => "New Folder",
            PromptKind::Rename { .. } => "Rename",
        }
    }
}

/// Vim command state for the 'gg' double-key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG,
}

#[derive(Clone, Debug)]
pub struct UiState {
    // ============================================
    // PREFERENCES
    // ============================================
    /// Display mode for item info
    pub display_mode: DisplayMode,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    pub vim_command_state: VimCommandState,

    // ============================================
    // LIST
    // ============================================
    /// Row under the cursor in the displayed listing
    pub cursor: Option<usize>,

    /// Rows that fit in the listing panel (updated each frame)
    pub page_height: usize,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Text prompt for new folder / rename
    pub prompt: Option<Prompt>,

    /// Paths waiting for delete confirmation
    pub confirm_delete: Option<Vec<String>>,

    /// Properties popup
    pub properties: Option<Properties>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // SEARCH
    // ============================================
    /// Whether search input is active (receiving keystrokes)
    pub search_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiState {
    pub fn new(vim_mode: bool, display_mode: DisplayMode) -> Self {
        Self {
            display_mode,
            vim_mode,
            vim_command_state: VimCommandState::None,
            cursor: None,
            page_height: 20,
            prompt: None,
            confirm_delete: None,
            properties: None,
            toast_message: None,
            search_mode: false,
            should_quit: false,
        }
    }

    /// Close all modal dialogs
    pub fn close_all_modals(&mut self) {
        self.prompt = None;
        self.confirm_delete = None;
        self.properties = None;
        self.search_mode = false;
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Toast styled as an error
    pub fn show_error(&mut self, message: impl std::fmt::Display) {
        self.show_toast(format!("Error: {}", message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_state_creation() {
        let ui = UiState::new(true, DisplayMode::Off);
        assert!(ui.vim_mode);
        assert!(ui.prompt.is_none());
        assert!(!ui.should_quit);
    }

    #[test]
    fn test_close_all_modals() {
        let mut ui = UiState::new(false, DisplayMode::default());
        ui.confirm_delete = Some(vec!["/a".to_string()]);
        ui.search_mode = true;
        ui.close_all_modals();
        assert!(ui.confirm_delete.is_none());
        assert!(!ui.search_mode);
    }

    #[test]
    fn test_error_toast_prefix() {
        let mut ui = UiState::new(false, DisplayMode::default());
        ui.show_error("no such item: /x");
        let (message, _) = ui.toast_message.as_ref().unwrap();
        assert_eq!(message, "Error: no such item: /x");
    }
}
