use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top location bar area
    pub system_area: Rect,
    /// Listing of the current container
    pub list_area: Rect,
    /// Search input area (if visible)
    pub search_area: Option<Rect>,
    /// Hotkey legend area (full width)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect, legend_height: u16, search_visible: bool) -> LayoutInfo {
    let search_height = if search_visible { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Location bar (top border, text, bottom border)
            Constraint::Min(3),                // Listing
            Constraint::Length(search_height), // Search input (hidden when 0)
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        system_area: chunks[0],
        list_area: chunks[1],
        search_area: if search_visible { Some(chunks[2]) } else { None },
        legend_area: chunks[3],
        status_area: chunks[4],
    }
}

/// Rows of items visible inside a bordered list area
pub fn list_rows(list_area: Rect) -> usize {
    list_area.height.saturating_sub(2) as usize
}
