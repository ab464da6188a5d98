// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (bars, listing, search, legend)
// - render: Main orchestration function that coordinates all rendering
// - system_bar: Renders the top location bar (path, back/forward/up)
// - file_list: Renders the listing of the current container
// - legend: Renders hotkey legend
// - search: Renders search input box with query and match count
// - status_bar: Renders bottom status bar (counts, sort, clipboard)
// - dialogs: Renders the text prompt, delete confirmation and properties
// - toast: Renders toast notifications (brief pop-up messages)

pub mod dialogs;
pub mod file_list;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod system_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
