use arbor::logic::path;
use ratatui::{widgets::ListState, Frame};

use super::{
    dialogs, file_list, layout,
    legend::{self, LegendContext},
    search,
    status_bar::{self, StatusInfo},
    system_bar::{self, NavAvailability},
    toast,
};
use crate::App;

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let explorer = &app.explorer;
    let items = app.visible_items();

    let search_visible = app.ui.search_mode || !explorer.search_query().is_empty();
    let legend_ctx = LegendContext {
        vim_mode: app.ui.vim_mode,
        search_mode: app.ui.search_mode,
        has_search_query: !explorer.search_query().is_empty(),
        has_selection: !explorer.selection().is_empty(),
        has_clipboard: !explorer.clipboard().is_empty(),
    };
    let legend_height = legend::calculate_legend_height(size.width, legend_ctx);
    let layout_info = layout::calculate_layout(size, legend_height, search_visible);

    // Location bar
    system_bar::render_system_bar(
        f,
        layout_info.system_area,
        explorer.current(),
        NavAvailability {
            back: explorer.can_go_back(),
            forward: explorer.can_go_forward(),
            up: explorer.can_go_up(),
        },
    );

    // Listing
    let title = if path::is_root(explorer.current()) {
        path::ROOT.to_string()
    } else {
        path::file_name(explorer.current())
            .unwrap_or(path::ROOT)
            .to_string()
    };
    let mut list_state = ListState::default();
    list_state.select(app.ui.cursor);
    file_list::render_file_list(
        f,
        layout_info.list_area,
        &items,
        |p| explorer.selection().contains(p),
        &mut list_state,
        &title,
        app.ui.display_mode,
    );

    if let Some(search_area) = layout_info.search_area {
        search::render_search_input(
            f,
            search_area,
            explorer.search_query(),
            app.ui.search_mode,
            items.len(),
        );
    }

    legend::render_legend(f, layout_info.legend_area, legend_ctx);

    let cursor_item = app.ui.cursor.and_then(|idx| items.get(idx));
    let status = StatusInfo {
        item_count: items.len(),
        selected_count: explorer.selection().len(),
        sort: explorer.sort_spec(),
        clipboard: explorer
            .clipboard()
            .pending()
            .map(|state| (state.intent, state.paths.len())),
        display_mode: app.ui.display_mode,
        cursor_item: cursor_item.map(|item| (item.name.as_str(), item.is_container)),
    };
    status_bar::render_status_bar(f, layout_info.status_area, &status);

    // Dialogs
    if let Some(prompt) = &app.ui.prompt {
        dialogs::render_prompt(f, prompt);
    }
    if let Some(targets) = &app.ui.confirm_delete {
        dialogs::render_delete_confirmation(f, targets);
    }
    if let Some(props) = &app.ui.properties {
        dialogs::render_properties(f, props);
    }

    if let Some((message, _timestamp)) = &app.ui.toast_message {
        toast::render_toast(f, size, message);
    }

    // Paging keys use the height of the last drawn frame
    app.ui.page_height = layout::list_rows(layout_info.list_area).max(1);
}
