use arbor::{DisplayMode, NodeSummary};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Scrollbar, ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

const INFO_COLOR: Color = Color::Rgb(120, 120, 120);

/// Info column for one row, following the display mode
///
/// Containers never show a size.
fn info_string(item: &NodeSummary, display_mode: DisplayMode) -> String {
    match display_mode {
        DisplayMode::Off => String::new(),
        DisplayMode::TimestampOnly => item.modified_display.clone(),
        DisplayMode::TimestampAndSize => {
            if item.is_container || item.size_display.is_empty() {
                item.modified_display.clone()
            } else {
                format!("{} {}", item.size_display, item.modified_display)
            }
        }
    }
}

/// Shorter info for narrow panels, or empty when nothing fits
///
/// Time is preferred over date once the full timestamp no longer fits.
fn truncated_info(item: &NodeSummary, display_mode: DisplayMode, space_left: usize) -> String {
    let stamp = item.modified_display.as_str();
    let has_time = stamp.len() >= 16;

    if display_mode == DisplayMode::TimestampAndSize
        && !item.is_container
        && !item.size_display.is_empty()
    {
        let with_size = if has_time {
            format!("{} {}", item.size_display, &stamp[11..16])
        } else {
            item.size_display.clone()
        };
        if with_size.width() <= space_left {
            return with_size;
        }
        if space_left >= 5 && has_time {
            return stamp[11..16].to_string();
        }
        return String::new();
    }

    if space_left >= 16 {
        stamp.to_string()
    } else if space_left >= 11 && has_time {
        // "MM-DD HH:MM"
        stamp[5..16].to_string()
    } else if space_left >= 5 && has_time {
        stamp[11..16].to_string()
    } else {
        String::new()
    }
}

/// Build a list item with selection marker, name, type and optional timestamp/size info
fn build_list_item(
    item: &NodeSummary,
    selected: bool,
    panel_width: u16,
    display_mode: DisplayMode,
) -> ListItem<'static> {
    let marker = if selected { "● " } else { "  " };
    let name = if item.is_container {
        format!("{}/", item.name)
    } else {
        item.name.clone()
    };
    let name_style = if item.is_container {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let marker_style = Style::default().fg(Color::Yellow);
    let type_tag = format!("  {}", item.type_label);

    // Available space: panel_width - borders(2) - highlight(2) - padding(2)
    let available_width = panel_width.saturating_sub(6) as usize;
    let spacing = 2;
    let name_width = marker.width() + name.width();
    let mut label_width = name_width + type_tag.width();
    let mut show_type = true;
    if label_width + spacing > available_width {
        show_type = false;
        label_width = name_width;
    }

    let mut line_spans = vec![
        Span::styled(marker, marker_style),
        Span::styled(name, name_style),
    ];
    if show_type {
        line_spans.push(Span::styled(type_tag, Style::default().fg(Color::DarkGray)));
    }

    let info = info_string(item, display_mode);
    if info.is_empty() {
        return ListItem::new(Line::from(line_spans));
    }

    let info = if label_width + spacing + info.width() <= available_width {
        info
    } else {
        truncated_info(
            item,
            display_mode,
            available_width.saturating_sub(label_width + spacing),
        )
    };

    if !info.is_empty() {
        let padding = available_width.saturating_sub(label_width + info.width());
        line_spans.push(Span::raw(" ".repeat(padding)));
        line_spans.push(Span::styled(info, Style::default().fg(INFO_COLOR)));
    }
    ListItem::new(Line::from(line_spans))
}

/// Render the listing of the current container
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    items: &[NodeSummary],
    is_selected: impl Fn(&str) -> bool,
    state: &mut ListState,
    title: &str,
    display_mode: DisplayMode,
) {
    let panel_width = area.width;

    let list_items: Vec<ListItem> = if items.is_empty() {
        vec![ListItem::new(Span::styled(
            "  (empty)",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        items
            .iter()
            .map(|item| build_list_item(item, is_selected(&item.path), panel_width, display_mode))
            .collect()
    };

    let list = List::new(list_items)
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, state);

    // Render scrollbar if list is longer than visible area
    let viewport_height = area.height.saturating_sub(2) as usize;
    let total_items = items.len();

    if total_items > viewport_height {
        let offset = state.offset();
        let mut scrollbar_state =
            ScrollbarState::new(total_items.saturating_sub(viewport_height)).position(offset);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█");

        f.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
            &mut scrollbar_state,
        );
    }
}
