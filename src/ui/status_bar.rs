use arbor::{ClipboardIntent, DisplayMode, SortSpec};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything the status bar reports about the current listing
pub struct StatusInfo<'a> {
    pub item_count: usize,
    pub selected_count: usize,
    pub sort: SortSpec,
    /// Staged clipboard (intent, number of paths)
    pub clipboard: Option<(ClipboardIntent, usize)>,
    pub display_mode: DisplayMode,
    /// Name of the item under the cursor
    pub cursor_item: Option<(&'a str, bool)>,
}

fn display_mode_label(mode: DisplayMode) -> &'static str {
    match mode {
        DisplayMode::Off => "Off",
        DisplayMode::TimestampOnly => "Date",
        DisplayMode::TimestampAndSize => "Date+Size",
    }
}

/// Build the status text (segments joined by " | ")
fn build_status_line(info: &StatusInfo) -> String {
    let mut metrics = vec![format!("{} items", info.item_count)];

    if info.selected_count > 0 {
        metrics.push(format!("Selected: {}", info.selected_count));
    }

    metrics.push(format!(
        "Sort: {}{}",
        info.sort.column.as_str(),
        info.sort.direction.arrow()
    ));

    if let Some((intent, count)) = info.clipboard {
        metrics.push(format!("Clipboard: {} {}", intent.as_str(), count));
    }

    metrics.push(format!("Info: {}", display_mode_label(info.display_mode)));

    if let Some((name, is_container)) = info.cursor_item {
        if is_container {
            metrics.push(format!("Cursor: {}/", name));
        } else {
            metrics.push(format!("Cursor: {}", name));
        }
    }

    metrics.join(" | ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, info: &StatusInfo) {
    let status_line = build_status_line(info);

    // Color the labels (before colons)
    let mut spans = vec![];
    for (idx, part) in status_line.split(" | ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" | "));
        }
        if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(
                label.to_string(),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
