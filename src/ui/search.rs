//! Search Input UI
//!
//! Renders the search input box with query, match count, and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title of the search box for its current state
fn search_title(active: bool, query: &str, match_count: usize) -> String {
    if active {
        format!(" Search ({} matches) - Enter to keep, Esc to cancel ", match_count)
    } else if !query.is_empty() {
        format!(" Search ({} matches) - Esc to clear ", match_count)
    } else {
        " Search (/) ".to_string()
    }
}

/// Render search input box above the legend
///
/// # Arguments
/// - `query`: Current filter text (glob wildcards allowed)
/// - `active`: Whether input is actively receiving keystrokes
/// - `match_count`: Items left in the filtered listing
pub fn render_search_input(f: &mut Frame, area: Rect, query: &str, active: bool, match_count: usize) {
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(search_title(active, query, match_count))
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Match: "),
            Span::raw(query.to_string()),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    f.render_widget(Paragraph::new(vec![input_line]).block(block), area);
}
