use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::utils::truncate_path_left;

/// Which history moves are currently possible
#[derive(Debug, Clone, Copy, Default)]
pub struct NavAvailability {
    pub back: bool,
    pub forward: bool,
    pub up: bool,
}

/// Arrow indicator, dimmed when the move is unavailable
fn nav_span(symbol: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(symbol, Style::default().fg(Color::Yellow))
    } else {
        Span::styled(symbol, Style::default().fg(Color::DarkGray))
    }
}

/// Build the location line: nav indicators followed by the current path
fn build_location_spans(path: &str, nav: NavAvailability, width: u16) -> Vec<Span<'static>> {
    let mut spans = vec![
        nav_span("◀", nav.back),
        Span::raw(" "),
        nav_span("▶", nav.forward),
        Span::raw(" "),
        nav_span("▲", nav.up),
        Span::raw(" | "),
        Span::styled("Location:", Style::default().fg(Color::Yellow)),
        Span::raw(" "),
    ];

    // borders(2) + indicators and label
    let used: usize = spans.iter().map(|s| s.width()).sum();
    let max_path = (width as usize).saturating_sub(2 + used);
    spans.push(Span::styled(
        truncate_path_left(path, max_path),
        Style::default().add_modifier(Modifier::BOLD),
    ));
    spans
}

/// Render the location bar at the top of the screen
pub fn render_system_bar(f: &mut Frame, area: Rect, path: &str, nav: NavAvailability) {
    let line = Line::from(build_location_spans(path, nav, area.width));

    let widget = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title("arbor"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_location_shows_full_path_when_it_fits() {
        let spans = build_location_spans("/Documents", NavAvailability::default(), 80);
        assert!(text(&spans).ends_with("Location: /Documents"));
    }

    #[test]
    fn test_location_truncates_long_paths_from_left() {
        let path = "/Documents/Projects/2024/Quarterly/Reports";
        let spans = build_location_spans(path, NavAvailability::default(), 30);
        let rendered = text(&spans);
        assert!(rendered.contains('…'));
        assert!(rendered.ends_with("Reports"));
    }
}
