use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Toast placement inside `area`: centered horizontally, just below the location bar
fn toast_rect(area: Rect, message: &str) -> Rect {
    let max_width = (area.width as usize).min(80);
    let width = (message.width() + 6).min(max_width) as u16;
    let height = 4.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + 3.min(area.height.saturating_sub(height)),
        width,
        height,
    }
}

/// Render a toast notification
///
/// Messages starting with "Error:" get the red theme.
pub fn render_toast(f: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_rect(area, message);
    f.render_widget(Clear, toast_area);

    let is_error = message.starts_with("Error:");
    let (icon, color) = if is_error {
        ("✗ ", Color::Red)
    } else {
        ("✓ ", Color::Green)
    };

    let toast_line = Line::from(vec![
        Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(message.to_string()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let toast = Paragraph::new(vec![toast_line])
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(toast, toast_area);
}
