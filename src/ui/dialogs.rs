use arbor::logic::path;
use arbor::logic::properties::Properties;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::state::Prompt;

/// Centered rectangle of the given size, clamped to the frame
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Render the single-line text prompt (new folder / rename)
pub fn render_prompt(f: &mut Frame, prompt: &Prompt) {
    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let lines = vec![
        Line::from(vec![
            Span::raw("Name: "),
            Span::raw(prompt.input.clone()),
            Span::styled("█", cursor_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter to confirm, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let prompt_area = centered(f.area(), 50, 5);
    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(prompt.title().to_string())
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black));

    f.render_widget(Clear, prompt_area);
    f.render_widget(widget, prompt_area);
}

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, targets: &[String]) {
    let names = targets
        .iter()
        .take(5)
        .map(|target| format!("  - {}", path::file_name(target).unwrap_or(target.as_str())))
        .collect::<Vec<_>>()
        .join("\n");

    let more_text = if targets.len() > 5 {
        format!("\n  ... and {} more", targets.len() - 5)
    } else {
        String::new()
    };

    let prompt_text = format!(
        "Delete {} item(s)?\n\n{}{}\n\n\
        Folders are deleted with everything inside them.\n\n\
        Continue? (y/n)",
        targets.len(),
        names,
        more_text
    );

    let shown = targets.len().min(5) as u16 + u16::from(targets.len() > 5);
    let prompt_area = centered(f.area(), 50, 9 + shown);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Label/value row for the properties popup
fn field(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(Color::Yellow)),
        Span::raw(value),
    ])
}

fn properties_lines(props: &Properties) -> Vec<Line<'static>> {
    match props {
        Properties::Single(item) => {
            let mut lines = vec![
                field("Name:", item.name.clone()),
                field("Type:", item.type_label.clone()),
                field("Size:", item.size.clone()),
                field("Location:", item.location.clone()),
                field("Modified:", item.modified.clone()),
            ];
            if let Some(items) = item.items {
                lines.push(field("Contains:", format!("{} item(s)", items)));
            }
            lines
        }
        Properties::Multiple(selection) => {
            let mut lines = vec![
                field("Selected:", format!("{} item(s)", selection.count)),
                field("Total:", selection.total_display.clone()),
                Line::from(""),
            ];
            for (label, count) in &selection.by_type {
                lines.push(field("", format!("{} × {}", count, label)));
            }
            lines
        }
    }
}

/// Render the properties popup
pub fn render_properties(f: &mut Frame, props: &Properties) {
    let lines = properties_lines(props);
    let height = lines.len() as u16 + 4;
    let popup_area = centered(f.area(), 60, height);

    let mut lines = lines;
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Properties")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(popup, popup_area);
}
