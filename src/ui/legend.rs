use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Legend content depends on these bits of state
#[derive(Debug, Clone, Copy, Default)]
pub struct LegendContext {
    pub vim_mode: bool,
    pub search_mode: bool,
    pub has_search_query: bool,
    pub has_selection: bool,
    pub has_clipboard: bool,
}

fn key(spans: &mut Vec<Span<'static>>, keys: &'static str, action: &'static str) {
    spans.push(Span::styled(keys, Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(action));
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(ctx: LegendContext) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    if ctx.search_mode {
        key(&mut hotkey_spans, "Enter", ":Keep Filter  ");
        key(&mut hotkey_spans, "Esc", ":Exit Search  ");
        key(&mut hotkey_spans, "*?", ":Wildcards");
        return hotkey_spans;
    }

    // Navigation keys (different for vim mode)
    if ctx.vim_mode {
        key(&mut hotkey_spans, "hjkl", ":Nav  ");
        key(&mut hotkey_spans, "gg/G", ":First/Last  ");
        key(&mut hotkey_spans, "^d/^u", ":½Page  ");
    } else {
        key(&mut hotkey_spans, "↑/↓", ":Nav  ");
        key(&mut hotkey_spans, "Enter", ":Open  ");
        key(&mut hotkey_spans, "←", ":Up  ");
    }
    key(&mut hotkey_spans, "Alt-←/→", ":Back/Fwd  ");

    key(&mut hotkey_spans, "Space", ":Select  ");
    key(&mut hotkey_spans, "a", ":All  ");
    key(&mut hotkey_spans, "n", ":New Folder  ");
    key(&mut hotkey_spans, "r", ":Rename  ");
    key(&mut hotkey_spans, "d", ":Delete  ");
    key(&mut hotkey_spans, "c/x", ":Copy/Cut  ");
    if ctx.has_clipboard {
        key(&mut hotkey_spans, "v", ":Paste  ");
    }

    // Esc is contextual: clears the filter first, then the selection
    if ctx.has_search_query {
        key(&mut hotkey_spans, "Esc", ":Clear Search  ");
    } else {
        key(&mut hotkey_spans, "/", ":Search  ");
        if ctx.has_selection {
            key(&mut hotkey_spans, "Esc", ":Deselect  ");
        }
    }

    key(&mut hotkey_spans, "s", ":Sort  ");
    key(&mut hotkey_spans, "S", ":Reverse  ");
    key(&mut hotkey_spans, "t", ":Info  ");
    key(&mut hotkey_spans, "i", ":Properties  ");
    key(&mut hotkey_spans, "q", ":Quit");

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, ctx: LegendContext) {
    let legend = Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false });
    f.render_widget(legend, area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(terminal_width: u16, ctx: LegendContext) -> u16 {
    // Count lines WITHOUT the block; line_count() miscounts with borders attached
    let paragraph_for_counting =
        Paragraph::new(vec![Line::from(build_hotkey_spans(ctx))]).wrap(Wrap { trim: false });

    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_legend_hides_paste_without_clipboard() {
        let text = spans_to_text(&build_hotkey_spans(LegendContext::default()));
        assert!(!text.contains("Paste"));

        let ctx = LegendContext {
            has_clipboard: true,
            ..Default::default()
        };
        assert!(spans_to_text(&build_hotkey_spans(ctx)).contains("v:Paste"));
    }

    #[test]
    fn test_legend_search_mode_is_focused() {
        let ctx = LegendContext {
            search_mode: true,
            ..Default::default()
        };
        let text = spans_to_text(&build_hotkey_spans(ctx));
        assert!(text.contains("Esc:Exit Search"));
        assert!(!text.contains("Rename"));
    }

    #[test]
    fn test_legend_escape_clears_search_before_selection() {
        let ctx = LegendContext {
            has_search_query: true,
            has_selection: true,
            ..Default::default()
        };
        let text = spans_to_text(&build_hotkey_spans(ctx));
        assert!(text.contains("Esc:Clear Search"));
        assert!(!text.contains("Deselect"));
    }

    #[test]
    fn test_legend_vim_keys() {
        let ctx = LegendContext {
            vim_mode: true,
            ..Default::default()
        };
        let text = spans_to_text(&build_hotkey_spans(ctx));
        assert!(text.contains("hjkl:Nav"));
        assert!(text.contains("gg/G"));
    }

    #[test]
    fn test_legend_height_grows_when_narrow() {
        let ctx = LegendContext::default();
        assert!(calculate_legend_height(40, ctx) > calculate_legend_height(400, ctx));
        assert_eq!(calculate_legend_height(1000, ctx), 3);
    }
}
