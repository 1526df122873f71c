use crate::theme::Theme;
use interm_core::state::BrowserState;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthChar;

/// Width consumed left of each row by the highlight symbol
const HIGHLIGHT_SYMBOL: &str = "▸ ";

pub fn draw(f: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" interm — {} ", state.cwd.display()))
        .title_bottom(format!(" {} entries ", state.entries.len()))
        .border_style(Style::default().fg(theme.border));

    let name_width = usize::from(chunks[0].width.saturating_sub(2))
        .saturating_sub(HIGHLIGHT_SYMBOL.chars().count());
    let items: Vec<ListItem> = state
        .entries
        .iter()
        .map(|entry| {
            let name = truncate_to_width(&entry.name, name_width);
            ListItem::new(Span::styled(
                name,
                Style::default().fg(theme.entry_color(entry.kind)),
            ))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(theme.accent)
                .fg(theme.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(HIGHLIGHT_SYMBOL);

    let mut list_state = ListState::default();
    if !state.entries.is_empty() {
        list_state.select(Some(state.cursor));
    }
    // The state machine owns the window; keep ratatui from second-guessing it
    *list_state.offset_mut() = state.scroll_offset;
    f.render_stateful_widget(list, chunks[0], &mut list_state);

    let hints = Line::from(vec![
        Span::styled(
            " ↑/↓ or w/s",
            Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" move  ", Style::default().fg(theme.muted)),
        Span::styled(
            "enter",
            Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" open  ", Style::default().fg(theme.muted)),
        Span::styled(
            "e",
            Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" edit  ", Style::default().fg(theme.muted)),
        Span::styled(
            "n",
            Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" new  ", Style::default().fg(theme.muted)),
        Span::styled(
            "d",
            Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" delete  ", Style::default().fg(theme.muted)),
        Span::styled(
            "q",
            Style::default().fg(theme.hint).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" quit", Style::default().fg(theme.muted)),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[1]);
}

/// Truncate (never wrap) a name to `max_width` terminal columns, marking the
/// cut with an ellipsis.
fn truncate_to_width(name: &str, max_width: usize) -> String {
    let full_width: usize = name.chars().filter_map(UnicodeWidthChar::width).sum();
    if full_width <= max_width {
        return name.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in name.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_name_unchanged() {
        assert_eq!(truncate_to_width("readme.txt", 20), "readme.txt");
        assert_eq!(truncate_to_width("readme.txt", 10), "readme.txt");
    }

    #[test]
    fn test_truncate_long_name_gets_ellipsis() {
        assert_eq!(truncate_to_width("a-very-long-name.txt", 8), "a-very-…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }

    #[test]
    fn test_truncate_wide_chars_counted_by_columns() {
        // CJK characters are two columns each
        let truncated = truncate_to_width("日本語のファイル名", 7);
        let width: usize = truncated.chars().filter_map(UnicodeWidthChar::width).sum();
        assert!(width <= 7, "width was {width} for {truncated:?}");
        assert!(truncated.ends_with('…'));
    }
}
