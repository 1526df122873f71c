use crate::theme::Theme;
use interm_core::state::{BrowserState, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn draw(f: &mut Frame, state: &BrowserState, theme: &Theme) {
    let Mode::NamingFile(input) = &state.mode else {
        return;
    };

    let popup = super::centered_rect(50, 30, f.area());
    let area = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(popup)[0];
    f.render_widget(Clear, area);

    let text = if input.text.is_empty() {
        Line::from(Span::styled(
            "File name (with extension)...",
            Style::default().fg(theme.muted),
        ))
    } else {
        Line::from(input.text.as_str())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New file — enter to create, esc to cancel ")
        .border_style(Style::default().fg(theme.accent));
    f.render_widget(Paragraph::new(text).block(block), area);

    // Place the terminal cursor inside the input, after the typed prefix
    let prefix_cols = input.text[..input.cursor.min(input.text.len())].width();
    let x = area
        .x
        .saturating_add(1)
        .saturating_add(u16::try_from(prefix_cols).unwrap_or(u16::MAX))
        .min(area.x + area.width.saturating_sub(2));
    f.set_cursor_position(Position::new(x, area.y + 1));
}
