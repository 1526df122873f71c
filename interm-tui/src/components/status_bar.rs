use crate::theme::Theme;
use interm_core::state::{BrowserState, StatusKind};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

pub fn draw(f: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    if let Some(status) = &state.status {
        let (color, prefix) = match status.kind {
            StatusKind::Error => (theme.error, " Error: "),
            StatusKind::Info => (theme.success, " "),
        };
        let line = Paragraph::new(Span::styled(
            format!("{prefix}{}", status.text),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(line, area);
    }
}
