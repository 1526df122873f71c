use interm_core::config::{NamedColor, ThemeColor, ThemeConfig};
use interm_core::entry::EntryKind;
use ratatui::style::Color;

pub struct Theme {
    pub accent: Color,
    pub border: Color,
    pub error: Color,
    pub success: Color,
    pub muted: Color,
    pub hint: Color,
    pub highlight_fg: Color,
    pub directory: Color,
    pub symlink: Color,
    pub executable: Color,
    pub file: Color,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            accent: to_ratatui_color(config.accent),
            border: to_ratatui_color(config.border),
            error: to_ratatui_color(config.error),
            success: to_ratatui_color(config.success),
            muted: to_ratatui_color(config.muted),
            hint: to_ratatui_color(config.hint),
            highlight_fg: to_ratatui_color(config.highlight_fg),
            directory: to_ratatui_color(config.directory),
            symlink: to_ratatui_color(config.symlink),
            executable: to_ratatui_color(config.executable),
            file: to_ratatui_color(config.file),
        }
    }

    pub fn entry_color(&self, kind: EntryKind) -> Color {
        match kind {
            EntryKind::Directory => self.directory,
            EntryKind::Symlink => self.symlink,
            EntryKind::Executable => self.executable,
            EntryKind::RegularFile => self.file,
        }
    }
}

fn to_ratatui_color(color: ThemeColor) -> Color {
    match color {
        ThemeColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
        ThemeColor::Named(named) => match named {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::Red,
            NamedColor::Green => Color::Green,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::White => Color::White,
            NamedColor::Gray => Color::Gray,
            NamedColor::DarkGray => Color::DarkGray,
        },
    }
}
