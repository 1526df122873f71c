use anyhow::Result;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const APP_NAME: &str = "interm";

fn config_dir() -> PathBuf {
    // Use ~/.config on both Linux and macOS (not ~/Library/Application Support)
    #[cfg(unix)]
    {
        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME")
            && !xdg_config_home.is_empty()
        {
            return PathBuf::from(xdg_config_home).join(APP_NAME);
        }
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".config")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        dirs::config_dir()
            .expect("Unable to find config directory")
            .join(APP_NAME)
    }
}

fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Editor used for open-and-edit and create-then-edit.
    #[serde(default)]
    pub editor: EditorConfig,

    /// Color theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct EditorConfig {
    /// Editor command. Takes precedence over `$EDITOR`; when both are unset
    /// the browser falls back to nano. For example:
    /// ```toml
    /// [editor]
    /// command = "hx"
    /// ```
    pub command: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    /// Accent color for the selection bar and dialog borders (default: "cyan").
    #[serde(
        default = "ThemeConfig::default_accent",
        deserialize_with = "deserialize_color"
    )]
    pub accent: ThemeColor,
    /// Frame border color (default: "blue").
    #[serde(
        default = "ThemeConfig::default_border",
        deserialize_with = "deserialize_color"
    )]
    pub border: ThemeColor,
    /// Error color (default: "red").
    #[serde(
        default = "ThemeConfig::default_error",
        deserialize_with = "deserialize_color"
    )]
    pub error: ThemeColor,
    /// Success/notice color (default: "green").
    #[serde(
        default = "ThemeConfig::default_success",
        deserialize_with = "deserialize_color"
    )]
    pub success: ThemeColor,
    /// Muted/dim text color (default: "darkgray").
    #[serde(
        default = "ThemeConfig::default_muted",
        deserialize_with = "deserialize_color"
    )]
    pub muted: ThemeColor,
    /// Key hint color in the footer (default: "green").
    #[serde(
        default = "ThemeConfig::default_hint",
        deserialize_with = "deserialize_color"
    )]
    pub hint: ThemeColor,
    /// Foreground color for the highlighted row (default: "black").
    #[serde(
        default = "ThemeConfig::default_highlight_fg",
        deserialize_with = "deserialize_color"
    )]
    pub highlight_fg: ThemeColor,
    /// Row color for directories (default: "blue").
    #[serde(
        default = "ThemeConfig::default_directory",
        deserialize_with = "deserialize_color"
    )]
    pub directory: ThemeColor,
    /// Row color for symlinks (default: "magenta").
    #[serde(
        default = "ThemeConfig::default_symlink",
        deserialize_with = "deserialize_color"
    )]
    pub symlink: ThemeColor,
    /// Row color for executables (default: "red").
    #[serde(
        default = "ThemeConfig::default_executable",
        deserialize_with = "deserialize_color"
    )]
    pub executable: ThemeColor,
    /// Row color for regular files (default: "white").
    #[serde(
        default = "ThemeConfig::default_file",
        deserialize_with = "deserialize_color"
    )]
    pub file: ThemeColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: Self::default_accent(),
            border: Self::default_border(),
            error: Self::default_error(),
            success: Self::default_success(),
            muted: Self::default_muted(),
            hint: Self::default_hint(),
            highlight_fg: Self::default_highlight_fg(),
            directory: Self::default_directory(),
            symlink: Self::default_symlink(),
            executable: Self::default_executable(),
            file: Self::default_file(),
        }
    }
}

impl ThemeConfig {
    fn default_accent() -> ThemeColor {
        ThemeColor::Named(NamedColor::Cyan)
    }
    fn default_border() -> ThemeColor {
        ThemeColor::Named(NamedColor::Blue)
    }
    fn default_error() -> ThemeColor {
        ThemeColor::Named(NamedColor::Red)
    }
    fn default_success() -> ThemeColor {
        ThemeColor::Named(NamedColor::Green)
    }
    fn default_muted() -> ThemeColor {
        ThemeColor::Named(NamedColor::DarkGray)
    }
    fn default_hint() -> ThemeColor {
        ThemeColor::Named(NamedColor::Green)
    }
    fn default_highlight_fg() -> ThemeColor {
        ThemeColor::Named(NamedColor::Black)
    }
    fn default_directory() -> ThemeColor {
        ThemeColor::Named(NamedColor::Blue)
    }
    fn default_symlink() -> ThemeColor {
        ThemeColor::Named(NamedColor::Magenta)
    }
    fn default_executable() -> ThemeColor {
        ThemeColor::Named(NamedColor::Red)
    }
    fn default_file() -> ThemeColor {
        ThemeColor::Named(NamedColor::White)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Named(NamedColor),
    Rgb(u8, u8, u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
}

impl NamedColor {
    /// All named colours in alphabetical order, as accepted by the config parser.
    pub const fn all() -> &'static [(&'static str, NamedColor)] {
        &[
            ("black", NamedColor::Black),
            ("blue", NamedColor::Blue),
            ("cyan", NamedColor::Cyan),
            ("darkgray", NamedColor::DarkGray),
            ("gray", NamedColor::Gray),
            ("green", NamedColor::Green),
            ("magenta", NamedColor::Magenta),
            ("red", NamedColor::Red),
            ("white", NamedColor::White),
            ("yellow", NamedColor::Yellow),
        ]
    }
}

impl ThemeColor {
    pub fn parse(s: &str) -> Option<Self> {
        if let Some(hex) = s.strip_prefix('#')
            && hex.len() == 6
        {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Self::Rgb(r, g, b));
        }
        let lower = s.to_lowercase();
        // Handle aliases not in the canonical list
        let lookup = match lower.as_str() {
            "grey" => "gray",
            "darkgrey" => "darkgray",
            other => other,
        };
        NamedColor::all()
            .iter()
            .find(|(name, _)| *name == lookup)
            .map(|(_, color)| Self::Named(*color))
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<ThemeColor, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    ThemeColor::parse(&s).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid color '{s}': expected a named color (black, red, green, yellow, blue, magenta, cyan, white, gray/grey, darkgray) or hex (#rrggbb)"
        ))
    })
}

pub fn load_config_from_str(s: &str) -> Result<Config> {
    let config: Config = toml::from_str(s)?;
    Ok(config)
}

/// Load the config file. The browser is fully functional without one: a
/// missing file at the default location yields defaults, while an explicit
/// `--config` path that does not exist is an error.
pub fn load_config(config_override: Option<&Path>) -> Result<Config> {
    let config_file = match config_override {
        Some(path) => {
            anyhow::ensure!(
                path.exists(),
                "Config file not found at {}",
                path.display()
            );
            path.to_path_buf()
        }
        None => {
            let path = config_file();
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };
    let contents = fs::read_to_string(&config_file)?;
    let config: Config = toml::from_str(&contents)?;
    Ok(config)
}
