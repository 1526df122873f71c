use std::path::PathBuf;

const APP_NAME: &str = "interm";
const LOG_FILE_NAME: &str = "interm.log";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log file under the user's cache directory, honouring `$XDG_CACHE_HOME`
/// like the rest of the XDG surface.
pub fn log_file_path() -> PathBuf {
    cache_dir().join(LOG_FILE_NAME)
}

fn cache_dir() -> PathBuf {
    #[cfg(unix)]
    {
        if let Ok(xdg_cache_home) = std::env::var("XDG_CACHE_HOME")
            && !xdg_cache_home.is_empty()
        {
            return PathBuf::from(xdg_cache_home).join(APP_NAME);
        }
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".cache")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        if let Some(cache) = dirs::cache_dir() {
            cache.join(APP_NAME)
        } else {
            std::env::temp_dir().join(APP_NAME)
        }
    }
}

/// The TUI owns the tty, so logs only ever go to a file.
pub fn init(level: log::LevelFilter) -> anyhow::Result<()> {
    let log_file = log_file_path();
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    simple_log::file(log_file.to_string_lossy().into_owned(), level, 10, 10)
        .map_err(|e| anyhow::anyhow!(e))?;
    log::info!("interm logging initialised (level={level})");
    Ok(())
}
