mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use interm_core::{
    config,
    editor::{CliEditorProvider, EditorProvider},
    fs::{FsProvider, OsFsProvider},
    state::BrowserState,
};
use interm_tui::Theme;
use std::{path::PathBuf, sync::Arc};

#[derive(Parser)]
#[command(version, about = "Full-screen terminal directory browser")]
struct Cli {
    /// Directory to open (defaults to the current working directory)
    path: Option<PathBuf>,

    /// Override path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Level for the log file (off, error, warn, info, debug, trace)
    #[arg(long, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: log::LevelFilter,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level)?;
    let config = config::load_config(cli.config.as_deref())?;

    let start_dir = match cli.path {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    // dunce keeps Windows paths free of the \\?\ prefix in the header line
    let start_dir = dunce::canonicalize(&start_dir)
        .with_context(|| format!("cannot open {}", start_dir.display()))?;
    anyhow::ensure!(
        start_dir.is_dir(),
        "{} is not a directory",
        start_dir.display()
    );
    log::info!("browsing {}", start_dir.display());

    let fs: Arc<dyn FsProvider> = Arc::new(OsFsProvider);
    let editor: Arc<dyn EditorProvider> =
        Arc::new(CliEditorProvider::new(config.editor.command.as_deref()));
    let theme = Theme::from_config(&config.theme);
    let mut state = BrowserState::new(start_dir);

    // The terminal session is scoped here: acquired once, released on every
    // exit path before the process ends.
    let mut terminal = ratatui::init();
    let result = interm_tui::run(&mut terminal, &mut state, &fs, &editor, &theme);
    ratatui::restore();
    result
}
