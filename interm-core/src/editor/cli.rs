use super::provider::EditorProvider;
use crate::error::BrowseError;
use std::{path::Path, process::Command};

pub const FALLBACK_EDITOR: &str = "nano";

/// Runs `<command> <path>` in the foreground. The command comes from config,
/// then `$EDITOR`, then nano.
pub struct CliEditorProvider {
    command: String,
}

impl CliEditorProvider {
    pub fn new(config_command: Option<&str>) -> Self {
        let command = config_command
            .map(str::to_string)
            .or_else(|| {
                std::env::var("EDITOR")
                    .ok()
                    .filter(|value| !value.trim().is_empty())
            })
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string());
        Self { command }
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl EditorProvider for CliEditorProvider {
    fn edit(&self, path: &Path) -> Result<(), BrowseError> {
        let status = Command::new(&self.command)
            .arg(path)
            .status()
            .map_err(|source| BrowseError::EditorSpawn {
                command: self.command.clone(),
                source,
            })?;
        // A user quitting their editor with a non-zero code is not a browser
        // failure; the listing gets refreshed either way.
        if !status.success() {
            log::debug!("editor '{}' exited with {status}", self.command);
        }
        Ok(())
    }
}
