use std::path::PathBuf;

/// A side effect requested by a transition. The state machine performs no
/// I/O itself; the driver executes commands in order and relists the
/// directory afterwards, so the listing stays authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the working directory with `path` once it lists successfully.
    EnterDirectory(PathBuf),
    /// Suspend the screen and run the configured editor on `path`.
    SpawnEditor(PathBuf),
    /// Create an empty regular file. Fails if the name is already taken.
    CreateFile(PathBuf),
    /// Remove a regular file.
    DeleteFile(PathBuf),
    /// Leave the main loop.
    Quit,
}
