use crate::{entry::EntryKind, error::BrowseError};
use std::path::Path;

/// Boundary to the filesystem. The state machine only ever sees the results;
/// the driver calls these between transitions.
///
/// `list` returns names in whatever order the OS enumerates them: no
/// sorting, no hidden-file filtering. Relative order across relists is not
/// guaranteed, which is why the cursor is clamped by index, never re-found
/// by name.
pub trait FsProvider: Send + Sync {
    fn list(&self, path: &Path) -> Result<Vec<String>, BrowseError>;

    /// Categorize `name` inside `dir` for row coloring. Metadata is read
    /// without following symlinks; when it cannot be read at all the
    /// conservative fallback is `RegularFile`.
    fn classify(&self, dir: &Path, name: &str) -> EntryKind;

    /// Create an empty regular file; never overwrites.
    fn create_file(&self, path: &Path) -> Result<(), BrowseError>;

    /// Remove a regular file. Directories are refused by the OS (`EISDIR`),
    /// which surfaces as an error rather than a recursive delete.
    fn remove_file(&self, path: &Path) -> Result<(), BrowseError>;
}
