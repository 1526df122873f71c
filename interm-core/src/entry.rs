use crate::error::BrowseError;

/// Longest file name accepted by the new-file prompt, in bytes. This is the
/// usual filesystem limit, enforced here as a validation rule rather than
/// left for the OS to reject.
pub const MAX_NAME_BYTES: usize = 255;

/// Display category for one entry, derived from lstat-style metadata.
///
/// `Executable` is still a regular file in the filesystem sense; the split
/// exists for row coloring. Symlinks are reported as their own category
/// (metadata is read without following the link).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Symlink,
    Executable,
    RegularFile,
}

/// One row in the listing: a bare name (never a path) plus its category.
///
/// Entry views are snapshots. They are never patched in place; any operation
/// that can change the directory's contents is followed by a full relist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub name: String,
    pub kind: EntryKind,
}

impl EntryView {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Regular file in the filesystem sense. Edit and delete are only
    /// offered for these.
    pub fn is_regular(&self) -> bool {
        matches!(self.kind, EntryKind::Executable | EntryKind::RegularFile)
    }
}

/// Check a candidate name from the new-file prompt before any filesystem
/// call: non-empty, no path separators, within the byte limit.
pub fn validate_file_name(name: &str) -> Result<(), BrowseError> {
    if name.is_empty() {
        return Err(BrowseError::InvalidName("name is empty".to_string()));
    }
    if name.chars().any(std::path::is_separator) {
        return Err(BrowseError::InvalidName(format!(
            "'{name}' contains a path separator"
        )));
    }
    if name.len() > MAX_NAME_BYTES {
        return Err(BrowseError::InvalidName(format!(
            "name is longer than {MAX_NAME_BYTES} bytes"
        )));
    }
    Ok(())
}
