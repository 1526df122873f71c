use std::{
    fmt, io,
    path::{Path, PathBuf},
};

/// Everything that can go wrong while browsing. All variants are recoverable:
/// the driver turns them into a transient status line and stays in the loop.
/// Only terminal setup/teardown failures (outside this type) are fatal.
#[derive(Debug)]
pub enum BrowseError {
    /// Directory could not be enumerated. Callers degrade to an empty
    /// listing plus a warning rather than aborting.
    ReadDir { path: PathBuf, source: io::Error },
    /// Target vanished between the listing and the operation.
    NotFound(PathBuf),
    /// Create collided with an existing name; nothing is overwritten.
    AlreadyExists(PathBuf),
    PermissionDenied(PathBuf),
    /// Rejected before touching the filesystem.
    InvalidName(String),
    /// The editor binary could not be started.
    EditorSpawn { command: String, source: io::Error },
    /// Any other filesystem failure.
    Io { path: PathBuf, source: io::Error },
}

impl BrowseError {
    /// Map an `io::Error` for an operation on `path` into the taxonomy.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

impl fmt::Display for BrowseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadDir { path, source } => {
                write!(f, "cannot read directory {}: {source}", path.display())
            }
            Self::NotFound(path) => write!(f, "{} no longer exists", path.display()),
            Self::AlreadyExists(path) => write!(f, "{} already exists", path.display()),
            Self::PermissionDenied(path) => {
                write!(f, "permission denied for {}", path.display())
            }
            Self::InvalidName(reason) => write!(f, "invalid file name: {reason}"),
            Self::EditorSpawn { command, source } => {
                write!(f, "failed to run editor '{command}': {source}")
            }
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl std::error::Error for BrowseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ReadDir { source, .. }
            | Self::EditorSpawn { source, .. }
            | Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_mapping() {
        let path = Path::new("/tmp/x");
        assert!(matches!(
            BrowseError::from_io(path, io::Error::from(io::ErrorKind::NotFound)),
            BrowseError::NotFound(_)
        ));
        assert!(matches!(
            BrowseError::from_io(path, io::Error::from(io::ErrorKind::AlreadyExists)),
            BrowseError::AlreadyExists(_)
        ));
        assert!(matches!(
            BrowseError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied)),
            BrowseError::PermissionDenied(_)
        ));
        assert!(matches!(
            BrowseError::from_io(path, io::Error::other("boom")),
            BrowseError::Io { .. }
        ));
    }

    #[test]
    fn test_display_includes_path() {
        let err = BrowseError::NotFound(PathBuf::from("/tmp/gone.txt"));
        assert!(err.to_string().contains("/tmp/gone.txt"));
        assert!(err.to_string().contains("no longer exists"));
    }
}
