use super::provider::FsProvider;
use crate::{entry::EntryKind, error::BrowseError};
use std::{fs, path::Path};

pub struct OsFsProvider;

impl FsProvider for OsFsProvider {
    fn list(&self, path: &Path) -> Result<Vec<String>, BrowseError> {
        let read = fs::read_dir(path).map_err(|source| BrowseError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        // read_dir skips the dot entries that readdir(3) reports. The
        // browser needs ".." to ascend, so reinstate both up front.
        let mut names = vec![".".to_string(), "..".to_string()];
        for entry in read {
            let entry = entry.map_err(|source| BrowseError::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn classify(&self, dir: &Path, name: &str) -> EntryKind {
        let full = dir.join(name);
        let Ok(meta) = fs::symlink_metadata(&full) else {
            return EntryKind::RegularFile;
        };
        let file_type = meta.file_type();
        if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if is_executable(&meta) {
            EntryKind::Executable
        } else {
            EntryKind::RegularFile
        }
    }

    fn create_file(&self, path: &Path) -> Result<(), BrowseError> {
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(drop)
            .map_err(|source| BrowseError::from_io(path, source))
    }

    fn remove_file(&self, path: &Path) -> Result<(), BrowseError> {
        fs::remove_file(path).map_err(|source| BrowseError::from_io(path, source))
    }
}

// Owner-execute bit only, matching ls-style coloring for files the invoking
// user could plausibly run.
#[cfg(unix)]
fn is_executable(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o100 != 0
}

#[cfg(not(unix))]
fn is_executable(_meta: &fs::Metadata) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_list_includes_dot_entries_and_children() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("a.txt"), "a").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        let names = OsFsProvider.list(tmp.path()).unwrap();
        assert_eq!(names[0], ".");
        assert_eq!(names[1], "..");
        assert!(names.contains(&"a.txt".to_string()));
        assert!(names.contains(&"sub".to_string()));
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_list_missing_directory_is_read_error() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("missing");
        let err = OsFsProvider.list(&gone).unwrap_err();
        assert!(matches!(err, BrowseError::ReadDir { .. }));
    }

    #[test]
    fn test_classify_directory_and_file() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("plain.txt"), "x").unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();

        assert_eq!(
            OsFsProvider.classify(tmp.path(), "sub"),
            EntryKind::Directory
        );
        assert_eq!(
            OsFsProvider.classify(tmp.path(), "plain.txt"),
            EntryKind::RegularFile
        );
        assert_eq!(OsFsProvider.classify(tmp.path(), ".."), EntryKind::Directory);
    }

    #[test]
    fn test_classify_unreadable_falls_back_to_regular() {
        let tmp = tempdir().unwrap();
        assert_eq!(
            OsFsProvider.classify(tmp.path(), "does-not-exist"),
            EntryKind::RegularFile
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_classify_executable_and_symlink() {
        use std::os::unix::fs::{PermissionsExt, symlink};

        let tmp = tempdir().unwrap();
        let script = tmp.path().join("run.sh");
        fs::write(&script, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        symlink(&script, tmp.path().join("link")).unwrap();

        assert_eq!(
            OsFsProvider.classify(tmp.path(), "run.sh"),
            EntryKind::Executable
        );
        assert_eq!(OsFsProvider.classify(tmp.path(), "link"), EntryKind::Symlink);
    }

    #[test]
    fn test_create_file_refuses_collision() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("notes.txt");

        OsFsProvider.create_file(&path).unwrap();
        assert!(path.is_file());

        let err = OsFsProvider.create_file(&path).unwrap_err();
        assert!(matches!(err, BrowseError::AlreadyExists(_)));
    }

    #[test]
    fn test_remove_missing_file_is_not_found() {
        let tmp = tempdir().unwrap();
        let err = OsFsProvider
            .remove_file(&tmp.path().join("gone.txt"))
            .unwrap_err();
        assert!(matches!(err, BrowseError::NotFound(_)));
    }

    #[test]
    fn test_remove_directory_is_refused() {
        let tmp = tempdir().unwrap();
        let sub = tmp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        assert!(OsFsProvider.remove_file(&sub).is_err());
        assert!(sub.is_dir());
    }
}
