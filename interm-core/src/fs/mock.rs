use super::provider::FsProvider;
use crate::{entry::EntryKind, error::BrowseError};
use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};

/// Scriptable in-memory filesystem for state-machine and TUI tests.
///
/// A path with a listing of its own is a directory; everything else defaults
/// to a regular file unless `kinds` says otherwise. Create and remove mutate
/// the parent listing, so relists observe the change like they would on a
/// real filesystem. Scripted results (taken once) let tests inject failures.
#[derive(Default)]
pub struct MockFsProvider {
    pub listings: Mutex<HashMap<PathBuf, Vec<String>>>,
    pub kinds: Mutex<HashMap<PathBuf, EntryKind>>,
    pub create_file_result: Mutex<Option<Result<(), BrowseError>>>,
    pub remove_file_result: Mutex<Option<Result<(), BrowseError>>>,
    pub created: Mutex<Vec<PathBuf>>,
    pub removed: Mutex<Vec<PathBuf>>,
}

impl MockFsProvider {
    pub fn with_dir(path: impl Into<PathBuf>, names: &[&str]) -> Self {
        let mock = Self::default();
        mock.insert_dir(path, names);
        mock
    }

    pub fn insert_dir(&self, path: impl Into<PathBuf>, names: &[&str]) {
        self.listings
            .lock()
            .unwrap()
            .insert(path.into(), names.iter().map(ToString::to_string).collect());
    }

    pub fn set_kind(&self, path: impl Into<PathBuf>, kind: EntryKind) {
        self.kinds.lock().unwrap().insert(path.into(), kind);
    }
}

impl FsProvider for MockFsProvider {
    fn list(&self, path: &Path) -> Result<Vec<String>, BrowseError> {
        self.listings
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| BrowseError::ReadDir {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }

    fn classify(&self, dir: &Path, name: &str) -> EntryKind {
        if name == "." || name == ".." {
            return EntryKind::Directory;
        }
        let full = dir.join(name);
        if let Some(kind) = self.kinds.lock().unwrap().get(&full) {
            return *kind;
        }
        if self.listings.lock().unwrap().contains_key(&full) {
            EntryKind::Directory
        } else {
            EntryKind::RegularFile
        }
    }

    fn create_file(&self, path: &Path) -> Result<(), BrowseError> {
        self.created.lock().unwrap().push(path.to_path_buf());
        if let Some(result) = self.create_file_result.lock().unwrap().take() {
            return result;
        }
        let (parent, name) = split(path)?;
        let mut listings = self.listings.lock().unwrap();
        let Some(listing) = listings.get_mut(&parent) else {
            return Err(BrowseError::NotFound(parent));
        };
        if listing.iter().any(|existing| *existing == name) {
            return Err(BrowseError::AlreadyExists(path.to_path_buf()));
        }
        listing.push(name);
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<(), BrowseError> {
        self.removed.lock().unwrap().push(path.to_path_buf());
        if let Some(result) = self.remove_file_result.lock().unwrap().take() {
            return result;
        }
        let (parent, name) = split(path)?;
        let mut listings = self.listings.lock().unwrap();
        let Some(listing) = listings.get_mut(&parent) else {
            return Err(BrowseError::NotFound(parent));
        };
        let before = listing.len();
        listing.retain(|existing| *existing != name);
        if listing.len() == before {
            return Err(BrowseError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }
}

fn split(path: &Path) -> Result<(PathBuf, String), BrowseError> {
    let parent = path
        .parent()
        .ok_or_else(|| BrowseError::NotFound(path.to_path_buf()))?;
    let name = path
        .file_name()
        .ok_or_else(|| BrowseError::NotFound(path.to_path_buf()))?;
    Ok((parent.to_path_buf(), name.to_string_lossy().into_owned()))
}
