use super::provider::EditorProvider;
use crate::error::BrowseError;
use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

#[derive(Default)]
pub struct MockEditorProvider {
    pub edited: Mutex<Vec<PathBuf>>,
    pub edit_result: Mutex<Option<Result<(), BrowseError>>>,
}

impl EditorProvider for MockEditorProvider {
    fn edit(&self, path: &Path) -> Result<(), BrowseError> {
        self.edited.lock().unwrap().push(path.to_path_buf());
        self.edit_result.lock().unwrap().take().unwrap_or(Ok(()))
    }
}
