use crate::error::BrowseError;
use std::path::Path;

/// Boundary to the external editor. Implementations block until the child
/// exits; the caller owns screen teardown before the call and rebuild after.
pub trait EditorProvider: Send + Sync {
    fn edit(&self, path: &Path) -> Result<(), BrowseError>;
}
