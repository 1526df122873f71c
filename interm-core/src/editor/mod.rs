pub mod cli;
pub mod mock;
pub mod provider;

pub use cli::CliEditorProvider;
pub use mock::MockEditorProvider;
pub use provider::EditorProvider;
