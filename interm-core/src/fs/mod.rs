pub mod mock;
pub mod os;
pub mod provider;

pub use mock::MockFsProvider;
pub use os::OsFsProvider;
pub use provider::FsProvider;
