//! # nx-platform
//!
//! Platform-specific implementations for the Nexus client.
//!
//! This crate contains the adapters that talk to the operating system: the
//! secure storage backends that hold the session and the resolution of the
//! per-user application directory.

pub mod app_dirs;
pub mod capability;
pub mod file_secure_storage;
pub mod memory_secure_storage;
pub mod secure_storage;
pub mod system_secure_storage;

pub use app_dirs::DirsAppDirsAdapter;
pub use file_secure_storage::FileSecureStorage;
pub use memory_secure_storage::InMemorySecureStorage;
pub use secure_storage::{create_secure_storage, SecureStorageFactoryError};
pub use system_secure_storage::SystemSecureStorage;
