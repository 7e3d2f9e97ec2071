//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! - [`AuthApiPort`]: the remote HTTP backend (opaque service boundary)
//! - [`SecureStoragePort`]: platform key-value secret storage
//! - [`UiPort`]: navigation and user notifications
//! - [`AppDirsPort`]: where local files live

pub mod app_dirs;
pub mod auth_api;
pub mod errors;
pub mod secure_storage;
pub mod ui_port;

pub use app_dirs::AppDirsPort;
pub use auth_api::{ApiError, AuthApiPort, LoginResponse};
pub use errors::AppDirsError;
pub use secure_storage::{SecureStorageError, SecureStoragePort};
pub use ui_port::UiPort;
