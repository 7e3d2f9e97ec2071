//! # nx-core
//!
//! Core domain models and business logic for the Nexus client.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! account types, form records, the registration validation engine, the session
//! triple, the profile union and the submission state machine. Everything that
//! touches the outside world is expressed as a port in [`ports`].

pub mod account;
pub mod app_dirs;
pub mod config;
pub mod navigation;
pub mod ports;
pub mod profile;
pub mod registration;
pub mod session;
pub mod submission;
pub mod validation;

// Re-export commonly used types at the crate root
pub use account::{AccountType, TradeType};
pub use config::{AppConfig, StorageBackend};
pub use navigation::{Alert, Route};
pub use profile::UserProfile;
pub use registration::{LoginForm, RegistrationForm, RegistrationProfile, RegistrationRequest};
pub use session::Session;
pub use submission::{SubmissionError, SubmissionState};
pub use validation::{validate, validate_login, ErrorMap, FormField};
