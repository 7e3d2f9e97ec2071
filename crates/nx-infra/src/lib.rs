//! # nx-infra
//!
//! Infrastructure adapters for the Nexus client: the HTTP implementation of
//! [`nx_core::ports::AuthApiPort`] and the configuration loader.

pub mod config;
pub mod http;

pub use config::{load_app_config, ConfigError};
pub use http::{HttpAuthApi, HttpClientError};
