mod auth_api;
mod response;

pub use auth_api::{HttpAuthApi, HttpClientError};
