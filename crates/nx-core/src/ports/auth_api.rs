use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::UserProfile;
use crate::registration::RegistrationRequest;

/// Remote API failures as seen by the client.
///
/// 远程 API 错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-2xx status; `detail` is the server's message when it sent one.
    #[error("server returned status {status}")]
    Status { status: u16, detail: Option<String> },

    /// 2xx status with a body that does not have the expected shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// No base URL was configured.
    #[error("API base URL is not configured")]
    NotConfigured,
}

/// Body of a successful `POST /login`.
///
/// Fields are optional on purpose: a 2xx reply missing either the token or the
/// role is a malformed response that the caller must reject.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl std::fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResponse")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("token_type", &self.token_type)
            .field("role", &self.role)
            .finish()
    }
}

/// Remote authentication / profile service.
///
/// 远程认证与资料服务端口。每次调用恰好发出一个请求，不重试。
#[async_trait::async_trait]
pub trait AuthApiPort: Send + Sync {
    /// `POST /login` with a form-encoded `username` / `password` body.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// `POST /register` with a JSON body. The success body is opaque.
    async fn register(&self, request: &RegistrationRequest) -> Result<serde_json::Value, ApiError>;

    /// `GET /profile` with a bearer token.
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, ApiError>;
}
