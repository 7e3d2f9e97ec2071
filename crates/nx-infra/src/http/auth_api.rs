use std::time::Duration;

use async_trait::async_trait;
use nx_core::config::AppConfig;
use nx_core::ports::{ApiError, AuthApiPort, LoginResponse};
use nx_core::{RegistrationRequest, UserProfile};
use serde_json::Value;
use tracing::{debug, instrument};

use super::response::{decode_body, status_error, transport_error};

#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// [`AuthApiPort`] over HTTP.
///
/// 基于 HTTP 的认证 / 资料服务适配器。每次调用只发一个请求，不重试。
#[derive(Debug, Clone)]
pub struct HttpAuthApi {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpAuthApi {
    /// Build the adapter from configuration.
    ///
    /// A missing base URL is not an error here; every call then fails with
    /// [`ApiError::NotConfigured`].
    pub fn from_config(config: &AppConfig) -> Result<Self, HttpClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.base_url().map(str::to_string),
        })
    }

    fn endpoint(&self, path: &str) -> Result<String, ApiError> {
        let base = self.base_url.as_deref().ok_or(ApiError::NotConfigured)?;
        Ok(format!("{base}{path}"))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        debug!(status = status.as_u16(), "Response received");

        if status.is_success() {
            Ok(response)
        } else {
            Err(status_error(response).await)
        }
    }
}

#[async_trait]
impl AuthApiPort for HttpAuthApi {
    #[instrument(skip(self, password), fields(endpoint = "/login"))]
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.endpoint("/login")?;
        let request = self
            .client
            .post(url)
            .form(&[("username", username), ("password", password)]);

        let response = self.send(request).await?;
        decode_body(response).await
    }

    #[instrument(
        skip(self, request),
        fields(endpoint = "/register", account_type = %request.account_type())
    )]
    async fn register(&self, request: &RegistrationRequest) -> Result<Value, ApiError> {
        let url = self.endpoint("/register")?;
        let response = self.send(self.client.post(url).json(request)).await?;
        decode_body(response).await
    }

    #[instrument(skip(self, access_token), fields(endpoint = "/profile"))]
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, ApiError> {
        let url = self.endpoint("/profile")?;
        let response = self
            .send(self.client.get(url).bearer_auth(access_token))
            .await?;

        let body: Value = decode_body(response).await?;
        UserProfile::from_json(body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_with_base(base: Option<&str>) -> HttpAuthApi {
        HttpAuthApi::from_config(&AppConfig {
            api_base_url: base.map(str::to_string),
            ..AppConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let api = api_with_base(Some("http://10.0.0.2:8000/"));
        assert_eq!(api.endpoint("/login").unwrap(), "http://10.0.0.2:8000/login");
    }

    #[test]
    fn blank_base_url_counts_as_missing() {
        let api = api_with_base(Some("   "));
        assert_eq!(api.endpoint("/login"), Err(ApiError::NotConfigured));
    }

    #[tokio::test]
    async fn unconfigured_api_fails_without_a_request() {
        let api = api_with_base(None);
        assert_eq!(
            api.login("bob", "Passw0rd").await.unwrap_err(),
            ApiError::NotConfigured
        );
        assert_eq!(
            api.fetch_profile("tok").await.unwrap_err(),
            ApiError::NotConfigured
        );
    }
}
