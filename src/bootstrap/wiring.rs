//! # Dependency Injection / 依赖注入模块
//!
//! Creates the infra and platform adapters and groups them into [`AppDeps`].
//! Assembly only: no business decisions are made here.

use std::sync::Arc;

use nx_app::app_paths::AppPaths;
use nx_app::AppDeps;
use nx_core::config::AppConfig;
use nx_core::ports::UiPort;
use nx_infra::HttpAuthApi;
use nx_platform::create_secure_storage;

pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(#[from] nx_infra::HttpClientError),

    #[error("Secure storage initialization failed: {0}")]
    SecureStorageInit(#[from] nx_platform::SecureStorageFactoryError),
}

/// Build every port implementation for `config`.
pub fn wire_dependencies(
    config: &AppConfig,
    paths: &AppPaths,
    ui: Arc<dyn UiPort>,
) -> WiringResult<AppDeps> {
    let auth_api = Arc::new(HttpAuthApi::from_config(config)?);
    let secure_storage = create_secure_storage(config.storage, paths.keyring_dir.clone())?;

    tracing::debug!(
        storage = %config.storage,
        api_configured = config.api_base_url.is_some(),
        "Dependencies wired"
    );

    Ok(AppDeps {
        auth_api,
        secure_storage,
        ui,
    })
}
