//! # Configuration Loader / 配置加载器
//!
//! Reads the optional TOML file into [`AppConfig`] and layers the environment
//! on top. The file step is pure data loading: whatever the file says is
//! accepted, and missing keys keep their defaults.
//!
//! Precedence, later wins / 优先级（后者覆盖前者）:
//! defaults -> `config.toml` -> `.env` -> process environment

use std::path::{Path, PathBuf};

use nx_core::config::AppConfig;
use tracing::{debug, warn};

use super::env::{apply_env_overrides, load_dotenv};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {} as TOML: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to load env file {}: {source}", path.display())]
    DotEnv {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// **NO validation is performed / 不执行任何验证**: an empty base URL or a
/// zero timeout is returned as written.
pub fn load_config(config_path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

/// Resolve the effective configuration.
///
/// A missing `config_path` means defaults. Every existing file in `env_files`
/// is loaded into the process environment without overriding variables that
/// are already set, so the real environment beats `.env`.
pub fn load_app_config(
    config_path: &Path,
    env_files: &[PathBuf],
) -> Result<AppConfig, ConfigError> {
    let config = if config_path.exists() {
        debug!(path = %config_path.display(), "Loading config file");
        load_config(config_path)?
    } else {
        debug!(path = %config_path.display(), "No config file; using defaults");
        AppConfig::default()
    };

    for env_file in env_files {
        load_dotenv(env_file)?;
    }

    let config = apply_env_overrides(config, |name| std::env::var(name).ok())?;

    if config.base_url().is_none() {
        warn!("API base URL is not configured; requests will fail until API_BASE_URL is set");
    }

    Ok(config)
}
