//! # Configuration Resolution / 配置解析
//!
//! Files and environment are read by `nx_infra::config`; this module only adds
//! the command-line layer on top and picks which files to read.

use std::path::PathBuf;

use anyhow::{bail, Context};
use nx_app::app_paths::AppPaths;
use nx_core::config::{AppConfig, StorageBackend};

/// Values given on the command line. They win over every other source.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_path: Option<PathBuf>,
    pub api_base_url: Option<String>,
    pub storage: Option<StorageBackend>,
}

/// Resolve the effective configuration.
///
/// An explicit `--config` must exist; the default `config.toml` is optional.
pub fn resolve_config(paths: &AppPaths, overrides: &ConfigOverrides) -> anyhow::Result<AppConfig> {
    let config_path = match &overrides.config_path {
        Some(path) if !path.is_file() => {
            bail!("Config file not found: {}", path.display())
        }
        Some(path) => path.clone(),
        None => paths.config_path.clone(),
    };

    let env_files = vec![PathBuf::from(".env"), paths.env_path.clone()];
    let config = nx_infra::load_app_config(&config_path, &env_files)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    Ok(apply_overrides(config, overrides))
}

fn apply_overrides(mut config: AppConfig, overrides: &ConfigOverrides) -> AppConfig {
    if let Some(url) = &overrides.api_base_url {
        config.api_base_url = Some(url.clone());
    }
    if let Some(storage) = overrides.storage {
        config.storage = storage;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use nx_core::app_dirs::AppDirs;
    use serial_test::serial;

    fn paths_in(dir: &std::path::Path) -> AppPaths {
        AppPaths::from_app_dirs(&AppDirs {
            app_data_root: dir.to_path_buf(),
        })
    }

    #[test]
    fn overrides_win_over_file_values() {
        let config = AppConfig {
            api_base_url: Some("http://file".into()),
            request_timeout_secs: Some(5),
            storage: StorageBackend::System,
        };
        let overrides = ConfigOverrides {
            api_base_url: Some("http://cli".into()),
            storage: Some(StorageBackend::Memory),
            ..ConfigOverrides::default()
        };

        let config = apply_overrides(config, &overrides);

        assert_eq!(config.api_base_url.as_deref(), Some("http://cli"));
        assert_eq!(config.request_timeout_secs, Some(5));
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let overrides = ConfigOverrides {
            config_path: Some(dir.path().join("nope.toml")),
            ..ConfigOverrides::default()
        };

        let err = resolve_config(&paths_in(dir.path()), &overrides).unwrap_err();

        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    #[serial]
    fn default_config_file_is_read_from_app_data_root() {
        std::env::remove_var("API_BASE_URL");
        std::env::remove_var("NEXUS_REQUEST_TIMEOUT_SECS");
        std::env::remove_var("NEXUS_STORAGE");

        let dir = tempfile::TempDir::new().unwrap();
        let paths = paths_in(dir.path());
        std::fs::write(
            &paths.config_path,
            "api_base_url = \"http://192.168.8.198:8000\"\nstorage = \"file\"\n",
        )
        .unwrap();

        let config = resolve_config(&paths, &ConfigOverrides::default()).unwrap();

        assert_eq!(
            config.api_base_url.as_deref(),
            Some("http://192.168.8.198:8000")
        );
        assert_eq!(config.storage, StorageBackend::File);
    }
}
