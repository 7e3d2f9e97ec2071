use std::path::Path;

use nx_core::config::AppConfig;
use nx_core::StorageBackend;
use tracing::debug;

use super::loader::ConfigError;

pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "NEXUS_REQUEST_TIMEOUT_SECS";
pub const ENV_STORAGE: &str = "NEXUS_STORAGE";

/// Load `path` into the process environment if it exists.
///
/// Variables that are already set are left alone.
pub fn load_dotenv(path: &Path) -> Result<(), ConfigError> {
    if !path.is_file() {
        return Ok(());
    }
    dotenvy::from_path(path).map_err(|source| ConfigError::DotEnv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Loaded env file");
    Ok(())
}

/// Apply environment variables read through `lookup` on top of `config`.
///
/// Blank values are treated as unset.
pub fn apply_env_overrides<F>(mut config: AppConfig, lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(url) = read(ENV_API_BASE_URL) {
        config.api_base_url = Some(url.trim().to_string());
    }

    if let Some(raw) = read(ENV_REQUEST_TIMEOUT) {
        let secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnv {
                name: ENV_REQUEST_TIMEOUT,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        config.request_timeout_secs = Some(secs);
    }

    if let Some(raw) = read(ENV_STORAGE) {
        let backend = raw
            .parse::<StorageBackend>()
            .map_err(|e| ConfigError::InvalidEnv {
                name: ENV_STORAGE,
                value: raw.clone(),
                reason: e.to_string(),
            })?;
        config.storage = backend;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn overrides_replace_file_values() {
        let base = AppConfig {
            api_base_url: Some("http://file".into()),
            request_timeout_secs: Some(5),
            storage: StorageBackend::System,
        };

        let config = apply_env_overrides(
            base,
            lookup_from(&[
                (ENV_API_BASE_URL, " http://env:8000 "),
                (ENV_REQUEST_TIMEOUT, "20"),
                (ENV_STORAGE, "Memory"),
            ]),
        )
        .unwrap();

        assert_eq!(config.api_base_url.as_deref(), Some("http://env:8000"));
        assert_eq!(config.request_timeout_secs, Some(20));
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn blank_values_are_ignored() {
        let base = AppConfig {
            api_base_url: Some("http://file".into()),
            ..AppConfig::default()
        };

        let config = apply_env_overrides(base.clone(), lookup_from(&[(ENV_API_BASE_URL, "  ")]))
            .unwrap();

        assert_eq!(config, base);
    }

    #[test]
    fn bad_timeout_names_the_variable() {
        let err = apply_env_overrides(
            AppConfig::default(),
            lookup_from(&[(ENV_REQUEST_TIMEOUT, "soon")]),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidEnv {
                name: ENV_REQUEST_TIMEOUT,
                ..
            }
        ));
    }

    #[test]
    fn bad_storage_is_rejected() {
        let result = apply_env_overrides(
            AppConfig::default(),
            lookup_from(&[(ENV_STORAGE, "vault")]),
        );
        assert!(result.is_err());
    }
}
