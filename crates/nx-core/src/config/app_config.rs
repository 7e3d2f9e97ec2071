//! Application configuration domain model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Application configuration
///
/// Facts gathered from the config file and environment. No validation happens
/// here; a missing base URL is only reported when it is first needed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the remote API, e.g. `http://192.168.8.198:8000`
    pub api_base_url: Option<String>,

    /// Per-request timeout; `None` keeps the transport default
    pub request_timeout_secs: Option<u64>,

    /// Where the session triple is kept
    pub storage: StorageBackend,
}

impl AppConfig {
    /// Usable base URL: trimmed, without a trailing `/`, `None` when blank.
    pub fn base_url(&self) -> Option<&str> {
        self.api_base_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }
}

/// Secure storage backend selection.
///
/// 安全存储后端选择。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Detect from platform capability.
    #[default]
    Auto,
    /// OS keychain / credential manager / secret service.
    System,
    /// Files under the app data root (headless and WSL fallback).
    File,
    /// Process memory only; nothing survives a restart.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown storage backend: {0:?} (expected auto, system, file or memory)")]
pub struct UnknownStorageBackend(pub String);

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Auto => "auto",
            StorageBackend::System => "system",
            StorageBackend::File => "file",
            StorageBackend::Memory => "memory",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = UnknownStorageBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(StorageBackend::Auto),
            "system" => Ok(StorageBackend::System),
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(UnknownStorageBackend(s.to_string())),
        }
    }
}
