use std::path::PathBuf;

use nx_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub env_path: PathBuf,
    pub keyring_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_data_root.join("config.toml"),
            env_path: dirs.app_data_root.join(".env"),
            keyring_dir: dirs.app_data_root.join("keyring"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
