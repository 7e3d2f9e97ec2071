mod env;
mod loader;

pub use env::{apply_env_overrides, load_dotenv, ENV_API_BASE_URL, ENV_REQUEST_TIMEOUT, ENV_STORAGE};
pub use loader::{load_app_config, load_config, ConfigError};
