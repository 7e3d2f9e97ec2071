pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{resolve_config, ConfigOverrides};
pub use run::run;
pub use wiring::{wire_dependencies, WiringError};
