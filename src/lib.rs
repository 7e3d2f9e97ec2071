//! # nexus
//!
//! Bootstrap and terminal front end for the Nexus client. The domain lives in
//! `nx-core`, the use cases in `nx-app`; this crate loads configuration, sets
//! up tracing, wires the adapters and maps subcommands onto use cases.

pub mod bootstrap;
pub mod cli;

pub use bootstrap::run;
pub use cli::Cli;
