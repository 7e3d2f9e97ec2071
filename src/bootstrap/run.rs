use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use nx_app::app_paths::AppPaths;
use nx_app::App;
use nx_core::ports::AppDirsPort;
use nx_platform::DirsAppDirsAdapter;

use super::config::resolve_config;
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;
use crate::cli::handlers::{dispatch, print_trades};
use crate::cli::terminal_ui::TerminalUi;
use crate::cli::{Cli, Command};

/// Boot the client for one command and run it.
///
/// Order: app dirs -> tracing -> config -> wiring -> use case.
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve the application data directory")?;
    let paths = AppPaths::from_app_dirs(&app_dirs);

    init_tracing_subscriber(&paths.logs_dir, cli.verbose)
        .context("Failed to initialize tracing")?;

    if let Command::Trades = cli.command {
        return Ok(print_trades());
    }

    let config = resolve_config(&paths, &cli.overrides())?;
    tracing::info!(
        app_data_root = %app_dirs.app_data_root.display(),
        storage = %config.storage,
        "Nexus starting"
    );

    let ui = Arc::new(TerminalUi::stdout());
    let deps = wire_dependencies(&config, &paths, ui)?;
    let app = App::new(deps);

    dispatch(&app, cli.command).await
}
