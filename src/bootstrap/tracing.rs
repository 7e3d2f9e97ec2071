//! Tracing configuration for the Nexus CLI
//!
//! ## Architecture / 架构
//!
//! - **File**: everything the filter lets through, daily rotated under `logs/`
//! - **Stderr**: warnings only, unless `--verbose` is given
//! - **`log` bridge**: adapter crates that log through `log` end up here too

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is not set.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("nx_app={level}"),
        format!("nx_infra={level}"),
        format!("nx_platform={level}"),
        // reqwest/hyper connection chatter
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=info".to_string(),
        "rustls=warn".to_string(),
    ]
}

fn build_env_filter(is_dev: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_dev).join(",")))
}

/// Initialize the global subscriber. Call once, before any use case runs.
///
/// File logging is skipped with a note on stderr when `logs_dir` cannot be
/// created.
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber or `log` logger is already registered.
pub fn init_tracing_subscriber(logs_dir: &Path, verbose: bool) -> anyhow::Result<()> {
    let is_dev = is_development();

    let file_layer = match build_file_writer(logs_dir) {
        Ok(writer) => Some(
            fmt::layer()
                .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(writer)
                .with_filter(build_env_filter(is_dev)),
        ),
        Err(err) => {
            eprintln!("File logging disabled: {err:#}");
            None
        }
    };

    let stderr_filter = if verbose {
        build_env_filter(is_dev)
    } else {
        EnvFilter::new("warn")
    };
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr)
        .with_filter(stderr_filter);

    let subscriber = registry().with(stderr_layer).with(file_layer);
    ::tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, "nexus.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_directives_follow_build_profile() {
        let dev = build_filter_directives(true);
        assert!(dev.contains(&"debug".to_string()));
        assert!(dev.contains(&"nx_infra=debug".to_string()));
        assert!(dev.contains(&"hyper=warn".to_string()));

        let prod = build_filter_directives(false);
        assert!(prod.contains(&"info".to_string()));
        assert!(prod.contains(&"nx_platform=info".to_string()));
    }

    #[test]
    fn directives_parse_as_env_filter() {
        let joined = build_filter_directives(false).join(",");
        assert!(EnvFilter::try_new(joined).is_ok());
    }
}
