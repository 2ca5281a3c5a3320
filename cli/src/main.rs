//! Server entrypoint for quizbank
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use quizbank_application::{QuestionRepository, StoreBehavior};
use quizbank_infrastructure::{ConfigLoader, FileConfig, JsonDocumentStore, JsonlKeywordAuditLog};
use quizbank_presentation::{AppState, Cli, build_router, serve};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    apply_cli_overrides(&mut config, &cli);
    config.validate()?;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.log_dir.as_deref().map(Path::new));

    info!("Starting quizbank");

    // === Dependency Injection ===
    // Create infrastructure adapter (document store)
    let store = match &config.store.data_file {
        Some(path) => {
            JsonDocumentStore::open(
                &config.store.collection,
                path,
                config.store.require_data_file,
            )
            .await?
        }
        None => {
            warn!("No data file configured, questions are kept in memory only");
            JsonDocumentStore::in_memory(&config.store.collection, Vec::new())
        }
    };

    if store.is_empty().await {
        warn!("Collection {} holds no question sets", config.store.collection);
    } else {
        info!("Serving {} question sets", store.len().await);
    }

    let mut repository = QuestionRepository::new(Arc::new(store))
        .with_behavior(StoreBehavior::from_timeout_seconds(config.store.timeout_seconds));

    if let Some(path) = &config.logging.audit_log {
        match JsonlKeywordAuditLog::new(path) {
            Some(audit) => {
                info!("Recording keyword updates to {}", audit.path().display());
                repository = repository.with_audit_log(Arc::new(audit));
            }
            None => warn!("Keyword audit log disabled"),
        }
    }

    let router = build_router(AppState::new(repository));
    serve(router, &config.server.address()).await?;

    Ok(())
}

/// Command line flags take precedence over every config source
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(bind) = &cli.bind {
        config.server.bind = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(path) = &cli.data_file {
        config.store.data_file = Some(path.display().to_string());
    }
    if let Some(path) = &cli.audit_log {
        config.logging.audit_log = Some(path.display().to_string());
    }
    if let Some(dir) = &cli.log_dir {
        config.logging.log_dir = Some(dir.display().to_string());
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` overrides the verbosity flags. When `log_dir` is set, logs are
/// also written to a daily rolling file.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "quizbank.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .init();

    guard
}
