//! Chain Resolver - Main Entry Point

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chain_resolver::application::use_cases::chains::ResolveChainInfoUseCase;
use chain_resolver::infrastructure::driven_adapters::config::{AppConfig, LoggingConfig};
use chain_resolver::infrastructure::driving_adapters::json_lines;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries results, logs go to stderr
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    init_tracing(&config.logging);
    tracing::info!("Configuration loaded successfully");

    let use_case = ResolveChainInfoUseCase::new();
    let summary = json_lines::run(&use_case, io::stdin().lock(), io::stdout().lock())?;

    tracing::info!(
        resolved = summary.resolved,
        failed = summary.failed,
        "Input processed"
    );

    Ok(())
}
