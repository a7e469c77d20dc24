//! BorrowLend CLI - builds unsigned borrow/lend transactions

use anyhow::{Context, Result};
use clap::Parser;
use config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::{Cli, Command};

/// Config file read when neither `--config` nor `CONFIG_PATH` is given
const DEFAULT_CONFIG_PATH: &str = "borrowlend.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let dotenv_result = dotenv::dotenv();

    let cli = Cli::parse();

    if let Command::InitConfig { path } = &cli.command {
        ConfigLoader::create_example(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("Wrote example configuration to {}", path.display());
        return Ok(());
    }

    let (config_path, config) = load_config(
        cli.config.clone(),
        env::var("CONFIG_PATH").ok().map(PathBuf::from),
    )
    .context("Failed to load configuration")?;

    init_logging(&config.logging)?;

    match dotenv_result {
        Ok(path) => info!("Loaded environment variables from {}", path.display()),
        Err(e) if !e.not_found() => warn!("Could not load .env file: {}", e),
        Err(_) => {}
    }

    info!(
        network = %config.network.name,
        node_url = %config.network.node_url,
        module = %config.contract.module_address,
        "Configuration loaded from {}",
        config_path.display()
    );
    for warning in ConfigValidator::validate(&config).warnings {
        warn!(field = %warning.field, "{}", warning.message);
    }

    commands::run(cli, &config).await
}

/// An explicitly named file must exist; only the implicit default may be absent
fn load_config(
    cli_path: Option<PathBuf>,
    env_path: Option<PathBuf>,
) -> Result<(PathBuf, Config)> {
    match cli_path.or(env_path) {
        Some(path) => {
            let config = ConfigLoader::load(&path)?;
            Ok((path, config))
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_PATH);
            let config = ConfigLoader::load_or_default(&path)?;
            Ok((path, config))
        }
    }
}

/// Initialize logging; RUST_LOG and LOG_FORMAT override the config file
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    let log_level = env::var("RUST_LOG").unwrap_or_else(|_| logging.level.clone());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| logging.format.clone());

    let env_filter = tracing_subscriber::EnvFilter::try_new(&log_level)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    // stdout carries the transaction JSON
    match log_format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize JSON logging")?;
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init()
                .context("Failed to initialize pretty logging")?;
        }
    }

    tracing::debug!(level = %log_level, format = %log_format, "Logging initialized");

    Ok(())
}
