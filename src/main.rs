//! Breeze Drive — interactive client for a remote drive store.
//!
//! Entry point that loads configuration, wires the engine over the HTTP
//! remote, and hands control to the interactive shell.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use breeze_core::config::AppConfig;
use breeze_core::error::DriveError;
use breeze_core::traits::notify::Notifier;
use breeze_engine::{DriveEngine, SessionSignals};
use breeze_remote::HttpRemoteDrive;

mod shell;

/// Command-line overrides applied on top of file/environment config.
#[derive(Debug, Parser)]
#[command(name = "breeze", version, about = "Interactive drive client")]
struct Cli {
    /// Configuration environment (reads `config/<env>.toml` as an overlay).
    #[arg(long, default_value = "development")]
    env: String,

    /// Remote API base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Bearer token for the remote API.
    #[arg(long)]
    token: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from file and environment, then apply CLI overrides
fn load_configuration(cli: &Cli) -> Result<AppConfig, DriveError> {
    let mut config = AppConfig::load(&cli.env)?;

    if let Some(base_url) = &cli.base_url {
        config.remote.base_url = base_url.clone();
    }
    if let Some(token) = &cli.token {
        config.remote.bearer_token = Some(token.clone());
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Notifier that surfaces engine signals on the terminal.
#[derive(Debug, Clone, Copy, Default)]
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn loading_started(&self, message: &str) {
        println!("... {}", message);
    }

    fn success(&self, message: &str) {
        println!("ok: {}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("error: {}", message);
    }
}

/// Wire the engine and run the shell until the user quits.
async fn run(config: AppConfig) -> Result<(), DriveError> {
    tracing::info!("Starting Breeze Drive v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Remote: {}", config.remote.base_url);

    let remote = Arc::new(HttpRemoteDrive::new(&config.remote)?);
    let notifier = Arc::new(ConsoleNotifier);
    let engine = DriveEngine::new(remote, notifier);

    engine.ensure_initial_load(SessionSignals::established()).await;

    shell::run(&engine).await
}
