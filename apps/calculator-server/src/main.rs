mod config;
mod logging;
mod server;
mod signals;

use std::path::PathBuf;

use anyhow::Result;
use calculator::CalculatorModule;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;

/// Calculator Server - number normalization and evaluation over HTTP
#[derive(Parser)]
#[command(name = "calculator-server")]
#[command(about = "Calculator Server - number normalization and evaluation over HTTP")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.config
        && !path.is_file()
    {
        anyhow::bail!("config file does not exist: {}", path.display());
    }

    // Layered config:
    // 1) defaults -> 2) YAML (if provided) -> 3) env (APP__*) -> 4) CLI overrides
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.port);
    config.validate()?;

    logging::init_logging(&config.logging, cli.verbose)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(&config).await,
        Commands::Check => check_config(&config),
    }
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    CalculatorModule::new(&config.calculator)?;
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn run_server(config: &AppConfig) -> Result<()> {
    tracing::info!("Calculator Server starting");

    let module = CalculatorModule::new(&config.calculator)?;
    let router = server::build_router(&config.server, &module);
    let listener = server::bind(&config.server).await?;

    let cancel = CancellationToken::new();
    tokio::spawn(signals::cancel_on_shutdown(cancel.clone()));

    server::serve(listener, router, cancel).await
}
