//! Stock analysis CLI application.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::PathBuf;
use stock_config::{load_config, LoggingConfig};
use stock_viz::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging settings come from the config file unless overridden; a broken
    // file is reported by the command itself
    let logging = load_config(&cli.config)
        .map(|c| c.logging)
        .unwrap_or_else(|_| LoggingConfig::default());

    // Setup logging
    let log_level = match cli.log_level {
        Some(cli::LogLevel::Trace) => "trace",
        Some(cli::LogLevel::Debug) => "debug",
        Some(cli::LogLevel::Info) => "info",
        Some(cli::LogLevel::Warn) => "warn",
        Some(cli::LogLevel::Error) => "error",
        None => logging.level.as_str(),
    };
    let json = cli.json_logs || logging.format.eq_ignore_ascii_case("json");
    let log_file = cli.log_file.clone().or_else(|| logging.file.as_ref().map(PathBuf::from));
    let _log_guard = setup_logging(log_level, json, log_file.as_deref());

    // Execute command
    match cli.command {
        Commands::Analyze(args) => cli::commands::analyze::run(args, &cli.config).await,
        Commands::Chart(args) => cli::commands::chart::run(args, &cli.config).await,
        Commands::Returns(args) => cli::commands::returns::run(args, &cli.config).await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
        Commands::InitConfig(args) => cli::commands::init::run(args, &cli.config).await,
    }
}
