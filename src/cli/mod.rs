//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stock")]
#[command(author, version, about = "Technical analysis of historical stock prices")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (defaults to logging.level in the config)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// Also write logs to this file, rotated daily (defaults to logging.file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute indicators and print a summary
    Analyze(AnalyzeArgs),
    /// Show price, RSI, MACD and returns charts in the terminal
    Chart(ChartArgs),
    /// Daily return statistics
    Returns(ReturnsArgs),
    /// Validate configuration
    ValidateConfig,
    /// Write a configuration file with default values
    InitConfig(InitArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    /// Local `<SYMBOL>_historical_data.csv` files
    Csv,
    /// Yahoo Finance chart API
    Yahoo,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PanelArg {
    Price,
    Rsi,
    Macd,
    Returns,
}

/// Where to get prices from.
#[derive(clap::Args)]
pub struct DataArgs {
    /// Ticker symbol
    #[arg(short, long)]
    pub symbol: String,

    /// CSV file, or directory holding <SYMBOL>_historical_data.csv
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Price source (defaults to data.source in the config)
    #[arg(long)]
    pub source: Option<SourceArg>,

    /// History range for remote sources (1mo, 6mo, 1y, 5y, max, ...)
    #[arg(long)]
    pub range: Option<String>,
}

/// Indicator overrides on top of the config file.
#[derive(clap::Args)]
pub struct IndicatorArgs {
    /// SMA window
    #[arg(long)]
    pub sma_window: Option<usize>,

    /// EMA span
    #[arg(long)]
    pub ema_span: Option<usize>,

    /// RSI period
    #[arg(long)]
    pub rsi_period: Option<usize>,
}

#[derive(clap::Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub indicators: IndicatorArgs,

    /// Output format (text, json, csv)
    #[arg(long, default_value = "text")]
    pub output: OutputFormat,

    /// Save the full indicator table as CSV
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub data: DataArgs,

    #[command(flatten)]
    pub indicators: IndicatorArgs,

    /// Panel to open first
    #[arg(long, default_value = "price")]
    pub panel: PanelArg,
}

#[derive(clap::Args)]
pub struct ReturnsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Also list the most recent N daily returns
    #[arg(long, default_value = "0")]
    pub last: usize,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "stock",
            "analyze",
            "--symbol",
            "AAPL",
            "--source",
            "yahoo",
            "--range",
            "1y",
            "--rsi-period",
            "9",
            "--output",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.data.symbol, "AAPL");
                assert!(matches!(args.data.source, Some(SourceArg::Yahoo)));
                assert_eq!(args.data.range.as_deref(), Some("1y"));
                assert_eq!(args.indicators.rsi_period, Some(9));
                assert!(matches!(args.output, OutputFormat::Json));
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_symbol_required() {
        assert!(Cli::try_parse_from(["stock", "chart"]).is_err());
    }

    #[test]
    fn test_global_defaults() {
        let cli = Cli::try_parse_from(["stock", "validate-config"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert!(!cli.json_logs);
        assert!(cli.log_level.is_none());
        assert!(matches!(cli.command, Commands::ValidateConfig));
    }
}
