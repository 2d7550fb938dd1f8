//! CLI command implementations.

pub mod analyze;
pub mod chart;
pub mod init;
pub mod returns;
pub mod validate;

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use stock_analysis::IndicatorSettings;
use stock_config::{load_config, AppConfig, SourceKind};
use stock_core::traits::PriceSource;
use stock_core::{HistoryRange, PriceSeries};
use stock_data::{CsvPriceSource, YahooPriceSource};
use tracing::info;

use crate::cli::{DataArgs, IndicatorArgs, SourceArg};

/// Load and validate the configuration file.
pub(crate) fn load_app_config(config_path: &Path) -> Result<AppConfig> {
    let config = load_config(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Fetch the price history described by `args`, falling back to `config`.
pub(crate) async fn load_series(args: &DataArgs, config: &AppConfig) -> Result<PriceSeries> {
    let kind = match args.source {
        Some(SourceArg::Csv) => SourceKind::Csv,
        Some(SourceArg::Yahoo) => SourceKind::Yahoo,
        None => config.data.source,
    };
    let range = match &args.range {
        Some(text) => text
            .parse::<HistoryRange>()
            .map_err(|e| anyhow::anyhow!("Invalid --range: {}", e))?,
        None => config.data.range,
    };

    let source: Box<dyn PriceSource> = match kind {
        SourceKind::Csv => {
            let dir = args.data.as_deref().unwrap_or(config.data.dir.as_path());
            let source = if dir.is_dir() {
                CsvPriceSource::for_symbol(dir, &args.symbol)
            } else {
                CsvPriceSource::new(dir)
            };
            Box::new(source.with_context(|| {
                format!(
                    "No price data for {}. Provide a CSV file or directory with --data (e.g. --data ./data)",
                    args.symbol
                )
            })?)
        }
        SourceKind::Yahoo => Box::new(
            YahooPriceSource::new(
                config.data.yahoo_base_url.clone(),
                Duration::from_secs(config.data.timeout_secs),
            )
            .context("Failed to create HTTP client")?,
        ),
    };

    info!("Loading {} from {} ({})", args.symbol, source.name(), range);
    let series = source
        .fetch(&args.symbol, range)
        .await
        .with_context(|| format!("Failed to load prices for {}", args.symbol))?;
    info!("Loaded {} observations for {}", series.len(), series.symbol());

    Ok(series)
}

/// Apply command line overrides to the configured indicator settings.
pub(crate) fn indicator_settings(args: &IndicatorArgs, config: &AppConfig) -> Result<IndicatorSettings> {
    let mut settings = config.indicators.clone();
    if let Some(window) = args.sma_window {
        settings.sma_window = window;
    }
    if let Some(span) = args.ema_span {
        settings.ema_span = span;
    }
    if let Some(period) = args.rsi_period {
        settings.rsi_period = period;
    }
    settings.validate().context("Invalid indicator settings")?;
    Ok(settings)
}
