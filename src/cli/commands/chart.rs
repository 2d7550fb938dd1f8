//! Chart command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use stock_analysis::prepare;
use stock_viz::{ChartViewer, Panel};

use super::{indicator_settings, load_app_config, load_series};
use crate::cli::{ChartArgs, PanelArg};

pub async fn run(args: ChartArgs, config_path: &Path) -> Result<()> {
    let config = load_app_config(config_path)?;
    let settings = indicator_settings(&args.indicators, &config)?;
    let series = load_series(&args.data, &config).await?;

    let frame = prepare(&series, &settings).context("Failed to compute indicators")?;

    let panel = match args.panel {
        PanelArg::Price => Panel::Price,
        PanelArg::Rsi => Panel::Rsi,
        PanelArg::Macd => Panel::Macd,
        PanelArg::Returns => Panel::Returns,
    };

    let viewer = ChartViewer::new(&frame, settings, config.chart.refresh_ms).show(panel);
    tokio::task::block_in_place(|| viewer.run()).context("Terminal chart failed")?;

    Ok(())
}
