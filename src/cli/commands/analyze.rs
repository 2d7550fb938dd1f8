//! Analyze command implementation.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use stock_analysis::{prepare, AnalysisReport};
use tracing::info;

use super::{indicator_settings, load_app_config, load_series};
use crate::cli::{AnalyzeArgs, OutputFormat};

pub async fn run(args: AnalyzeArgs, config_path: &Path) -> Result<()> {
    let config = load_app_config(config_path)?;
    let settings = indicator_settings(&args.indicators, &config)?;
    let series = load_series(&args.data, &config).await?;

    let frame = prepare(&series, &settings).context("Failed to compute indicators")?;

    if let Some(path) = &args.save {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        frame.write_csv(BufWriter::new(file))?;
        info!("Saved indicator table to {}", path.display());
    }

    match args.output {
        OutputFormat::Csv => {
            frame.write_csv(io::stdout().lock())?;
        }
        OutputFormat::Json => {
            let report = AnalysisReport::from_frame(&frame, &settings)?;
            println!("{}", report.to_json()?);
        }
        OutputFormat::Text => {
            let report = AnalysisReport::from_frame(&frame, &settings)?;
            println!("{}", report.summary());
        }
    }

    Ok(())
}
