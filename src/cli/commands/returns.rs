//! Daily returns command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use stock_analysis::{with_returns, AnalysisFrame, ReturnStats};

use super::{load_app_config, load_series};
use crate::cli::ReturnsArgs;

pub async fn run(args: ReturnsArgs, config_path: &Path) -> Result<()> {
    let config = load_app_config(config_path)?;
    let series = load_series(&args.data, &config).await?;

    let frame = with_returns(AnalysisFrame::new(series)).context("Failed to compute returns")?;
    let returns = frame
        .column("Returns")
        .context("Returns column missing")?;

    println!("Daily returns: {}", frame.symbol());
    match ReturnStats::from_series(returns) {
        Some(stats) => {
            println!("  Count:           {}", stats.count);
            println!("  Mean:            {:.4}%", stats.mean * 100.0);
            println!("  Std Dev:         {:.4}%", stats.std_dev * 100.0);
            println!("  Annualized Vol:  {:.2}%", stats.annualized_volatility * 100.0);
            println!("  Worst Day:       {:.2}%", stats.min * 100.0);
            println!("  Best Day:        {:.2}%", stats.max * 100.0);
        }
        None => println!("  Not enough data (need at least two closes)"),
    }

    if args.last > 0 {
        println!();
        let rows: Vec<_> = frame.rows().collect();
        let skip = rows.len().saturating_sub(args.last);
        for row in rows.iter().skip(skip) {
            let value = row
                .values
                .first()
                .copied()
                .flatten()
                .map(|r| format!("{:+.2}%", r * 100.0))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "  {}  {:>12.2}  {}",
                row.timestamp.format("%Y-%m-%d"),
                row.close,
                value
            );
        }
    }

    Ok(())
}
