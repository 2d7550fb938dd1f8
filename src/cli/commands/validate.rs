//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use stock_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    let ind = &config.indicators;
    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Data source: {:?} ({})", config.data.source, config.data.dir.display());
    println!("History range: {}", config.data.range);
    println!("SMA window: {}", ind.sma_window);
    println!("EMA span: {}", ind.ema_span);
    println!("RSI period: {} ({}/{})", ind.rsi_period, ind.rsi_oversold, ind.rsi_overbought);
    println!("MACD: {}/{}/{}", ind.macd_fast, ind.macd_slow, ind.macd_signal);

    Ok(())
}
