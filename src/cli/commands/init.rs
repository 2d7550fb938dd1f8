//! Init configuration command.

use anyhow::{Context, Result};
use std::path::Path;
use stock_config::AppConfig;

use crate::cli::InitArgs;

pub async fn run(args: InitArgs, config_path: &Path) -> Result<()> {
    if config_path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let text = AppConfig::default()
        .to_toml()
        .context("Failed to render configuration")?;
    std::fs::write(config_path, text)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
