//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, ChartSettings, DataSettings, LoggingConfig, SourceKind};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// The file is optional; missing sections fall back to defaults. Environment
/// variables such as `STOCK__INDICATORS__RSI_PERIOD=9` override the file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("STOCK")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment overrides are process-wide
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn temp_toml(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "stock-config-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = load_config(Path::new("/definitely/not/here.toml")).unwrap();
        assert_eq!(config.indicators.rsi_period, 14);
        assert_eq!(config.data.source, SourceKind::Csv);
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = temp_toml(
            "full",
            r#"
[logging]
level = "debug"

[data]
dir = "prices"
source = "yahoo"
range = "1y"

[indicators]
sma_window = 10
macd_fast = 8
"#,
        );

        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.data.dir.to_str(), Some("prices"));
        assert_eq!(config.data.source, SourceKind::Yahoo);
        assert_eq!(config.data.range.to_string(), "1y");
        assert_eq!(config.indicators.sma_window, 10);
        assert_eq!(config.indicators.macd_fast, 8);
        // Untouched keys keep their defaults
        assert_eq!(config.indicators.ema_span, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = temp_toml("partial", "[app]\nname = \"screener\"\n");

        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.app.name, "screener");
        assert_eq!(config.app.environment, "development");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_env_override_single_key() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("STOCK__LOGGING__LEVEL", "warn");
        let result = load_config(Path::new("/definitely/not/here.toml"));
        std::env::remove_var("STOCK__LOGGING__LEVEL");

        let config = result.unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.logging.file.is_none());
        assert_eq!(config.app.name, "stock-analysis");
    }
}
