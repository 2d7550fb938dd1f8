//! Configuration structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stock_analysis::IndicatorSettings;
use stock_core::{HistoryRange, ValidationError};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub indicators: IndicatorSettings,
    #[serde(default)]
    pub chart: ChartSettings,
}

impl AppConfig {
    /// Check values that deserialization alone cannot.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.indicators.validate()?;
        if self.data.timeout_secs == 0 {
            return Err(ValidationError::InvalidParameter {
                name: "data.timeout_secs",
                value: 0,
            });
        }
        Ok(())
    }

    /// Render as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stock-analysis".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Which price source to use when none is given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Csv,
    Yahoo,
}

/// Price data settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding `<SYMBOL>_historical_data.csv` files
    pub dir: PathBuf,
    pub source: SourceKind,
    pub range: HistoryRange,
    pub yahoo_base_url: String,
    pub timeout_secs: u64,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            source: SourceKind::Csv,
            range: HistoryRange::Year5,
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Terminal chart settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub refresh_ms: u64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self { refresh_ms: 250 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_invalid() {
        let mut config = AppConfig::default();
        config.data.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig::default();
        let text = config.to_toml().unwrap();
        assert!(text.contains("[indicators]"));
        assert!(text.contains("range = \"5y\""));

        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.indicators, config.indicators);
        assert_eq!(parsed.data.source, SourceKind::Csv);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
[app]
name = "screener"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(parsed.app.name, "screener");
        assert_eq!(parsed.app.environment, "development");
        assert_eq!(parsed.logging.level, "debug");
        assert_eq!(parsed.logging.format, "pretty");
        assert!(parsed.logging.file.is_none());
    }
}
