//! Indicator parameters.

use serde::{Deserialize, Serialize};
use stock_core::ValidationError;
use stock_indicators::{Ema, Macd, Rsi, Sma};

/// Parameters for every indicator computed by [`crate::prepare`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub sma_window: usize,
    pub ema_span: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    /// RSI at or above this is overbought
    pub rsi_overbought: f64,
    /// RSI at or below this is oversold
    pub rsi_oversold: f64,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            sma_window: 20,
            ema_span: 50,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
        }
    }
}

impl IndicatorSettings {
    /// Check every parameter without touching any data.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Sma::new(self.sma_window)?;
        Ema::new(self.ema_span)?;
        Rsi::new(self.rsi_period)?;
        Macd::with_spans(self.macd_fast, self.macd_slow, self.macd_signal)?;

        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(self.rsi_oversold)
            || !in_range(self.rsi_overbought)
            || self.rsi_oversold >= self.rsi_overbought
        {
            return Err(ValidationError::InvalidParameters(format!(
                "RSI thresholds must satisfy 0 <= oversold ({}) < overbought ({}) <= 100",
                self.rsi_oversold, self.rsi_overbought
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = IndicatorSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.sma_window, 20);
        assert_eq!(settings.ema_span, 50);
        assert_eq!(settings.rsi_period, 14);
        assert_eq!(
            (settings.macd_fast, settings.macd_slow, settings.macd_signal),
            (12, 26, 9)
        );
    }

    #[test]
    fn test_zero_window_invalid() {
        let settings = IndicatorSettings {
            sma_window: 0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ValidationError::InvalidParameter { name: "window", .. })
        ));
    }

    #[test]
    fn test_inverted_thresholds_invalid() {
        let settings = IndicatorSettings {
            rsi_overbought: 30.0,
            rsi_oversold: 70.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
