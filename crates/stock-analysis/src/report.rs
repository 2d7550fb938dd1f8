//! Summary report over an analysis frame.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;
use stock_core::{IndicatorSeries, ValidationError};
use stock_indicators::MacdPoint;

use crate::frame::AnalysisFrame;
use crate::settings::IndicatorSettings;

/// Trading days per year, used to annualize volatility.
const TRADING_DAYS: f64 = 252.0;

/// Where the latest RSI sits relative to the configured thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiZone {
    Overbought,
    Neutral,
    Oversold,
}

impl RsiZone {
    pub fn classify(rsi: f64, settings: &IndicatorSettings) -> Self {
        if rsi >= settings.rsi_overbought {
            RsiZone::Overbought
        } else if rsi <= settings.rsi_oversold {
            RsiZone::Oversold
        } else {
            RsiZone::Neutral
        }
    }
}

/// Relationship between the MACD line and its signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacdBias {
    Bullish,
    Flat,
    Bearish,
}

impl MacdBias {
    pub fn from_point(point: &MacdPoint) -> Self {
        if point.histogram > 0.0 {
            MacdBias::Bullish
        } else if point.histogram < 0.0 {
            MacdBias::Bearish
        } else {
            MacdBias::Flat
        }
    }
}

/// Latest defined value of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestValue {
    pub name: String,
    pub value: Option<f64>,
}

/// Descriptive statistics of daily returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; zero with fewer than two returns
    pub std_dev: f64,
    pub annualized_volatility: f64,
    pub min: f64,
    pub max: f64,
}

impl ReturnStats {
    /// Statistics over the defined values of a returns column.
    pub fn from_series(returns: &IndicatorSeries) -> Option<Self> {
        let values: Vec<f64> = returns.iter().flatten().collect();
        if values.is_empty() {
            return None;
        }

        let std_dev = if values.len() > 1 {
            values.iter().std_dev()
        } else {
            0.0
        };

        Some(Self {
            count: values.len(),
            mean: values.iter().mean(),
            std_dev,
            annualized_volatility: std_dev * TRADING_DAYS.sqrt(),
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
        })
    }
}

/// Snapshot of the most recent indicator readings for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub symbol: String,
    pub first_date: DateTime<Utc>,
    pub last_date: DateTime<Utc>,
    pub observations: usize,
    pub last_close: f64,
    pub latest: Vec<LatestValue>,
    pub rsi: Option<f64>,
    pub rsi_zone: Option<RsiZone>,
    pub macd: Option<MacdPoint>,
    pub macd_bias: Option<MacdBias>,
    pub returns: Option<ReturnStats>,
}

impl AnalysisReport {
    /// Build a report from whichever columns the frame carries.
    pub fn from_frame(
        frame: &AnalysisFrame,
        settings: &IndicatorSettings,
    ) -> Result<Self, ValidationError> {
        let series = frame.series();
        let (Some(first), Some(last)) = (series.first(), series.last()) else {
            return Err(ValidationError::EmptySeries);
        };

        let latest = frame
            .columns()
            .iter()
            .filter(|c| c.name() != "Returns")
            .map(|c| LatestValue {
                name: c.name().to_string(),
                value: c.latest(),
            })
            .collect();

        let rsi = frame.column("RSI").and_then(|c| c.latest());
        let macd = match (
            frame.column("MACD").and_then(|c| c.latest()),
            frame.column("MACD_signal").and_then(|c| c.latest()),
            frame.column("MACD_hist").and_then(|c| c.latest()),
        ) {
            (Some(macd), Some(signal), Some(histogram)) => Some(MacdPoint {
                macd,
                signal,
                histogram,
            }),
            _ => None,
        };

        Ok(Self {
            symbol: frame.symbol().to_string(),
            first_date: first.timestamp,
            last_date: last.timestamp,
            observations: series.len(),
            last_close: last.close,
            latest,
            rsi,
            rsi_zone: rsi.map(|v| RsiZone::classify(v, settings)),
            macd,
            macd_bias: macd.as_ref().map(MacdBias::from_point),
            returns: frame.column("Returns").and_then(ReturnStats::from_series),
        })
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  TECHNICAL ANALYSIS: {}\n", self.symbol));
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("PRICE\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        s.push_str(&format!(
            "  Period:              {} to {}\n",
            self.first_date.format("%Y-%m-%d"),
            self.last_date.format("%Y-%m-%d")
        ));
        s.push_str(&format!("  Observations:        {}\n", self.observations));
        s.push_str(&format!("  Last Close:          {:.2}\n", self.last_close));
        s.push('\n');

        s.push_str("INDICATORS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        for item in &self.latest {
            let value = item
                .value
                .map(|v| format!("{:.4}", v))
                .unwrap_or_else(|| "n/a (warming up)".to_string());
            s.push_str(&format!("  {:<20} {}\n", format!("{}:", item.name), value));
        }
        if let Some(zone) = self.rsi_zone {
            s.push_str(&format!("  {:<20} {:?}\n", "RSI Zone:", zone));
        }
        if let Some(bias) = self.macd_bias {
            s.push_str(&format!("  {:<20} {:?}\n", "MACD Bias:", bias));
        }
        s.push('\n');

        if let Some(r) = &self.returns {
            s.push_str("DAILY RETURNS\n");
            s.push_str("───────────────────────────────────────────────────────────\n");
            s.push_str(&format!("  Count:               {}\n", r.count));
            s.push_str(&format!("  Mean:                {:.4}%\n", r.mean * 100.0));
            s.push_str(&format!("  Std Dev:             {:.4}%\n", r.std_dev * 100.0));
            s.push_str(&format!(
                "  Annualized Vol:      {:.2}%\n",
                r.annualized_volatility * 100.0
            ));
            s.push_str(&format!("  Worst Day:           {:.2}%\n", r.min * 100.0));
            s.push_str(&format!("  Best Day:            {:.2}%\n", r.max * 100.0));
            s.push('\n');
        }

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s
    }

    /// Convert to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
