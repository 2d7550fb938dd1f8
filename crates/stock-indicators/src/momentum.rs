//! Momentum indicators.

use serde::{Deserialize, Serialize};
use stock_core::traits::{Indicator, MultiOutputIndicator};
use stock_core::{IndicatorSeries, ValidationError};

use crate::check_period;
use crate::moving_average::{ema_values, span_multiplier};

/// RSI from trailing average gain and loss.
///
/// Zero-division cases resolve in-band:
///
/// | avg_gain | avg_loss | RSI |
/// |----------|----------|-----|
/// | 0        | 0        | 50  |
/// | > 0      | 0        | 100 |
/// | any      | > 0      | `100 - 100 / (1 + gain / loss)` |
///
/// The result is always within `[0, 100]`.
pub fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    let gain = avg_gain.max(0.0);
    let loss = avg_loss.max(0.0);

    if loss == 0.0 {
        if gain == 0.0 {
            50.0
        } else {
            100.0
        }
    } else {
        (100.0 - 100.0 / (1.0 + gain / loss)).clamp(0.0, 100.0)
    }
}

/// Trailing sum of non-negative terms that snaps back to exactly zero once
/// every non-zero term has left the window.
#[derive(Debug, Default)]
struct WindowSum {
    sum: f64,
    nonzero: usize,
}

impl WindowSum {
    fn add(&mut self, value: f64) {
        if value > 0.0 {
            self.sum += value;
            self.nonzero += 1;
        }
    }

    fn remove(&mut self, value: f64) {
        if value > 0.0 {
            self.sum -= value;
            self.nonzero -= 1;
            if self.nonzero == 0 {
                self.sum = 0.0;
            }
        }
    }
}

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions. Gains and losses are
/// averaged with a simple trailing mean over `period` price changes, so the
/// first `period` positions are undefined.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Result<Self, ValidationError> {
        Ok(Self {
            period: check_period("period", period)?,
        })
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Indicator for Rsi {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, ValidationError> {
        self.validate_data(data)?;

        let mut result = vec![None; data.len()];
        if data.len() <= self.period {
            return Ok(IndicatorSeries::new(self.name(), result));
        }

        let period_f64 = self.period as f64;
        let mut gains = WindowSum::default();
        let mut losses = WindowSum::default();

        for i in 1..data.len() {
            let change = data[i] - data[i - 1];
            gains.add(change);
            losses.add(-change);

            // Drop the change that just left the window
            if i > self.period {
                let old = data[i - self.period] - data[i - self.period - 1];
                gains.remove(old);
                losses.remove(-old);
            }

            if i >= self.period {
                result[i] = Some(rsi_from_averages(
                    gains.sum / period_f64,
                    losses.sum / period_f64,
                ));
            }
        }

        Ok(IndicatorSeries::new(self.name(), result))
    }

    fn warmup(&self) -> usize {
        self.period
    }

    fn name(&self) -> String {
        "RSI".to_string()
    }
}

/// MACD value at a single index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
    /// Histogram (MACD - Signal)
    pub histogram: f64,
}

/// MACD output: three series aligned with the input prices.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdOutput {
    /// `MACD`
    pub macd: IndicatorSeries,
    /// `MACD_signal`
    pub signal: IndicatorSeries,
    /// `MACD_hist`
    pub histogram: IndicatorSeries,
}

impl MacdOutput {
    /// Per-index view; positions where any line is undefined are skipped.
    pub fn points(&self) -> impl Iterator<Item = MacdPoint> + '_ {
        self.macd
            .iter()
            .zip(self.signal.iter())
            .zip(self.histogram.iter())
            .filter_map(|((macd, signal), histogram)| {
                Some(MacdPoint {
                    macd: macd?,
                    signal: signal?,
                    histogram: histogram?,
                })
            })
    }

    /// Consume into `[macd, signal, histogram]` columns.
    pub fn into_columns(self) -> [IndicatorSeries; 3] {
        [self.macd, self.signal, self.histogram]
    }
}

/// MACD indicator.
///
/// Uses two EMAs to identify trend direction and momentum. Every line is
/// defined from index 0 because the underlying EMAs are; values before
/// [`Macd::stabilization`] are still dominated by the seed and are best
/// ignored in practice.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_span: usize,
    slow_span: usize,
    signal_span: usize,
}

impl Macd {
    /// Create a new MACD with default parameters (12, 26, 9).
    pub fn new() -> Self {
        Self {
            fast_span: 12,
            slow_span: 26,
            signal_span: 9,
        }
    }

    /// Create a MACD with custom spans.
    pub fn with_spans(fast: usize, slow: usize, signal: usize) -> Result<Self, ValidationError> {
        check_period("fast", fast)?;
        check_period("slow", slow)?;
        check_period("signal", signal)?;
        if fast >= slow {
            return Err(ValidationError::InvalidParameters(format!(
                "fast span ({}) must be less than slow span ({})",
                fast, slow
            )));
        }
        Ok(Self {
            fast_span: fast,
            slow_span: slow,
            signal_span: signal,
        })
    }

    /// Index from which the lines have settled past the seed.
    pub fn stabilization(&self) -> usize {
        self.slow_span + self.signal_span - 1
    }

    pub fn spans(&self) -> (usize, usize, usize) {
        (self.fast_span, self.slow_span, self.signal_span)
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Result<MacdOutput, ValidationError> {
        self.validate_data(data)?;

        let fast_ema = ema_values(data, span_multiplier(self.fast_span));
        let slow_ema = ema_values(data, span_multiplier(self.slow_span));

        let macd_line: Vec<f64> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        // Signal line (EMA of MACD)
        let signal_line = ema_values(&macd_line, span_multiplier(self.signal_span));

        let macd = IndicatorSeries::new("MACD", macd_line.into_iter().map(Some).collect());
        let signal = IndicatorSeries::new("MACD_signal", signal_line.into_iter().map(Some).collect());
        let histogram = macd.checked_sub(&signal, "MACD_hist")?;

        Ok(MacdOutput {
            macd,
            signal,
            histogram,
        })
    }

    fn name(&self) -> &str {
        "MACD"
    }
}
