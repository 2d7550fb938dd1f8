//! Moving average indicators.

use stock_core::traits::Indicator;
use stock_core::{IndicatorSeries, ValidationError};

use crate::check_period;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values. The first N-1
/// positions are undefined.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
}

impl Sma {
    /// Create a new SMA with the specified window.
    pub fn new(window: usize) -> Result<Self, ValidationError> {
        Ok(Self {
            window: check_period("window", window)?,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for Sma {
    fn default() -> Self {
        Self { window: 20 }
    }
}

impl Indicator for Sma {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, ValidationError> {
        self.validate_data(data)?;

        let mut result = vec![None; data.len()];
        if data.len() < self.window {
            return Ok(IndicatorSeries::new(self.name(), result));
        }

        let window_f64 = self.window as f64;

        // Initial sum
        let mut sum: f64 = data[..self.window].iter().sum();
        result[self.window - 1] = Some(sum / window_f64);

        // Sliding window
        for i in self.window..data.len() {
            sum = sum - data[i - self.window] + data[i];
            result[i] = Some(sum / window_f64);
        }

        Ok(IndicatorSeries::new(self.name(), result))
    }

    fn warmup(&self) -> usize {
        self.window - 1
    }

    fn name(&self) -> String {
        format!("SMA_{}", self.window)
    }
}

/// EMA recurrence seeded with the first value, shared with MACD.
///
/// Unlike [`Ema::calculate`] this does not validate, so it can smooth
/// series that go negative (the MACD line).
pub(crate) fn ema_values(data: &[f64], multiplier: f64) -> Vec<f64> {
    let mut result = Vec::with_capacity(data.len());
    let one_minus_mult = 1.0 - multiplier;

    let mut iter = data.iter();
    if let Some(&first) = iter.next() {
        let mut ema = first;
        result.push(ema);
        for &value in iter {
            ema = value * multiplier + ema * one_minus_mult;
            result.push(ema);
        }
    }

    result
}

/// Smoothing factor `2 / (span + 1)`.
#[inline]
pub(crate) fn span_multiplier(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent prices using an exponential decay. Seeded
/// with the first price, so it is defined from index 0 with no warm-up.
#[derive(Debug, Clone)]
pub struct Ema {
    span: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified span.
    pub fn new(span: usize) -> Result<Self, ValidationError> {
        let span = check_period("span", span)?;
        Ok(Self {
            span,
            multiplier: span_multiplier(span),
        })
    }

    pub fn span(&self) -> usize {
        self.span
    }

    /// Smoothing factor alpha.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Default for Ema {
    fn default() -> Self {
        Self {
            span: 50,
            multiplier: span_multiplier(50),
        }
    }
}

impl Indicator for Ema {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, ValidationError> {
        self.validate_data(data)?;

        let values = ema_values(data, self.multiplier)
            .into_iter()
            .map(Some)
            .collect();

        Ok(IndicatorSeries::new(self.name(), values))
    }

    fn warmup(&self) -> usize {
        0
    }

    fn name(&self) -> String {
        format!("EMA_{}", self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let sma = Sma::new(3).unwrap();
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data).unwrap();

        assert_eq!(result.len(), 5);
        assert_eq!(result.name(), "SMA_3");
        assert_eq!(result.get(0), None);
        assert_eq!(result.get(1), None);
        assert!((result.get(2).unwrap() - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result.get(3).unwrap() - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result.get(4).unwrap() - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5).unwrap();
        let data = vec![1.0, 2.0, 3.0];
        let result = sma.calculate(&data).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.defined_count(), 0);
    }

    #[test]
    fn test_sma_window_one_is_identity() {
        let sma = Sma::new(1).unwrap();
        let data = vec![4.0, 7.0, 1.0];
        let result = sma.calculate(&data).unwrap();

        assert_eq!(sma.warmup(), 0);
        assert_eq!(result.values(), &[Some(4.0), Some(7.0), Some(1.0)]);
    }

    #[test]
    fn test_sma_zero_window_rejected() {
        assert_eq!(
            Sma::new(0).unwrap_err(),
            ValidationError::InvalidParameter {
                name: "window",
                value: 0
            }
        );
    }

    #[test]
    fn test_ema() {
        let ema = Ema::new(3).unwrap();
        let data = vec![2.0, 4.0, 6.0, 8.0];
        let result = ema.calculate(&data).unwrap();

        // mult = 2/(3+1) = 0.5
        let expected = [2.0, 3.0, 4.5, 6.25];
        assert_eq!(result.len(), 4);
        for (i, want) in expected.iter().enumerate() {
            assert!((result.get(i).unwrap() - want).abs() < 1e-10);
        }
    }

    #[test]
    fn test_ema_has_no_warmup() {
        let ema = Ema::new(50).unwrap();
        let result = ema.calculate(&[10.0, 11.0]).unwrap();

        assert_eq!(ema.warmup(), 0);
        assert_eq!(result.get(0), Some(10.0));
        assert_eq!(result.defined_count(), 2);
    }

    #[test]
    fn test_ema_rejects_empty_input() {
        let ema = Ema::new(3).unwrap();
        assert_eq!(ema.calculate(&[]).unwrap_err(), ValidationError::EmptySeries);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Sma::default().name(), "SMA_20");
        assert_eq!(Ema::default().name(), "EMA_50");
        assert!((Ema::default().multiplier() - 2.0 / 51.0).abs() < 1e-12);
    }
}
