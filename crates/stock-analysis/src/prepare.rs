//! Pure builders that add indicator columns to a frame.

use stock_core::traits::{Indicator, MultiOutputIndicator};
use stock_core::{PriceSeries, ValidationError};
use stock_indicators::{DailyReturns, Ema, Macd, Rsi, Sma};
use tracing::debug;

use crate::frame::AnalysisFrame;
use crate::settings::IndicatorSettings;

fn add_indicator(
    frame: AnalysisFrame,
    indicator: &dyn Indicator,
) -> Result<AnalysisFrame, ValidationError> {
    let column = indicator.calculate(&frame.series().closes())?;
    debug!(
        "{}: computed {} ({} defined of {})",
        frame.symbol(),
        column.name(),
        column.defined_count(),
        column.len()
    );
    frame.with_column(column)
}

/// Add `SMA_<short_window>` and `EMA_<long_span>`.
pub fn moving_averages(
    frame: AnalysisFrame,
    short_window: usize,
    long_span: usize,
) -> Result<AnalysisFrame, ValidationError> {
    let sma = Sma::new(short_window)?;
    let ema = Ema::new(long_span)?;
    let frame = add_indicator(frame, &sma)?;
    add_indicator(frame, &ema)
}

/// Add `RSI`.
pub fn with_rsi(frame: AnalysisFrame, period: usize) -> Result<AnalysisFrame, ValidationError> {
    add_indicator(frame, &Rsi::new(period)?)
}

/// Add `MACD`, `MACD_signal` and `MACD_hist`.
pub fn with_macd(
    frame: AnalysisFrame,
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<AnalysisFrame, ValidationError> {
    let macd = Macd::with_spans(fast, slow, signal)?;
    let output = macd.calculate(&frame.series().closes())?;
    frame.with_columns(output.into_columns())
}

/// Add daily `Returns`.
pub fn with_returns(frame: AnalysisFrame) -> Result<AnalysisFrame, ValidationError> {
    add_indicator(frame, &DailyReturns::new())
}

/// Compute every indicator for `series`.
///
/// The series is copied into the frame; the caller's value is untouched.
pub fn prepare(
    series: &PriceSeries,
    settings: &IndicatorSettings,
) -> Result<AnalysisFrame, ValidationError> {
    settings.validate()?;

    let frame = AnalysisFrame::new(series.clone());
    let frame = moving_averages(frame, settings.sma_window, settings.ema_span)?;
    let frame = with_rsi(frame, settings.rsi_period)?;
    let frame = with_macd(
        frame,
        settings.macd_fast,
        settings.macd_slow,
        settings.macd_signal,
    )?;
    with_returns(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use stock_core::PricePoint;

    fn series(len: usize) -> PriceSeries {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let points = (0..len)
            .map(|i| {
                PricePoint::new(
                    start + Duration::days(i as i64),
                    100.0 + (i as f64 * 0.2).sin() * 10.0,
                )
            })
            .collect();
        PriceSeries::new("AAPL", points).unwrap()
    }

    #[test]
    fn test_prepare_adds_all_columns() {
        let frame = prepare(&series(120), &IndicatorSettings::default()).unwrap();

        assert_eq!(
            frame.column_names(),
            vec!["SMA_20", "EMA_50", "RSI", "MACD", "MACD_signal", "MACD_hist", "Returns"]
        );
        for column in frame.columns() {
            assert_eq!(column.len(), 120);
        }
        assert_eq!(frame.column("SMA_20").unwrap().first_defined(), Some(19));
        assert_eq!(frame.column("EMA_50").unwrap().first_defined(), Some(0));
        assert_eq!(frame.column("RSI").unwrap().first_defined(), Some(14));
    }

    #[test]
    fn test_prepare_short_series() {
        let frame = prepare(&series(5), &IndicatorSettings::default()).unwrap();

        assert_eq!(frame.column("SMA_20").unwrap().defined_count(), 0);
        assert_eq!(frame.column("RSI").unwrap().defined_count(), 0);
        assert_eq!(frame.column("MACD").unwrap().defined_count(), 5);
    }

    #[test]
    fn test_prepare_rejects_bad_settings() {
        let settings = IndicatorSettings {
            rsi_period: 0,
            ..Default::default()
        };
        assert!(prepare(&series(30), &settings).is_err());
    }

    #[test]
    fn test_custom_moving_averages() {
        let frame = moving_averages(AnalysisFrame::new(series(30)), 5, 10).unwrap();
        assert_eq!(frame.column_names(), vec!["SMA_5", "EMA_10"]);
    }

    #[test]
    fn test_prepare_is_deterministic() {
        let input = series(80);
        let settings = IndicatorSettings::default();
        assert_eq!(
            prepare(&input, &settings).unwrap(),
            prepare(&input, &settings).unwrap()
        );
    }
}
