//! Price observations and the validated series that holds them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single closing-price observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Observation time
    pub timestamp: DateTime<Utc>,
    /// Closing price
    pub close: f64,
}

impl PricePoint {
    /// Create a new observation.
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }
}

/// Ordered, validated sequence of closing prices for one symbol.
///
/// Built only through [`PriceSeries::new`], so every instance is non-empty,
/// holds finite non-negative closes and has non-decreasing timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSeries {
    symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Create a series, rejecting empty, non-finite, negative or unsorted input.
    pub fn new(symbol: impl Into<String>, points: Vec<PricePoint>) -> Result<Self, ValidationError> {
        if points.is_empty() {
            return Err(ValidationError::EmptySeries);
        }

        for (index, point) in points.iter().enumerate() {
            if !point.close.is_finite() || point.close < 0.0 {
                return Err(ValidationError::InvalidPrice {
                    index,
                    value: point.close,
                });
            }
            if index > 0 && point.timestamp < points[index - 1].timestamp {
                return Err(ValidationError::NonMonotonicTimestamps { index });
            }
        }

        Ok(Self {
            symbol: symbol.into(),
            points,
        })
    }

    /// Symbol identifier.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a constructed series; kept for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All observations, oldest first.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Extract timestamps as a vector.
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.timestamp).collect()
    }

    /// Oldest observation.
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Newest observation.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Get an iterator over the observations.
    pub fn iter(&self) -> impl Iterator<Item = &PricePoint> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_series_construction() {
        let series = PriceSeries::new(
            "AAPL",
            vec![PricePoint::new(day(2), 100.5), PricePoint::new(day(3), 101.5)],
        )
        .unwrap();

        assert_eq!(series.symbol(), "AAPL");
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.5, 101.5]);
        assert_eq!(series.last().unwrap().timestamp, day(3));
    }

    #[test]
    fn test_empty_series_rejected() {
        let err = PriceSeries::new("AAPL", vec![]).unwrap_err();
        assert_eq!(err, ValidationError::EmptySeries);
    }

    #[test]
    fn test_invalid_prices_rejected() {
        let err = PriceSeries::new(
            "AAPL",
            vec![PricePoint::new(day(2), 100.0), PricePoint::new(day(3), f64::NAN)],
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPrice { index: 1, .. }));

        let err = PriceSeries::new("AAPL", vec![PricePoint::new(day(2), -1.0)]).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPrice { index: 0, .. }));
    }

    #[test]
    fn test_unsorted_timestamps_rejected() {
        let err = PriceSeries::new(
            "AAPL",
            vec![
                PricePoint::new(day(3), 100.0),
                PricePoint::new(day(2), 101.0),
            ],
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::NonMonotonicTimestamps { index: 1 });
    }

    #[test]
    fn test_equal_timestamps_accepted() {
        let series = PriceSeries::new(
            "AAPL",
            vec![PricePoint::new(day(2), 100.0), PricePoint::new(day(2), 100.0)],
        );
        assert!(series.is_ok());
    }

    #[test]
    fn test_point_serialization() {
        let point = PricePoint::new(day(2), 100.0);
        let json = serde_json::to_string(&point).unwrap();
        let back: PricePoint = serde_json::from_str(&json).unwrap();
        assert_eq!(point, back);
    }
}
