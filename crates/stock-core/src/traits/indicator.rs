//! Indicator trait definitions.

use crate::error::ValidationError;
use crate::types::IndicatorSeries;

/// Check that every price is finite and non-negative and that there is at
/// least one of them.
pub(crate) fn validate_prices(data: &[f64]) -> Result<(), ValidationError> {
    if data.is_empty() {
        return Err(ValidationError::EmptySeries);
    }
    if let Some((index, &value)) = data
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite() || **v < 0.0)
    {
        return Err(ValidationError::InvalidPrice { index, value });
    }
    Ok(())
}

/// Trait for technical indicators.
///
/// Indicators process price data and produce a derived series of the same
/// length, with undefined positions in the warm-up region.
pub trait Indicator: Send + Sync {
    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically close prices), oldest first
    ///
    /// # Returns
    /// A series aligned index-by-index with `data`
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, ValidationError>;

    /// Number of leading positions left undefined.
    fn warmup(&self) -> usize;

    /// Column name of the produced series.
    fn name(&self) -> String;

    /// Validate the input before calculation.
    fn validate_data(&self, data: &[f64]) -> Result<(), ValidationError> {
        validate_prices(data)
    }
}

/// Multi-output indicator (e.g. MACD).
///
/// Some indicators produce multiple related series.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple series.
    type Outputs;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Result<Self::Outputs, ValidationError>;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate the input before calculation.
    fn validate_data(&self, data: &[f64]) -> Result<(), ValidationError> {
        validate_prices(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RunningMax;

    impl Indicator for RunningMax {
        fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, ValidationError> {
            self.validate_data(data)?;
            let mut max = f64::NEG_INFINITY;
            let values = data
                .iter()
                .map(|&v| {
                    max = max.max(v);
                    Some(max)
                })
                .collect();
            Ok(IndicatorSeries::new(self.name(), values))
        }

        fn warmup(&self) -> usize {
            0
        }

        fn name(&self) -> String {
            "MAX".to_string()
        }
    }

    #[test]
    fn test_indicator_validation() {
        let indicator = RunningMax;

        assert_eq!(
            indicator.validate_data(&[]).unwrap_err(),
            ValidationError::EmptySeries
        );
        assert!(matches!(
            indicator.validate_data(&[1.0, f64::INFINITY]),
            Err(ValidationError::InvalidPrice { index: 1, .. })
        ));
        assert!(indicator.validate_data(&[1.0, 2.0, 0.0]).is_ok());
    }

    #[test]
    fn test_indicator_calculate() {
        let result = RunningMax.calculate(&[1.0, 3.0, 2.0]).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.values(), &[Some(1.0), Some(3.0), Some(3.0)]);
    }
}
