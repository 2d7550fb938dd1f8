//! Daily percentage returns.

use stock_core::traits::Indicator;
use stock_core::{IndicatorSeries, ValidationError};

/// Period-over-period fractional change: `p[i] / p[i-1] - 1`.
///
/// The first position is undefined, as is any position whose previous
/// close is zero.
#[derive(Debug, Clone, Default)]
pub struct DailyReturns;

impl DailyReturns {
    pub fn new() -> Self {
        Self
    }
}

impl Indicator for DailyReturns {
    fn calculate(&self, data: &[f64]) -> Result<IndicatorSeries, ValidationError> {
        self.validate_data(data)?;

        let values = std::iter::once(None)
            .chain(data.windows(2).map(|w| {
                if w[0] == 0.0 {
                    None
                } else {
                    Some(w[1] / w[0] - 1.0)
                }
            }))
            .collect();

        Ok(IndicatorSeries::new(self.name(), values))
    }

    fn warmup(&self) -> usize {
        1
    }

    fn name(&self) -> String {
        "Returns".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns() {
        let result = DailyReturns::new().calculate(&[100.0, 110.0, 99.0]).unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(result.get(0), None);
        assert!((result.get(1).unwrap() - 0.10).abs() < 1e-10);
        assert!((result.get(2).unwrap() + 0.10).abs() < 1e-10);
    }

    #[test]
    fn test_returns_after_zero_close_undefined() {
        let result = DailyReturns::new().calculate(&[0.0, 5.0, 10.0]).unwrap();

        assert_eq!(result.get(1), None);
        assert!((result.get(2).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_single_point() {
        let result = DailyReturns::new().calculate(&[42.0]).unwrap();
        assert_eq!(result.values(), &[None]);
    }
}
