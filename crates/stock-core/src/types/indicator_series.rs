//! Derived numeric series aligned with a price series.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Named indicator output, positionally aligned with its input.
///
/// `None` marks an undefined position (warm-up region). Undefined values are
/// never encoded as NaN or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    name: String,
    values: Vec<Option<f64>>,
}

impl IndicatorSeries {
    /// Create a new series.
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column name (e.g. `SMA_20`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All values, including undefined positions.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `index`; `None` when undefined or out of range.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().flatten()
    }

    /// Most recent defined value.
    pub fn latest(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }

    /// Number of defined positions.
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Index of the first defined position.
    pub fn first_defined(&self) -> Option<usize> {
        self.values.iter().position(|v| v.is_some())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values.iter().copied()
    }

    /// Same values under a different column name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Element-wise `self - other`; undefined where either side is undefined.
    pub fn checked_sub(
        &self,
        other: &IndicatorSeries,
        name: impl Into<String>,
    ) -> Result<IndicatorSeries, ValidationError> {
        if self.len() != other.len() {
            return Err(ValidationError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }

        let values = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| match (a, b) {
                (Some(a), Some(b)) => Some(a - b),
                _ => None,
            })
            .collect();

        Ok(IndicatorSeries::new(name, values))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let series = IndicatorSeries::new("SMA_3", vec![None, None, Some(2.0), Some(3.0)]);

        assert_eq!(series.name(), "SMA_3");
        assert_eq!(series.len(), 4);
        assert_eq!(series.get(0), None);
        assert_eq!(series.get(2), Some(2.0));
        assert_eq!(series.get(10), None);
        assert_eq!(series.latest(), Some(3.0));
        assert_eq!(series.defined_count(), 2);
        assert_eq!(series.first_defined(), Some(2));
    }

    #[test]
    fn test_checked_sub() {
        let a = IndicatorSeries::new("a", vec![None, Some(5.0), Some(7.0)]);
        let b = IndicatorSeries::new("b", vec![Some(1.0), Some(2.0), Some(3.0)]);

        let diff = a.checked_sub(&b, "diff").unwrap();
        assert_eq!(diff.name(), "diff");
        assert_eq!(diff.values(), &[None, Some(3.0), Some(4.0)]);
    }

    #[test]
    fn test_checked_sub_length_mismatch() {
        let a = IndicatorSeries::new("a", vec![Some(1.0); 3]);
        let b = IndicatorSeries::new("b", vec![Some(1.0); 2]);

        let err = a.checked_sub(&b, "diff").unwrap_err();
        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_all_undefined() {
        let series = IndicatorSeries::new("x", vec![None; 3]);
        assert_eq!(series.latest(), None);
        assert_eq!(series.first_defined(), None);
    }
}
