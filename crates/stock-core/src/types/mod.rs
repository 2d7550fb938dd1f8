//! Core data types for stock analysis.

mod history_range;
mod indicator_series;
mod price_series;

pub use history_range::HistoryRange;
pub use indicator_series::IndicatorSeries;
pub use price_series::{PricePoint, PriceSeries};
