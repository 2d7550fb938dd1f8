//! Core traits for stock analysis.

mod indicator;
mod price_source;

pub use indicator::{Indicator, MultiOutputIndicator};
pub use price_source::PriceSource;
