//! Core types and traits for stock analysis.
//!
//! This crate provides the foundational building blocks including:
//! - Price data types (PricePoint, PriceSeries)
//! - Aligned indicator output (IndicatorSeries)
//! - Core traits for indicators and price sources
//! - The validation and data error taxonomy

pub mod types;
pub mod traits;
pub mod error;

pub use error::{AnalysisError, AnalysisResult, DataError, ValidationError};
pub use types::*;
pub use traits::*;
