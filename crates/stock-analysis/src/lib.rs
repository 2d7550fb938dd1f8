//! Indicator tables and summary reports over price series.
//!
//! An [`AnalysisFrame`] pairs a validated price series with named indicator
//! columns. Builders in this crate never mutate a frame in place: each one
//! consumes a frame and returns the augmented result.

mod frame;
mod prepare;
mod report;
mod settings;

pub use frame::{AnalysisFrame, FrameRow};
pub use prepare::{moving_averages, prepare, with_macd, with_returns, with_rsi};
pub use report::{AnalysisReport, LatestValue, MacdBias, ReturnStats, RsiZone};
pub use settings::IndicatorSettings;
