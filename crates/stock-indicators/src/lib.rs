//! Technical indicators over closing-price series.
//!
//! This crate provides the indicator engine:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD)
//! - Daily percentage returns
//!
//! Every indicator is a pure function of its input: the output has the same
//! length as the input, leading warm-up positions are undefined (`None`),
//! and repeated calls on the same data yield identical results.

pub mod momentum;
pub mod moving_average;
pub mod returns;

pub use momentum::{rsi_from_averages, Macd, MacdOutput, MacdPoint, Rsi};
pub use moving_average::{Ema, Sma};
pub use returns::DailyReturns;

use stock_core::ValidationError;

/// Reject a zero window, span or period.
pub(crate) fn check_period(name: &'static str, value: usize) -> Result<usize, ValidationError> {
    if value == 0 {
        return Err(ValidationError::InvalidParameter { name, value });
    }
    Ok(value)
}
