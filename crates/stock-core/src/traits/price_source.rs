//! Price source trait definitions.

use crate::error::DataError;
use crate::types::{HistoryRange, PriceSeries};
use async_trait::async_trait;

/// Trait for historical daily price sources.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch historical closes.
    ///
    /// # Arguments
    /// * `symbol` - The symbol to fetch
    /// * `range` - How much history to request; sources backed by a fixed
    ///   file may ignore it
    ///
    /// # Returns
    /// A validated series ordered from oldest to newest
    async fn fetch(&self, symbol: &str, range: HistoryRange) -> Result<PriceSeries, DataError>;

    /// Get the source name.
    fn name(&self) -> &str;
}
