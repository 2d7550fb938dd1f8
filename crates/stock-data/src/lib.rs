//! Historical price sources for stock analysis.

mod csv_source;
mod yahoo;

pub use csv_source::CsvPriceSource;
pub use yahoo::YahooPriceSource;

use std::path::Path;
use stock_core::error::DataError;
use stock_core::traits::PriceSource;
use stock_core::types::{HistoryRange, PriceSeries};

/// Load a price series from a CSV file.
pub async fn load_csv(path: impl AsRef<Path>, symbol: &str) -> Result<PriceSeries, DataError> {
    let source = CsvPriceSource::new(path)?;
    source.fetch(symbol, HistoryRange::Max).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_csv() {
        let path = std::env::temp_dir().join(format!("stock-data-load-{}.csv", std::process::id()));
        std::fs::write(&path, "Date,Close\n2024-01-03,11.5\n2024-01-02,10.0\n").unwrap();

        let series = load_csv(&path, "IBM").await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(series.symbol(), "IBM");
        assert_eq!(series.closes(), vec![10.0, 11.5]);
    }

    #[tokio::test]
    async fn test_load_csv_missing_file() {
        let err = load_csv("/definitely/not/here.csv", "IBM").await.unwrap_err();
        assert!(matches!(err, DataError::NoDataAvailable(_)));
    }
}
