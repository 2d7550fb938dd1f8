//! CSV price source.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use stock_core::error::DataError;
use stock_core::traits::PriceSource;
use stock_core::types::{HistoryRange, PricePoint, PriceSeries};
use tracing::{debug, warn};

/// CSV record format. Columns other than date and close are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(
        rename = "Date",
        alias = "date",
        alias = "Datetime",
        alias = "timestamp",
        alias = "Timestamp"
    )]
    date: String,
    #[serde(rename = "Close", alias = "close")]
    close: Option<f64>,
}

/// CSV price source for historical data.
///
/// Expects a header row with at least a date and a close column, as written
/// by common market-data exporters.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    path: PathBuf,
}

impl CsvPriceSource {
    /// Create a new CSV source for an existing file.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DataError::NoDataAvailable(format!(
                "{} does not exist",
                path.display()
            )));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Source for `<dir>/<symbol>_historical_data.csv`.
    pub fn for_symbol(dir: impl AsRef<Path>, symbol: &str) -> Result<Self, DataError> {
        Self::new(Self::historical_path(dir, symbol))
    }

    /// Conventional file name for a symbol's history.
    pub fn historical_path(dir: impl AsRef<Path>, symbol: &str) -> PathBuf {
        dir.as_ref().join(format!("{}_historical_data.csv", symbol))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate the whole file.
    pub fn load(&self, symbol: &str) -> Result<PriceSeries, DataError> {
        let file = std::fs::File::open(&self.path)?;
        let points = read_points(file)?;
        debug!(
            "Loaded {} rows for {} from {}",
            points.len(),
            symbol,
            self.path.display()
        );
        Ok(PriceSeries::new(symbol, points)?)
    }
}

#[async_trait]
impl PriceSource for CsvPriceSource {
    async fn fetch(&self, symbol: &str, _range: HistoryRange) -> Result<PriceSeries, DataError> {
        let source = self.clone();
        let symbol = symbol.to_string();
        tokio::task::spawn_blocking(move || source.load(&symbol))
            .await
            .map_err(|e| DataError::Io(std::io::Error::other(e)))?
    }

    fn name(&self) -> &str {
        "csv"
    }
}

/// Read price points from CSV text, sorted by timestamp.
fn read_points<R: Read>(reader: R) -> Result<Vec<PricePoint>, DataError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    let mut skipped = 0usize;

    for result in reader.deserialize() {
        let record: CsvRecord = result.map_err(|e| DataError::Parse(e.to_string()))?;

        let Some(close) = record.close else {
            skipped += 1;
            continue;
        };

        points.push(PricePoint::new(parse_timestamp(&record.date)?, close));
    }

    if skipped > 0 {
        warn!("Skipped {} rows without a close price", skipped);
    }

    // Stable, so equal timestamps keep file order
    points.sort_by_key(|p| p.timestamp);

    Ok(points)
}

/// Parse various timestamp formats.
fn parse_timestamp(date_str: &str) -> Result<DateTime<Utc>, DataError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.with_timezone(&Utc));
    }
    // Exchange-local timestamps with offset, e.g. 2024-01-02 00:00:00-05:00
    if let Ok(dt) = DateTime::parse_from_str(date_str, "%Y-%m-%d %H:%M:%S%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Ok(dt.and_utc());
        }
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(date_str, format) {
            return Ok(d.and_time(NaiveTime::MIN).and_utc());
        }
    }

    // Try parsing as Unix timestamp
    if let Ok(ts) = date_str.parse::<i64>() {
        // Assume milliseconds if > 10 digits
        let dt = if ts > 10_000_000_000 {
            DateTime::from_timestamp_millis(ts)
        } else {
            DateTime::from_timestamp(ts, 0)
        };
        if let Some(dt) = dt {
            return Ok(dt);
        }
    }

    Err(DataError::Parse(format!("Could not parse date: {}", date_str)))
}
