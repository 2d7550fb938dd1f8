//! Price series augmented with named indicator columns.

use chrono::{DateTime, Timelike, Utc};
use serde::Serialize;
use std::io::Write;
use stock_core::{AnalysisError, IndicatorSeries, PriceSeries, ValidationError};

/// One row of an [`AnalysisFrame`], in column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameRow {
    pub timestamp: DateTime<Utc>,
    pub close: f64,
    pub values: Vec<Option<f64>>,
}

/// A price series plus derived columns, all of the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisFrame {
    series: PriceSeries,
    columns: Vec<IndicatorSeries>,
}

impl AnalysisFrame {
    /// Frame with no derived columns yet.
    pub fn new(series: PriceSeries) -> Self {
        Self {
            series,
            columns: Vec::new(),
        }
    }

    pub fn series(&self) -> &PriceSeries {
        &self.series
    }

    pub fn symbol(&self) -> &str {
        self.series.symbol()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn columns(&self) -> &[IndicatorSeries] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&IndicatorSeries> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Add a column, replacing any existing column with the same name.
    pub fn with_column(mut self, column: IndicatorSeries) -> Result<Self, ValidationError> {
        if column.len() != self.len() {
            return Err(ValidationError::LengthMismatch {
                expected: self.len(),
                actual: column.len(),
            });
        }

        match self.columns.iter_mut().find(|c| c.name() == column.name()) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        Ok(self)
    }

    /// Add several columns in order.
    pub fn with_columns(
        self,
        columns: impl IntoIterator<Item = IndicatorSeries>,
    ) -> Result<Self, ValidationError> {
        columns.into_iter().try_fold(self, |frame, c| frame.with_column(c))
    }

    /// Iterate rows oldest first.
    pub fn rows(&self) -> impl Iterator<Item = FrameRow> + '_ {
        self.series.iter().enumerate().map(move |(i, point)| FrameRow {
            timestamp: point.timestamp,
            close: point.close,
            values: self.columns.iter().map(|c| c.get(i)).collect(),
        })
    }

    /// Write `Date,Close,<columns>` CSV; undefined values become empty cells.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), AnalysisError> {
        let mut writer = csv::Writer::from_writer(writer);

        let mut header = vec!["Date", "Close"];
        header.extend(self.column_names());
        writer.write_record(&header).map_err(csv_error)?;

        for row in self.rows() {
            let mut record = Vec::with_capacity(row.values.len() + 2);
            record.push(format_date(row.timestamp));
            record.push(row.close.to_string());
            record.extend(
                row.values
                    .iter()
                    .map(|v| v.map(|v| v.to_string()).unwrap_or_default()),
            );
            writer.write_record(&record).map_err(csv_error)?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn csv_error(e: csv::Error) -> AnalysisError {
    AnalysisError::Serialization(e.to_string())
}

/// Plain date for daily bars, full RFC 3339 otherwise.
fn format_date(ts: DateTime<Utc>) -> String {
    if ts.num_seconds_from_midnight() == 0 {
        ts.format("%Y-%m-%d").to_string()
    } else {
        ts.to_rfc3339()
    }
}
