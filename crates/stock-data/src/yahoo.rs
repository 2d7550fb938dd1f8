//! Remote daily history from the Yahoo Finance chart API.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use stock_core::error::DataError;
use stock_core::traits::PriceSource;
use stock_core::types::{HistoryRange, PricePoint, PriceSeries};
use tracing::{debug, info, warn};

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

/// Price source backed by the Yahoo Finance v8 chart endpoint.
pub struct YahooPriceSource {
    client: Client,
    base_url: String,
}

impl YahooPriceSource {
    pub const DEFAULT_BASE_URL: &'static str = "https://query1.finance.yahoo.com";

    /// Create a new source against `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("stock-analysis/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DataError::Network(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Create a source around an already configured client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn chart_url(&self, symbol: &str, range: HistoryRange) -> String {
        format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol, range
        )
    }

    /// Parse a chart API response body into a validated series.
    fn parse_chart(symbol: &str, body: &str) -> Result<PriceSeries, DataError> {
        let response: ChartResponse =
            serde_json::from_str(body).map_err(|e| DataError::Parse(e.to_string()))?;

        if let Some(error) = response.chart.error {
            return Err(DataError::SymbolNotFound(format!(
                "{} ({}: {})",
                symbol, error.code, error.description
            )));
        }

        let result = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| DataError::NoDataAvailable(format!("empty chart for {}", symbol)))?;

        let closes = result
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        if closes.len() != result.timestamp.len() {
            warn!(
                "{}: {} timestamps but {} closes",
                symbol,
                result.timestamp.len(),
                closes.len()
            );
        }

        let mut points = Vec::with_capacity(closes.len());
        for (&ts, close) in result.timestamp.iter().zip(closes) {
            // Holidays and halted sessions come back as null
            let Some(close) = close else { continue };
            let timestamp = DateTime::from_timestamp(ts, 0)
                .ok_or_else(|| DataError::Parse(format!("Invalid timestamp: {}", ts)))?;
            points.push(PricePoint::new(timestamp, close));
        }

        Ok(PriceSeries::new(symbol, points)?)
    }
}

#[async_trait]
impl PriceSource for YahooPriceSource {
    async fn fetch(&self, symbol: &str, range: HistoryRange) -> Result<PriceSeries, DataError> {
        let url = self.chart_url(symbol, range);
        debug!("Requesting {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DataError::Network(e.to_string()))?;

        // Unknown symbols come back as 404 with a chart.error payload
        match Self::parse_chart(symbol, &body) {
            Err(DataError::Parse(_)) if !status.is_success() => {
                Err(DataError::Network(format!("HTTP {} from {}", status, url)))
            }
            Ok(series) => {
                info!("Fetched {} daily closes for {} ({})", series.len(), symbol, range);
                Ok(series)
            }
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}
