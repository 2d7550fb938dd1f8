//! History window for remote price requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How much daily history to request from a remote source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HistoryRange {
    #[serde(rename = "1mo")]
    Month1,
    #[serde(rename = "3mo")]
    Month3,
    #[serde(rename = "6mo")]
    Month6,
    #[serde(rename = "1y")]
    Year1,
    #[serde(rename = "2y")]
    Year2,
    #[serde(rename = "5y")]
    #[default]
    Year5,
    #[serde(rename = "10y")]
    Year10,
    /// Year to date
    #[serde(rename = "ytd")]
    YearToDate,
    /// Full available history
    #[serde(rename = "max")]
    Max,
}

impl HistoryRange {
    /// Short code used in query strings and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryRange::Month1 => "1mo",
            HistoryRange::Month3 => "3mo",
            HistoryRange::Month6 => "6mo",
            HistoryRange::Year1 => "1y",
            HistoryRange::Year2 => "2y",
            HistoryRange::Year5 => "5y",
            HistoryRange::Year10 => "10y",
            HistoryRange::YearToDate => "ytd",
            HistoryRange::Max => "max",
        }
    }

    /// Get all available ranges.
    pub fn all() -> &'static [HistoryRange] {
        &[
            HistoryRange::Month1,
            HistoryRange::Month3,
            HistoryRange::Month6,
            HistoryRange::Year1,
            HistoryRange::Year2,
            HistoryRange::Year5,
            HistoryRange::Year10,
            HistoryRange::YearToDate,
            HistoryRange::Max,
        ]
    }
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HistoryRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1mo" | "1month" => Ok(HistoryRange::Month1),
            "3mo" | "3month" => Ok(HistoryRange::Month3),
            "6mo" | "6month" => Ok(HistoryRange::Month6),
            "1y" | "1year" => Ok(HistoryRange::Year1),
            "2y" | "2year" => Ok(HistoryRange::Year2),
            "5y" | "5year" => Ok(HistoryRange::Year5),
            "10y" | "10year" => Ok(HistoryRange::Year10),
            "ytd" => Ok(HistoryRange::YearToDate),
            "max" | "all" => Ok(HistoryRange::Max),
            _ => Err(format!("Invalid history range: {}", s)),
        }
    }
}
