use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// One OHLC bar from the markets backend. The wire format carries unix
/// seconds, matching what the candlestick chart consumes directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

impl Bar {
    /// Decodes the backend's bars payload.
    pub fn parse_bars(payload: &str) -> Result<Vec<Bar>> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// A single point of an indicator overlay line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
    pub value: Decimal,
}
