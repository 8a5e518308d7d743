use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, Result};

/// One observation of a scalar metric (index level, equity value) on a
/// specific calendar day.
///
/// The upstream service spells the fields differently per endpoint
/// (`{d, v}`, `{date, equity}`, `{date, value}`); the aliases accept all
/// of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatedPoint {
    #[serde(alias = "d", alias = "day")]
    pub date: NaiveDate,
    #[serde(alias = "v", alias = "equity")]
    pub value: Decimal,
}

impl DatedPoint {
    pub fn new(date: NaiveDate, value: Decimal) -> Self {
        Self { date, value }
    }

    /// Decodes a JSON array of dated points as delivered by the backend.
    pub fn parse_series(payload: &str) -> Result<Vec<DatedPoint>> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Suffix-window selector for a daily series.
///
/// Purely a view parameter held by the caller; nothing is persisted. `MAX`
/// is accepted as an alias of `ALL` since both appear in upstream query
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Range {
    #[serde(rename = "1D")]
    OneDay,
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
    #[serde(rename = "ALL", alias = "MAX")]
    All,
}

impl Range {
    /// Number of trailing elements the range selects; `None` means the
    /// entire series.
    pub fn window_days(&self) -> Option<usize> {
        match self {
            Range::OneDay => Some(1),
            Range::OneMonth => Some(30),
            Range::ThreeMonths => Some(90),
            Range::SixMonths => Some(180),
            Range::OneYear => Some(365),
            Range::All => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Range::OneDay => "1D",
            Range::OneMonth => "1M",
            Range::ThreeMonths => "3M",
            Range::SixMonths => "6M",
            Range::OneYear => "1Y",
            Range::All => "ALL",
        }
    }
}

impl FromStr for Range {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1D" => Ok(Range::OneDay),
            "1M" => Ok(Range::OneMonth),
            "3M" => Ok(Range::ThreeMonths),
            "6M" => Ok(Range::SixMonths),
            "1Y" => Ok(Range::OneYear),
            "ALL" | "MAX" => Ok(Range::All),
            other => Err(Error::InvalidRange(other.to_string())),
        }
    }
}
