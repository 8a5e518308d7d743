use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Configuration for the demo equity-series factory.
///
/// Construct once and hand to
/// [`generate_equity_series`](super::generate_equity_series); the same
/// config always yields the same series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquitySeriesConfig {
    pub seed: u64,
    pub days: usize,
    pub start_date: NaiveDate,
    pub start_value: Decimal,
}

impl Default for EquitySeriesConfig {
    fn default() -> Self {
        Self {
            seed: 7,
            days: 365,
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            start_value: dec!(100),
        }
    }
}
