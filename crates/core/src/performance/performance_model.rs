use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Fractional daily returns for the tracked portfolio and up to two
/// benchmarks on one calendar day.
///
/// `None` means "no observation" and accumulates as a flat day, not as an
/// error. Values may arrive as decimal fractions (`0.0123`) or whole
/// percentages (`1.23`); [`normalize_pct`](super::normalize_pct) reconciles
/// the two on consumption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReturnRow {
    #[serde(alias = "date")]
    pub day: NaiveDate,
    #[serde(default)]
    pub portfolio_ret: Option<Decimal>,
    #[serde(default, alias = "benchmarkA_ret")]
    pub benchmark_a_ret: Option<Decimal>,
    #[serde(default, alias = "benchmarkB_ret")]
    pub benchmark_b_ret: Option<Decimal>,
}

impl DailyReturnRow {
    /// Decodes the backend's daily-return payload.
    pub fn parse_rows(payload: &str) -> Result<Vec<DailyReturnRow>> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// One point of a compounded growth-of-$1 curve. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

pub type CumulativeCurve = Vec<CurvePoint>;

/// The portfolio and benchmark curves accumulated from one row sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSet {
    pub portfolio: CumulativeCurve,
    pub benchmark_a: CumulativeCurve,
    pub benchmark_b: CumulativeCurve,
}

impl CurveSet {
    /// Flattens the set into per-day rows shaped for the equity chart.
    /// All three curves share the dates of the rows they were built from.
    pub fn chart_rows(&self) -> Vec<EquityCurveRow> {
        self.portfolio
            .iter()
            .zip(self.benchmark_a.iter())
            .zip(self.benchmark_b.iter())
            .map(|((p, a), b)| EquityCurveRow {
                date: p.date,
                portfolio: p.value,
                benchmark_a: a.value,
                benchmark_b: b.value,
            })
            .collect()
    }
}

/// Chart-facing row: one day across all curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquityCurveRow {
    pub date: NaiveDate,
    pub portfolio: Decimal,
    pub benchmark_a: Decimal,
    pub benchmark_b: Decimal,
}

/// One named lookback group of the backend's precomputed rollups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RollupGroup {
    pub portfolio: Option<Decimal>,
    pub benchmark_a: Option<Decimal>,
    pub benchmark_b: Option<Decimal>,
}

/// Precomputed summary changes supplied by the backend.
///
/// Every group is optional; a missing group falls back to a curve-derived
/// value during [`resolve_kpis`](super::resolve_kpis). A group that is
/// present but reports zero is respected as a real zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rollups {
    #[serde(default)]
    pub since_start: Option<RollupGroup>,
    #[serde(default)]
    pub last_30d: Option<RollupGroup>,
    #[serde(default)]
    pub last_7d: Option<RollupGroup>,
    #[serde(default)]
    pub ytd: Option<RollupGroup>,
}

impl Rollups {
    /// Decodes the backend's rollups payload.
    pub fn parse(payload: &str) -> Result<Rollups> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Resolved fractional KPI changes for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub since_start: Decimal,
    pub last_30d: Decimal,
    pub last_7d: Decimal,
    pub ytd: Decimal,
}
