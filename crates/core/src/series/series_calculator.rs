use log::debug;
use rust_decimal::Decimal;

use super::series_model::{DatedPoint, Range};
use crate::constants::SERIES_VALUE_PRECISION;

/// Fills missing calendar days between observations via linear interpolation.
///
/// Input may arrive unordered; the result is a contiguous daily series
/// spanning the input's full date range, so longer range windows keep
/// working even when only a few weeks were actually recorded. Original
/// observations pass through untouched; synthesized values are rounded to
/// two decimal places.
///
/// Empty input yields empty output; a single point is returned as-is.
pub fn fill_daily(points: &[DatedPoint]) -> Vec<DatedPoint> {
    if points.is_empty() {
        return Vec::new();
    }

    let mut sorted = points.to_vec();
    // Stable sort: duplicate dates keep their input order.
    sorted.sort_by_key(|p| p.date);

    let mut out: Vec<DatedPoint> = Vec::with_capacity(sorted.len());
    let mut synthesized = 0usize;

    for window in sorted.windows(2) {
        let cur = &window[0];
        let next = &window[1];
        out.push(cur.clone());

        let gap_days = (next.date - cur.date).num_days();
        if gap_days <= 1 {
            continue;
        }

        let span = next.value - cur.value;
        let gap = Decimal::from(gap_days);
        let mut date = cur.date;
        for k in 1..gap_days {
            date = match date.succ_opt() {
                Some(d) => d,
                None => break,
            };
            let value = cur.value + (span * Decimal::from(k)) / gap;
            out.push(DatedPoint::new(
                date,
                value.round_dp(SERIES_VALUE_PRECISION),
            ));
            synthesized += 1;
        }
    }

    if let Some(last) = sorted.last() {
        out.push(last.clone());
    }

    if synthesized > 0 {
        debug!(
            "fill_daily synthesized {} points across {} observations",
            synthesized,
            sorted.len()
        );
    }

    out
}

/// Returns the trailing window of `series` selected by `range`. A series
/// shorter than the window is returned whole; no padding, no error.
pub fn slice_for_range(series: &[DatedPoint], range: Range) -> &[DatedPoint] {
    match range.window_days() {
        Some(window) => &series[series.len().saturating_sub(window)..],
        None => series,
    }
}
