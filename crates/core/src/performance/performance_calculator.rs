use chrono::Datelike;
use log::warn;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::performance_model::{
    CumulativeCurve, CurvePoint, CurveSet, DailyReturnRow, KpiSummary, RollupGroup, Rollups,
};
use crate::constants::{DECIMAL_PRECISION, TRADING_DAYS_PER_MONTH, TRADING_DAYS_PER_WEEK};

const PERCENT_SCALE: Decimal = dec!(100);

/// Normalizes percent-like inputs: accepts `0.0876` or `8.76` and always
/// returns `0.0876`. `None` maps to zero.
///
/// The `|x| > 1` rule cannot distinguish a genuine >100% daily return from
/// a value already expressed in percentage units. The ambiguity comes from
/// the upstream source, which emits both unit conventions; it is a
/// documented limitation, not something to fix here.
pub fn normalize_pct(value: Option<Decimal>) -> Decimal {
    match value {
        Some(v) if v.abs() > Decimal::ONE => v / PERCENT_SCALE,
        Some(v) => v,
        None => Decimal::ZERO,
    }
}

/// Compounds a growth-of-$1 curve from daily returns, in row order.
///
/// Missing returns count as flat days. Stored values are rounded to
/// [`DECIMAL_PRECISION`]; the running accumulator is not, so rounding does
/// not compound.
pub fn accumulate_curve<F>(rows: &[DailyReturnRow], selector: F) -> CumulativeCurve
where
    F: Fn(&DailyReturnRow) -> Option<Decimal>,
{
    let mut curve = Vec::with_capacity(rows.len());
    let mut acc = Decimal::ONE;
    for row in rows {
        acc *= Decimal::ONE + normalize_pct(selector(row));
        curve.push(CurvePoint {
            date: row.day,
            value: acc.round_dp(DECIMAL_PRECISION),
        });
    }
    curve
}

/// Accumulates the portfolio and both benchmark curves from the same rows.
pub fn accumulate_curve_set(rows: &[DailyReturnRow]) -> CurveSet {
    CurveSet {
        portfolio: accumulate_curve(rows, |r| r.portfolio_ret),
        benchmark_a: accumulate_curve(rows, |r| r.benchmark_a_ret),
        benchmark_b: accumulate_curve(rows, |r| r.benchmark_b_ret),
    }
}

/// Fractional change of the curve over the trailing `lookback_days` points.
///
/// A lookback reaching the first point measures the full-history change,
/// against the 1.0 base the accumulator started from. Returns zero for an
/// empty curve or a zero reference value; never panics.
pub fn windowed_change(curve: &[CurvePoint], lookback_days: usize) -> Decimal {
    let last = match curve.last() {
        Some(l) => l,
        None => return Decimal::ZERO,
    };

    let reference = if lookback_days + 1 >= curve.len() {
        Decimal::ONE
    } else {
        curve[curve.len() - 1 - lookback_days].value
    };

    if reference.is_zero() {
        return Decimal::ZERO;
    }
    last.value / reference - Decimal::ONE
}

/// Year-to-date change: from the first curve point in the final point's
/// calendar year to the final point.
///
/// When tracking started mid-year (the year's first point is also the
/// curve's first), this equals the since-start change.
pub fn ytd_change(curve: &[CurvePoint]) -> Decimal {
    let last = match curve.last() {
        Some(l) => l,
        None => return Decimal::ZERO,
    };

    let year = last.date.year();
    let from_idx = curve
        .iter()
        .position(|p| p.date.year() == year)
        .unwrap_or(0);
    if from_idx == 0 {
        return windowed_change(curve, curve.len() - 1);
    }

    let reference = curve[from_idx].value;
    if reference.is_zero() {
        return Decimal::ZERO;
    }
    last.value / reference - Decimal::ONE
}

/// Resolves the dashboard header KPIs, preferring backend rollups and
/// falling back to curve-derived windows.
///
/// A backend value of zero is respected; only a missing value falls back.
/// Rollup values pass through [`normalize_pct`] since the backend emits
/// both unit conventions.
pub fn resolve_kpis(rollups: Option<&Rollups>, curve: &[CurvePoint]) -> KpiSummary {
    if curve.is_empty() {
        warn!("resolve_kpis called with an empty curve; fallback KPIs are zero");
    }

    let pick = |group: Option<&RollupGroup>| {
        group
            .and_then(|g| g.portfolio)
            .map(|v| normalize_pct(Some(v)))
    };

    let since_start = pick(rollups.and_then(|r| r.since_start.as_ref()))
        .unwrap_or_else(|| windowed_change(curve, curve.len().saturating_sub(1)));
    let last_30d = pick(rollups.and_then(|r| r.last_30d.as_ref()))
        .unwrap_or_else(|| windowed_change(curve, TRADING_DAYS_PER_MONTH));
    let last_7d = pick(rollups.and_then(|r| r.last_7d.as_ref()))
        .unwrap_or_else(|| windowed_change(curve, TRADING_DAYS_PER_WEEK));
    let ytd = pick(rollups.and_then(|r| r.ytd.as_ref())).unwrap_or_else(|| ytd_change(curve));

    KpiSummary {
        since_start,
        last_30d,
        last_7d,
        ytd,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(year: i32, month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, d).unwrap()
    }

    fn rows_with(returns: &[Option<Decimal>]) -> Vec<DailyReturnRow> {
        returns
            .iter()
            .enumerate()
            .map(|(i, ret)| DailyReturnRow {
                day: day(2024, 1, 1) + chrono::Duration::days(i as i64),
                portfolio_ret: *ret,
                benchmark_a_ret: None,
                benchmark_b_ret: None,
            })
            .collect()
    }

    #[test]
    fn test_normalize_pct() {
        assert_eq!(normalize_pct(Some(dec!(0.05))), dec!(0.05));
        assert_eq!(normalize_pct(Some(dec!(5))), dec!(0.05));
        assert_eq!(normalize_pct(Some(dec!(-8.76))), dec!(-0.0876));
        assert_eq!(normalize_pct(Some(dec!(-0.3))), dec!(-0.3));
        assert_eq!(normalize_pct(Some(dec!(1))), dec!(1));
        assert_eq!(normalize_pct(None), Decimal::ZERO);
    }

    #[test]
    fn test_accumulate_curve_all_null_is_flat() {
        let rows = rows_with(&[None, None, None]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        assert_eq!(curve.len(), 3);
        for point in &curve {
            assert_eq!(point.value, Decimal::ONE);
        }
    }

    #[test]
    fn test_accumulate_curve_compounds_in_order() {
        let rows = rows_with(&[Some(dec!(0.10)), Some(dec!(-0.50))]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        assert_eq!(curve[0].value, dec!(1.10));
        assert_eq!(curve[1].value, dec!(0.55));
    }

    #[test]
    fn test_accumulate_curve_normalizes_percent_units() {
        // 10 (percent units) compounds the same as 0.10
        let rows = rows_with(&[Some(dec!(10))]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        assert_eq!(curve[0].value, dec!(1.10));
    }

    #[test]
    fn test_ten_days_of_one_percent() {
        let rows = rows_with(&[Some(dec!(0.01)); 10]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        // 1.01^10 = 1.10462212..., rounded to 6 dp on storage
        assert_eq!(curve.last().unwrap().value, dec!(1.104622));
        assert_eq!(windowed_change(&curve, 9), dec!(0.104622));
    }

    #[test]
    fn test_windowed_change_partial_window() {
        let rows = rows_with(&[Some(dec!(0.01)); 10]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        // Reference is the point 2 days back: 1.01^10 / 1.01^8 - 1
        let change = windowed_change(&curve, 2);
        let expected = curve.last().unwrap().value / curve[7].value - Decimal::ONE;
        assert_eq!(change, expected);
    }

    #[test]
    fn test_windowed_change_degenerate_inputs() {
        assert_eq!(windowed_change(&Vec::new(), 30), Decimal::ZERO);

        let zero_curve = vec![
            CurvePoint { date: day(2024, 1, 1), value: Decimal::ZERO },
            CurvePoint { date: day(2024, 1, 2), value: Decimal::ZERO },
        ];
        assert_eq!(windowed_change(&zero_curve, 1), Decimal::ZERO);
    }

    #[test]
    fn test_windowed_change_zero_lookback_is_flat() {
        let rows = rows_with(&[Some(dec!(0.01)); 5]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        assert_eq!(windowed_change(&curve, 0), Decimal::ZERO);
    }

    #[test]
    fn test_ytd_change_from_year_boundary() {
        // Two flat years of history, then +10% on the final day.
        let mut curve: CumulativeCurve = Vec::new();
        let mut date = day(2023, 12, 29);
        for _ in 0..5 {
            curve.push(CurvePoint { date, value: Decimal::ONE });
            date = date.succ_opt().unwrap();
        }
        curve.push(CurvePoint { date, value: dec!(1.10) });

        // First point of 2024 is mid-curve, so YTD excludes 2023 history.
        assert_eq!(ytd_change(&curve), dec!(0.10));
    }

    #[test]
    fn test_ytd_change_mid_year_start_equals_since_start() {
        let rows = rows_with(&[Some(dec!(0.01)); 10]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        assert_eq!(ytd_change(&curve), windowed_change(&curve, curve.len() - 1));
    }

    #[test]
    fn test_resolve_kpis_prefers_rollups() {
        let rows = rows_with(&[Some(dec!(0.01)); 10]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        let rollups = Rollups {
            since_start: Some(RollupGroup {
                portfolio: Some(dec!(12.5)),
                ..Default::default()
            }),
            // A real zero from the backend must not fall back.
            last_7d: Some(RollupGroup {
                portfolio: Some(Decimal::ZERO),
                ..Default::default()
            }),
            ..Default::default()
        };

        let kpis = resolve_kpis(Some(&rollups), &curve);
        assert_eq!(kpis.since_start, dec!(0.125));
        assert_eq!(kpis.last_7d, Decimal::ZERO);
        // Missing groups fall back to curve windows.
        assert_eq!(kpis.last_30d, windowed_change(&curve, TRADING_DAYS_PER_MONTH));
        assert_eq!(kpis.ytd, ytd_change(&curve));
    }

    #[test]
    fn test_resolve_kpis_without_rollups() {
        let rows = rows_with(&[Some(dec!(0.01)); 10]);
        let curve = accumulate_curve(&rows, |r| r.portfolio_ret);
        let kpis = resolve_kpis(None, &curve);
        assert_eq!(kpis.since_start, dec!(0.104622));
        assert_eq!(kpis.last_7d, windowed_change(&curve, TRADING_DAYS_PER_WEEK));
    }

    #[test]
    fn test_resolve_kpis_empty_curve() {
        let kpis = resolve_kpis(None, &Vec::new());
        assert_eq!(kpis.since_start, Decimal::ZERO);
        assert_eq!(kpis.last_30d, Decimal::ZERO);
        assert_eq!(kpis.last_7d, Decimal::ZERO);
        assert_eq!(kpis.ytd, Decimal::ZERO);
    }

    #[test]
    fn test_accumulate_curve_set_selects_fields() {
        let mut rows = rows_with(&[Some(dec!(0.10))]);
        rows[0].benchmark_a_ret = Some(dec!(0.20));
        let set = accumulate_curve_set(&rows);
        assert_eq!(set.portfolio[0].value, dec!(1.10));
        assert_eq!(set.benchmark_a[0].value, dec!(1.20));
        // Missing benchmark B stays flat
        assert_eq!(set.benchmark_b[0].value, Decimal::ONE);
    }
}
