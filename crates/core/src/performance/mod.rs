//! Performance module - cumulative-return curves and KPI resolution.

mod performance_calculator;
mod performance_model;

// Re-export the public interface
pub use performance_calculator::{
    accumulate_curve, accumulate_curve_set, normalize_pct, resolve_kpis, windowed_change,
    ytd_change,
};
pub use performance_model::{
    CumulativeCurve, CurvePoint, CurveSet, DailyReturnRow, EquityCurveRow, KpiSummary,
    RollupGroup, Rollups,
};
