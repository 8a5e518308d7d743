/// Decimal precision for cumulative return values
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for interpolated and generated series values
pub const SERIES_VALUE_PRECISION: u32 = 2;

/// Trading-day lookback for the "last week" KPI window
pub const TRADING_DAYS_PER_WEEK: usize = 5;

/// Trading-day lookback for the "last month" KPI window
pub const TRADING_DAYS_PER_MONTH: usize = 21;
