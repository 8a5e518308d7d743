//! Clearfolio Core - time-series normalization and derived portfolio metrics.
//!
//! This crate contains the pure analytics pipeline behind the Clearfolio
//! dashboard: daily gap-filling of sparse series, growth-of-$1 curves
//! compounded from daily returns, rolling-window KPI changes, and simple
//! moving averages. It performs no I/O; payloads arrive as plain JSON from
//! the backend proxy and results are handed to chart collaborators.

pub mod constants;
pub mod demo_data;
pub mod errors;
pub mod indicators;
pub mod performance;
pub mod series;

// Re-export common types from the series and performance modules
pub use performance::*;
pub use series::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
