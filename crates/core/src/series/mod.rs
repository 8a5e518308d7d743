//! Series module - dated observations, daily gap-filling, and range slicing.

mod series_calculator;
mod series_model;

// Re-export the public interface
pub use series_calculator::{fill_daily, slice_for_range};
pub use series_model::{DatedPoint, Range};
