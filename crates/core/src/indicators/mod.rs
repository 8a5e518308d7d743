//! Indicators module - OHLC bars and moving-average overlays.

mod indicators_calculator;
mod indicators_model;

// Re-export the public interface
pub use indicators_calculator::simple_moving_average;
pub use indicators_model::{Bar, IndicatorPoint};
