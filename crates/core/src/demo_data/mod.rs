//! Demo data module - seeded equity-series generation for the marketing
//! pages. Replaces the original import-time global mock series with an
//! explicit factory the composition root calls once.

mod demo_data_generator;
mod demo_data_model;

// Re-export the public interface
pub use demo_data_generator::generate_equity_series;
pub use demo_data_model::EquitySeriesConfig;
