//! Core error types for the Clearfolio analytics crate.
//!
//! The calculators themselves never fail: degenerate input (empty series,
//! missing returns, zero reference values) degrades to empty or zero
//! results. Errors only arise at the payload boundary, where upstream JSON
//! is decoded into typed models.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The upstream JSON payload could not be decoded into the expected shape.
    #[error("Failed to decode payload: {0}")]
    PayloadDecode(#[from] serde_json::Error),

    /// A range key from a query string did not match any known window.
    #[error("Unknown range key: {0}")]
    InvalidRange(String),
}
