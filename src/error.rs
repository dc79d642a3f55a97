//! Error types for chart construction and configuration.
//!
//! Geometry itself never fails: degenerate input produces empty geometry.
//! Errors only surface where callers hand the chart malformed setup data.

use thiserror::Error;

/// Result alias used across the crate.
pub type ChartResult<T> = Result<T, ChartError>;

/// Errors raised while building a chart or its configuration.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Labels were supplied but do not line up with the values.
    #[error("label count {labels} does not match value count {values}")]
    LabelCountMismatch {
        /// Number of series values.
        values: usize,
        /// Number of supplied labels.
        labels: usize,
    },
    /// A padding side is negative or not finite.
    #[error("invalid {side} padding: {value}")]
    InvalidPadding {
        /// Padding side name.
        side: &'static str,
        /// Offending value.
        value: f32,
    },
    /// Tick sampling needs at least one tick.
    #[error("max_ticks must be at least 1")]
    InvalidTickCount,
    /// Configuration could not be parsed.
    #[error("invalid chart config: {0}")]
    Config(#[from] serde_json::Error),
}
