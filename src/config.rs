//! Chart configuration.

use serde::{Deserialize, Serialize};

use crate::axis::DEFAULT_MAX_TICKS;
use crate::error::{ChartError, ChartResult};
use crate::view::Padding;

/// Layout and path options for a [`TrendChart`](crate::chart::TrendChart).
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendChartConfig {
    /// Margins around the plot rectangle.
    pub padding: Padding,
    /// Upper bound used to derive the tick stride.
    pub max_ticks: usize,
    /// Close the line path back to its start.
    pub closed: bool,
    /// Explicit gradient identifier. Derived from series content when unset.
    pub gradient_id: Option<String>,
}

impl Default for TrendChartConfig {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            max_ticks: DEFAULT_MAX_TICKS,
            closed: false,
            gradient_id: None,
        }
    }
}

impl TrendChartConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Check padding and tick settings.
    pub fn validate(&self) -> ChartResult<()> {
        self.padding.validate()?;
        if self.max_ticks == 0 {
            return Err(ChartError::InvalidTickCount);
        }
        Ok(())
    }

    /// Set the padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the tick bound.
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Set an explicit gradient identifier.
    pub fn with_gradient_id(mut self, id: impl Into<String>) -> Self {
        self.gradient_id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let config = TrendChartConfig::from_json(r#"{ "padding": { "left": 8 } }"#).unwrap();
        assert_eq!(config.padding.left, 8.0);
        assert_eq!(config.padding.top, Padding::default().top);
        assert_eq!(config.max_ticks, DEFAULT_MAX_TICKS);
        assert!(!config.closed);
    }

    #[test]
    fn rejects_zero_ticks() {
        let err = TrendChartConfig::from_json(r#"{ "max_ticks": 0 }"#).unwrap_err();
        assert!(matches!(err, ChartError::InvalidTickCount));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = TrendChartConfig::from_json("{ padding: ").unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }
}
