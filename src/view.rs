//! Surface measurements and padding.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::geom::PlotArea;

/// Measured size of the drawing surface in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Surface width.
    pub width: f32,
    /// Surface height.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport from a measured size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Compute the plot rectangle left after padding.
    ///
    /// Width and height are clamped to zero when padding exceeds the surface.
    pub fn plot_area(&self, padding: Padding) -> PlotArea {
        PlotArea {
            left: padding.left,
            top: padding.top,
            width: (self.width - padding.left - padding.right).max(0.0),
            height: (self.height - padding.top - padding.bottom).max(0.0),
        }
    }
}

/// Fixed margins around the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    /// Top margin.
    pub top: f32,
    /// Right margin.
    pub right: f32,
    /// Bottom margin.
    pub bottom: f32,
    /// Left margin.
    pub left: f32,
}

impl Padding {
    /// Create padding from explicit sides.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same margin on every side.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Reject negative or non-finite margins.
    pub fn validate(&self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidPadding { side, value });
            }
        }
        Ok(())
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(20.0, 20.0, 30.0, 40.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_area_clamps_to_zero() {
        let area = Viewport::new(30.0, 20.0).plot_area(Padding::default());
        assert_eq!(area.width, 0.0);
        assert_eq!(area.height, 0.0);
        assert!(!area.is_valid());
    }

    #[test]
    fn padding_rejects_negative_side() {
        let padding = Padding::new(1.0, -2.0, 0.0, 0.0);
        let err = padding.validate().unwrap_err();
        assert!(matches!(
            err,
            ChartError::InvalidPadding { side: "right", .. }
        ));
    }
}
