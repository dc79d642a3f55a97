//! Mapping from series values into surface pixel coordinates.

use crate::geom::{PlotArea, PlotPoint};
use crate::view::{Padding, Viewport};

/// Lower bound applied to the series maximum so empty or all-zero series
/// never divide by zero.
const MIN_MAX: f64 = 1.0;

/// Transform from (index, value) pairs into plot points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    area: PlotArea,
    max: f64,
    step_x: f32,
}

impl Transform {
    /// Create a transform for a series of `len` values with the given maximum.
    ///
    /// Returns `None` when the plot area has no size or the series is empty.
    pub fn new(area: PlotArea, len: usize, max: f64) -> Option<Self> {
        if !area.is_valid() || len == 0 {
            return None;
        }
        let step_x = if len > 1 {
            area.width / (len - 1) as f32
        } else {
            area.width
        };
        Some(Self {
            area,
            max: max.max(MIN_MAX),
            step_x,
        })
    }

    /// Access the plot area.
    pub fn area(&self) -> PlotArea {
        self.area
    }

    /// Access the effective maximum (never below 1).
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Horizontal distance between consecutive points.
    pub fn step_x(&self) -> f32 {
        self.step_x
    }

    /// Map a value at a series index into the plot area.
    pub fn value_to_point(&self, index: usize, value: f64) -> PlotPoint {
        let x = (self.area.left + index as f32 * self.step_x).min(self.area.right());
        let ratio = if value.is_finite() {
            (value / self.max).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let y = self.area.top + (1.0 - ratio) as f32 * self.area.height;
        PlotPoint::new(x, y)
    }
}

/// Maximum of a series, floored at 1.
pub fn series_max(series: &[f64]) -> f64 {
    series
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(MIN_MAX, f64::max)
}

/// Map a series into plot points inside the padded viewport.
///
/// Produces an empty sequence when the viewport is not measurable yet or the
/// series is empty. Higher values land closer to the top edge.
pub fn compute_plot_points(series: &[f64], viewport: Viewport, padding: Padding) -> Vec<PlotPoint> {
    let area = viewport.plot_area(padding);
    let Some(transform) = Transform::new(area, series.len(), series_max(series)) else {
        return Vec::new();
    };
    series
        .iter()
        .enumerate()
        .map(|(index, value)| transform.value_to_point(index, *value))
        .collect()
}
