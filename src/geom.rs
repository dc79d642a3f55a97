//! Geometric primitives used by the charting pipeline.
//!
//! All coordinates are logical pixels relative to the chart surface origin,
//! with Y growing downwards.

use serde::{Deserialize, Serialize};

/// A data value mapped into surface pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    /// X value in pixels.
    pub x: f32,
    /// Y value in pixels.
    pub y: f32,
}

impl PlotPoint {
    /// Create a new plot point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub(crate) fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub(crate) fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub(crate) fn div(self, divisor: f32) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }

    /// Translate by an origin offset.
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Usable plot rectangle after padding has been subtracted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    /// Left edge in pixels.
    pub left: f32,
    /// Top edge in pixels.
    pub top: f32,
    /// Width in pixels, never negative.
    pub width: f32,
    /// Height in pixels, never negative.
    pub height: f32,
}

impl PlotArea {
    /// Right edge in pixels.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge, which is also the fill baseline.
    pub fn baseline(&self) -> f32 {
        self.top + self.height
    }

    /// Check whether the area has positive size.
    pub fn is_valid(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Check whether a point lies inside the area (edges inclusive).
    pub fn contains(&self, point: PlotPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.baseline()
    }
}
