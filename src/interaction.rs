//! Hover lookup for pointer interaction.
//!
//! Point selection only considers the horizontal pointer position; the
//! vertical position never influences which point is highlighted.

use tracing::trace;

use crate::geom::PlotPoint;

/// The plot point currently highlighted by the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverState {
    /// Index into the series.
    pub index: usize,
    /// X of the highlighted point.
    pub x: f32,
    /// Y of the highlighted point.
    pub y: f32,
}

impl HoverState {
    /// Highlighted point as a plot point.
    pub fn point(&self) -> PlotPoint {
        PlotPoint::new(self.x, self.y)
    }
}

/// Find the point whose X is closest to the pointer.
///
/// Ties resolve to the lowest index. Returns `None` for an empty slice.
pub fn find_nearest_by_x(points: &[PlotPoint], pointer_x: f32) -> Option<HoverState> {
    let mut best: Option<(usize, f32)> = None;
    for (index, point) in points.iter().enumerate() {
        let dist = (point.x - pointer_x).abs();
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((index, dist));
        }
    }
    best.map(|(index, _)| {
        let point = points[index];
        HoverState {
            index,
            x: point.x,
            y: point.y,
        }
    })
}

/// Tracks the single active hover state across pointer events.
#[derive(Debug, Clone, Default)]
pub struct HoverTracker {
    state: Option<HoverState>,
}

impl HoverTracker {
    /// Create a tracker with no hover.
    pub fn new() -> Self {
        Self::default()
    }

    /// Access the current hover.
    pub fn state(&self) -> Option<HoverState> {
        self.state
    }

    /// Update the hover from a pointer move.
    ///
    /// An empty point set clears the hover.
    pub fn pointer_moved(&mut self, points: &[PlotPoint], pointer_x: f32) -> Option<HoverState> {
        let next = find_nearest_by_x(points, pointer_x);
        if next.map(|hover| hover.index) != self.state.map(|hover| hover.index) {
            trace!(index = ?next.map(|hover| hover.index), "hover changed");
        }
        self.state = next;
        next
    }

    /// Clear the hover unconditionally.
    pub fn pointer_left(&mut self) {
        if self.state.take().is_some() {
            trace!("hover cleared");
        }
    }

    /// Re-anchor the hover on freshly computed points.
    ///
    /// Keeps the index when it still exists, otherwise clears.
    pub(crate) fn refresh(&mut self, points: &[PlotPoint]) {
        self.state = self.state.and_then(|hover| {
            points.get(hover.index).map(|point| HoverState {
                index: hover.index,
                x: point.x,
                y: point.y,
            })
        });
    }
}
