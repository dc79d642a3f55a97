use crate::geom::PlotPoint;

/// Surface placement recorded during prepaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SurfaceBounds {
    pub(crate) origin: PlotPoint,
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl SurfaceBounds {
    /// Convert a window position into surface-relative coordinates.
    pub(crate) fn to_local(self, window_pos: PlotPoint) -> PlotPoint {
        window_pos.offset(-self.origin.x, -self.origin.y)
    }

    pub(crate) fn contains_local(self, local: PlotPoint) -> bool {
        local.x >= 0.0 && local.x <= self.width && local.y >= 0.0 && local.y <= self.height
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ChartUiState {
    pub(crate) surface: Option<SurfaceBounds>,
}
