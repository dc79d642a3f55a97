use gpui::{Bounds, Pixels, Window};

use crate::chart::TrendChart;
use crate::geom::PlotPoint;
use crate::render::{RenderList, build_render_list};
use crate::view::Viewport;

use super::config::TrendViewConfig;
use super::state::{ChartUiState, SurfaceBounds};
use super::text::GpuiTextMeasurer;

#[derive(Debug, Clone)]
pub(crate) struct TrendFrame {
    pub(crate) origin: PlotPoint,
    pub(crate) render: RenderList,
}

/// Measure the surface, refresh geometry on resize, and build draw commands.
pub(crate) fn build_frame(
    chart: &mut TrendChart,
    state: &mut ChartUiState,
    config: &TrendViewConfig,
    bounds: Bounds<Pixels>,
    window: &Window,
) -> TrendFrame {
    let surface = SurfaceBounds {
        origin: PlotPoint::new(f32::from(bounds.origin.x), f32::from(bounds.origin.y)),
        width: f32::from(bounds.size.width),
        height: f32::from(bounds.size.height),
    };
    state.surface = Some(surface);
    chart.set_viewport(Viewport::new(surface.width, surface.height));

    let measurer = GpuiTextMeasurer::new(window);
    TrendFrame {
        origin: surface.origin,
        render: build_render_list(chart, config.render_options(), &measurer),
    }
}
