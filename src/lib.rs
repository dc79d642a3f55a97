//! gpui_trendline renders smooth single-series trend charts.
//! The geometric core is framework-free; the optional `gpui` feature adds an
//! interactive GPUI view on top of it.

#![forbid(unsafe_code)]

pub mod axis;
pub mod chart;
pub mod config;
pub mod error;
pub mod geom;
pub mod interaction;
pub mod path;
pub mod render;
pub mod series;
pub mod style;
pub mod transform;
pub mod view;

#[cfg(feature = "gpui")]
pub mod gpui_backend;

pub use axis::{DEFAULT_MAX_TICKS, TickMark, ValueFormatter, compute_tick_indices};
pub use chart::{ChartGeometry, TrendChart, TrendChartBuilder};
pub use config::TrendChartConfig;
pub use error::{ChartError, ChartResult};
pub use geom::{PlotArea, PlotPoint};
pub use interaction::{HoverState, HoverTracker, find_nearest_by_x};
pub use path::{Path, PathCommand, build_fill_path, build_line_path};
pub use render::{
    ApproxTextMeasurer, Color, GradientFill, LineSegment, LineStyle, MarkerStyle, Rect, RectStyle,
    RenderCommand, RenderList, RenderOptions, TextMeasurer, TextStyle, build_render_list,
};
pub use series::{GradientId, Series};
pub use style::Theme;
pub use transform::{Transform, compute_plot_points, series_max};
pub use view::{Padding, Viewport};

#[cfg(feature = "gpui")]
pub use gpui_backend::{GpuiTrendView, TrendHandle, TrendViewConfig};
