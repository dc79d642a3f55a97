//! Rendering primitives and render-list construction.
//!
//! These types are backend-agnostic and are used by render backends (such as the
//! GPUI backend) to describe how a chart should be drawn.

use crate::chart::TrendChart;
use crate::geom::{PlotArea, PlotPoint};
use crate::path::Path;
use crate::series::GradientId;

const TICK_LENGTH: f32 = 4.0;
const LABEL_SIZE: f32 = 11.0;
const LABEL_GAP: f32 = 4.0;
const READOUT_SIZE: f32 = 12.0;
const READOUT_OFFSET: f32 = 10.0;
const READOUT_PAD: f32 = 4.0;
const MARKER_OUTER: f32 = 10.0;
const MARKER_INNER: f32 = 6.0;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Same color with a different alpha.
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.r, self.g, self.b, alpha)
    }
}

/// Line stroke styling.
///
/// The width is expressed in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Vertical gradient fill between two Y positions.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientFill {
    /// Identifier backends may use to share gradient definitions.
    pub id: GradientId,
    /// Color at `top_y`.
    pub top: Color,
    /// Color at `bottom_y`.
    pub bottom: Color,
    /// Y where the gradient starts.
    pub top_y: f32,
    /// Y where the gradient ends.
    pub bottom_y: f32,
}

/// Circular marker styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Color,
    /// Marker diameter in pixels.
    pub size: f32,
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

/// Text styling.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
}

/// A line segment in surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Segment start.
    pub start: PlotPoint,
    /// Segment end.
    pub end: PlotPoint,
}

impl LineSegment {
    /// Create a new line segment.
    pub fn new(start: PlotPoint, end: PlotPoint) -> Self {
        Self { start, end }
    }
}

/// Rectangle in surface space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner.
    pub min: PlotPoint,
    /// Bottom-right corner.
    pub max: PlotPoint,
}

/// A single draw instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Fill a closed path with a vertical gradient.
    FillPath {
        /// Closed path to fill.
        path: Path,
        /// Gradient definition.
        fill: GradientFill,
    },
    /// Stroke a path.
    StrokePath {
        /// Path to stroke.
        path: Path,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw straight segments.
    LineSegments {
        /// Segments to draw.
        segments: Vec<LineSegment>,
        /// Styling for the segments.
        style: LineStyle,
    },
    /// Draw circular markers.
    Points {
        /// Marker centres.
        points: Vec<PlotPoint>,
        /// Marker styling.
        style: MarkerStyle,
    },
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: Rect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw text with its top-left corner at `position`.
    Text {
        /// Text position.
        position: PlotPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Aggregated render commands.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }
}

/// Measures text for label placement.
pub trait TextMeasurer {
    /// Measure text size in pixels as `(width, height)`.
    fn measure(&self, text: &str, size: f32) -> (f32, f32);
}

/// Width estimate from character count, for backends without text shaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMeasurer;

impl TextMeasurer for ApproxTextMeasurer {
    fn measure(&self, text: &str, size: f32) -> (f32, f32) {
        (text.chars().count() as f32 * size * 0.6, size * 1.2)
    }
}

/// Which layers of the chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw the gradient area under the line.
    pub show_fill: bool,
    /// Draw tick marks and tick labels.
    pub show_ticks: bool,
    /// Draw the hover marker and readout.
    pub show_hover: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_fill: true,
            show_ticks: true,
            show_hover: true,
        }
    }
}

/// Build the draw commands for a chart's current geometry and hover.
///
/// Produces an empty list until the chart has measurable geometry.
pub fn build_render_list(
    chart: &TrendChart,
    options: RenderOptions,
    measurer: &dyn TextMeasurer,
) -> RenderList {
    let mut render = RenderList::new();
    let geometry = chart.geometry();
    let Some(area) = geometry.area else {
        return render;
    };
    let theme = chart.theme();

    if options.show_fill && !geometry.fill.is_empty() {
        render.push(RenderCommand::FillPath {
            path: geometry.fill.clone(),
            fill: GradientFill {
                id: chart.gradient_id(),
                top: theme.fill_top,
                bottom: theme.fill_bottom,
                top_y: area.top,
                bottom_y: area.baseline(),
            },
        });
    }

    let axis_style = LineStyle {
        color: theme.axis,
        width: 1.0,
    };
    let mut axis_segments = vec![LineSegment::new(
        PlotPoint::new(area.left, area.baseline()),
        PlotPoint::new(area.right(), area.baseline()),
    )];
    if options.show_ticks {
        build_ticks(&mut render, chart, area, measurer, &mut axis_segments);
    }
    render.push(RenderCommand::LineSegments {
        segments: axis_segments,
        style: axis_style,
    });

    let line_style = LineStyle {
        color: theme.line,
        width: theme.line_width,
    };
    if geometry.line.is_empty() {
        if !geometry.points.is_empty() {
            render.push(RenderCommand::Points {
                points: geometry.points.clone(),
                style: MarkerStyle {
                    color: theme.line,
                    size: MARKER_INNER,
                },
            });
        }
    } else {
        render.push(RenderCommand::StrokePath {
            path: geometry.line.clone(),
            style: line_style,
        });
    }

    if options.show_hover {
        build_hover(&mut render, chart, area, measurer);
    }
    render
}

fn build_ticks(
    render: &mut RenderList,
    chart: &TrendChart,
    area: PlotArea,
    measurer: &dyn TextMeasurer,
    segments: &mut Vec<LineSegment>,
) {
    let theme = chart.theme();
    let baseline = area.baseline();
    for tick in chart.tick_marks() {
        segments.push(LineSegment::new(
            PlotPoint::new(tick.x, baseline),
            PlotPoint::new(tick.x, baseline + TICK_LENGTH),
        ));
        let Some(label) = tick.label else {
            continue;
        };
        let (width, _) = measurer.measure(&label, LABEL_SIZE);
        render.push(RenderCommand::Text {
            position: PlotPoint::new(tick.x - width * 0.5, baseline + TICK_LENGTH + LABEL_GAP),
            text: label,
            style: TextStyle {
                color: theme.label,
                size: LABEL_SIZE,
            },
        });
    }
}

fn build_hover(
    render: &mut RenderList,
    chart: &TrendChart,
    area: PlotArea,
    measurer: &dyn TextMeasurer,
) {
    let theme = chart.theme();
    let Some(hover) = chart.hover() else {
        return;
    };
    let point = hover.point();

    render.push(RenderCommand::LineSegments {
        segments: vec![LineSegment::new(
            PlotPoint::new(point.x, area.top),
            PlotPoint::new(point.x, area.baseline()),
        )],
        style: LineStyle {
            color: theme.axis,
            width: 1.0,
        },
    });
    render.push(RenderCommand::Points {
        points: vec![point],
        style: MarkerStyle {
            color: theme.line,
            size: MARKER_OUTER,
        },
    });
    render.push(RenderCommand::Points {
        points: vec![point],
        style: MarkerStyle {
            color: theme.background,
            size: MARKER_INNER,
        },
    });

    let Some(text) = chart.hover_readout() else {
        return;
    };
    let (text_w, text_h) = measurer.measure(&text, READOUT_SIZE);
    let size = (text_w + READOUT_PAD * 2.0, text_h + READOUT_PAD * 2.0);
    let mut origin = PlotPoint::new(point.x + READOUT_OFFSET, point.y - READOUT_OFFSET - size.1);
    if origin.x + size.0 > area.right() {
        origin.x = point.x - READOUT_OFFSET - size.0;
    }
    if origin.y < area.top {
        origin.y = point.y + READOUT_OFFSET;
    }
    origin = clamp_to_area(origin, area, size);

    render.push(RenderCommand::Rect {
        rect: Rect {
            min: origin,
            max: origin.offset(size.0, size.1),
        },
        style: RectStyle {
            fill: theme.hover_bg,
            stroke: theme.hover_border,
            stroke_width: 1.0,
        },
    });
    render.push(RenderCommand::Text {
        position: origin.offset(READOUT_PAD, READOUT_PAD),
        text,
        style: TextStyle {
            color: theme.label,
            size: READOUT_SIZE,
        },
    });
}

fn clamp_to_area(pos: PlotPoint, area: PlotArea, size: (f32, f32)) -> PlotPoint {
    let max_x = (area.right() - size.0).max(area.left);
    let max_y = (area.baseline() - size.1).max(area.top);
    PlotPoint::new(pos.x.clamp(area.left, max_x), pos.y.clamp(area.top, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrendChartConfig;
    use crate::series::Series;
    use crate::view::{Padding, Viewport};

    fn measured(values: Vec<f64>) -> TrendChart {
        let mut chart = TrendChart::builder()
            .config(TrendChartConfig::default().with_padding(Padding::uniform(10.0)))
            .series(Series::new(values))
            .build()
            .unwrap();
        chart.set_viewport(Viewport::new(200.0, 120.0));
        chart
    }

    #[test]
    fn unmeasured_chart_renders_nothing() {
        let chart = TrendChart::new(Series::new(vec![1.0, 2.0]));
        let render = build_render_list(&chart, RenderOptions::default(), &ApproxTextMeasurer);
        assert!(render.commands().is_empty());
    }

    #[test]
    fn fill_precedes_stroke() {
        let chart = measured(vec![1.0, 3.0, 2.0]);
        let render = build_render_list(&chart, RenderOptions::default(), &ApproxTextMeasurer);
        let commands = render.commands();
        assert!(matches!(
            commands.first(),
            Some(RenderCommand::FillPath { .. })
        ));
        assert!(
            commands
                .iter()
                .any(|command| matches!(command, RenderCommand::StrokePath { .. }))
        );
    }

    #[test]
    fn single_value_draws_marker_instead_of_line() {
        let chart = measured(vec![3.0]);
        let render = build_render_list(&chart, RenderOptions::default(), &ApproxTextMeasurer);
        assert!(
            !render
                .commands()
                .iter()
                .any(|command| matches!(command, RenderCommand::StrokePath { .. }))
        );
        assert!(
            render
                .commands()
                .iter()
                .any(|command| matches!(command, RenderCommand::Points { .. }))
        );
    }

    #[test]
    fn hover_readout_stays_inside_area() {
        let mut chart = measured(vec![1.0, 3.0, 2.0]);
        chart.pointer_moved(500.0);
        let render = build_render_list(&chart, RenderOptions::default(), &ApproxTextMeasurer);
        let rect = render
            .commands()
            .iter()
            .find_map(|command| match command {
                RenderCommand::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .expect("readout box");
        assert!(rect.min.x >= 10.0 && rect.max.x <= 190.0);
        assert!(rect.min.y >= 10.0 && rect.max.y <= 110.0);
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let mut chart = measured(vec![1.0, 3.0, 2.0]);
        chart.pointer_moved(50.0);
        let options = RenderOptions {
            show_fill: false,
            show_ticks: false,
            show_hover: false,
        };
        let render = build_render_list(&chart, options, &ApproxTextMeasurer);
        assert!(!render.commands().iter().any(is_optional_layer));
    }

    fn is_optional_layer(command: &RenderCommand) -> bool {
        matches!(
            command,
            RenderCommand::FillPath { .. } | RenderCommand::Rect { .. } | RenderCommand::Text { .. }
        )
    }
}
