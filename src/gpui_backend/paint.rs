use gpui::{
    App, Background, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, TextRun,
    Window, font, linear_color_stop, linear_gradient, point, px, quad,
};

use crate::geom::PlotPoint;
use crate::path::{Path, PathCommand};
use crate::render::{
    Color, GradientFill, LineSegment, LineStyle, MarkerStyle, Rect, RectStyle, RenderCommand,
    TextStyle,
};

use super::frame::TrendFrame;

pub(crate) fn paint_frame(frame: &TrendFrame, window: &mut Window, cx: &mut App) {
    let origin = frame.origin;
    for command in frame.render.commands() {
        match command {
            RenderCommand::FillPath { path, fill } => paint_fill(window, origin, path, fill),
            RenderCommand::StrokePath { path, style } => paint_stroke(window, origin, path, *style),
            RenderCommand::LineSegments { segments, style } => {
                paint_lines(window, origin, segments, *style);
            }
            RenderCommand::Points { points, style } => {
                paint_points(window, origin, points, *style);
            }
            RenderCommand::Rect { rect, style } => paint_rect(window, origin, *rect, *style),
            RenderCommand::Text {
                position,
                text,
                style,
            } => paint_text(window, cx, origin, *position, text, style),
        }
    }
}

fn paint_fill(window: &mut Window, origin: PlotPoint, path: &Path, fill: &GradientFill) {
    if path.is_empty() {
        return;
    }
    let mut builder = PathBuilder::fill();
    append_path(&mut builder, origin, path);
    if let Ok(path) = builder.build() {
        // 180 degrees runs the gradient from top to bottom.
        let background: Background = linear_gradient(
            180.0,
            linear_color_stop(to_hsla(fill.top), 0.0),
            linear_color_stop(to_hsla(fill.bottom), 1.0),
        );
        window.paint_path(path, background);
    }
}

fn paint_stroke(window: &mut Window, origin: PlotPoint, path: &Path, style: LineStyle) {
    if path.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    append_path(&mut builder, origin, path);
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn append_path(builder: &mut PathBuilder, origin: PlotPoint, path: &Path) {
    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(to) => builder.move_to(to_point(origin, to)),
            PathCommand::LineTo(to) => builder.line_to(to_point(origin, to)),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => builder.cubic_bezier_to(
                to_point(origin, to),
                to_point(origin, ctrl1),
                to_point(origin, ctrl2),
            ),
            PathCommand::Close => builder.close(),
        }
    }
}

fn paint_lines(window: &mut Window, origin: PlotPoint, segments: &[LineSegment], style: LineStyle) {
    if segments.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(style.width.max(0.5)));
    for segment in segments {
        builder.move_to(to_point(origin, segment.start));
        builder.line_to(to_point(origin, segment.end));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(style.color));
    }
}

fn paint_points(window: &mut Window, origin: PlotPoint, points: &[PlotPoint], style: MarkerStyle) {
    let radius = style.size.max(2.0) * 0.5;
    for pt in points {
        let center = pt.offset(origin.x, origin.y);
        let bounds = Bounds::from_corners(
            point(px(center.x - radius), px(center.y - radius)),
            point(px(center.x + radius), px(center.y + radius)),
        );
        window.paint_quad(quad(
            bounds,
            Corners::all(px(radius)),
            to_rgba(style.color),
            Edges::all(px(0.0)),
            to_rgba(style.color),
            BorderStyle::default(),
        ));
    }
}

fn paint_rect(window: &mut Window, origin: PlotPoint, rect: Rect, style: RectStyle) {
    let bounds = Bounds::from_corners(to_point(origin, rect.min), to_point(origin, rect.max));
    window.paint_quad(quad(
        bounds,
        Corners::all(px(3.0)),
        to_rgba(style.fill),
        Edges::all(px(style.stroke_width)),
        to_rgba(style.stroke),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    origin: PlotPoint,
    position: PlotPoint,
    text: &str,
    style: &TextStyle,
) {
    if text.is_empty() {
        return;
    }
    let font_size = px(style.size);
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(style.color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), font_size, &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let _ = shaped.paint(to_point(origin, position), line_height, window, cx);
}

fn to_point(origin: PlotPoint, local: PlotPoint) -> Point<Pixels> {
    point(px(origin.x + local.x), px(origin.y + local.y))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
