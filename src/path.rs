//! Smooth line and fill paths through plot points.
//!
//! Curves use Catmull-Rom interpolation converted to cubic Bezier segments.
//! Each segment only looks at its four-point neighbourhood, so building a
//! path is a single O(N) pass. Neighbour indices are clamped at both ends,
//! which duplicates the edge points and flattens curvature there.

use std::fmt;

use crate::geom::PlotPoint;

/// A single drawing instruction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath.
    MoveTo(PlotPoint),
    /// Straight line to a point.
    LineTo(PlotPoint),
    /// Cubic Bezier curve to a point.
    CubicTo {
        /// First control point.
        ctrl1: PlotPoint,
        /// Second control point.
        ctrl2: PlotPoint,
        /// End point.
        to: PlotPoint,
    },
    /// Close the current subpath back to its start.
    Close,
}

/// Ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a command.
    pub fn push(&mut self, command: PathCommand) {
        self.commands.push(command);
    }

    /// Access all commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check whether the path draws nothing.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Check whether the last command closes the path.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// End point of every command in order.
    ///
    /// `Close` reports the start of its subpath, so a closed path yields the
    /// same vertex first and last.
    pub fn vertices(&self) -> Vec<PlotPoint> {
        let mut out = Vec::with_capacity(self.commands.len());
        let mut start = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(point) => {
                    start = Some(point);
                    out.push(point);
                }
                PathCommand::LineTo(point) | PathCommand::CubicTo { to: point, .. } => {
                    out.push(point);
                }
                PathCommand::Close => {
                    if let Some(start) = start {
                        out.push(start);
                    }
                }
            }
        }
        out
    }
}

/// Formats the path as SVG path data (`M`, `L`, `C`, `Z`).
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, command) in self.commands.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            match command {
                PathCommand::MoveTo(p) => write!(f, "M {} {}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {} {}", p.x, p.y)?,
                PathCommand::CubicTo { ctrl1, ctrl2, to } => write!(
                    f,
                    "C {} {}, {} {}, {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Build a smooth path through the points.
///
/// Returns an empty path for fewer than two points.
pub fn build_line_path(points: &[PlotPoint], closed: bool) -> Path {
    let mut path = Path::new();
    if points.len() < 2 {
        return path;
    }
    let last = points.len() - 1;
    path.push(PathCommand::MoveTo(points[0]));
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];
        let ctrl1 = p1.add(p2.sub(p0).div(6.0));
        let ctrl2 = p2.sub(p3.sub(p1).div(6.0));
        path.push(PathCommand::CubicTo {
            ctrl1,
            ctrl2,
            to: p2,
        });
    }
    if closed {
        path.push(PathCommand::Close);
    }
    path
}

/// Build the closed area between the smooth line and the baseline.
///
/// Returns an empty path when no line can be drawn.
pub fn build_fill_path(points: &[PlotPoint], baseline_y: f32) -> Path {
    let mut path = build_line_path(points, false);
    if path.is_empty() {
        return path;
    }
    let first = points[0];
    let last = points[points.len() - 1];
    path.push(PathCommand::LineTo(PlotPoint::new(last.x, baseline_y)));
    path.push(PathCommand::LineTo(PlotPoint::new(first.x, baseline_y)));
    path.push(PathCommand::Close);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(f32, f32)]) -> Vec<PlotPoint> {
        raw.iter().map(|(x, y)| PlotPoint::new(*x, *y)).collect()
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        assert!(build_line_path(&[], false).is_empty());
        assert!(build_line_path(&pts(&[(1.0, 1.0)]), true).is_empty());
        assert!(build_fill_path(&pts(&[(1.0, 1.0)]), 10.0).is_empty());
    }

    #[test]
    fn two_points_use_duplicated_edges() {
        let path = build_line_path(&pts(&[(0.0, 60.0), (60.0, 0.0)]), false);
        assert_eq!(path.len(), 2);
        assert_eq!(
            path.commands()[0],
            PathCommand::MoveTo(PlotPoint::new(0.0, 60.0))
        );
        assert_eq!(
            path.commands()[1],
            PathCommand::CubicTo {
                ctrl1: PlotPoint::new(10.0, 50.0),
                ctrl2: PlotPoint::new(50.0, 10.0),
                to: PlotPoint::new(60.0, 0.0),
            }
        );
    }

    #[test]
    fn interior_segment_uses_full_neighbourhood() {
        let points = pts(&[(0.0, 0.0), (6.0, 12.0), (12.0, 0.0), (18.0, 6.0)]);
        let path = build_line_path(&points, false);
        assert_eq!(path.len(), 4);
        let PathCommand::CubicTo { ctrl1, ctrl2, to } = path.commands()[2] else {
            panic!("expected cubic segment");
        };
        // cp1 = P1 + (P2 - P0) / 6, cp2 = P2 - (P3 - P1) / 6
        assert_eq!(ctrl1, PlotPoint::new(8.0, 12.0));
        assert_eq!(ctrl2, PlotPoint::new(10.0, 1.0));
        assert_eq!(to, PlotPoint::new(12.0, 0.0));
    }

    #[test]
    fn closed_line_ends_with_close() {
        let path = build_line_path(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]), true);
        assert!(path.is_closed());
        let vertices = path.vertices();
        assert_eq!(vertices.first(), vertices.last());
    }

    #[test]
    fn fill_path_drops_to_baseline() {
        let path = build_fill_path(&pts(&[(10.0, 80.0), (90.0, 20.0)]), 100.0);
        let commands = path.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(
            commands[2],
            PathCommand::LineTo(PlotPoint::new(90.0, 100.0))
        );
        assert_eq!(
            commands[3],
            PathCommand::LineTo(PlotPoint::new(10.0, 100.0))
        );
        assert_eq!(commands[4], PathCommand::Close);
        let vertices = path.vertices();
        assert_eq!(vertices.first(), vertices.last());
    }

    #[test]
    fn svg_data_lists_commands() {
        let path = build_fill_path(&pts(&[(0.0, 6.0), (6.0, 0.0)]), 6.0);
        assert_eq!(path.to_string(), "M 0 6 C 1 5, 5 1, 6 0 L 6 6 L 0 6 Z");
    }
}
