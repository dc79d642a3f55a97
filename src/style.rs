//! Chart colour themes.

use crate::render::Color;

/// Visual theme for trend charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Background colour.
    pub background: Color,
    /// Trend line colour.
    pub line: Color,
    /// Trend line width in pixels.
    pub line_width: f32,
    /// Gradient colour at the top of the fill.
    pub fill_top: Color,
    /// Gradient colour at the baseline.
    pub fill_bottom: Color,
    /// Tick and baseline colour.
    pub axis: Color,
    /// Tick label colour.
    pub label: Color,
    /// Hover readout background.
    pub hover_bg: Color,
    /// Hover readout border.
    pub hover_border: Color,
}

impl Theme {
    /// Light theme.
    pub fn light() -> Self {
        let line = Color::new(0.23, 0.51, 0.96, 1.0);
        Self {
            background: Color::WHITE,
            line,
            line_width: 2.0,
            fill_top: line.with_alpha(0.35),
            fill_bottom: line.with_alpha(0.0),
            axis: Color::new(0.82, 0.84, 0.86, 1.0),
            label: Color::new(0.42, 0.45, 0.5, 1.0),
            hover_bg: Color::new(1.0, 1.0, 1.0, 0.95),
            hover_border: Color::new(0.82, 0.84, 0.86, 1.0),
        }
    }

    /// Dark theme.
    pub fn dark() -> Self {
        let line = Color::new(0.38, 0.65, 0.98, 1.0);
        Self {
            background: Color::new(0.07, 0.09, 0.12, 1.0),
            line,
            line_width: 2.0,
            fill_top: line.with_alpha(0.4),
            fill_bottom: line.with_alpha(0.0),
            axis: Color::new(0.22, 0.25, 0.3, 1.0),
            label: Color::new(0.62, 0.66, 0.72, 1.0),
            hover_bg: Color::new(0.12, 0.14, 0.18, 0.95),
            hover_border: Color::new(0.3, 0.34, 0.4, 1.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
