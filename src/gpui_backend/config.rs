use crate::render::RenderOptions;

/// Configuration for the GPUI trend view.
#[derive(Debug, Clone)]
pub struct TrendViewConfig {
    /// Draw the gradient area under the line.
    pub show_fill: bool,
    /// Draw tick marks and tick labels.
    pub show_ticks: bool,
    /// Show the hover marker and value readout.
    pub show_hover: bool,
}

impl Default for TrendViewConfig {
    fn default() -> Self {
        Self {
            show_fill: true,
            show_ticks: true,
            show_hover: true,
        }
    }
}

impl TrendViewConfig {
    pub(crate) fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_fill: self.show_fill,
            show_ticks: self.show_ticks,
            show_hover: self.show_hover,
        }
    }
}
