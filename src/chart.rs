//! Trend chart model and builder.

use std::collections::BTreeSet;

use tracing::debug;

use crate::axis::{TickMark, ValueFormatter, compute_tick_indices};
use crate::config::TrendChartConfig;
use crate::error::ChartResult;
use crate::geom::{PlotArea, PlotPoint};
use crate::interaction::{HoverState, HoverTracker};
use crate::path::{Path, build_fill_path, build_line_path};
use crate::series::{GradientId, Series};
use crate::style::Theme;
use crate::transform::compute_plot_points;
use crate::view::Viewport;

/// Geometry derived from the series and the measured viewport.
///
/// Always replaced as a whole; never patched in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartGeometry {
    /// Plot rectangle after padding.
    pub area: Option<PlotArea>,
    /// One point per series value.
    pub points: Vec<PlotPoint>,
    /// Smooth line through the points.
    pub line: Path,
    /// Closed area under the line.
    pub fill: Path,
    /// Tick indices.
    pub ticks: BTreeSet<usize>,
}

impl ChartGeometry {
    fn compute(series: &Series, viewport: Viewport, config: &TrendChartConfig) -> Self {
        let area = viewport.plot_area(config.padding);
        let points = compute_plot_points(series.values(), viewport, config.padding);
        if points.is_empty() {
            return Self::default();
        }
        Self {
            area: Some(area),
            line: build_line_path(&points, config.closed),
            fill: build_fill_path(&points, area.baseline()),
            ticks: compute_tick_indices(&points, config.max_ticks),
            points,
        }
    }
}

/// A single-series trend chart with cached geometry and hover state.
#[derive(Debug, Clone)]
pub struct TrendChart {
    theme: Theme,
    config: TrendChartConfig,
    formatter: ValueFormatter,
    series: Series,
    viewport: Option<Viewport>,
    geometry: ChartGeometry,
    hover: HoverTracker,
}

impl TrendChart {
    /// Create a chart with default configuration.
    pub fn new(series: Series) -> Self {
        Self {
            theme: Theme::default(),
            config: TrendChartConfig::default(),
            formatter: ValueFormatter::default(),
            series,
            viewport: None,
            geometry: ChartGeometry::default(),
            hover: HoverTracker::new(),
        }
    }

    /// Start building a chart with custom configuration.
    pub fn builder() -> TrendChartBuilder {
        TrendChartBuilder::default()
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Access the configuration.
    pub fn config(&self) -> &TrendChartConfig {
        &self.config
    }

    /// Access the series.
    pub fn series(&self) -> &Series {
        &self.series
    }

    /// Access the last measured viewport.
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// Access the cached geometry.
    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    /// Access the current hover.
    pub fn hover(&self) -> Option<HoverState> {
        self.hover.state()
    }

    /// Replace the series and recompute geometry.
    pub fn set_series(&mut self, series: Series) {
        self.series = series;
        self.recompute();
    }

    /// Record a surface measurement.
    ///
    /// Returns `true` when geometry was recomputed; repeated identical
    /// measurements are ignored.
    pub fn set_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport == Some(viewport) {
            return false;
        }
        self.viewport = Some(viewport);
        self.recompute();
        true
    }

    /// Update the hover from a surface-relative pointer X.
    pub fn pointer_moved(&mut self, pointer_x: f32) -> Option<HoverState> {
        self.hover.pointer_moved(&self.geometry.points, pointer_x)
    }

    /// Clear the hover.
    pub fn pointer_left(&mut self) {
        self.hover.pointer_left();
    }

    /// Gradient identifier, explicit or derived from the series.
    pub fn gradient_id(&self) -> GradientId {
        match &self.config.gradient_id {
            Some(id) => GradientId::new(id.clone()),
            None => self.series.gradient_id(),
        }
    }

    /// Ticks with their positions and labels.
    pub fn tick_marks(&self) -> Vec<TickMark> {
        self.geometry
            .ticks
            .iter()
            .filter_map(|&index| {
                let point = self.geometry.points.get(index)?;
                Some(TickMark {
                    index,
                    x: point.x,
                    label: self.series.label(index).map(str::to_string),
                })
            })
            .collect()
    }

    /// Text describing the hovered value.
    pub fn hover_readout(&self) -> Option<String> {
        let hover = self.hover.state()?;
        let value = self.formatter.format(self.series.value(hover.index)?);
        Some(match self.series.label(hover.index) {
            Some(label) => format!("{label}: {value}"),
            None => format!("#{}: {value}", hover.index + 1),
        })
    }

    fn recompute(&mut self) {
        let Some(viewport) = self.viewport else {
            self.geometry = ChartGeometry::default();
            self.hover.refresh(&[]);
            return;
        };
        self.geometry = ChartGeometry::compute(&self.series, viewport, &self.config);
        if self.geometry.points.is_empty() && !self.series.is_empty() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "viewport not measurable, skipping geometry"
            );
        } else {
            debug!(
                points = self.geometry.points.len(),
                width = viewport.width,
                height = viewport.height,
                "recomputed chart geometry"
            );
        }
        self.hover.refresh(&self.geometry.points);
    }
}

/// Builder for configuring a chart before construction.
#[derive(Debug, Default)]
pub struct TrendChartBuilder {
    theme: Theme,
    config: TrendChartConfig,
    formatter: ValueFormatter,
    series: Series,
}

impl TrendChartBuilder {
    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the configuration.
    pub fn config(mut self, config: TrendChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the value formatter.
    pub fn formatter(mut self, formatter: ValueFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Set the series.
    pub fn series(mut self, series: Series) -> Self {
        self.series = series;
        self
    }

    /// Validate the configuration and build the chart.
    pub fn build(self) -> ChartResult<TrendChart> {
        self.config.validate()?;
        Ok(TrendChart {
            theme: self.theme,
            config: self.config,
            formatter: self.formatter,
            series: self.series,
            viewport: None,
            geometry: ChartGeometry::default(),
            hover: HoverTracker::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::view::Padding;

    fn chart(values: Vec<f64>) -> TrendChart {
        TrendChart::builder()
            .config(TrendChartConfig::default().with_padding(Padding::uniform(10.0)))
            .series(Series::new(values))
            .build()
            .unwrap()
    }

    #[test]
    fn custom_formatter_drives_readout() {
        let series = Series::new(vec![40.0, 65.5])
            .with_labels(["Q1", "Q2"])
            .unwrap();
        let mut chart = TrendChart::builder()
            .config(TrendChartConfig::default().with_padding(Padding::uniform(10.0)))
            .formatter(ValueFormatter::Custom(Arc::new(|value: f64| format!("{value:.1}%"))))
            .series(series)
            .build()
            .unwrap();
        assert!(chart.hover_readout().is_none());
        chart.set_viewport(Viewport::new(120.0, 120.0));
        chart.pointer_moved(105.0);
        assert_eq!(chart.hover_readout().as_deref(), Some("Q2: 65.5%"));
        chart.pointer_moved(12.0);
        assert_eq!(chart.hover_readout().as_deref(), Some("Q1: 40.0%"));
    }

    #[test]
    fn geometry_waits_for_viewport() {
        let mut chart = chart(vec![1.0, 2.0, 3.0]);
        assert!(chart.geometry().points.is_empty());
        assert!(chart.pointer_moved(20.0).is_none());
        assert!(chart.set_viewport(Viewport::new(120.0, 120.0)));
        assert_eq!(chart.geometry().points.len(), 3);
        assert!(!chart.geometry().line.is_empty());
        assert!(chart.geometry().fill.is_closed());
        assert!(!chart.set_viewport(Viewport::new(120.0, 120.0)));
    }

    #[test]
    fn resize_keeps_hover_index() {
        let mut chart = chart(vec![1.0, 2.0, 3.0]);
        chart.set_viewport(Viewport::new(120.0, 120.0));
        let hover = chart.pointer_moved(110.0).unwrap();
        assert_eq!(hover.index, 2);
        chart.set_viewport(Viewport::new(220.0, 120.0));
        let hover = chart.hover().unwrap();
        assert_eq!(hover.index, 2);
        assert_eq!(hover.x, 210.0);
    }

    #[test]
    fn shrinking_series_clears_stale_hover() {
        let mut chart = chart(vec![1.0, 2.0, 3.0]);
        chart.set_viewport(Viewport::new(120.0, 120.0));
        chart.pointer_moved(110.0);
        chart.set_series(Series::new(vec![5.0]));
        assert!(chart.hover().is_none());
    }

    #[test]
    fn readout_prefers_labels() {
        let mut chart = chart(vec![4.0, 7.5]);
        chart.set_viewport(Viewport::new(120.0, 120.0));
        chart.pointer_moved(200.0);
        assert_eq!(chart.hover_readout().as_deref(), Some("#2: 7.50"));

        let labelled = Series::new(vec![4.0, 7.5])
            .with_labels(["Mon", "Tue"])
            .unwrap();
        chart.set_series(labelled);
        chart.pointer_moved(0.0);
        assert_eq!(chart.hover_readout().as_deref(), Some("Mon: 4"));
        chart.pointer_left();
        assert!(chart.hover_readout().is_none());
    }

    #[test]
    fn tick_marks_carry_labels() {
        let series = Series::new(vec![1.0, 2.0])
            .with_labels(["Jan", "Feb"])
            .unwrap();
        let mut chart = chart(vec![]);
        chart.set_series(series);
        chart.set_viewport(Viewport::new(120.0, 120.0));
        let ticks = chart.tick_marks();
        assert_eq!(ticks.len(), 2);
        assert_eq!(ticks[1].label.as_deref(), Some("Feb"));
        assert_eq!(ticks[1].x, 110.0);
    }

    #[test]
    fn explicit_gradient_id_wins() {
        let chart = TrendChart::builder()
            .config(TrendChartConfig::default().with_gradient_id("enrolment"))
            .series(Series::new(vec![1.0]))
            .build()
            .unwrap();
        assert_eq!(chart.gradient_id().as_str(), "enrolment");
        let derived = TrendChart::new(Series::new(vec![1.0]));
        assert_eq!(derived.gradient_id(), Series::new(vec![1.0]).gradient_id());
    }
}
