use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{MouseMoveEvent, Pixels, Point, Window, canvas, div};

use crate::chart::TrendChart;
use crate::geom::PlotPoint;
use crate::series::Series;

use super::config::TrendViewConfig;
use super::frame::build_frame;
use super::paint::{paint_frame, to_hsla};
use super::state::ChartUiState;

/// A GPUI view that renders a [`TrendChart`] with hover interaction.
///
/// Each prepaint measures the canvas and hands the size to the chart, which
/// recomputes its geometry only when the size actually changed.
#[derive(Clone)]
pub struct GpuiTrendView {
    // Lock order: chart before state.
    chart: Arc<RwLock<TrendChart>>,
    state: Arc<RwLock<ChartUiState>>,
    config: TrendViewConfig,
}

impl GpuiTrendView {
    /// Create a new view for the given chart.
    ///
    /// Uses the default [`TrendViewConfig`].
    pub fn new(chart: TrendChart) -> Self {
        Self::with_config(chart, TrendViewConfig::default())
    }

    /// Create a new view with a custom configuration.
    pub fn with_config(chart: TrendChart, config: TrendViewConfig) -> Self {
        Self {
            chart: Arc::new(RwLock::new(chart)),
            state: Arc::new(RwLock::new(ChartUiState::default())),
            config,
        }
    }

    /// Get a handle for mutating the underlying chart.
    ///
    /// This is useful for replacing the series from async tasks.
    pub fn chart_handle(&self) -> TrendHandle {
        TrendHandle {
            chart: Arc::clone(&self.chart),
        }
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let mut chart = self.chart.write().expect("chart lock");
        let Some(surface) = self.state.read().expect("chart state lock").surface else {
            return;
        };
        let local = surface.to_local(window_point(ev.position));
        let before = chart.hover();
        if surface.contains_local(local) {
            chart.pointer_moved(local.x);
        } else {
            chart.pointer_left();
        }
        if chart.hover() != before {
            cx.notify();
        }
    }

    fn on_pointer_leave(&mut self, cx: &mut Context<Self>) {
        let mut chart = self.chart.write().expect("chart lock");
        chart.pointer_left();
        cx.notify();
    }
}

impl Render for GpuiTrendView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let chart = Arc::clone(&self.chart);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let background = chart.read().expect("chart lock").theme().background;

        div()
            .id("trendline-chart")
            .size_full()
            .bg(to_hsla(background))
            .child(
                canvas(
                    move |bounds, window, _| {
                        let mut chart = chart.write().expect("chart lock");
                        let mut state = state.write().expect("chart state lock");
                        build_frame(&mut chart, &mut state, &config, bounds, window)
                    },
                    move |_, frame, window, cx| {
                        paint_frame(&frame, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_hover(cx.listener(|this, hovered: &bool, _, cx| {
                if !*hovered {
                    this.on_pointer_leave(cx);
                }
            }))
    }
}

/// A handle for mutating a [`TrendChart`] held inside a `GpuiTrendView`.
///
/// The handle clones cheaply and can be moved into async tasks.
#[derive(Clone)]
pub struct TrendHandle {
    chart: Arc<RwLock<TrendChart>>,
}

impl TrendHandle {
    /// Read the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&TrendChart) -> R) -> R {
        let chart = self.chart.read().expect("chart lock");
        f(&chart)
    }

    /// Mutate the chart state.
    ///
    /// The chart is locked for the duration of the callback.
    pub fn write<R>(&self, f: impl FnOnce(&mut TrendChart) -> R) -> R {
        let mut chart = self.chart.write().expect("chart lock");
        f(&mut chart)
    }

    /// Replace the plotted series.
    pub fn set_series(&self, series: Series) {
        self.write(|chart| chart.set_series(series));
    }
}

fn window_point(point: Point<Pixels>) -> PlotPoint {
    PlotPoint::new(f32::from(point.x), f32::from(point.y))
}
