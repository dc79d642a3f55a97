//! Axis tick sampling and value formatting.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::geom::PlotPoint;

/// Default upper bound used to derive the tick stride.
pub const DEFAULT_MAX_TICKS: usize = 6;

/// Pick a sparse set of point indices to mark with ticks.
///
/// Every `ceil(N / max_ticks)`-th index is kept, and the last index is always
/// included even when it falls between strides. `max_ticks == 0` behaves
/// like 1.
pub fn compute_tick_indices(points: &[PlotPoint], max_ticks: usize) -> BTreeSet<usize> {
    let len = points.len();
    if len == 0 {
        return BTreeSet::new();
    }
    let stride = len.div_ceil(max_ticks.max(1));
    let mut ticks: BTreeSet<usize> = (0..len).step_by(stride).collect();
    ticks.insert(len - 1);
    ticks
}

/// A tick placed under a plot point.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Series index of the tick.
    pub index: usize,
    /// X position in pixels.
    pub x: f32,
    /// Display label, when the series carries labels.
    pub label: Option<String>,
}

/// Formatter for hover and tick values.
#[derive(Clone, Default)]
pub enum ValueFormatter {
    /// Whole numbers without decimals, everything else with two.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl ValueFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => {
                if value.is_finite() && value.fract() == 0.0 {
                    format!("{value:.0}")
                } else {
                    format!("{value:.2}")
                }
            }
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "ValueFormatter::Default"),
            Self::Custom(_) => write!(f, "ValueFormatter::Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(len: usize) -> Vec<PlotPoint> {
        (0..len).map(|i| PlotPoint::new(i as f32, 0.0)).collect()
    }

    #[test]
    fn thirteen_points_use_stride_three() {
        let ticks = compute_tick_indices(&points(13), DEFAULT_MAX_TICKS);
        assert_eq!(ticks.into_iter().collect::<Vec<_>>(), vec![0, 3, 6, 9, 12]);
    }

    #[test]
    fn last_index_is_always_marked() {
        let ticks = compute_tick_indices(&points(8), DEFAULT_MAX_TICKS);
        assert_eq!(ticks.into_iter().collect::<Vec<_>>(), vec![0, 2, 4, 6, 7]);
    }

    #[test]
    fn small_series_marks_every_point() {
        let ticks = compute_tick_indices(&points(3), DEFAULT_MAX_TICKS);
        assert_eq!(ticks.len(), 3);
        assert_eq!(compute_tick_indices(&points(1), 6).len(), 1);
        assert!(compute_tick_indices(&[], 6).is_empty());
    }

    #[test]
    fn zero_max_ticks_marks_first_and_last() {
        let ticks = compute_tick_indices(&points(5), 0);
        assert_eq!(ticks.into_iter().collect::<Vec<_>>(), vec![0, 4]);
    }

    #[test]
    fn default_formatter() {
        let formatter = ValueFormatter::default();
        assert_eq!(formatter.format(12.0), "12");
        assert_eq!(formatter.format(2.5), "2.50");
        let custom = ValueFormatter::Custom(Arc::new(|value: f64| format!("{value}%")));
        assert_eq!(custom.format(40.0), "40%");
    }
}
