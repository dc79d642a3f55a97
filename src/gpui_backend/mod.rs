//! GPUI integration for gpui_trendline.
//!
//! This module provides a GPUI view that measures its surface, forwards
//! pointer movement to a [`TrendChart`](crate::chart::TrendChart), and paints
//! the resulting render list.

mod config;
mod frame;
mod paint;
mod state;
mod text;
mod view;

pub use config::TrendViewConfig;
pub use view::{GpuiTrendView, TrendHandle};
