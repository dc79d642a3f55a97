use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use tracing_subscriber::EnvFilter;

use gpui_trendline::{
    GpuiTrendView, Padding, Series, Theme, TrendChart, TrendChartConfig, TrendViewConfig,
};

const MONTHLY_ENROLMENT: [(&str, u32); 10] = [
    ("Sep", 112),
    ("Oct", 118),
    ("Nov", 121),
    ("Dec", 119),
    ("Jan", 127),
    ("Feb", 134),
    ("Mar", 131),
    ("Apr", 140),
    ("May", 146),
    ("Jun", 151),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(360.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let series = Series::from_iter_values(MONTHLY_ENROLMENT.iter().map(|(_, count)| *count))
                .with_labels(MONTHLY_ENROLMENT.iter().map(|(month, _)| *month))
                .expect("one label per month");

            let padding = Padding::new(24.0, 24.0, 32.0, 24.0);
            let chart = TrendChart::builder()
                .theme(Theme::dark())
                .config(TrendChartConfig::default().with_padding(padding))
                .series(series)
                .build()
                .expect("valid chart config");

            let view = GpuiTrendView::with_config(chart, TrendViewConfig::default());
            cx.new(|_| view)
        })
        .unwrap();
    });
}
