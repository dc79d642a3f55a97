use gpui_trendline::{
    ApproxTextMeasurer, RenderCommand, RenderOptions, Series, TrendChart, TrendChartConfig,
    Viewport, build_render_list,
};

fn enrolment_chart() -> TrendChart {
    let config = TrendChartConfig::from_json(
        r#"{ "padding": { "top": 10, "right": 10, "bottom": 10, "left": 10 }, "max_ticks": 2 }"#,
    )
    .expect("valid config");
    let series = Series::new(vec![12.0, 18.0, 9.0, 24.0, 30.0])
        .with_labels(["Mon", "Tue", "Wed", "Thu", "Fri"])
        .expect("labels match values");
    TrendChart::builder()
        .config(config)
        .series(series)
        .build()
        .expect("chart builds")
}

#[test]
fn pointer_moves_then_leaves() {
    let mut chart = enrolment_chart();
    chart.set_viewport(Viewport::new(420.0, 220.0));

    let hover = chart.pointer_moved(215.0).expect("hover");
    assert_eq!(hover.index, 2);
    assert_eq!(chart.hover_readout().as_deref(), Some("Wed: 9"));

    chart.pointer_left();
    assert!(chart.hover().is_none());
    chart.pointer_left();
    assert!(chart.hover().is_none());
}

#[test]
fn ticks_follow_configured_bound() {
    let mut chart = enrolment_chart();
    chart.set_viewport(Viewport::new(420.0, 220.0));
    let labels: Vec<_> = chart
        .tick_marks()
        .into_iter()
        .filter_map(|tick| tick.label)
        .collect();
    assert_eq!(labels, vec!["Mon", "Thu", "Fri"]);
}

#[test]
fn render_list_tracks_hover() {
    let mut chart = enrolment_chart();
    chart.set_viewport(Viewport::new(420.0, 220.0));
    let idle = build_render_list(&chart, RenderOptions::default(), &ApproxTextMeasurer);
    chart.pointer_moved(400.0);
    let hovered = build_render_list(&chart, RenderOptions::default(), &ApproxTextMeasurer);
    assert!(hovered.commands().len() > idle.commands().len());
    assert!(hovered.commands().iter().any(|command| matches!(
        command,
        RenderCommand::Text { text, .. } if text == "Fri: 30"
    )));
}

#[test]
fn shrinking_viewport_below_padding_clears_geometry() {
    let mut chart = enrolment_chart();
    chart.set_viewport(Viewport::new(420.0, 220.0));
    chart.pointer_moved(100.0);
    chart.set_viewport(Viewport::new(15.0, 220.0));
    assert!(chart.geometry().points.is_empty());
    assert!(chart.hover().is_none());
    assert!(
        build_render_list(&chart, RenderOptions::default(), &ApproxTextMeasurer)
            .commands()
            .is_empty()
    );
}
