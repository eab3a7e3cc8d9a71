// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart demos for `varscale_charts`.
mod html;
mod svg;

use kurbo::Size;
use varscale_charts::{
    BarChartSpec, BarValueLayout, BottomMargin, DisplayOptions, HoverState, NoSchemeColors, Row,
    SortBars, XTicksLayout,
};

fn main() {
    let sections = vec![
        defaults_demo(),
        sorted_values_demo(),
        hover_demo(),
        wide_range_demo(),
    ];

    let html = html::render_report("Varscale charts demo", &sections);
    std::fs::write("varscale_charts_demo.html", html).expect("write varscale_charts_demo.html");
    println!("wrote varscale_charts_demo.html");
}

fn quarterly_rows() -> Vec<Row> {
    [
        ("Q1", 1_240.0, 86.0, 0.62),
        ("Q2", 2_830.0, 104.0, 0.71),
        ("Q3", 1_970.0, 93.0, 0.55),
        ("Q4", 3_410.0, 128.0, 0.78),
    ]
    .into_iter()
    .map(|(quarter, revenue, orders, rate)| {
        Row::new()
            .with("quarter", quarter)
            .with("revenue", revenue)
            .with("orders", orders)
            .with("conversion", rate)
    })
    .collect()
}

fn quarterly_spec() -> BarChartSpec {
    BarChartSpec::new(
        Size::new(900.0, 520.0),
        "quarter",
        vec![
            String::from("revenue"),
            String::from("orders"),
            String::from("conversion"),
        ],
    )
}

fn defaults_demo() -> (String, String) {
    let scene = quarterly_spec().layout(&quarterly_rows(), &NoSchemeColors);
    (
        String::from("Per-metric scales, default options"),
        svg::scene_to_svg(&scene, HoverState::Idle),
    )
}

fn sorted_values_demo() -> (String, String) {
    let spec = quarterly_spec().with_options(DisplayOptions {
        sort_bars: SortBars::Descending,
        show_bar_values: true,
        bar_value_layout: BarValueLayout::FortyFive,
        bar_value_precision: 3,
        x_axis_label: String::from("Quarter"),
        ..DisplayOptions::default()
    });
    let scene = spec.layout(&quarterly_rows(), &NoSchemeColors);
    (
        String::from("Sorted descending by first metric, rotated value labels"),
        svg::scene_to_svg(&scene, HoverState::Idle),
    )
}

fn hover_demo() -> (String, String) {
    let spec = quarterly_spec().with_options(DisplayOptions {
        show_bar_values: true,
        ..DisplayOptions::default()
    });
    let scene = spec.layout(&quarterly_rows(), &NoSchemeColors);
    // Hover the second metric's Q1 bar (metric-major index 4).
    let hover = HoverState::focus_bar(4, scene.row_count);
    (
        String::from("Hovering an orders bar dims the other metrics"),
        svg::scene_to_svg(&scene, hover),
    )
}

fn wide_range_demo() -> (String, String) {
    let rows: Vec<Row> = [
        ("us-east", 8_400_000.0, 0.0043),
        ("eu-west", 2_150_000.0, 0.0021),
        ("ap-south", 640_000.0, 0.0088),
        ("sa-east", 91_000.0, 0.0012),
        ("af-south", 7_300.0, 0.0067),
        ("me-central", 480.0, 0.0039),
    ]
    .into_iter()
    .map(|(region, requests, error_rate)| {
        Row::new()
            .with("region", region)
            .with("requests", requests)
            .with("error rate", error_rate)
    })
    .collect();

    let spec = BarChartSpec::new(
        Size::new(900.0, 520.0),
        "region",
        vec![String::from("requests"), String::from("error rate")],
    )
    .with_options(DisplayOptions {
        x_ticks_layout: XTicksLayout::FortyFive,
        bottom_margin: BottomMargin::Px(140.0),
        show_bar_values: true,
        ..DisplayOptions::default()
    });
    let scene = spec.layout(&rows, &NoSchemeColors);
    (
        String::from("Six decades apart on sibling axes, SI tick labels"),
        svg::scene_to_svg(&scene, HoverState::Idle),
    )
}
