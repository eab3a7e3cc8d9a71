// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Size;
use peniko::color::palette::css;

use crate::{
    BarChartSpec, BottomMargin, DIM_OPACITY, DisplayOptions, FnResolver, HoverState,
    NoSchemeColors, Row, SortBars, TextAnchor, XTicksLayout,
};

fn rows() -> Vec<Row> {
    vec![
        Row::new().with("region", "north").with("orders", 120.0).with("refunds", 4.0),
        Row::new().with("region", "south").with("orders", 80.0).with("refunds", 9.0),
        Row::new().with("region", "east").with("orders", 45.0).with("refunds", 2.0),
        Row::new().with("region", "west").with("orders", 98.0).with("refunds", 6.0),
    ]
}

fn spec() -> BarChartSpec {
    BarChartSpec::new(
        Size::new(800.0, 500.0),
        "region",
        vec![String::from("orders"), String::from("refunds")],
    )
}

#[test]
fn staggered_ticks_offset_alternate_labels() {
    let spec = spec().with_options(DisplayOptions {
        x_ticks_layout: XTicksLayout::Staggered,
        ..DisplayOptions::default()
    });
    let scene = spec.layout(&rows(), &NoSchemeColors);

    let ys: Vec<f64> = scene.x_labels.iter().map(|l| l.pos.y).collect();
    assert_eq!(ys[0], ys[2]);
    assert_eq!(ys[1], ys[3]);
    assert_eq!(ys[1] - ys[0], 12.0);
    assert!(scene.x_labels.iter().all(|l| l.angle == 0.0));
    assert!(scene.x_labels.iter().all(|l| l.anchor == TextAnchor::Middle));
}

#[test]
fn forty_five_degree_ticks_rotate_and_start_anchor() {
    let spec = spec().with_options(DisplayOptions {
        x_ticks_layout: XTicksLayout::FortyFive,
        ..DisplayOptions::default()
    });
    let scene = spec.layout(&rows(), &NoSchemeColors);
    for label in &scene.x_labels {
        assert_eq!(label.angle, 45.0);
        assert_eq!(label.anchor, TextAnchor::Start);
        // Rotation pivots on the plot's bottom edge under the label.
        assert_eq!(label.rotate_about.x, label.pos.x);
    }
}

#[test]
fn bottom_margin_and_axis_title_options_apply() {
    let spec = spec().with_options(DisplayOptions {
        bottom_margin: BottomMargin::Px(150.0),
        x_axis_label: String::from("Region"),
        ..DisplayOptions::default()
    });
    let scene = spec.layout(&rows(), &NoSchemeColors);

    // inner height 500 - 100 - 150 = 250.
    assert_eq!(scene.axes[0].height, 250.0);
    let title = scene.x_axis_title.as_ref().expect("x-axis title");
    assert_eq!(title.text, "Region");
    assert_eq!(title.pos.y, 100.0 + 250.0 + 60.0);

    let untitled = BarChartSpec {
        options: DisplayOptions::default(),
        ..spec
    };
    assert!(untitled.layout(&rows(), &NoSchemeColors).x_axis_title.is_none());
}

#[test]
fn resolved_colors_flow_to_bars_axes_and_legend() {
    let resolver = FnResolver(|key: &str, scheme: &str| {
        (scheme == "brand" && key == "orders").then_some(css::REBECCA_PURPLE)
    });
    let spec = spec().with_options(DisplayOptions {
        color_scheme: String::from("brand"),
        ..DisplayOptions::default()
    });
    let scene = spec.layout(&rows(), &resolver);

    let orders = css::REBECCA_PURPLE.components;
    assert_eq!(scene.bars[0].fill.components, orders);
    assert_eq!(scene.axes[0].stroke.components, orders);
    assert_eq!(scene.legend[0].fill.components, orders);
    // Unresolved series falls back to the palette by metric index.
    assert_eq!(
        scene.axes[1].stroke.components,
        crate::FALLBACK_PALETTE[1].components
    );
}

#[test]
fn scene_highlight_matches_scene_shape() {
    let spec = spec().with_options(DisplayOptions {
        show_bar_values: true,
        ..DisplayOptions::default()
    });
    let scene = spec.layout(&rows(), &NoSchemeColors);

    let h = scene.highlight(HoverState::focus_bar(5, scene.row_count));
    assert_eq!(h.bars.len(), scene.bars.len());
    assert_eq!(h.axes.len(), scene.axes.len());
    assert_eq!(h.value_labels.len(), scene.value_labels.len());

    // Bar 5 is metric 1, row 1: all of metric 1 stays opaque.
    for bar in &scene.bars {
        let expected = if bar.metric == 1 { 1.0 } else { DIM_OPACITY };
        assert_eq!(h.bars[bar.metric * scene.row_count + bar.row], expected);
    }
    for label in &scene.value_labels {
        let expected = if label.metric == 1 { 1.0 } else { DIM_OPACITY };
        assert_eq!(
            h.value_labels[label.row * scene.metric_count + label.metric],
            expected
        );
    }
}

#[test]
fn host_option_strings_build_display_options() {
    // The host hands options over as strings; unknown values degrade to
    // defaults instead of failing the render.
    let options = DisplayOptions {
        sort_bars: SortBars::from_option_str("descending"),
        x_ticks_layout: XTicksLayout::from_option_str("tilted"),
        bottom_margin: BottomMargin::from_option_str("auto"),
        ..DisplayOptions::default()
    };
    assert_eq!(options.sort_bars, SortBars::Descending);
    assert_eq!(options.x_ticks_layout, XTicksLayout::Auto);
    assert_eq!(options.bottom_margin, BottomMargin::Auto);

    let scene = spec()
        .with_options(options)
        .layout(&rows(), &NoSchemeColors);
    let first: Vec<&str> = scene.x_labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(first, ["north", "west", "south", "east"]);
}
