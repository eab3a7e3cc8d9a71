// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Variable-scale bar chart layout.
//!
//! [`BarChartSpec::layout`] is the whole engine: rows + metric list + options
//! in, a [`ChartScene`] out. The scene is plain geometry (bar rectangles,
//! axis guides, label positions) with no rendering-library types beyond
//! `kurbo`/`peniko` primitives. Every call recomputes the full scene; there
//! is no incremental state to invalidate.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::format::{format_plain, format_si};
use crate::highlight::{Highlight, HoverState};
use crate::options::{BarValueLayout, DisplayOptions, SortBars, XTicksLayout};
use crate::palette::{ColorResolver, FALLBACK_PALETTE, series_color};
use crate::scale::{ScaleLinear, nice_axis_max};
use crate::value::Row;

/// Width reserved per metric axis in the axis block.
const SINGLE_AXIS_WIDTH: f64 = 40.0;
/// Extra axis-block width beyond the per-metric slots.
const AXIS_BLOCK_EXTRA: f64 = 26.0;
/// Number of tick intervals on every vertical axis.
const TICK_INTERVALS: usize = 10;

/// Horizontal text anchoring, as understood by SVG-like surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start of the text run.
    Start,
    /// Anchor at the center.
    Middle,
    /// Anchor at the end.
    End,
}

/// Canvas margins in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin (host-configurable).
    pub bottom: f64,
    /// Left margin.
    pub left: f64,
}

impl Margins {
    /// The chart's fixed margins, with the bottom taken from `options`.
    pub fn for_options(options: &DisplayOptions) -> Self {
        Self {
            top: 100.0,
            right: 30.0,
            bottom: options.bottom_margin.resolve(),
            left: 2.0,
        }
    }
}

/// One bar rectangle.
///
/// Bars are emitted in metric-major order: `index = metric × row_count + row`.
#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    /// Pixel rectangle of the bar.
    pub rect: Rect,
    /// Metric index (axis and color group).
    pub metric: usize,
    /// Row index after sorting.
    pub row: usize,
    /// Fill color.
    pub fill: Color,
}

/// A tick on a metric axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Tick value in data units.
    pub value: f64,
    /// Tick y position in canvas pixels.
    pub y: f64,
    /// Formatted tick label.
    pub label: String,
}

/// A vertical data axis for one metric.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisGuide {
    /// Metric index this axis scales.
    pub metric: usize,
    /// Axis line x position.
    pub x: f64,
    /// Axis top y position.
    pub top: f64,
    /// Axis pixel height.
    pub height: f64,
    /// Value-to-pixel scale; domain `[0, nice_max]`, range `[height, 0]`.
    pub scale: ScaleLinear,
    /// Ticks from 0 to the nice maximum, inclusive.
    pub ticks: Vec<AxisTick>,
    /// Tick mark length, extending left of the axis line.
    pub tick_size: f64,
    /// Gap between tick end and tick label.
    pub tick_padding: f64,
    /// Axis stroke color (matches the metric's bars).
    pub stroke: Color,
    /// Axis stroke width.
    pub stroke_width: f64,
    /// Axis title (upper-cased metric name).
    pub title: String,
    /// Title anchor position.
    pub title_pos: Point,
    /// Title rotation in degrees.
    pub title_angle: f64,
}

impl AxisGuide {
    /// The axis domain maximum.
    pub fn nice_max(&self) -> f64 {
        self.scale.domain_max()
    }
}

/// The non-data axis at the right edge of the plotted area.
///
/// Its ticks extend leftwards across the full bar area, acting as gridlines;
/// it maps no values and is never dimmed by hover highlighting.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceAxis {
    /// Axis line x position.
    pub x: f64,
    /// Axis top y position.
    pub top: f64,
    /// Axis pixel height.
    pub height: f64,
    /// Tick mark length, extending left of the axis line.
    pub tick_size: f64,
    /// Gap between tick end and tick label.
    pub tick_padding: f64,
    /// Tick y positions, evenly spaced.
    pub tick_ys: Vec<f64>,
}

/// An x-axis category label, one per row.
#[derive(Clone, Debug, PartialEq)]
pub struct XLabel {
    /// Label anchor position.
    pub pos: Point,
    /// Rotation pivot (label position at the plot's bottom edge).
    pub rotate_about: Point,
    /// Label text (category value).
    pub text: String,
    /// Rotation in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
}

/// A free-standing text label (x-axis title).
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
}

/// One legend swatch + label pair.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Metric index.
    pub metric: usize,
    /// Swatch rectangle.
    pub swatch: Rect,
    /// Label anchor position.
    pub label_pos: Point,
    /// Label text (metric name).
    pub label: String,
    /// Swatch fill color.
    pub fill: Color,
}

/// An on-bar value label.
///
/// Value labels are emitted in row-major order:
/// `index = row × metric_count + metric`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValueLabel {
    /// Metric index.
    pub metric: usize,
    /// Row index after sorting.
    pub row: usize,
    /// Anchor position, 3px above the bar top.
    pub pos: Point,
    /// Formatted value text.
    pub text: String,
    /// Rotation in degrees (about `pos`).
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
}

/// A fully laid out chart, ready for any 2D vector-drawing surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartScene {
    /// Canvas size the layout was computed for.
    pub canvas: Size,
    /// Number of metrics.
    pub metric_count: usize,
    /// Number of rows (after sorting; sorting never drops rows).
    pub row_count: usize,
    /// Bars in metric-major order.
    pub bars: Vec<Bar>,
    /// Metric axes, left to right.
    pub axes: Vec<AxisGuide>,
    /// The right-edge reference axis (absent when there are no metrics).
    pub reference_axis: Option<ReferenceAxis>,
    /// Category labels, one per row.
    pub x_labels: Vec<XLabel>,
    /// Optional x-axis title.
    pub x_axis_title: Option<TextLabel>,
    /// Legend entries (empty unless the legend is shown).
    pub legend: Vec<LegendEntry>,
    /// Value labels in row-major order (empty unless shown).
    pub value_labels: Vec<ValueLabel>,
}

impl ChartScene {
    /// Returns the bar for `(metric, row)`, if laid out.
    pub fn bar(&self, metric: usize, row: usize) -> Option<&Bar> {
        self.bars.get(metric * self.row_count + row)
    }

    /// Computes the hover dim/opaque partition for this scene.
    pub fn highlight(&self, state: HoverState) -> Highlight {
        Highlight::compute(
            state,
            self.metric_count,
            self.row_count,
            !self.value_labels.is_empty(),
        )
    }
}

/// The chart specification: canvas, fields, and display options.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartSpec {
    /// Canvas size in pixels.
    pub canvas: Size,
    /// Category field name (x-axis).
    pub category: String,
    /// Ordered metric field names; order fixes axis order and bar order
    /// within each category group.
    pub metrics: Vec<String>,
    /// Display options.
    pub options: DisplayOptions,
}

impl BarChartSpec {
    /// Creates a spec with default display options.
    pub fn new(canvas: Size, category: impl Into<String>, metrics: Vec<String>) -> Self {
        Self {
            canvas,
            category: category.into(),
            metrics,
            options: DisplayOptions::default(),
        }
    }

    /// Sets the display options.
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    /// Lays out the full chart scene for `rows`.
    ///
    /// This is a pure function of the spec, the rows, and the resolver:
    /// identical inputs produce identical scenes. Malformed cells degrade to
    /// zero-height bars; an empty metric list or row set yields a defined
    /// empty scene.
    pub fn layout(&self, rows: &[Row], colors: &dyn ColorResolver) -> ChartScene {
        let metric_count = self.metrics.len();
        if metric_count == 0 {
            return ChartScene {
                canvas: self.canvas,
                row_count: rows.len(),
                ..ChartScene::default()
            };
        }

        let options = &self.options;
        let margins = Margins::for_options(options);
        let inner_w = self.canvas.width - margins.left - margins.right;
        let inner_h = self.canvas.height - margins.top - margins.bottom;

        let ordered = sort_rows(rows, &self.metrics[0], options.sort_bars);
        let row_count = ordered.len();

        let axis_block = SINGLE_AXIS_WIDTH * metric_count as f64 + AXIS_BLOCK_EXTRA;
        let graph_width = inner_w - axis_block;
        let slot_width = if row_count == 0 {
            0.0
        } else {
            graph_width / row_count as f64
        };
        let bar_width = slot_width * (8.0 / 9.0) / metric_count as f64;

        let fills: Vec<Color> = self
            .metrics
            .iter()
            .enumerate()
            .map(|(m, name)| {
                series_color(colors, &options.color_scheme, name, &FALLBACK_PALETTE, m)
            })
            .collect();

        let scales: Vec<ScaleLinear> = self
            .metrics
            .iter()
            .map(|name| {
                let max = column_max(&ordered, name);
                ScaleLinear::new((0.0, nice_axis_max(max)), (inner_h, 0.0))
            })
            .collect();

        let axes = self
            .metrics
            .iter()
            .enumerate()
            .map(|(m, name)| {
                axis_guide(m, name, scales[m], fills[m], &margins, inner_h)
            })
            .collect();

        let reference_axis = Some(reference_axis(&margins, inner_w, inner_h, graph_width));

        let mut bars = Vec::with_capacity(metric_count * row_count);
        for (m, name) in self.metrics.iter().enumerate() {
            let scale = &scales[m];
            for (r, row) in ordered.iter().enumerate() {
                let v = geometry_value(row.value_f64(name));
                let x = axis_block + bar_width * m as f64 + slot_width * r as f64;
                let y = margins.top + scale.map(v);
                let height = inner_h - scale.map(v);
                bars.push(Bar {
                    rect: Rect::new(x, y, x + bar_width, y + height),
                    metric: m,
                    row: r,
                    fill: fills[m],
                });
            }
        }

        let x_labels = ordered
            .iter()
            .enumerate()
            .map(|(r, row)| {
                let x = axis_block + slot_width * r as f64 + slot_width * 4.0 / 9.0;
                let base_y = margins.top + inner_h;
                XLabel {
                    pos: Point::new(
                        x,
                        base_y + 18.0 + options.x_ticks_layout.stagger_offset(r),
                    ),
                    rotate_about: Point::new(x, base_y),
                    text: row.display(&self.category),
                    angle: options.x_ticks_layout.angle(),
                    anchor: if options.x_ticks_layout == XTicksLayout::FortyFive {
                        TextAnchor::Start
                    } else {
                        TextAnchor::Middle
                    },
                }
            })
            .collect();

        let x_axis_title = (!options.x_axis_label.is_empty()).then(|| TextLabel {
            pos: Point::new(inner_w / 2.0, margins.top + inner_h + 60.0),
            text: options.x_axis_label.clone(),
            anchor: TextAnchor::Middle,
        });

        let legend = if options.show_legend {
            self.metrics
                .iter()
                .enumerate()
                .map(|(m, name)| {
                    let col = (m % 3) as f64;
                    let line = (m / 3) as f64;
                    let x = axis_block + graph_width / 2.5 + 210.0 * col;
                    let y = 20.0 + 20.0 * line;
                    LegendEntry {
                        metric: m,
                        swatch: Rect::new(x, y, x + 15.0, y + 10.0),
                        label_pos: Point::new(x + 20.0, y + 8.0),
                        label: name.clone(),
                        fill: fills[m],
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        let value_labels = if options.show_bar_values {
            let mut out = Vec::with_capacity(metric_count * row_count);
            for (r, row) in ordered.iter().enumerate() {
                for (m, name) in self.metrics.iter().enumerate() {
                    let v = row.value_f64(name);
                    let x = axis_block
                        + slot_width * r as f64
                        + bar_width * m as f64
                        + bar_width / 2.0;
                    let y = margins.top + scales[m].map(geometry_value(v)) - 3.0;
                    out.push(ValueLabel {
                        metric: m,
                        row: r,
                        pos: Point::new(x, y),
                        text: format_si(v, options.precision()),
                        angle: options.bar_value_layout.angle(),
                        anchor: if options.bar_value_layout == BarValueLayout::Flat {
                            TextAnchor::Middle
                        } else {
                            TextAnchor::Start
                        },
                    });
                }
            }
            out
        } else {
            Vec::new()
        };

        ChartScene {
            canvas: self.canvas,
            metric_count,
            row_count,
            bars,
            axes,
            reference_axis,
            x_labels,
            x_axis_title,
            legend,
            value_labels,
        }
    }
}

/// Clamps a coerced cell value for geometry: non-finite or negative values
/// draw as a zero-height bar instead of corrupting the rectangle.
fn geometry_value(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn column_max(rows: &[&Row], field: &str) -> f64 {
    let max = rows
        .iter()
        .map(|row| row.value_f64(field))
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() { max } else { 0.0 }
}

fn sort_rows<'a>(rows: &'a [Row], first_metric: &str, policy: SortBars) -> Vec<&'a Row> {
    let mut ordered: Vec<&Row> = rows.iter().collect();
    let key = |row: &Row| {
        let v = row.value_f64(first_metric);
        if v.is_finite() { v } else { 0.0 }
    };
    match policy {
        SortBars::Auto => {}
        // Stable sorts: ties keep input order.
        SortBars::Ascending => ordered.sort_by(|a, b| key(a).total_cmp(&key(b))),
        SortBars::Descending => ordered.sort_by(|a, b| key(b).total_cmp(&key(a))),
    }
    ordered
}

fn axis_guide(
    metric: usize,
    name: &str,
    scale: ScaleLinear,
    stroke: Color,
    margins: &Margins,
    inner_h: f64,
) -> AxisGuide {
    let nice_max = scale.domain_max();
    let x = margins.left + 12.0 + SINGLE_AXIS_WIDTH * (metric + 1) as f64;
    let ticks = (0..=TICK_INTERVALS)
        .map(|i| {
            let value = nice_max * i as f64 / TICK_INTERVALS as f64;
            AxisTick {
                value,
                y: margins.top + scale.map(value),
                label: if nice_max < 10.0 {
                    format_plain(value)
                } else {
                    format_si(value, 2)
                },
            }
        })
        .collect();
    AxisGuide {
        metric,
        x,
        top: margins.top,
        height: inner_h,
        scale,
        ticks,
        tick_size: 5.0,
        tick_padding: 4.0,
        stroke,
        stroke_width: 2.75,
        title: name.to_uppercase(),
        title_pos: Point::new(x - 15.0, margins.top - 37.0),
        title_angle: -30.0,
    }
}

fn reference_axis(margins: &Margins, inner_w: f64, inner_h: f64, graph_width: f64) -> ReferenceAxis {
    let tick_ys = (0..=TICK_INTERVALS)
        .map(|i| margins.top + inner_h - inner_h * i as f64 / TICK_INTERVALS as f64)
        .collect();
    ReferenceAxis {
        x: inner_w,
        top: margins.top,
        height: inner_h,
        tick_size: graph_width + inner_w / 40.0 - 14.0,
        tick_padding: 5.0,
        tick_ys,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::palette::NoSchemeColors;

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::new().with("day", "mon").with("m0", 3.0).with("m1", 40.0),
            Row::new().with("day", "tue").with("m0", 1.0).with("m1", 25.0),
            Row::new().with("day", "wed").with("m0", 2.0).with("m1", 47.0),
        ]
    }

    fn sample_spec() -> BarChartSpec {
        BarChartSpec::new(
            Size::new(600.0, 400.0),
            "day",
            vec![String::from("m0"), String::from("m1")],
        )
    }

    #[test]
    fn axis_block_and_bar_widths_follow_the_formulas() {
        let scene = sample_spec().layout(&sample_rows(), &NoSchemeColors);

        // inner width 600 - 2 - 30 = 568; axis block 40*2 + 26 = 106.
        let axis_block = 106.0;
        let slot = (568.0 - axis_block) / 3.0;
        let bar_w = slot * 8.0 / 9.0 / 2.0;

        let bar = scene.bar(0, 0).expect("bar (0,0)");
        assert_eq!(bar.rect.x0, axis_block);
        assert!((bar.rect.width() - bar_w).abs() < 1e-9);

        let bar = scene.bar(1, 2).expect("bar (1,2)");
        assert!((bar.rect.x0 - (axis_block + bar_w + 2.0 * slot)).abs() < 1e-9);
    }

    #[test]
    fn bars_scale_against_their_own_nice_maximum() {
        let scene = sample_spec().layout(&sample_rows(), &NoSchemeColors);

        // inner height 400 - 100 - 100 = 200.
        // m0: max 3 -> nice 5; m1: max 47 -> nice 50.
        assert_eq!(scene.axes[0].nice_max(), 5.0);
        assert_eq!(scene.axes[1].nice_max(), 50.0);

        let bar = scene.bar(0, 0).expect("bar (0,0)");
        assert!((bar.rect.y0 - (100.0 + 200.0 * (1.0 - 3.0 / 5.0))).abs() < 1e-9);
        assert!((bar.rect.height() - 200.0 * 3.0 / 5.0).abs() < 1e-9);

        let bar = scene.bar(1, 2).expect("bar (1,2)");
        assert!((bar.rect.height() - 200.0 * 47.0 / 50.0).abs() < 1e-9);
    }

    #[test]
    fn axes_sit_left_to_right_with_the_reference_axis_at_the_plot_edge() {
        let scene = sample_spec().layout(&sample_rows(), &NoSchemeColors);

        assert_eq!(scene.axes[0].x, 2.0 + 12.0 + 40.0);
        assert_eq!(scene.axes[1].x, 2.0 + 12.0 + 80.0);
        assert_eq!(scene.axes[0].ticks.len(), 11);
        assert_eq!(scene.axes[0].title, "M0");

        let reference = scene.reference_axis.as_ref().expect("reference axis");
        assert_eq!(reference.x, 568.0);
        assert!((reference.tick_size - (462.0 + 568.0 / 40.0 - 14.0)).abs() < 1e-9);
    }

    #[test]
    fn tick_labels_switch_format_on_domain_size() {
        let scene = sample_spec().layout(&sample_rows(), &NoSchemeColors);

        // m0 domain max 5 (< 10): plain labels.
        assert_eq!(scene.axes[0].ticks[1].label, "0.5");
        // m1 domain max 50: SI labels with 2 significant digits.
        assert_eq!(scene.axes[1].ticks[10].label, "50");
    }

    #[test]
    fn sort_orders_rows_by_first_metric() {
        let mut spec = sample_spec();
        spec.options.sort_bars = SortBars::Ascending;
        let scene = spec.layout(&sample_rows(), &NoSchemeColors);
        let labels: Vec<&str> = scene.x_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, ["tue", "wed", "mon"]);

        spec.options.sort_bars = SortBars::Descending;
        let scene = spec.layout(&sample_rows(), &NoSchemeColors);
        let labels: Vec<&str> = scene.x_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, ["mon", "wed", "tue"]);

        spec.options.sort_bars = SortBars::Auto;
        let scene = spec.layout(&sample_rows(), &NoSchemeColors);
        let labels: Vec<&str> = scene.x_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, ["mon", "tue", "wed"]);
    }

    #[test]
    fn legend_fills_a_three_column_grid() {
        let spec = BarChartSpec::new(
            Size::new(900.0, 400.0),
            "day",
            (0..4).map(|m| alloc::format!("m{m}")).collect(),
        );
        let scene = spec.layout(&sample_rows(), &NoSchemeColors);
        assert_eq!(scene.legend.len(), 4);

        // Fourth entry wraps to the second legend row.
        assert_eq!(scene.legend[3].swatch.y0, 40.0);
        assert_eq!(scene.legend[3].swatch.x0, scene.legend[0].swatch.x0);
        let pitch = scene.legend[1].swatch.x0 - scene.legend[0].swatch.x0;
        assert!((pitch - 210.0).abs() < 1e-9);
    }

    #[test]
    fn value_labels_sit_above_bar_tops_in_row_major_order() {
        let mut spec = sample_spec();
        spec.options.show_bar_values = true;
        let scene = spec.layout(&sample_rows(), &NoSchemeColors);

        assert_eq!(scene.value_labels.len(), 6);
        let label = &scene.value_labels[1];
        assert_eq!((label.row, label.metric), (0, 1));
        let bar = scene.bar(1, 0).expect("bar (1,0)");
        assert!((label.pos.y - (bar.rect.y0 - 3.0)).abs() < 1e-9);
        assert!((label.pos.x - (bar.rect.x0 + bar.rect.width() / 2.0)).abs() < 1e-9);
        assert_eq!(label.text, "40.00");
    }

    #[test]
    fn malformed_cells_degrade_to_zero_height_bars() {
        let mut rows = sample_rows();
        rows[1] = Row::new().with("day", "tue").with("m0", "n/a").with("m1", 25.0);
        let scene = sample_spec().layout(&rows, &NoSchemeColors);

        let bad = scene.bar(0, 1).expect("bar (0,1)");
        assert_eq!(bad.rect.height(), 0.0);
        // The rest of the render is unaffected.
        let good = scene.bar(1, 1).expect("bar (1,1)");
        assert!(good.rect.height() > 0.0);
    }

    #[test]
    fn empty_inputs_yield_defined_empty_scenes() {
        let no_metrics = BarChartSpec::new(Size::new(600.0, 400.0), "day", Vec::new());
        let scene = no_metrics.layout(&sample_rows(), &NoSchemeColors);
        assert_eq!(scene.metric_count, 0);
        assert!(scene.bars.is_empty());
        assert!(scene.axes.is_empty());
        assert!(scene.reference_axis.is_none());

        let scene = sample_spec().layout(&[], &NoSchemeColors);
        assert_eq!(scene.row_count, 0);
        assert!(scene.bars.is_empty());
        assert_eq!(scene.axes.len(), 2);
        assert_eq!(scene.axes[0].nice_max(), 0.001);
    }

    #[test]
    fn layout_is_a_pure_function_of_its_inputs() {
        let spec = sample_spec();
        let rows = sample_rows();
        let a = spec.layout(&rows, &NoSchemeColors);
        let b = spec.layout(&rows, &NoSchemeColors);
        assert_eq!(a, b);
    }
}
