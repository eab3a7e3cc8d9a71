// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump for `varscale_charts` scenes.
//!
//! This is the "rendering layer" side of the contract: it owns no layout
//! logic, walks the scene in draw order, and applies hover opacities by
//! element index.

use std::fmt::Write as _;

use peniko::Color;
use varscale_charts::{ChartScene, HoverState, TextAnchor};

/// Renders `scene` to an SVG string, dimming elements per `hover`.
pub(crate) fn scene_to_svg(scene: &ChartScene, hover: HoverState) -> String {
    let highlight = scene.highlight(hover);
    let mut out = String::new();

    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        scene.canvas.width, scene.canvas.height
    );
    out.push('\n');

    if let Some(reference) = &scene.reference_axis {
        let _ = write!(
            out,
            r##"<path d="M{} {}V{}" stroke="#000000" stroke-opacity="0.14" stroke-width="1" fill="none"/>"##,
            reference.x,
            reference.top,
            reference.top + reference.height
        );
        out.push('\n');
        for y in &reference.tick_ys {
            let _ = write!(
                out,
                r##"<line x1="{}" y1="{y}" x2="{}" y2="{y}" stroke="#000000" stroke-opacity="0.14"/>"##,
                reference.x - reference.tick_size,
                reference.x
            );
            out.push('\n');
        }
    }

    for bar in &scene.bars {
        let opacity = highlight.bars[bar.metric * scene.row_count + bar.row];
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            bar.rect.x0,
            bar.rect.y0,
            bar.rect.width(),
            bar.rect.height(),
            hex(bar.fill)
        );
        write_opacity(&mut out, opacity);
        out.push_str("/>\n");
    }

    for axis in &scene.axes {
        let opacity = highlight.axes[axis.metric];
        let stroke = hex(axis.stroke);
        let _ = write!(
            out,
            r#"<g opacity="{opacity}"><path d="M{} {}V{}" stroke="{stroke}" stroke-width="{}" fill="none"/>"#,
            axis.x,
            axis.top,
            axis.top + axis.height,
            axis.stroke_width
        );
        out.push('\n');
        for tick in &axis.ticks {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}"/>"#,
                axis.x - axis.tick_size,
                tick.y,
                axis.x,
                tick.y
            );
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="10" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                axis.x - axis.tick_size - axis.tick_padding,
                tick.y,
                escape_xml(&tick.label)
            );
            out.push('\n');
        }
        let _ = write!(
            out,
            r##"<text x="{}" y="{}" font-size="10" font-weight="800" fill="#777777" transform="rotate({} {} {})">{}</text>"##,
            axis.title_pos.x,
            axis.title_pos.y,
            axis.title_angle,
            axis.title_pos.x,
            axis.title_pos.y,
            escape_xml(&axis.title)
        );
        out.push_str("</g>\n");
    }

    for label in &scene.x_labels {
        let _ = write!(
            out,
            r##"<text x="{}" y="{}" fill="#555555" text-anchor="{}""##,
            label.pos.x,
            label.pos.y,
            anchor(label.anchor)
        );
        if label.angle != 0.0 {
            let _ = write!(
                out,
                r#" transform="rotate({} {} {})""#,
                label.angle, label.rotate_about.x, label.rotate_about.y
            );
        }
        let _ = write!(out, ">{}</text>", escape_xml(&label.text));
        out.push('\n');
    }

    if let Some(title) = &scene.x_axis_title {
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" text-anchor="{}">{}</text>"#,
            title.pos.x,
            title.pos.y,
            anchor(title.anchor),
            escape_xml(&title.text)
        );
        out.push('\n');
    }

    for entry in &scene.legend {
        let _ = write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            entry.swatch.x0,
            entry.swatch.y0,
            entry.swatch.width(),
            entry.swatch.height(),
            hex(entry.fill)
        );
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-size="11.7">{}</text>"#,
            entry.label_pos.x,
            entry.label_pos.y,
            escape_xml(&entry.label)
        );
        out.push('\n');
    }

    for label in &scene.value_labels {
        let opacity = highlight.value_labels[label.row * scene.metric_count + label.metric];
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-size="9.9" text-anchor="{}""#,
            label.pos.x,
            label.pos.y,
            anchor(label.anchor)
        );
        if label.angle != 0.0 {
            let _ = write!(
                out,
                r#" transform="rotate({} {} {})""#,
                label.angle, label.pos.x, label.pos.y
            );
        }
        write_opacity(&mut out, opacity);
        let _ = write!(out, ">{}</text>", escape_xml(&label.text));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

fn write_opacity(out: &mut String, opacity: f64) {
    if opacity < 1.0 {
        let _ = write!(out, r#" opacity="{opacity}""#);
    }
}

fn anchor(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
