// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Display options and their host-side option-string forms.
//!
//! The host control panel hands options over as loosely typed strings
//! (`"auto"`, `"45°"`, …). Each enum here parses from that form and falls
//! back to its default on anything unrecognized, so a stale or malformed
//! option value degrades to default behavior instead of failing the render.

extern crate alloc;

use alloc::string::String;

/// Bar sorting policy, keyed on the first metric's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBars {
    /// Preserve input row order.
    #[default]
    Auto,
    /// Sort rows ascending by the first metric.
    Ascending,
    /// Sort rows descending by the first metric.
    Descending,
}

impl SortBars {
    /// Parses the host option string; unrecognized values fall back to `Auto`.
    pub fn from_option_str(s: &str) -> Self {
        match s {
            "ascending" => Self::Ascending,
            "descending" => Self::Descending,
            _ => Self::Auto,
        }
    }
}

/// X-axis tick label arrangement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum XTicksLayout {
    /// Flat labels, centered under each bar group.
    #[default]
    Auto,
    /// Same as `Auto`; kept as a distinct host option.
    Flat,
    /// Flat labels with alternate rows pushed 12px further down.
    Staggered,
    /// Labels rotated 45° with a `start` text anchor.
    FortyFive,
}

impl XTicksLayout {
    /// Parses the host option string; unrecognized values fall back to `Auto`.
    pub fn from_option_str(s: &str) -> Self {
        match s {
            "flat" => Self::Flat,
            "staggered" => Self::Staggered,
            "45°" => Self::FortyFive,
            _ => Self::Auto,
        }
    }

    /// Label rotation angle in degrees.
    pub fn angle(self) -> f64 {
        match self {
            Self::Auto | Self::Flat | Self::Staggered => 0.0,
            Self::FortyFive => 45.0,
        }
    }

    /// Extra downward offset for the label of the row at `row` index.
    pub fn stagger_offset(self, row: usize) -> f64 {
        match self {
            Self::Staggered => (row % 2) as f64 * 12.0,
            _ => 0.0,
        }
    }
}

/// Rotation of on-bar value labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarValueLayout {
    /// Horizontal labels, centered on the bar.
    #[default]
    Flat,
    /// Labels rotated −45°, anchored at their start.
    FortyFive,
    /// Labels rotated −90°, anchored at their start.
    Ninety,
}

impl BarValueLayout {
    /// Parses the host option string; unrecognized values fall back to `Flat`.
    pub fn from_option_str(s: &str) -> Self {
        match s {
            "45°" => Self::FortyFive,
            "90°" => Self::Ninety,
            _ => Self::Flat,
        }
    }

    /// Label rotation angle in degrees (negative is counter-clockwise).
    pub fn angle(self) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::FortyFive => -45.0,
            Self::Ninety => -90.0,
        }
    }
}

/// Bottom canvas margin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BottomMargin {
    /// Resolves to 100px.
    #[default]
    Auto,
    /// Explicit pixel margin.
    Px(f64),
}

impl BottomMargin {
    /// Parses the host option string (`"auto"` or a pixel integer).
    ///
    /// Unrecognized values fall back to `Auto`.
    pub fn from_option_str(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(px) if px >= 0 => Self::Px(px as f64),
            _ => Self::Auto,
        }
    }

    /// The resolved margin in pixels.
    pub fn resolve(self) -> f64 {
        match self {
            Self::Auto => 100.0,
            Self::Px(px) => px,
        }
    }
}

/// Immutable chart display configuration.
///
/// Defaults mirror the host control panel: legend on, bar values off,
/// everything else `auto`/flat with 4 significant digits for value labels.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayOptions {
    /// Bar sorting policy.
    pub sort_bars: SortBars,
    /// X tick label arrangement.
    pub x_ticks_layout: XTicksLayout,
    /// On-bar value label rotation.
    pub bar_value_layout: BarValueLayout,
    /// Significant digits for value labels, clamped to 1–7.
    pub bar_value_precision: u8,
    /// Whether to emit legend entries.
    pub show_legend: bool,
    /// Whether to emit on-bar value labels.
    pub show_bar_values: bool,
    /// Bottom canvas margin.
    pub bottom_margin: BottomMargin,
    /// Optional x-axis title; empty means absent.
    pub x_axis_label: String,
    /// Color scheme identifier, resolved externally per series.
    pub color_scheme: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            sort_bars: SortBars::Auto,
            x_ticks_layout: XTicksLayout::Auto,
            bar_value_layout: BarValueLayout::Flat,
            bar_value_precision: 4,
            show_legend: true,
            show_bar_values: false,
            bottom_margin: BottomMargin::Auto,
            x_axis_label: String::new(),
            color_scheme: String::new(),
        }
    }
}

impl DisplayOptions {
    /// Value-label precision clamped to the supported 1–7 range.
    pub fn precision(&self) -> u8 {
        self.bar_value_precision.clamp(1, 7)
    }
}
