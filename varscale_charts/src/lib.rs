// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout engine for a variable-scale grouped bar chart.
//!
//! The chart draws several metrics as grouped bars over a shared categorical
//! x-axis, with each metric mapped onto its own independently scaled vertical
//! axis. This crate owns the deterministic part of that chart:
//! - **Scales** pick a "nice" axis ceiling per metric and map values into
//!   canvas coordinates.
//! - **Layout** turns rows + options into a [`ChartScene`]: bar rectangles,
//!   axis guides, label positions, legend entries.
//! - **Highlighting** computes the dim/opaque partition for hover
//!   cross-highlighting as a pure function of the hovered bar.
//!
//! Rendering is out of scope: a [`ChartScene`] is plain geometry and text,
//! consumable by any 2D vector-drawing surface. The scene is rebuilt from
//! scratch on every call; there is no incremental state.

#![no_std]

extern crate alloc;

mod chart;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod highlight;
mod options;
mod palette;
mod scale;
#[cfg(test)]
mod scene_tests;
mod value;

pub use chart::{
    AxisGuide, AxisTick, Bar, BarChartSpec, ChartScene, LegendEntry, Margins, ReferenceAxis,
    TextAnchor, TextLabel, ValueLabel, XLabel,
};
pub use format::{format_plain, format_si};
pub use highlight::{DIM_OPACITY, Highlight, HoverState};
pub use options::{BarValueLayout, BottomMargin, DisplayOptions, SortBars, XTicksLayout};
pub use palette::{ColorResolver, FALLBACK_PALETTE, FnResolver, NoSchemeColors, series_color};
pub use scale::{ScaleLinear, nice_axis_max};
pub use value::{Row, Value};
