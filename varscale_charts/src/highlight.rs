// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover cross-highlighting.
//!
//! Hovering any bar focuses that bar's metric: every element belonging to the
//! metric keeps full opacity while bars, axes, and value labels of all other
//! metrics dim. The partition is a pure function of the hovered index and the
//! scene shape. The rendering layer owns the element handles and applies the
//! opacities by index, so several chart instances can coexist without shared
//! lookup state.

extern crate alloc;

use alloc::vec::Vec;

/// Opacity applied to de-emphasized elements while a metric is focused.
pub const DIM_OPACITY: f64 = 0.2;

/// Hover interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    /// No bar hovered; everything is fully opaque.
    #[default]
    Idle,
    /// A bar of the given metric is hovered.
    Focused(usize),
}

impl HoverState {
    /// Focuses the metric owning the bar at `bar_index`.
    ///
    /// Bars are indexed metric-major (`index = metric × row_count + row`).
    /// With no rows there is nothing to hover, so the state stays `Idle`.
    pub fn focus_bar(bar_index: usize, row_count: usize) -> Self {
        if row_count == 0 {
            Self::Idle
        } else {
            Self::Focused(bar_index / row_count)
        }
    }
}

/// Per-element opacities for one hover state.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    /// Bar opacities, metric-major order.
    pub bars: Vec<f64>,
    /// Metric axis opacities (the reference axis is never dimmed).
    pub axes: Vec<f64>,
    /// Value label opacities, row-major order (empty when labels are hidden).
    pub value_labels: Vec<f64>,
}

impl Highlight {
    /// Computes the dim/opaque partition.
    ///
    /// In `Focused(m)`, bars and the axis of metric `m` stay opaque and every
    /// other metric's bars/axis dim to [`DIM_OPACITY`]; value labels follow
    /// the same split when `show_bar_values` is set. `Idle` (or a focus index
    /// beyond the metric count) leaves everything opaque.
    pub fn compute(
        state: HoverState,
        metric_count: usize,
        row_count: usize,
        show_bar_values: bool,
    ) -> Self {
        let focused = match state {
            HoverState::Focused(m) if m < metric_count => Some(m),
            _ => None,
        };
        let opacity = |metric: usize| match focused {
            Some(m) if metric != m => DIM_OPACITY,
            _ => 1.0,
        };

        let bars = (0..metric_count * row_count)
            .map(|i| opacity(i / row_count.max(1)))
            .collect();
        let axes = (0..metric_count).map(opacity).collect();
        let value_labels = if show_bar_values {
            (0..row_count * metric_count)
                .map(|k| opacity(k % metric_count.max(1)))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            bars,
            axes,
            value_labels,
        }
    }

    /// Indices of dimmed bars.
    pub fn dimmed_bars(&self) -> impl Iterator<Item = usize> + '_ {
        self.bars
            .iter()
            .enumerate()
            .filter(|(_, o)| **o < 1.0)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn hovered_bar_focuses_its_metric() {
        // 2 metrics x 3 rows, metric-major: bar 4 belongs to metric 1, row 1.
        assert_eq!(HoverState::focus_bar(4, 3), HoverState::Focused(1));
        assert_eq!(HoverState::focus_bar(2, 3), HoverState::Focused(0));
        assert_eq!(HoverState::focus_bar(0, 0), HoverState::Idle);
    }

    #[test]
    fn focused_metric_keeps_its_group_opaque() {
        let h = Highlight::compute(HoverState::focus_bar(4, 3), 2, 3, false);
        assert_eq!(h.bars, vec![DIM_OPACITY, DIM_OPACITY, DIM_OPACITY, 1.0, 1.0, 1.0]);
        assert_eq!(h.axes, vec![DIM_OPACITY, 1.0]);
        assert!(h.value_labels.is_empty());
        assert_eq!(h.dimmed_bars().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn value_labels_dim_row_major() {
        let h = Highlight::compute(HoverState::Focused(1), 2, 3, true);
        // Row-major: k % 2 == 1 belongs to metric 1.
        assert_eq!(
            h.value_labels,
            vec![DIM_OPACITY, 1.0, DIM_OPACITY, 1.0, DIM_OPACITY, 1.0]
        );
    }

    #[test]
    fn idle_and_out_of_range_focus_leave_everything_opaque() {
        let idle = Highlight::compute(HoverState::Idle, 2, 3, true);
        assert!(idle.bars.iter().all(|o| *o == 1.0));
        assert!(idle.axes.iter().all(|o| *o == 1.0));
        assert!(idle.value_labels.iter().all(|o| *o == 1.0));
        assert_eq!(idle.dimmed_bars().count(), 0);

        let out = Highlight::compute(HoverState::Focused(9), 2, 3, false);
        assert_eq!(out, Highlight::compute(HoverState::Idle, 2, 3, false));
    }
}
