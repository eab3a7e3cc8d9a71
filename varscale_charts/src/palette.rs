// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-series color resolution.
//!
//! The host owns named color schemes; this crate only holds the seam. When
//! the host resolves no color for a series, a fixed fallback palette is
//! cycled by metric index. Resolution is a pure function of its inputs; the
//! palette is a parameter, never shared mutable state.

use peniko::Color;
use peniko::color::palette::css;

/// Host-side color scheme lookup.
pub trait ColorResolver {
    /// Resolves a color for `series_key` within `scheme`, if the scheme
    /// defines one.
    fn resolve(&self, series_key: &str, scheme: &str) -> Option<Color>;
}

/// A resolver with no schemes; every lookup falls through to the palette.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSchemeColors;

impl ColorResolver for NoSchemeColors {
    fn resolve(&self, _series_key: &str, _scheme: &str) -> Option<Color> {
        None
    }
}

/// Adapts a plain function or closure into a [`ColorResolver`].
#[derive(Clone, Copy, Debug)]
pub struct FnResolver<F>(pub F);

impl<F> ColorResolver for FnResolver<F>
where
    F: Fn(&str, &str) -> Option<Color>,
{
    fn resolve(&self, series_key: &str, scheme: &str) -> Option<Color> {
        (self.0)(series_key, scheme)
    }
}

/// Fallback series palette, cycled by metric index.
pub const FALLBACK_PALETTE: [Color; 7] = [
    Color::from_rgb8(0xe8, 0xa9, 0x2c),
    Color::from_rgb8(0x6e, 0x63, 0xc2),
    Color::from_rgb8(0xf0, 0xec, 0x1d),
    Color::from_rgb8(0x95, 0x0c, 0xad),
    Color::from_rgb8(0x3b, 0xba, 0xd4),
    Color::from_rgb8(0x38, 0xf2, 0xff),
    Color::from_rgb8(0xd1, 0xce, 0x0d),
];

/// Resolves the color for the metric at `index`.
///
/// Prefers the host scheme's color for `series_key`; otherwise cycles
/// `palette` by `index`. An empty palette yields black.
pub fn series_color(
    resolver: &dyn ColorResolver,
    scheme: &str,
    series_key: &str,
    palette: &[Color],
    index: usize,
) -> Color {
    resolver.resolve(series_key, scheme).unwrap_or_else(|| {
        if palette.is_empty() {
            css::BLACK
        } else {
            palette[index % palette.len()]
        }
    })
}
