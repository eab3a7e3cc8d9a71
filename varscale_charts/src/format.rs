// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick and value-label number formatting.
//!
//! Axis ticks on small domains (`nice max < 10`) use the shortest plain
//! decimal form; everything else uses SI-prefixed significant-digit notation
//! in the style of d3's `".2s"` format (`1234` → `"1.2k"`).

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

const SI_PREFIXES: [&str; 17] = [
    "y", "z", "a", "f", "p", "n", "µ", "m", "", "k", "M", "G", "T", "P", "E", "Z", "Y",
];

/// Formats `v` in its shortest round-trip decimal form (`3` not `3.0`).
pub fn format_plain(v: f64) -> String {
    alloc::format!("{v}")
}

/// Formats `v` with `significant` digits and an SI prefix.
///
/// `significant` is clamped to at least 1. The prefix is chosen from the
/// value after rounding, so `999.9` at two significant digits reads `"1.0k"`,
/// not `"1000"`. Trailing zeros within the significant digits are kept, as in
/// d3's `s` format type. Non-finite values format as-is (`"NaN"`).
pub fn format_si(v: f64, significant: u8) -> String {
    if !v.is_finite() {
        return format_plain(v);
    }
    let sig = i32::from(significant.max(1));
    let a = v.abs();
    let sign = if v < 0.0 { "-" } else { "" };
    if a == 0.0 {
        let decimals = (sig - 1) as usize;
        return alloc::format!("{sign}{:.decimals$}", 0.0);
    }

    // Round to the requested significant digits before picking the prefix.
    let e = floor_log10(a);
    let step = 10_f64.powi(e - sig + 1);
    let rounded = (a / step).round() * step;

    let e = floor_log10(rounded);
    let prefix_e = (e.div_euclid(3) * 3).clamp(-24, 24);
    let scaled = rounded / 10_f64.powi(prefix_e);
    let decimals = (sig - 1 - (e - prefix_e)).max(0) as usize;
    let prefix = SI_PREFIXES[((prefix_e + 24) / 3) as usize];

    alloc::format!("{sign}{scaled:.decimals$}{prefix}")
}

/// `floor(log10(a))` for positive `a`, nudged against float error at exact
/// powers of ten.
fn floor_log10(a: f64) -> i32 {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "axis/label magnitudes are far inside the i32 exponent range"
    )]
    let mut e = a.log10().floor() as i32;
    if 10_f64.powi(e + 1) <= a {
        e += 1;
    } else if 10_f64.powi(e) > a {
        e -= 1;
    }
    e
}
