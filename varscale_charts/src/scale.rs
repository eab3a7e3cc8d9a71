// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear value-to-pixel mapping and the nice-maximum rule.

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-span domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns the minimum of the configured domain (as authored).
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the maximum of the configured domain (as authored).
    pub fn domain_max(&self) -> f64 {
        self.domain.1
    }
}

/// Picks a rounded axis ceiling slightly above `max`.
///
/// The ceiling is the smallest value of the form `0.001 × 10^n` that is
/// `≥ max`, halved once if that leaves more than 2× headroom. The result is a
/// 1–5 progression over powers of ten (1, 10, 100, … and 0.5, 5, 50, …) that
/// keeps tick labels round without excessive whitespace above the tallest bar.
///
/// A non-positive (or NaN) input yields the floor value `0.001`, so an
/// all-zero metric column still gets a drawable axis.
///
/// Inputs just above an exact power of ten take the looser bound
/// (`100` → `100`, but `100.1` → `500` rather than `200`).
pub fn nice_axis_max(max: f64) -> f64 {
    // Non-positive and NaN inputs take the floor directly; the halving
    // check below would otherwise cut it to 0.0005.
    if !(max > 0.0) {
        return 0.001;
    }
    let mut k = 0.001;
    while k < max {
        k *= 10.0;
    }
    if k > 2.0 * max {
        k /= 2.0;
    }
    k
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn nice_axis_max_examples() {
        assert_eq!(nice_axis_max(47.0), 50.0);
        assert_eq!(nice_axis_max(5.0), 10.0);
        assert_eq!(nice_axis_max(0.7), 1.0);
        assert_eq!(nice_axis_max(120.0), 500.0);
        assert_eq!(nice_axis_max(6400.0), 10_000.0);
    }

    #[test]
    fn nice_axis_max_of_zero_is_floor_value() {
        assert_eq!(nice_axis_max(0.0), 0.001);
        assert_eq!(nice_axis_max(-3.0), 0.001);
        assert_eq!(nice_axis_max(f64::NAN), 0.001);
    }

    #[test]
    fn nice_axis_max_never_clips_data() {
        for v in [0.002, 0.3, 1.5, 7.0, 12.0, 47.0, 99.0, 101.0, 6400.0] {
            assert!(nice_axis_max(v) >= v, "ceiling below data max for {v}");
        }
    }

    #[test]
    fn power_of_ten_inputs_stop_without_halving() {
        // The loop lands exactly on the input decade, so the halving check
        // never fires; just past the decade it overshoots and halves.
        assert_eq!(nice_axis_max(100.0), 100.0);
        assert_eq!(nice_axis_max(100.0000001), 500.0);
    }

    #[test]
    fn scale_maps_endpoints_and_inverts() {
        let s = ScaleLinear::new((0.0, 50.0), (200.0, 0.0));
        assert_eq!(s.map(0.0), 200.0);
        assert_eq!(s.map(50.0), 0.0);
        assert_eq!(s.map(25.0), 100.0);
    }

    #[test]
    fn zero_span_domain_maps_to_range_start() {
        let s = ScaleLinear::new((3.0, 3.0), (200.0, 0.0));
        assert_eq!(s.map(3.0), 200.0);
        assert_eq!(s.map(100.0), 200.0);
    }
}
