// Copyright 2026 the Varscale Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row values and numeric coercion.
//!
//! Chart input is tabular: one [`Row`] per category instance, each row a
//! mapping from field name to a loosely typed [`Value`]. Metric cells are
//! expected to be numeric but may arrive as strings; a single coercion rule
//! (leading-integer parsing) is shared by sorting, axis-ceiling computation,
//! and bar geometry so malformed cells degrade consistently.

extern crate alloc;

use alloc::string::String;

use hashbrown::HashMap;

/// A single cell value: a number or free-form text.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A numeric cell.
    Number(f64),
    /// A textual cell (category labels, or stringly-typed numbers).
    Text(String),
}

impl Value {
    /// Coerces this value to `f64` using leading-integer parsing for text.
    ///
    /// Text is parsed as an optional sign followed by leading decimal digits;
    /// anything after the digits is ignored (`"12px"` → `12.0`). Text with no
    /// leading numeral coerces to NaN. Numbers pass through unchanged.
    pub fn coerce_f64(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_leading_int(s),
        }
    }

    /// Returns the value as display text.
    ///
    /// Text passes through; numbers use their shortest decimal form.
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) => crate::format::format_plain(*n),
            Self::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

fn parse_leading_int(s: &str) -> f64 {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let mut out: Option<f64> = None;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        let d = f64::from(b - b'0');
        out = Some(out.unwrap_or(0.0) * 10.0 + d);
    }
    match out {
        Some(n) => sign * n,
        None => f64::NAN,
    }
}

/// One chart row: a mapping from field name to cell value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: HashMap<String, Value>,
}

impl Row {
    /// Creates an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any existing value.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns the raw value for `field`, if present.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the coerced numeric value for `field`.
    ///
    /// Missing fields coerce to NaN, like text with no leading numeral.
    pub fn value_f64(&self, field: &str) -> f64 {
        self.fields.get(field).map_or(f64::NAN, Value::coerce_f64)
    }

    /// Returns the display text for `field` (empty when missing).
    pub fn display(&self, field: &str) -> String {
        self.fields.get(field).map(Value::display).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
