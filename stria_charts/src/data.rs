// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart dataset.

extern crate alloc;

use alloc::string::String;

/// One category in a bar chart: a name, a magnitude, and an optional
/// "primary" flag that renders with the emphasis fill.
///
/// Names should be unique within a dataset: mark identity is derived from
/// the name, so two data with the same name collapse onto one element.
/// Values are non-negative magnitudes mapped to bar height; non-finite
/// values degrade to a zero-height bar with no label.
#[derive(Clone, Debug, PartialEq)]
pub struct Datum {
    /// Category label, shown on the category axis.
    pub name: String,
    /// Magnitude mapped to bar height.
    pub value: f64,
    /// Whether this datum renders with the emphasis fill.
    pub primary: bool,
}

impl Datum {
    /// Creates a non-primary datum.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            primary: false,
        }
    }

    /// Creates a primary datum (rendered with the emphasis fill).
    pub fn primary(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
            primary: true,
        }
    }

    /// Returns the stable per-datum key used for mark identity.
    ///
    /// The key is a hash of the name only, so a datum keeps its rendered
    /// element across redraws even when its value changes.
    pub fn key(&self) -> u64 {
        hash_name(&self.name)
    }
}

/// FNV-1a over the name bytes; deterministic across processes and frames.
fn hash_name(name: &str) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.as_bytes() {
        h ^= u64::from(*byte);
        h = h.wrapping_mul(0x0000_0100_0000_01b3);
    }
    h
}
