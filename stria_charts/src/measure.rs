// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hook for guide layout.
//!
//! Guide layout needs rough text extents before marks exist (axis margins,
//! title strips). Shaping stays downstream, so guides take a measurer
//! callback instead of a font stack.

/// A minimal text measurement interface used by guide generators.
///
/// Implementations return extents in the same coordinate system as the marks.
/// Callers can plug in a real text backend, or use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` for a single unwrapped line of `text`.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A heuristic measurer assuming ~0.6 em average glyph width and 1 em height.
///
/// Good enough for layout margins; not for typography.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}
