// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Brush;
use stria_core::{Mark, MarkId, MarkPayload, RectPayload};

use crate::data::Datum;
use crate::scale::{ScaleBand, ScaleLinear};

/// Vertical bars derived from a dataset.
///
/// Generates one rect mark per datum. The band scale positions bars along x
/// by datum index; the linear scale maps values against a baseline for y and
/// height. Mark identity is `(group, hash(name))`, so a category keeps its
/// element across redraws.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Id group for the generated marks.
    pub group: u64,
    /// Band scale for bar positions along x.
    pub band: ScaleBand,
    /// Linear scale for bar extents along y.
    pub y_scale: ScaleLinear,
    /// Baseline in data units (typically `0.0`).
    pub baseline: f64,
    /// Fill paint for ordinary bars.
    pub fill: Brush,
    /// Fill paint for the primary datum.
    pub emphasis_fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar mark spec with `baseline = 0` and default fills.
    pub fn new(group: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            group,
            band,
            y_scale,
            baseline: 0.0,
            fill: Brush::default(),
            emphasis_fill: Brush::default(),
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the fill paint for ordinary bars.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the fill paint for the primary datum.
    pub fn with_emphasis_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.emphasis_fill = fill.into();
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one bar mark per datum.
    pub fn marks(&self, data: &[Datum]) -> Vec<Mark> {
        let bw = self.band.band_width();
        let y0 = self.y_scale.map(self.baseline);

        data.iter()
            .enumerate()
            .map(|(index, datum)| {
                let value = if datum.value.is_finite() {
                    datum.value
                } else {
                    self.baseline
                };
                let y = self.y_scale.map(value);
                let top = y.min(y0);
                let height = (y - y0).abs();
                let x = self.band.x(index);
                let fill = if datum.primary {
                    self.emphasis_fill.clone()
                } else {
                    self.fill.clone()
                };
                Mark::new(
                    MarkId::for_key(self.group, datum.key()),
                    self.z_index,
                    MarkPayload::Rect(RectPayload {
                        rect: Rect::new(x, top, x + bw, top + height),
                        fill,
                    }),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    fn spec() -> BarMarkSpec {
        let band = ScaleBand::new((0.0, 40.0), 2).with_padding(0.0, 0.0);
        let y_scale = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        BarMarkSpec::new(1, band, y_scale)
            .with_fill(css::CORNFLOWER_BLUE)
            .with_emphasis_fill(css::ORANGE)
    }

    #[test]
    fn bars_rise_from_the_baseline() {
        let data = vec![Datum::new("a", 10.0), Datum::new("b", 5.0)];
        let marks = spec().marks(&data);
        assert_eq!(marks.len(), 2);

        // a: full height, left band.
        let b0 = marks[0].bounds().expect("rect bounds");
        assert!((b0.x0 - 0.0).abs() < 1e-9);
        assert!((b0.x1 - 20.0).abs() < 1e-9);
        assert!((b0.y0 - 0.0).abs() < 1e-9);
        assert!((b0.y1 - 100.0).abs() < 1e-9);

        // b: half height, right band.
        let b1 = marks[1].bounds().expect("rect bounds");
        assert!((b1.x0 - 20.0).abs() < 1e-9);
        assert!((b1.y0 - 50.0).abs() < 1e-9);
        assert!((b1.y1 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn identity_follows_the_datum_name() {
        let marks_a = spec().marks(&[Datum::new("a", 10.0), Datum::new("b", 5.0)]);
        // "b" moved to index 0 and changed value; its id must not change.
        let marks_b = spec().marks(&[Datum::new("b", 7.0)]);
        assert_eq!(marks_a[1].id, marks_b[0].id);
        assert_ne!(marks_a[0].id, marks_a[1].id);
    }

    #[test]
    fn non_finite_values_collapse_to_the_baseline() {
        let marks = spec().marks(&[Datum::new("a", f64::NAN)]);
        let b = marks[0].bounds().expect("rect bounds");
        assert!((b.height() - 0.0).abs() < 1e-9);
        assert!((b.y0 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn primary_datum_uses_the_emphasis_fill() {
        let marks = spec().marks(&[Datum::new("a", 1.0), Datum::primary("b", 2.0)]);
        let MarkPayload::Rect(r0) = &marks[0].payload else {
            panic!("expected rect payload");
        };
        let MarkPayload::Rect(r1) = &marks[1].payload else {
            panic!("expected rect payload");
        };
        assert_eq!(r0.fill, Brush::Solid(css::CORNFLOWER_BLUE));
        assert_eq!(r1.fill, Brush::Solid(css::ORANGE));
    }

    #[test]
    fn empty_dataset_generates_no_marks() {
        assert!(spec().marks(&[]).is_empty());
    }
}
