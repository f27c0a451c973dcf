// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value label generation.
//!
//! One text mark per datum, centered over its bar and placed just above the
//! bar top, showing the formatted value.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
use stria_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::data::Datum;
use crate::format::format_tick_with_step;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::text_mark::TextMarkSpec;

/// Per-bar value labels derived from a dataset.
///
/// Identity is `(group, hash(name))`, mirroring [`crate::BarMarkSpec`] with a
/// different group, so a bar and its label enter and exit together.
#[derive(Clone, Debug)]
pub struct ValueLabelSpec {
    /// Id group for the generated marks.
    pub group: u64,
    /// Band scale for horizontal centering.
    pub band: ScaleBand,
    /// Linear scale for locating the bar top.
    pub y_scale: ScaleLinear,
    /// Baseline in data units (typically `0.0`).
    pub baseline: f64,
    /// Gap between the bar top and the label baseline.
    pub offset: f64,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Tick step used for decimal formatting (`0.0` formats shortest).
    pub step: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl ValueLabelSpec {
    /// Creates a value label spec with default styling.
    pub fn new(group: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            group,
            band,
            y_scale,
            baseline: 0.0,
            offset: 4.0,
            font_size: 10.0,
            fill: Brush::default(),
            step: 0.0,
            z_index: crate::z_order::VALUE_LABELS,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the gap between bar top and label.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the tick step used for decimal formatting.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Generates one label mark per datum; non-finite values get no label.
    pub fn marks(&self, data: &[Datum]) -> Vec<Mark> {
        let y0 = self.y_scale.map(self.baseline);

        data.iter()
            .enumerate()
            .filter(|(_, datum)| datum.value.is_finite())
            .map(|(index, datum)| {
                let top = self.y_scale.map(datum.value).min(y0);
                let pos = Point::new(self.band.center(index), top - self.offset);
                TextMarkSpec::new(
                    MarkId::for_key(self.group, datum.key()),
                    pos,
                    format_tick_with_step(datum.value, self.step),
                )
                .with_font_size(self.font_size)
                .with_fill(self.fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Alphabetic)
                .with_z_index(self.z_index)
                .mark()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use stria_core::MarkPayload;

    use super::*;

    fn spec() -> ValueLabelSpec {
        let band = ScaleBand::new((0.0, 40.0), 2).with_padding(0.0, 0.0);
        let y_scale = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        ValueLabelSpec::new(2, band, y_scale)
    }

    #[test]
    fn labels_center_over_bars_and_sit_above_the_top() {
        let marks = spec().marks(&vec![Datum::new("a", 10.0), Datum::new("b", 5.0)]);
        assert_eq!(marks.len(), 2);

        let MarkPayload::Text(t0) = &marks[0].payload else {
            panic!("expected text payload");
        };
        assert!((t0.pos.x - 10.0).abs() < 1e-9);
        assert!((t0.pos.y - (0.0 - 4.0)).abs() < 1e-9);
        assert_eq!(t0.text, "10");
        assert_eq!(t0.anchor, TextAnchor::Middle);

        let MarkPayload::Text(t1) = &marks[1].payload else {
            panic!("expected text payload");
        };
        assert!((t1.pos.x - 30.0).abs() < 1e-9);
        assert!((t1.pos.y - (50.0 - 4.0)).abs() < 1e-9);
    }

    #[test]
    fn non_finite_values_get_no_label() {
        let marks = spec().marks(&[Datum::new("a", f64::INFINITY), Datum::new("b", 1.0)]);
        assert_eq!(marks.len(), 1);
    }

    #[test]
    fn step_controls_decimals() {
        let marks = spec().with_step(0.5).marks(&[Datum::new("a", 3.0)]);
        let MarkPayload::Text(t) = &marks[0].payload else {
            panic!("expected text payload");
        };
        assert_eq!(t.text, "3.0");
    }
}
