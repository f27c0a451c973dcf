// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight stroked segment, used here for axis domain lines,
//! tick marks, and gridlines.

use kurbo::BezPath;
use peniko::{Brush, Color};
use stria_core::{Mark, MarkId, MarkPayload, PathPayload};

use crate::z_order;

/// A rule mark spec (a stroked line segment).
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point x in scene coordinates.
    pub x0: f64,
    /// Start point y in scene coordinates.
    pub y0: f64,
    /// End point x in scene coordinates.
    pub x1: f64,
    /// End point y in scene coordinates.
    pub y1: f64,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// Creates a new rule between two points.
    pub fn new(id: MarkId, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            id,
            x0,
            y0,
            x1,
            y1,
            stroke: Brush::default(),
            stroke_width: 1.0,
            z_index: z_order::AXIS_RULES,
        }
    }

    /// Creates a horizontal rule.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, x0, y, x1, y)
    }

    /// Creates a vertical rule.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, x, y0, x, y1)
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rule mark.
    pub fn mark(&self) -> Mark {
        let mut path = BezPath::new();
        path.move_to((self.x0, self.y0));
        path.line_to((self.x1, self.y1));
        Mark::new(
            self.id,
            self.z_index,
            MarkPayload::Path(PathPayload {
                path,
                fill: Brush::Solid(Color::TRANSPARENT),
                stroke: self.stroke.clone(),
                stroke_width: self.stroke_width,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rule_bounds_span_its_endpoints() {
        let mark = RuleMarkSpec::horizontal(MarkId::from_raw(1), 5.0, 10.0, 90.0).mark();
        let bounds = mark.bounds().expect("path marks have bounds");
        assert!((bounds.x0 - 10.0).abs() < 1e-9);
        assert!((bounds.x1 - 90.0).abs() < 1e-9);
        assert!((bounds.y0 - 5.0).abs() < 1e-9);
        assert!((bounds.y1 - 5.0).abs() < 1e-9);
    }
}
