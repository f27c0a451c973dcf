// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks: resolved graphic elements with stable identity.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// A stable mark identifier.
///
/// Identity is what lets a retained backend update an element in place across
/// redraws instead of recreating it. Chart layers derive ids either from a
/// raw constant (guides such as axes and titles use deterministic offsets
/// from a per-guide base) or from a `(group, key)` pair via [`MarkId::for_key`]
/// (per-datum marks such as bars).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates a mark id from a raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives a mark id from a group and a per-row key.
    ///
    /// The same `(group, key)` pair always maps to the same id, so marks keyed
    /// by data identity stay stable across frames.
    pub fn for_key(group: u64, key: u64) -> Self {
        // splitmix64-style finalizer over the combined pair.
        let mut h = group.rotate_left(32) ^ key;
        h ^= h >> 30;
        h = h.wrapping_mul(0xbf58_476d_1ce4_e5b9);
        h ^= h >> 27;
        h = h.wrapping_mul(0x94d0_49bb_1331_11eb);
        h ^= h >> 31;
        Self(h)
    }
}

/// The kind of graphic element a mark resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkKind {
    /// An axis-aligned filled rectangle.
    Rect,
    /// An anchored text run.
    Text,
    /// A filled and/or stroked path.
    Path,
}

/// Horizontal text anchor, relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// The position is the left edge of the text.
    Start,
    /// The position is the horizontal center of the text.
    Middle,
    /// The position is the right edge of the text.
    End,
}

/// Vertical text baseline, relative to the text position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// The position is the alphabetic baseline.
    Alphabetic,
    /// The position is the vertical midline.
    Middle,
    /// The position is the hanging baseline (top-ish).
    Hanging,
    /// The position is the ideographic baseline (bottom-ish).
    Ideographic,
}

/// Payload of a rectangle mark.
#[derive(Clone, Debug)]
pub struct RectPayload {
    /// Rectangle geometry in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// Payload of a text mark.
#[derive(Clone, Debug)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Payload of a path mark.
#[derive(Clone, Debug)]
pub struct PathPayload {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; `0.0` means no stroke.
    pub stroke_width: f64,
}

/// A resolved mark payload.
#[derive(Clone, Debug)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectPayload),
    /// An anchored text run.
    Text(TextPayload),
    /// A filled and/or stroked path.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Returns geometric bounds, where the payload has well-defined ones.
    ///
    /// Text payloads return `None`: without shaping there is no reliable
    /// extent, and renderers that need one (for example for a viewBox) apply
    /// their own estimate.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
            Self::Path(p) => Some(p.path.bounding_box()),
        }
    }
}

/// A graphic element emitted by a chart layer.
#[derive(Clone, Debug)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order hint; backends sort ascending, ties broken by id.
    pub z_index: i32,
    /// Resolved geometry and paint.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark from its parts.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }

    /// Returns the kind of this mark's payload.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }

    /// Returns this mark's geometric bounds, if well-defined.
    pub fn bounds(&self) -> Option<Rect> {
        self.payload.bounds()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn for_key_is_stable_and_distinguishes_groups() {
        let a = MarkId::for_key(1, 42);
        let b = MarkId::for_key(1, 42);
        let c = MarkId::for_key(2, 42);
        let d = MarkId::for_key(1, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn rect_bounds_are_the_rect() {
        let payload = MarkPayload::Rect(RectPayload {
            rect: Rect::new(1.0, 2.0, 3.0, 4.0),
            fill: Brush::default(),
        });
        assert_eq!(payload.bounds(), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn text_has_no_bounds() {
        let payload = MarkPayload::Text(TextPayload {
            pos: Point::new(0.0, 0.0),
            text: String::from("hi"),
            font_size: 12.0,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            fill: Brush::default(),
        });
        assert!(payload.bounds().is_none());
    }
}
