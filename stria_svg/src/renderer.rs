// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A diff-driven SVG serializer.

use std::collections::HashMap;
use std::fmt::Write as _;

use kurbo::Rect;
use peniko::Brush;
use stria_core::{MarkDiff, MarkId, MarkPayload, TextAnchor, TextBaseline};

/// A retained SVG element map.
///
/// Marks are stored keyed by id; applying diffs mutates only the affected
/// entries, so an exited mark's element disappears from the next
/// serialization. Elements serialize sorted by `(z_index, id)` so paint order
/// is stable across frames.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
    view_box: Option<Rect>,
}

impl SvgRenderer {
    /// Creates an empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit view box; mark bounds extend it but never shrink it.
    pub fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    /// Returns the number of retained elements.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no elements are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Applies a batch of mark diffs to the retained element map.
    pub fn apply_diffs(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter {
                    id, z_index, new, ..
                } => {
                    self.marks.insert(*id, (*z_index, (**new).clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                    ..
                } => {
                    self.marks.insert(*id, (*new_z_index, (**new).clone()));
                }
                MarkDiff::Exit { id } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    /// Serializes the retained elements as a complete SVG document.
    pub fn to_svg_string(&self) -> String {
        let view_box = self.resolve_view_box();
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = write!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );
        out.push('\n');

        let mut ids: Vec<MarkId> = self.marks.keys().copied().collect();
        ids.sort_by_key(|id| {
            let (z, _payload) = &self.marks[id];
            (*z, *id)
        });

        for id in ids {
            let (_z, payload) = &self.marks[&id];
            match payload {
                MarkPayload::Rect(r) => write_rect(&mut out, r),
                MarkPayload::Text(t) => write_text(&mut out, t),
                MarkPayload::Path(p) => write_path(&mut out, p),
            }
        }

        out.push_str("</svg>\n");
        out
    }

    /// Combines the explicit view box with the union of element bounds.
    fn resolve_view_box(&self) -> Rect {
        let computed = self.content_bounds();
        match (self.view_box, computed) {
            (Some(a), Some(b)) => a.union(b),
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => Rect::new(0.0, 0.0, 100.0, 100.0),
        }
    }

    fn content_bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for (_z, payload) in self.marks.values() {
            let b = match payload {
                MarkPayload::Text(t) => Some(estimate_text_bounds(
                    t.pos.x, t.pos.y, t.font_size, t.anchor, t.baseline, &t.text,
                )),
                _ => payload.bounds(),
            }?;
            rect = Some(match rect {
                None => b,
                Some(r) => r.union(b),
            });
        }

        // Pad so strokes and glyph overhang are not clipped at the edge.
        rect.map(|r| r.inflate(10.0, 10.0))
    }
}

fn write_rect(out: &mut String, r: &stria_core::RectPayload) {
    let _ = write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        r.rect.x0,
        r.rect.y0,
        r.rect.width(),
        r.rect.height(),
    );
    write_paint_attr(out, "fill", &r.fill);
    out.push_str("/>\n");
}

fn write_text(out: &mut String, t: &stria_core::TextPayload) {
    let baseline = match t.baseline {
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Hanging => "hanging",
        TextBaseline::Ideographic => "ideographic",
    };
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
        t.pos.x, t.pos.y, t.font_size, baseline
    );
    if t.angle != 0.0 {
        let _ = write!(
            out,
            r#" transform="rotate({} {} {})""#,
            t.angle, t.pos.x, t.pos.y
        );
    }
    out.push_str(match t.anchor {
        TextAnchor::Start => r#" text-anchor="start""#,
        TextAnchor::Middle => r#" text-anchor="middle""#,
        TextAnchor::End => r#" text-anchor="end""#,
    });
    write_paint_attr(out, "fill", &t.fill);
    out.push('>');
    out.push_str(&escape_xml(&t.text));
    out.push_str("</text>\n");
}

fn write_path(out: &mut String, p: &stria_core::PathPayload) {
    let d = p.path.to_svg();
    let _ = write!(out, r#"<path d="{d}""#);
    write_paint_attr(out, "fill", &p.fill);
    if p.stroke_width > 0.0 {
        write_paint_attr(out, "stroke", &p.stroke);
        let _ = write!(out, r#" stroke-width="{}""#, p.stroke_width);
    }
    out.push_str("/>\n");
}

/// Rough text bounds used only for view-box computation.
///
/// Assumes ~0.6em average glyph width; `y` is interpreted according to the
/// given baseline and approximated to a midline.
fn estimate_text_bounds(
    x: f64,
    y: f64,
    font_size: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    text: &str,
) -> Rect {
    let glyph_w = 0.6 * font_size;
    let width = glyph_w * text.chars().count() as f64;
    let half_height = 0.5 * font_size;
    let y_midline = match baseline {
        TextBaseline::Middle => y,
        TextBaseline::Alphabetic => y - 0.3 * font_size,
        TextBaseline::Hanging => y + 0.3 * font_size,
        TextBaseline::Ideographic => y - 0.2 * font_size,
    };
    let (x0, x1) = match anchor {
        TextAnchor::Start => (x, x + width),
        TextAnchor::Middle => (x - width / 2.0, x + width / 2.0),
        TextAnchor::End => (x - width, x),
    };
    Rect::new(x0, y_midline - half_height, x1, y_midline + half_height)
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::color::palette::css;
    use stria_core::{Mark, MarkPayload, RectPayload, Scene, TextPayload};

    use super::*;

    fn rect_mark(id: u64, x0: f64) -> Mark {
        Mark::new(
            MarkId::from_raw(id),
            0,
            MarkPayload::Rect(RectPayload {
                rect: Rect::new(x0, 0.0, x0 + 10.0, 20.0),
                fill: Brush::Solid(css::REBECCA_PURPLE),
            }),
        )
    }

    #[test]
    fn exit_removes_the_element() {
        let mut scene = Scene::new();
        let mut renderer = SvgRenderer::new();

        renderer.apply_diffs(&scene.tick(vec![rect_mark(1, 0.0), rect_mark(2, 20.0)]));
        assert_eq!(renderer.len(), 2);
        let svg = renderer.to_svg_string();
        assert_eq!(svg.matches("<rect").count(), 2);

        renderer.apply_diffs(&scene.tick(vec![rect_mark(2, 20.0)]));
        assert_eq!(renderer.len(), 1);
        let svg = renderer.to_svg_string();
        assert_eq!(svg.matches("<rect").count(), 1);
    }

    #[test]
    fn update_replaces_the_element_geometry() {
        let mut scene = Scene::new();
        let mut renderer = SvgRenderer::new();

        renderer.apply_diffs(&scene.tick(vec![rect_mark(1, 0.0)]));
        renderer.apply_diffs(&scene.tick(vec![rect_mark(1, 42.0)]));
        assert_eq!(renderer.len(), 1);
        let svg = renderer.to_svg_string();
        assert!(svg.contains(r#"<rect x="42""#), "svg: {svg}");
    }

    #[test]
    fn elements_serialize_in_z_order() {
        let mut renderer = SvgRenderer::new();
        let low = Mark::new(
            MarkId::from_raw(9),
            -5,
            MarkPayload::Rect(RectPayload {
                rect: Rect::new(0.0, 0.0, 1.0, 1.0),
                fill: Brush::Solid(css::BLACK),
            }),
        );
        let high = Mark::new(
            MarkId::from_raw(1),
            5,
            MarkPayload::Text(TextPayload {
                pos: Point::new(0.0, 0.0),
                text: "hi".to_string(),
                font_size: 10.0,
                angle: 0.0,
                anchor: stria_core::TextAnchor::Start,
                baseline: stria_core::TextBaseline::Middle,
                fill: Brush::Solid(css::BLACK),
            }),
        );
        let mut scene = Scene::new();
        renderer.apply_diffs(&scene.tick(vec![high, low]));

        let svg = renderer.to_svg_string();
        let rect_at = svg.find("<rect").expect("rect element");
        let text_at = svg.find("<text").expect("text element");
        assert!(rect_at < text_at, "lower z serializes first");
    }

    #[test]
    fn text_is_xml_escaped() {
        let mut renderer = SvgRenderer::new();
        let mut scene = Scene::new();
        let mark = Mark::new(
            MarkId::from_raw(1),
            0,
            MarkPayload::Text(TextPayload {
                pos: Point::new(0.0, 0.0),
                text: "a<b & \"c\"".to_string(),
                font_size: 10.0,
                angle: 0.0,
                anchor: stria_core::TextAnchor::Start,
                baseline: stria_core::TextBaseline::Middle,
                fill: Brush::Solid(css::BLACK),
            }),
        );
        renderer.apply_diffs(&scene.tick(vec![mark]));
        let svg = renderer.to_svg_string();
        assert!(svg.contains("a&lt;b &amp; &quot;c&quot;"), "svg: {svg}");
    }

    #[test]
    fn empty_renderer_emits_a_valid_document() {
        let renderer = SvgRenderer::new();
        let svg = renderer.to_svg_string();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn explicit_view_box_is_never_shrunk_by_content() {
        let mut renderer = SvgRenderer::new();
        renderer.set_view_box(Rect::new(-20.0, -20.0, 500.0, 300.0));
        let mut scene = Scene::new();
        renderer.apply_diffs(&scene.tick(vec![rect_mark(1, 10.0)]));
        let svg = renderer.to_svg_string();
        assert!(svg.contains(r#"viewBox="-20 -20 520 320""#), "svg: {svg}");
    }
}
