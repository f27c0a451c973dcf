// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a single spec with an `orient` of top, bottom, left, or right.
//! It can be measured (for layout) and arranged (to generate marks). Band
//! axes tick once per category; linear axes use nice tick generation.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;
use stria_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::format::format_tick_with_step;
use crate::measure::TextMeasurer;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, ScaleSpec, tick_step};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines, ticks, gridlines).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill paint for the axis title.
    pub title_fill: Brush,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            rule: rule.clone(),
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            title_fill: rule.brush,
            title_font_size: 11.0,
        }
    }
}

/// Gridline styling.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Stroke style for gridlines.
    pub stroke: StrokeStyle,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle {
                brush: Brush::Solid(css::BLACK.with_alpha(40.0 / 255.0)),
                stroke_width: 1.0,
            },
        }
    }
}

/// Axis placement relative to the plot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed above the plot area.
    Top,
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
    /// A vertical axis placed to the right of the plot area.
    Right,
}

/// An axis specification (single type + orient).
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset.
    pub id_base: u64,
    /// The axis scale specification.
    pub scale: ScaleSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks (ignored for band scales).
    pub tick_count: usize,
    /// Tick line length in scene coordinates.
    pub tick_size: f64,
    /// Whether to draw tick marks.
    pub ticks: bool,
    /// Whether to draw tick labels.
    pub labels: bool,
    /// Whether to draw the axis domain line.
    pub show_domain: bool,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Extra padding applied between the axis/ticks and tick labels.
    pub label_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional gridline styling; if set, gridlines span the plot area.
    pub grid: Option<GridStyle>,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Distance from tick labels to the title.
    pub title_offset: f64,
    /// Optional tick label formatter.
    ///
    /// Used for both measuring and rendering. The first argument is the tick
    /// value (the category index for band scales), the second the tick step.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
    /// Tick label rotation angle in degrees.
    pub label_angle: f64,
}

impl core::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("ticks", &self.ticks)
            .field("labels", &self.labels)
            .field("show_domain", &self.show_domain)
            .field("tick_padding", &self.tick_padding)
            .field("label_padding", &self.label_padding)
            .field("style", &self.style)
            .field("grid", &self.grid)
            .field("title", &self.title)
            .field("title_offset", &self.title_offset)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .field("label_angle", &self.label_angle)
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification with sensible defaults.
    pub fn new(id_base: u64, scale: impl Into<ScaleSpec>, orient: AxisOrient) -> Self {
        let tick_padding = match orient {
            AxisOrient::Top | AxisOrient::Bottom => 12.0,
            AxisOrient::Left | AxisOrient::Right => 6.0,
        };
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 10,
            tick_size: 5.0,
            ticks: true,
            labels: true,
            show_domain: true,
            tick_padding,
            label_padding: 0.0,
            style: AxisStyle::default(),
            grid: None,
            title: None,
            title_offset: 10.0,
            tick_formatter: None,
            label_angle: 0.0,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `top` axis.
    pub fn top(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Top)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Convenience constructor for a `right` axis.
    pub fn right(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Right)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Enable or disable tick marks.
    pub fn with_ticks(mut self, ticks: bool) -> Self {
        self.ticks = ticks;
        self
    }

    /// Enable or disable tick labels.
    pub fn with_labels(mut self, labels: bool) -> Self {
        self.labels = labels;
        self
    }

    /// Enable or disable the axis domain line.
    pub fn with_domain(mut self, domain: bool) -> Self {
        self.show_domain = domain;
        self
    }

    /// Set tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set label padding in scene coordinates.
    pub fn with_label_padding(mut self, label_padding: f64) -> Self {
        self.label_padding = label_padding;
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Set tick label rotation angle in degrees.
    pub fn with_label_angle(mut self, angle_degrees: f64) -> Self {
        self.label_angle = angle_degrees;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Enable gridlines using the provided style.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Disable gridlines.
    pub fn without_grid(mut self) -> Self {
        self.grid = None;
        self
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Clear the axis title.
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Set the title offset in scene coordinates.
    pub fn with_title_offset(mut self, title_offset: f64) -> Self {
        self.title_offset = title_offset;
        self
    }

    /// Enable or disable nice-domain behavior for this axis.
    pub fn with_nice_domain(mut self, nice_domain: bool) -> Self {
        if let ScaleSpec::Linear(s) = &mut self.scale {
            s.nice = nice_domain;
        }
        self
    }

    /// Returns the pixel range this axis maps onto for a plot rectangle.
    ///
    /// Vertical axes run bottom-to-top so larger values sit higher.
    fn range(&self, plot: Rect) -> (f64, f64) {
        match self.orient {
            AxisOrient::Top | AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left | AxisOrient::Right => (plot.y1, plot.y0),
        }
    }

    /// Returns a linear scale mapping axis values into plot coordinates.
    ///
    /// Panics if this axis does not use a linear scale.
    pub fn scale_linear(&self, plot: Rect) -> ScaleLinear {
        match self.scale {
            ScaleSpec::Linear(s) => s.instantiate_resolved(self.range(plot), self.tick_count),
            ScaleSpec::Band(_) => panic!("scale_linear called on a band axis scale"),
        }
    }

    /// Returns a band scale mapping indices into plot coordinates.
    ///
    /// Panics if this axis does not use a band scale.
    pub fn scale_band(&self, plot: Rect) -> ScaleBand {
        match self.scale {
            ScaleSpec::Band(s) => s.instantiate(self.range(plot)),
            ScaleSpec::Linear(_) => panic!("scale_band called on a linear axis scale"),
        }
    }

    /// Returns `(tick values, step)` for this axis.
    ///
    /// Band axes tick once per category at the index values.
    fn tick_values(&self) -> (Vec<f64>, f64) {
        match self.scale {
            ScaleSpec::Linear(s) => {
                let domain = s.resolved_domain(self.tick_count);
                let ticks = ScaleLinear::new(domain, (0.0, 1.0)).ticks(self.tick_count);
                let step = tick_step(&ticks);
                (ticks, step)
            }
            ScaleSpec::Band(s) => {
                let ticks: Vec<f64> = (0..s.count).map(|i| i as f64).collect();
                (ticks, 1.0)
            }
        }
    }

    fn linear_domain(&self) -> Option<(f64, f64)> {
        match self.scale {
            ScaleSpec::Linear(s) => Some(s.resolved_domain(self.tick_count)),
            ScaleSpec::Band(_) => None,
        }
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick_with_step(v, step),
        }
    }

    /// Measure the thickness this axis needs along its normal direction.
    ///
    /// This is intended for a measure/arrange layout pass.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let tick_extent = if self.ticks {
            self.tick_size.abs()
        } else {
            0.0
        };
        let label_gap = self.tick_padding.max(0.0) + self.label_padding.max(0.0);
        let horizontal = matches!(self.orient, AxisOrient::Top | AxisOrient::Bottom);

        let mut max_label_extent = 0.0_f64;
        if self.labels {
            let (ticks, step) = self.tick_values();
            let theta = self.label_angle.to_radians();
            let sin = theta.sin().abs();
            let cos = theta.cos().abs();
            for v in ticks {
                let label = self.format_tick(v, step);
                let (w, h) = measurer.measure(&label, self.style.label_font_size);
                // Project the rotated label box onto the axis normal.
                let extent = if horizontal {
                    sin * w + cos * h
                } else {
                    cos * w + sin * h
                };
                max_label_extent = max_label_extent.max(extent);
            }
        }

        let label_thickness = if self.labels {
            label_gap + max_label_extent
        } else {
            0.0
        };
        let mut out = tick_extent + label_thickness;
        if let Some(title) = &self.title {
            let title_extent = if horizontal {
                let (_w, h) = measurer.measure(title, self.style.title_font_size);
                h
            } else {
                // A rotated title contributes its line height as width.
                self.style.title_font_size
            };
            out += self.title_offset.max(0.0) + title_extent;
        }
        out
    }

    /// Generate axis marks for the given plot rectangle and arranged axis
    /// rectangle.
    ///
    /// `axis_rect` should be the reserved region for this axis, adjacent to
    /// `plot`.
    pub fn marks(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        match self.orient {
            AxisOrient::Top | AxisOrient::Bottom => self.marks_horizontal(plot, axis_rect),
            AxisOrient::Left | AxisOrient::Right => self.marks_vertical(plot, axis_rect),
        }
    }

    /// Returns the position of a tick value along the axis direction.
    fn tick_pos(&self, v: f64, plot: Rect) -> f64 {
        match self.scale {
            ScaleSpec::Linear(_) => self.scale_linear(plot).map(v),
            ScaleSpec::Band(_) => self.scale_band(plot).center(discrete_index(v)),
        }
    }

    fn marks_horizontal(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let top = self.orient == AxisOrient::Top;
        let edge_y = if top { plot.y0 } else { plot.y1 };
        // Outward is negative y above the plot, positive below it.
        let outward = if top { -1.0 } else { 1.0 };
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let label_gap = (self.tick_padding + self.label_padding).max(0.0);
        let (ticks, step) = self.tick_values();

        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            let ticks_in_plot = self.grid_ticks(&ticks, plot, |v| self.tick_pos(v, plot));
            let base = self.id_base.wrapping_sub(5_000);
            for (i, v) in ticks_in_plot.iter().copied().enumerate() {
                let x = self.tick_pos(v, plot);
                out.push(
                    RuleMarkSpec::vertical(MarkId::from_raw(base + i as u64), x, plot.y0, plot.y1)
                        .with_stroke(grid.stroke.brush.clone(), grid.stroke.stroke_width)
                        .with_z_index(z_order::GRID_LINES)
                        .mark(),
                );
            }
        }

        if self.show_domain {
            out.push(
                RuleMarkSpec::horizontal(MarkId::from_raw(self.id_base), edge_y, plot.x0, plot.x1)
                    .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
            );
        }

        let ticks_len = ticks.len();
        for (i, v) in ticks.iter().copied().enumerate() {
            let x = self.tick_pos(v, plot);
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }
            let label = self.format_tick(v, step);

            if self.ticks {
                out.push(
                    RuleMarkSpec::vertical(
                        MarkId::from_raw(self.id_base + 1 + i as u64),
                        x,
                        edge_y,
                        edge_y + outward * tick_size,
                    )
                    .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
                );
            }

            if self.labels {
                // Clamp the outermost labels into the plot span so they don't
                // spill past the chart edge.
                let (anchor, x) = if i == 0 {
                    (TextAnchor::Start, x.clamp(plot.x0, plot.x1))
                } else if i + 1 == ticks_len {
                    (TextAnchor::End, x.clamp(plot.x0, plot.x1))
                } else {
                    (TextAnchor::Middle, x)
                };

                // Rotating around the label origin shifts the visual midline
                // when the anchor is not centered; nudge y to compensate.
                let mut y = edge_y + outward * (tick_extent + label_gap);
                if self.label_angle != 0.0 {
                    let sin = self.label_angle.to_radians().sin();
                    if sin != 0.0 {
                        let (w, _h) = crate::measure::HeuristicTextMeasurer
                            .measure(&label, self.style.label_font_size);
                        let dy = 0.5 * w * sin;
                        match anchor {
                            TextAnchor::Start => y -= dy,
                            TextAnchor::End => y += dy,
                            TextAnchor::Middle => {}
                        }
                    }
                }

                let baseline = if top {
                    TextBaseline::Ideographic
                } else {
                    TextBaseline::Hanging
                };
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base + 1_000 + i as u64),
                        Point::new(x, y),
                        label,
                    )
                    .with_anchor(anchor)
                    .with_baseline(baseline)
                    .with_angle(self.label_angle)
                    .with_font_size(self.style.label_font_size)
                    .with_fill(self.style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
                );
            }
        }

        if let Some(title) = &self.title {
            // The title strip is the outer edge of `axis_rect`, which measure()
            // reserved after the tick labels, so title_offset is respected.
            let x = (plot.x0 + plot.x1) * 0.5;
            let (y, baseline) = if top {
                (
                    axis_rect.y0 + self.style.title_font_size,
                    TextBaseline::Ideographic,
                )
            } else {
                (
                    axis_rect.y1 - self.style.title_font_size,
                    TextBaseline::Hanging,
                )
            };
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 9_000),
                    Point::new(x, y),
                    title.clone(),
                )
                .with_anchor(TextAnchor::Middle)
                .with_baseline(baseline)
                .with_font_size(self.style.title_font_size)
                .with_fill(self.style.title_fill.clone())
                .with_z_index(z_order::AXIS_TITLES)
                .mark(),
            );
        }

        out
    }

    fn marks_vertical(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let left = self.orient == AxisOrient::Left;
        let edge_x = if left { plot.x0 } else { plot.x1 };
        let outward = if left { -1.0 } else { 1.0 };
        let tick_size = self.tick_size.abs();
        let tick_extent = if self.ticks { tick_size } else { 0.0 };
        let label_gap = (self.tick_padding + self.label_padding).max(0.0);
        let (ticks, step) = self.tick_values();

        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            let ticks_in_plot = self.grid_ticks_vertical(&ticks, plot);
            let base = self.id_base.wrapping_sub(5_000);
            for (i, v) in ticks_in_plot.iter().copied().enumerate() {
                let y = self.tick_pos(v, plot);
                out.push(
                    RuleMarkSpec::horizontal(MarkId::from_raw(base + i as u64), y, plot.x0, plot.x1)
                        .with_stroke(grid.stroke.brush.clone(), grid.stroke.stroke_width)
                        .with_z_index(z_order::GRID_LINES)
                        .mark(),
                );
            }
        }

        if self.show_domain {
            out.push(
                RuleMarkSpec::vertical(MarkId::from_raw(self.id_base), edge_x, plot.y0, plot.y1)
                    .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
            );
        }

        for (i, v) in ticks.into_iter().enumerate() {
            let y = self.tick_pos(v, plot);
            if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                continue;
            }
            let label = self.format_tick(v, step);

            if self.ticks {
                out.push(
                    RuleMarkSpec::horizontal(
                        MarkId::from_raw(self.id_base + 1 + i as u64),
                        y,
                        edge_x,
                        edge_x + outward * tick_size,
                    )
                    .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
                );
            }

            if self.labels {
                let anchor = if left {
                    TextAnchor::End
                } else {
                    TextAnchor::Start
                };
                out.push(
                    TextMarkSpec::new(
                        MarkId::from_raw(self.id_base + 1_000 + i as u64),
                        Point::new(edge_x + outward * (tick_extent + label_gap), y),
                        label,
                    )
                    .with_anchor(anchor)
                    .with_baseline(TextBaseline::Middle)
                    .with_angle(self.label_angle)
                    .with_font_size(self.style.label_font_size)
                    .with_fill(self.style.label_fill.clone())
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
                );
            }
        }

        if let Some(title) = &self.title {
            // Rotated title in the title strip at the outer axis_rect edge.
            let x = if left {
                axis_rect.x0 + 0.5 * self.style.title_font_size
            } else {
                axis_rect.x1 - 0.5 * self.style.title_font_size
            };
            let angle = if left { -90.0 } else { 90.0 };
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 9_000),
                    Point::new(x, (plot.y0 + plot.y1) * 0.5),
                    title.clone(),
                )
                .with_anchor(TextAnchor::Middle)
                .with_angle(angle)
                .with_font_size(self.style.title_font_size)
                .with_fill(self.style.title_fill.clone())
                .with_z_index(z_order::AXIS_TITLES)
                .mark(),
            );
        }

        out
    }

    /// Filters ticks to those inside the plot span and appends the domain
    /// endpoints, so the plot boundary gets a gridline even when the tick
    /// generator skips it.
    fn grid_ticks(&self, ticks: &[f64], plot: Rect, pos: impl Fn(f64) -> f64) -> Vec<f64> {
        let mut out: Vec<f64> = ticks
            .iter()
            .copied()
            .filter(|v| {
                let x = pos(*v);
                x >= plot.x0 - 1.0e-9 && x <= plot.x1 + 1.0e-9
            })
            .collect();
        if let Some((d0, d1)) = self.linear_domain() {
            push_if_missing(&mut out, d0);
            push_if_missing(&mut out, d1);
        }
        out
    }

    fn grid_ticks_vertical(&self, ticks: &[f64], plot: Rect) -> Vec<f64> {
        let mut out: Vec<f64> = ticks
            .iter()
            .copied()
            .filter(|v| {
                let y = self.tick_pos(*v, plot);
                y >= plot.y0 - 1.0e-9 && y <= plot.y1 + 1.0e-9
            })
            .collect();
        if let Some((d0, d1)) = self.linear_domain() {
            push_if_missing(&mut out, d0);
            push_if_missing(&mut out, d1);
        }
        out
    }
}

fn discrete_index(v: f64) -> usize {
    if !v.is_finite() || v < 0.0 {
        return 0;
    }
    let v = v.round().min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "value is clamped to a small non-negative range"
    )]
    {
        v as usize
    }
}

fn push_if_missing(ticks: &mut Vec<f64>, v: f64) {
    if !v.is_finite() {
        return;
    }
    let eps = 1.0e-9;
    if ticks.iter().any(|t| (*t - v).abs() <= eps) {
        return;
    }
    ticks.push(v);
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use stria_core::{MarkKind, MarkPayload};

    use super::*;
    use crate::measure::HeuristicTextMeasurer;
    use crate::scale::{ScaleBandSpec, ScaleLinearSpec};

    #[test]
    fn measure_respects_ticks_and_labels_toggles() {
        let measurer = HeuristicTextMeasurer;
        let axis = AxisSpec::left(1, ScaleLinearSpec::new((0.0, 10.0))).with_tick_count(3);

        let with_all = axis.measure(&measurer);
        let no_labels = axis.clone().with_labels(false).measure(&measurer);
        let no_ticks = axis.clone().with_ticks(false).measure(&measurer);
        let none = axis
            .clone()
            .with_ticks(false)
            .with_labels(false)
            .with_domain(false)
            .measure(&measurer);

        assert!(with_all > 0.0);
        assert!(no_labels < with_all);
        assert!(no_ticks < with_all);
        assert_eq!(none, 0.0);
    }

    #[test]
    fn measure_accounts_for_label_angle() {
        let measurer = HeuristicTextMeasurer;
        let axis = AxisSpec::bottom(1, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(6)
            .with_label_angle(0.0);
        let a0 = axis.measure(&measurer);
        let a45 = axis.with_label_angle(45.0).measure(&measurer);
        assert!(a45 >= a0);
    }

    #[test]
    fn custom_tick_formatter_reaches_labels() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis_rect = Rect::new(0.0, 50.0, 100.0, 60.0);

        let axis = AxisSpec::bottom(1, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(3)
            .with_tick_formatter(|_v, _step| "X".to_string());

        let marks = axis.marks(plot, axis_rect);
        let mut saw_label = false;
        for m in marks {
            if let MarkPayload::Text(t) = &m.payload {
                assert_eq!(t.text, "X");
                saw_label = true;
            }
        }
        assert!(saw_label, "expected at least one tick label");
    }

    #[test]
    fn band_axis_ticks_at_category_centers() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis_rect = Rect::new(0.0, 50.0, 100.0, 70.0);

        let axis = AxisSpec::bottom(1, ScaleBandSpec::new(2).with_padding(0.0, 0.0));
        let band = axis.scale_band(plot);

        let marks = axis.marks(plot, axis_rect);
        let label_xs: Vec<f64> = marks
            .iter()
            .filter(|m| m.kind() == MarkKind::Text && m.id.0 >= 1_001 && m.id.0 < 2_000)
            .map(|m| match &m.payload {
                MarkPayload::Text(t) => t.pos.x,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(label_xs.len(), 2);
        assert!((label_xs[0] - band.center(0)).abs() < 1e-9);
        assert!((label_xs[1] - band.center(1)).abs() < 1e-9);
    }

    #[test]
    fn left_title_sits_at_the_axis_rect_edge() {
        let measurer = HeuristicTextMeasurer;
        let plot = Rect::new(100.0, 0.0, 200.0, 100.0);

        let axis = AxisSpec::left(1, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(3)
            .with_title("Y")
            .with_title_offset(10.0);

        let w = axis.measure(&measurer);
        let axis_rect = Rect::new(plot.x0 - w, plot.y0, plot.x0, plot.y1);
        let marks = axis.marks(plot, axis_rect);

        let title_id = MarkId::from_raw(1 + 9_000);
        let mut title_x = None;
        for m in marks {
            if m.id == title_id
                && let MarkPayload::Text(t) = &m.payload
            {
                title_x = Some(t.pos.x);
            }
        }

        let title_x = title_x.expect("missing title x");
        let expected = axis_rect.x0 + 0.5 * axis.style.title_font_size;
        assert!((title_x - expected).abs() < 1e-9);
    }

    #[test]
    fn bottom_title_sits_at_the_axis_rect_edge() {
        let measurer = HeuristicTextMeasurer;
        let plot = Rect::new(0.0, 0.0, 100.0, 100.0);

        let axis = AxisSpec::bottom(1, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(3)
            .with_title("X")
            .with_title_offset(10.0);

        let h = axis.measure(&measurer);
        let axis_rect = Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + h);
        let marks = axis.marks(plot, axis_rect);

        let title_id = MarkId::from_raw(1 + 9_000);
        let mut title_y = None;
        for m in marks {
            if m.id == title_id
                && let MarkPayload::Text(t) = &m.payload
            {
                title_y = Some(t.pos.y);
            }
        }

        let title_y = title_y.expect("missing title y");
        let expected = axis_rect.y1 - axis.style.title_font_size;
        assert!((title_y - expected).abs() < 1e-9);
    }

    #[test]
    fn axis_without_ticks_or_domain_emits_no_path_marks() {
        let plot = Rect::new(0.0, 0.0, 100.0, 50.0);
        let axis_rect = Rect::new(0.0, 50.0, 100.0, 60.0);

        let axis = AxisSpec::bottom(1, ScaleLinearSpec::new((0.0, 10.0)))
            .with_tick_count(3)
            .with_ticks(false)
            .with_domain(false);

        let marks = axis.marks(plot, axis_rect);
        assert!(
            marks.iter().all(|m| m.kind() != MarkKind::Path),
            "expected no path marks when ticks/domain are disabled"
        );
    }

    #[test]
    fn grid_does_not_extend_outside_plot() {
        let plot = Rect::new(50.0, 30.0, 250.0, 130.0);
        let axis_rect = Rect::new(0.0, 30.0, 50.0, 130.0);

        let axis = AxisSpec::left(1, ScaleLinearSpec::new((-0.7, 3.29)))
            .with_tick_count(6)
            .with_grid(GridStyle::default());

        let marks = axis.marks(plot, axis_rect);
        for m in marks {
            if m.z_index != z_order::GRID_LINES {
                continue;
            }
            let b = m.bounds().expect("grid rules have bounds");
            assert!(b.y0 >= plot.y0 - 1.0e-9, "grid above plot: {b:?}");
            assert!(b.y1 <= plot.y1 + 1.0e-9, "grid below plot: {b:?}");
        }
    }

    #[test]
    fn grid_includes_domain_endpoints() {
        // Domain max is not a "nice" number; the plot edge still gets a line.
        let plot = Rect::new(10.0, 20.0, 110.0, 120.0);
        let axis_rect = Rect::new(0.0, 20.0, 10.0, 120.0);

        let axis =
            AxisSpec::left(1, ScaleLinearSpec::new((0.0, 3.29))).with_grid(GridStyle::default());

        let marks = axis.marks(plot, axis_rect);
        let mut saw_top_edge = false;
        for m in marks {
            if m.z_index != z_order::GRID_LINES {
                continue;
            }
            let b = m.bounds().expect("grid rules have bounds");
            if (b.y0 - plot.y0).abs() < 1.0e-9 && (b.y1 - plot.y0).abs() < 1.0e-9 {
                saw_top_edge = true;
            }
        }
        assert!(saw_top_edge, "expected a grid line at plot.y0 for domain max");
    }
}
