// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convenience builder for single-series bar charts.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Brush;
use peniko::color::palette::css;
use stria_core::{Mark, MarkId};

use crate::axis::{AxisSpec, GridStyle};
use crate::bar_mark::BarMarkSpec;
use crate::chart_spec::ChartSpec;
use crate::data::Datum;
use crate::layout::{ChartLayout, ChartLayoutSpec, Size};
use crate::measure::TextMeasurer;
use crate::rect_mark::RectMarkSpec;
use crate::scale::{ScaleBandSpec, ScaleLinearSpec};
use crate::title::TitleSpec;
use crate::value_label::ValueLabelSpec;

// Id groups and guide id bases. Guides use fixed ids so they update in place;
// series marks derive their ids from datum names within these groups.
const BAR_GROUP: u64 = 1;
const LABEL_GROUP: u64 = 2;
const AXIS_X_BASE: u64 = 0x0100_0000;
const AXIS_Y_BASE: u64 = 0x0200_0000;
const TITLE_ID: u64 = 0x0300_0000;
const BACKGROUND_ID: u64 = 0x0400_0000;

/// A bar chart builder: dataset in, marks out.
///
/// Composes a band x-axis labeled with category names, a linear y-axis with
/// gridlines, one bar per datum, and optional per-bar value labels. The value
/// domain is inferred from the data on every call, so the chart re-fits as
/// values change.
#[derive(Clone, Debug)]
pub struct BarChartSpec {
    /// Optional chart title.
    pub title: Option<String>,
    /// Desired plot size, used when `view_size` is `None`.
    pub plot_size: Size,
    /// Optional outer chart bounds (autosize-fit).
    pub view_size: Option<Size>,
    /// Padding around the whole chart.
    pub outer_padding: f64,
    /// Fill paint for ordinary bars.
    pub fill: Brush,
    /// Fill paint for primary data.
    pub emphasis_fill: Brush,
    /// Optional plot background fill.
    pub plot_background: Option<Brush>,
    /// Whether to render per-bar value labels.
    pub value_labels: bool,
    /// Optional x-axis title.
    pub x_title: Option<String>,
    /// Optional y-axis title.
    pub y_title: Option<String>,
    /// Band padding between bars, as a fraction of the step.
    pub padding_inner: f64,
    /// Band padding before the first and after the last bar.
    pub padding_outer: f64,
    /// Approximate y-axis tick count.
    pub tick_count: usize,
    /// Whether to extend the value domain to nice tick boundaries.
    pub nice_domain: bool,
    /// Rotation angle for category labels, in degrees.
    pub category_label_angle: f64,
}

impl Default for BarChartSpec {
    fn default() -> Self {
        Self {
            title: None,
            plot_size: Size {
                width: 400.0,
                height: 240.0,
            },
            view_size: None,
            outer_padding: 8.0,
            fill: Brush::Solid(css::CORNFLOWER_BLUE),
            emphasis_fill: Brush::Solid(css::ORANGE),
            plot_background: None,
            value_labels: true,
            x_title: None,
            y_title: None,
            padding_inner: 0.2,
            padding_outer: 0.1,
            tick_count: 6,
            nice_domain: true,
            category_label_angle: 0.0,
        }
    }
}

impl BarChartSpec {
    /// Creates a bar chart spec with default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chart title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the desired plot size.
    pub fn with_plot_size(mut self, width: f64, height: f64) -> Self {
        self.plot_size = Size { width, height };
        self
    }

    /// Sets explicit outer chart bounds; the plot shrinks to fit.
    pub fn with_view_size(mut self, width: f64, height: f64) -> Self {
        self.view_size = Some(Size { width, height });
        self
    }

    /// Sets the fill paint for ordinary bars.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the fill paint for primary data.
    pub fn with_emphasis_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.emphasis_fill = fill.into();
        self
    }

    /// Sets a plot background fill.
    pub fn with_plot_background(mut self, fill: impl Into<Brush>) -> Self {
        self.plot_background = Some(fill.into());
        self
    }

    /// Enables or disables per-bar value labels.
    pub fn with_value_labels(mut self, value_labels: bool) -> Self {
        self.value_labels = value_labels;
        self
    }

    /// Sets the axis titles.
    pub fn with_axis_titles(
        mut self,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
    ) -> Self {
        self.x_title = Some(x_title.into());
        self.y_title = Some(y_title.into());
        self
    }

    /// Sets the band paddings.
    pub fn with_band_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner;
        self.padding_outer = outer;
        self
    }

    /// Sets the rotation angle for category labels.
    pub fn with_category_label_angle(mut self, angle_degrees: f64) -> Self {
        self.category_label_angle = angle_degrees;
        self
    }

    /// Infers the value domain from the data.
    ///
    /// The domain always starts at zero and spans to the largest finite
    /// value. An empty dataset (or one with no finite positive value) falls
    /// back to `(0, 1)` so scales stay well-formed.
    pub fn value_domain(data: &[Datum]) -> (f64, f64) {
        let mut max = 0.0_f64;
        for datum in data {
            if datum.value.is_finite() {
                max = max.max(datum.value);
            }
        }
        if max <= 0.0 {
            (0.0, 1.0)
        } else {
            (0.0, max)
        }
    }

    /// Builds the composed chart spec (guides + layout inputs) for a dataset.
    pub fn chart_spec(&self, data: &[Datum]) -> ChartSpec {
        let names: Vec<String> = data.iter().map(|d| d.name.clone()).collect();
        let axis_bottom = AxisSpec::bottom(
            AXIS_X_BASE,
            ScaleBandSpec::new(data.len()).with_padding(self.padding_inner, self.padding_outer),
        )
        .with_ticks(false)
        .with_tick_padding(6.0)
        .with_label_angle(self.category_label_angle)
        .with_tick_formatter(move |v, _step| {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "band ticks are small non-negative indices"
            )]
            let index = v.round().max(0.0) as usize;
            names.get(index).cloned().unwrap_or_default()
        });
        let axis_bottom = match &self.x_title {
            Some(t) => axis_bottom.with_title(t.clone()),
            None => axis_bottom,
        };

        let axis_left = AxisSpec::left(
            AXIS_Y_BASE,
            ScaleLinearSpec::new(Self::value_domain(data)).with_nice(self.nice_domain),
        )
        .with_tick_count(self.tick_count)
        .with_grid(GridStyle::default());
        let axis_left = match &self.y_title {
            Some(t) => axis_left.with_title(t.clone()),
            None => axis_left,
        };

        ChartSpec {
            title: self
                .title
                .as_ref()
                .map(|t| TitleSpec::new(MarkId::from_raw(TITLE_ID), t.clone())),
            plot_size: self.plot_size,
            layout: ChartLayoutSpec {
                view_size: self.view_size,
                outer_padding: self.outer_padding,
                ..Default::default()
            },
            axis_left: Some(axis_left),
            axis_bottom: Some(axis_bottom),
            ..Default::default()
        }
    }

    /// Generates the full mark list (bars, labels, axes, title) for a
    /// dataset, along with the computed layout.
    pub fn marks(&self, measurer: &dyn TextMeasurer, data: &[Datum]) -> (ChartLayout, Vec<Mark>) {
        let chart = self.chart_spec(data);
        chart.marks(measurer, |chart, plot| {
            let Some(band) = chart.x_scale_band(plot) else {
                return Vec::new();
            };
            let Some(y_scale) = chart.y_scale_linear(plot) else {
                return Vec::new();
            };

            let mut out = Vec::new();
            if let Some(background) = &self.plot_background {
                out.push(
                    RectMarkSpec::new(MarkId::from_raw(BACKGROUND_ID), plot)
                        .with_fill(background.clone())
                        .with_z_index(crate::z_order::PLOT_BACKGROUND)
                        .mark(),
                );
            }

            out.extend(
                BarMarkSpec::new(BAR_GROUP, band, y_scale)
                    .with_fill(self.fill.clone())
                    .with_emphasis_fill(self.emphasis_fill.clone())
                    .marks(data),
            );

            if self.value_labels {
                // Labels keep the step at zero (shortest form) so a value like
                // 9.5 never rounds to the axis tick granularity.
                out.extend(ValueLabelSpec::new(LABEL_GROUP, band, y_scale).marks(data));
            }

            out
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use stria_core::{MarkKind, MarkPayload};

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn data() -> Vec<Datum> {
        vec![
            Datum::new("alpha", 4.0),
            Datum::primary("beta", 9.5),
            Datum::new("gamma", 2.0),
        ]
    }

    #[test]
    fn empty_dataset_still_produces_guides() {
        let spec = BarChartSpec::new().with_title("Empty");
        let (layout, marks) = spec.marks(&HeuristicTextMeasurer, &[]);
        assert!(layout.plot.area() > 0.0);
        // No bars, but axes and title still render.
        assert!(marks.iter().all(|m| m.kind() != MarkKind::Rect));
        assert!(marks.iter().any(|m| m.kind() == MarkKind::Path));
        assert!(marks.iter().any(|m| m.kind() == MarkKind::Text));
    }

    #[test]
    fn value_domain_falls_back_for_degenerate_data() {
        assert_eq!(BarChartSpec::value_domain(&[]), (0.0, 1.0));
        assert_eq!(
            BarChartSpec::value_domain(&[Datum::new("a", f64::NAN)]),
            (0.0, 1.0)
        );
        assert_eq!(
            BarChartSpec::value_domain(&[Datum::new("a", 3.0), Datum::new("b", 7.0)]),
            (0.0, 7.0)
        );
    }

    #[test]
    fn one_bar_and_one_label_per_datum() {
        let spec = BarChartSpec::new();
        let (_layout, marks) = spec.marks(&HeuristicTextMeasurer, &data());
        let bars = marks.iter().filter(|m| m.kind() == MarkKind::Rect).count();
        assert_eq!(bars, 3);

        // Value labels carry the formatted values.
        let label_texts: Vec<&str> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) if m.z_index == crate::z_order::VALUE_LABELS => {
                    Some(t.text.as_str())
                }
                _ => None,
            })
            .collect();
        assert_eq!(label_texts.len(), 3);
        assert!(label_texts.contains(&"9.5"));
    }

    #[test]
    fn category_labels_show_names() {
        let spec = BarChartSpec::new();
        let (_layout, marks) = spec.marks(&HeuristicTextMeasurer, &data());
        let texts: Vec<&str> = marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"alpha"));
        assert!(texts.contains(&"beta"));
        assert!(texts.contains(&"gamma"));
    }

    #[test]
    fn value_labels_can_be_disabled() {
        let spec = BarChartSpec::new().with_value_labels(false);
        let (_layout, marks) = spec.marks(&HeuristicTextMeasurer, &data());
        assert!(
            marks
                .iter()
                .all(|m| m.z_index != crate::z_order::VALUE_LABELS)
        );
    }

    #[test]
    fn plot_background_fills_the_plot_rect() {
        let spec = BarChartSpec::new().with_plot_background(css::WHITE_SMOKE);
        let (layout, marks) = spec.marks(&HeuristicTextMeasurer, &data());
        let background = marks
            .iter()
            .find(|m| m.z_index == crate::z_order::PLOT_BACKGROUND)
            .expect("missing background mark");
        assert_eq!(background.bounds(), Some(layout.plot));
    }

    #[test]
    fn bar_ids_are_stable_across_reorders() {
        let spec = BarChartSpec::new();
        let (_l, marks_a) = spec.marks(&HeuristicTextMeasurer, &data());
        let mut reordered = data();
        reordered.reverse();
        reordered[0].value = 3.0;
        let (_l, marks_b) = spec.marks(&HeuristicTextMeasurer, &reordered);

        let ids = |marks: &[Mark]| -> Vec<MarkId> {
            let mut ids: Vec<MarkId> = marks
                .iter()
                .filter(|m| m.kind() == MarkKind::Rect)
                .map(|m| m.id)
                .collect();
            ids.sort_unstable();
            ids
        };
        assert_eq!(ids(&marks_a), ids(&marks_b));
    }

    #[test]
    fn primary_bar_gets_emphasis_fill() {
        let spec = BarChartSpec::new();
        let (_layout, marks) = spec.marks(&HeuristicTextMeasurer, &data());
        let mut emphasized = 0;
        for m in &marks {
            if let MarkPayload::Rect(r) = &m.payload
                && r.fill == spec.emphasis_fill
            {
                emphasized += 1;
            }
        }
        assert_eq!(emphasized, 1);
    }
}
