// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition helpers.
//!
//! A small "composition" layer that owns chart layout and common guides
//! (title, axes). A chart is assembled from a plot rectangle, guide
//! components, and a set of series marks.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;
use stria_core::Mark;

use crate::axis::AxisSpec;
use crate::layout::{ChartLayout, ChartLayoutSpec, Size};
use crate::measure::TextMeasurer;
use crate::scale::{ScaleBand, ScaleLinear};
use crate::title::TitleSpec;

/// A composed chart description that owns guide specs and layout inputs.
#[derive(Clone, Debug, Default)]
pub struct ChartSpec {
    /// Optional title.
    pub title: Option<TitleSpec>,
    /// Desired plot size, used when `layout.view_size` is `None`.
    pub plot_size: Size,
    /// Layout options.
    pub layout: ChartLayoutSpec,
    /// Optional left axis.
    pub axis_left: Option<AxisSpec>,
    /// Optional right axis.
    pub axis_right: Option<AxisSpec>,
    /// Optional top axis.
    pub axis_top: Option<AxisSpec>,
    /// Optional bottom axis.
    pub axis_bottom: Option<AxisSpec>,
}

impl ChartSpec {
    /// Returns the bottom axis if present, otherwise the top axis.
    pub fn x_axis(&self) -> Option<&AxisSpec> {
        self.axis_bottom.as_ref().or(self.axis_top.as_ref())
    }

    /// Returns the left axis if present, otherwise the right axis.
    pub fn y_axis(&self) -> Option<&AxisSpec> {
        self.axis_left.as_ref().or(self.axis_right.as_ref())
    }

    /// Instantiates the x-axis band scale for a given plot rectangle.
    ///
    /// Returns `None` if no x-axis is configured. Panics if the configured
    /// x-axis is not a band scale.
    pub fn x_scale_band(&self, plot: Rect) -> Option<ScaleBand> {
        self.x_axis().map(|a| a.scale_band(plot))
    }

    /// Instantiates the y-axis linear scale for a given plot rectangle.
    ///
    /// Returns `None` if no y-axis is configured. Panics if the configured
    /// y-axis is not a linear scale.
    pub fn y_scale_linear(&self, plot: Rect) -> Option<ScaleLinear> {
        self.y_axis().map(|a| a.scale_linear(plot))
    }

    /// Computes layout for this chart.
    pub fn layout(&self, measurer: &dyn TextMeasurer) -> ChartLayout {
        let mut layout = self.layout;
        layout.title_top = self.title.as_ref().map(|t| t.measure(measurer));
        layout.plot_size = self.plot_size;
        layout.axis_left = self.axis_left.as_ref().map(|a| a.measure(measurer));
        layout.axis_right = self.axis_right.as_ref().map(|a| a.measure(measurer));
        layout.axis_top = self.axis_top.as_ref().map(|a| a.measure(measurer));
        layout.axis_bottom = self.axis_bottom.as_ref().map(|a| a.measure(measurer));

        ChartLayout::arrange(&layout)
    }

    /// Generates marks for the title and axes, given a computed layout.
    pub fn guide_marks(&self, measurer: &dyn TextMeasurer, layout: &ChartLayout) -> Vec<Mark> {
        let mut out = Vec::new();

        if let (Some(title), Some(rect)) = (self.title.as_ref(), layout.title_top) {
            out.extend(title.marks(measurer, rect));
        }

        let plot = layout.plot;
        if let (Some(axis), Some(axis_rect)) = (self.axis_bottom.as_ref(), layout.axis_bottom) {
            out.extend(axis.marks(plot, axis_rect));
        }
        if let (Some(axis), Some(axis_rect)) = (self.axis_top.as_ref(), layout.axis_top) {
            out.extend(axis.marks(plot, axis_rect));
        }
        if let (Some(axis), Some(axis_rect)) = (self.axis_left.as_ref(), layout.axis_left) {
            out.extend(axis.marks(plot, axis_rect));
        }
        if let (Some(axis), Some(axis_rect)) = (self.axis_right.as_ref(), layout.axis_right) {
            out.extend(axis.marks(plot, axis_rect));
        }

        out
    }

    /// Convenience to produce a full mark list: series marks + guide marks.
    ///
    /// The series builder is invoked with the resolved plot rectangle.
    pub fn marks(
        &self,
        measurer: &dyn TextMeasurer,
        build_series: impl FnOnce(&Self, Rect) -> Vec<Mark>,
    ) -> (ChartLayout, Vec<Mark>) {
        let layout = self.layout(measurer);
        let mut marks = build_series(self, layout.plot);
        marks.extend(self.guide_marks(measurer, &layout));
        (layout, marks)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use stria_core::MarkKind;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;
    use crate::scale::{ScaleBandSpec, ScaleLinearSpec};

    fn spec() -> ChartSpec {
        ChartSpec {
            title: Some(TitleSpec::new(stria_core::MarkId::from_raw(900), "T")),
            plot_size: Size {
                width: 200.0,
                height: 100.0,
            },
            layout: ChartLayoutSpec {
                outer_padding: 8.0,
                ..Default::default()
            },
            axis_left: Some(AxisSpec::left(100, ScaleLinearSpec::new((0.0, 10.0)))),
            axis_bottom: Some(AxisSpec::bottom(200, ScaleBandSpec::new(3))),
            ..Default::default()
        }
    }

    #[test]
    fn layout_reserves_space_for_configured_guides() {
        let spec = spec();
        let layout = spec.layout(&HeuristicTextMeasurer);
        assert!(layout.title_top.is_some());
        assert!(layout.axis_left.is_some());
        assert!(layout.axis_bottom.is_some());
        assert!(layout.axis_right.is_none());
        assert!((layout.plot.width() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn marks_combine_series_and_guides() {
        let spec = spec();
        let (layout, marks) = spec.marks(&HeuristicTextMeasurer, |_spec, plot| {
            assert!(plot.width() > 0.0);
            Vec::new()
        });
        assert!(layout.plot.area() > 0.0);
        assert!(marks.iter().any(|m| m.kind() == MarkKind::Text));
        assert!(marks.iter().any(|m| m.kind() == MarkKind::Path));
    }
}
