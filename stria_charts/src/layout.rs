// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny measure/arrange layout helper for charts.
//!
//! - **Measure**: determine desired thicknesses for guides (axes, titles).
//! - **Arrange**: place guides relative to the plot rectangle.
//!
//! This module is intentionally small and heuristic-driven; it keeps chart
//! layout out of `stria_core`.

use kurbo::Rect;

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

/// Layout inputs for a single chart: a plot area plus optional guides.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartLayoutSpec {
    /// Optional chart title thickness (reserved above the plot and axes).
    pub title_top: Option<f64>,
    /// The desired plot size.
    ///
    /// If `view_size` is `Some`, this is a fallback; the plot size is derived
    /// from the available view size instead (autosize-fit behavior).
    pub plot_size: Size,
    /// Optional explicit view size (outer chart bounds).
    ///
    /// If set, [`ChartLayout::arrange`] computes the largest plot size that
    /// fits within the given view size after accounting for guides and
    /// `outer_padding`.
    pub view_size: Option<Size>,
    /// Extra padding around the whole chart (applied on all sides).
    ///
    /// Helps avoid clipping tick labels that lie on the plot edge.
    pub outer_padding: f64,
    /// Whether to include a left axis, and its desired margin thickness.
    pub axis_left: Option<f64>,
    /// Whether to include a right axis, and its desired margin thickness.
    pub axis_right: Option<f64>,
    /// Whether to include a top axis, and its desired margin thickness.
    pub axis_top: Option<f64>,
    /// Whether to include a bottom axis, and its desired margin thickness.
    pub axis_bottom: Option<f64>,
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// Reserved rectangle for the chart title (if any).
    pub title_top: Option<Rect>,
    /// The plot rectangle that marks and scales map into.
    pub plot: Rect,
    /// Reserved rectangle for the left axis (if any).
    pub axis_left: Option<Rect>,
    /// Reserved rectangle for the right axis (if any).
    pub axis_right: Option<Rect>,
    /// Reserved rectangle for the top axis (if any).
    pub axis_top: Option<Rect>,
    /// Reserved rectangle for the bottom axis (if any).
    pub axis_bottom: Option<Rect>,
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let outer_padding = spec.outer_padding.max(0.0);
        let title_top_h = spec.title_top.unwrap_or(0.0).max(0.0);
        let axis_left_w = spec.axis_left.unwrap_or(0.0).max(0.0);
        let axis_right_w = spec.axis_right.unwrap_or(0.0).max(0.0);
        let axis_top_h = spec.axis_top.unwrap_or(0.0).max(0.0);
        let axis_bottom_h = spec.axis_bottom.unwrap_or(0.0).max(0.0);

        let margin_left = outer_padding + axis_left_w;
        let margin_right = outer_padding + axis_right_w;
        let margin_top = outer_padding + title_top_h + axis_top_h;
        let margin_bottom = outer_padding + axis_bottom_h;

        let (plot_w, plot_h) = match spec.view_size {
            Some(v) => (
                (v.width.max(0.0) - margin_left - margin_right).max(0.0),
                (v.height.max(0.0) - margin_top - margin_bottom).max(0.0),
            ),
            None => (
                spec.plot_size.width.max(0.0),
                spec.plot_size.height.max(0.0),
            ),
        };

        let plot = Rect::new(
            margin_left,
            margin_top,
            margin_left + plot_w,
            margin_top + plot_h,
        );

        // Axes sit adjacent to the plot rectangle so scale mapping matches marks.
        let axis_left = (axis_left_w > 0.0)
            .then(|| Rect::new(plot.x0 - axis_left_w, plot.y0, plot.x0, plot.y1));
        let axis_right = (axis_right_w > 0.0)
            .then(|| Rect::new(plot.x1, plot.y0, plot.x1 + axis_right_w, plot.y1));
        let axis_top =
            (axis_top_h > 0.0).then(|| Rect::new(plot.x0, plot.y0 - axis_top_h, plot.x1, plot.y0));
        let axis_bottom = (axis_bottom_h > 0.0)
            .then(|| Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + axis_bottom_h));

        let view_size = spec.view_size.unwrap_or(Size {
            width: margin_left + plot_w + margin_right,
            height: margin_top + plot_h + margin_bottom,
        });
        let view = Rect::new(0.0, 0.0, view_size.width, view_size.height);

        let title_top = (title_top_h > 0.0).then(|| {
            Rect::new(
                0.0,
                outer_padding,
                view.x1,
                outer_padding + title_top_h,
            )
        });

        Self {
            view,
            title_top,
            plot,
            axis_left,
            axis_right,
            axis_top,
            axis_bottom,
        }
    }
}
