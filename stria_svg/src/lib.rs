// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline SVG rendering for stria charts.
//!
//! Two layers:
//! - [`SvgRenderer`] holds a retained element map keyed by mark id. It applies
//!   [`stria_core::MarkDiff`]s (enter inserts, update replaces, exit removes)
//!   and serializes the result as an SVG document.
//! - [`BarChartView`] wires a [`stria_charts::BarChartSpec`] to a scene and a
//!   renderer, exposing a single `render(data)` call that updates the SVG in
//!   place.

mod renderer;
mod view;

pub use renderer::SvgRenderer;
pub use view::BarChartView;
