// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A self-contained bar chart view.

use stria_charts::{BarChartSpec, Datum, HeuristicTextMeasurer, TextMeasurer};
use stria_core::Scene;

use crate::renderer::SvgRenderer;

/// A bar chart bound to an inline SVG document.
///
/// Owns the chart spec, a diffing scene, and a renderer. Each [`render`]
/// call regenerates marks from the dataset, diffs them against the previous
/// frame, and patches only the changed elements, so a datum dropped from the
/// input disappears from the SVG.
///
/// [`render`]: BarChartView::render
#[derive(Debug)]
pub struct BarChartView {
    spec: BarChartSpec,
    measurer: HeuristicTextMeasurer,
    scene: Scene,
    renderer: SvgRenderer,
    svg: String,
}

impl BarChartView {
    /// Creates a view for the given chart spec.
    pub fn new(spec: BarChartSpec) -> Self {
        Self {
            spec,
            measurer: HeuristicTextMeasurer,
            scene: Scene::new(),
            renderer: SvgRenderer::new(),
            svg: String::new(),
        }
    }

    /// Renders a dataset, updating the SVG document in place.
    ///
    /// An empty dataset renders a chart frame with no bars.
    pub fn render(&mut self, data: &[Datum]) -> &str {
        let (layout, marks) = self.spec.marks(&self.measurer, data);
        self.renderer.set_view_box(layout.view);
        let diffs = self.scene.tick(marks);
        self.renderer.apply_diffs(&diffs);
        self.svg = self.renderer.to_svg_string();
        &self.svg
    }

    /// Returns the most recently rendered SVG document.
    pub fn svg(&self) -> &str {
        &self.svg
    }

    /// Returns the chart spec.
    pub fn spec(&self) -> &BarChartSpec {
        &self.spec
    }

    /// Returns the chart spec for mutation; changes apply on the next render.
    pub fn spec_mut(&mut self) -> &mut BarChartSpec {
        &mut self.spec
    }

    /// Returns the text measurer used for layout.
    pub fn measurer(&self) -> &dyn TextMeasurer {
        &self.measurer
    }
}

impl Default for BarChartView {
    fn default() -> Self {
        Self::new(BarChartSpec::default())
    }
}
