// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart building blocks for `stria_core`.
//!
//! This crate is a small, reusable layer above `stria_core`:
//! - **Scales** map data values into screen coordinates.
//! - **Marks** (bars, value labels) are generated per datum with stable ids.
//! - **Guides** (axes, titles) are built by generating `stria_core::Mark`s.
//!
//! Everything here is pure data-to-marks computation; a renderer applies the
//! resulting mark diffs to an output surface. Text shaping and layout are out
//! of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;

mod axis;
mod bar_chart;
mod bar_mark;
mod chart_spec;
mod data;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod measure;
mod rect_mark;
mod rule_mark;
mod scale;
mod text_mark;
mod title;
mod value_label;
mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, GridStyle, StrokeStyle};
pub use bar_chart::BarChartSpec;
pub use bar_mark::BarMarkSpec;
pub use chart_spec::ChartSpec;
pub use data::Datum;
pub use format::format_tick_with_step;
pub use layout::{ChartLayout, ChartLayoutSpec, Size};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, ScaleSpec};
pub use text_mark::TextMarkSpec;
pub use title::TitleSpec;
pub use value_label::ValueLabelSpec;
pub use z_order::*;
