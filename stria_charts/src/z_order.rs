// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Marks carry an explicit `z_index` for render ordering; the chart layer
//! assigns these consistently so callers don't hand-tune paint order.
//! Renderers should sort by `(z_index, MarkId)` for a deterministic
//! tie-break.

/// Plot background/frame fills.
pub const PLOT_BACKGROUND: i32 = -100;
/// Gridlines drawn behind series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks (bars).
pub const SERIES_FILL: i32 = 0;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis title labels.
pub const AXIS_TITLES: i32 = 50;

/// Per-datum value labels drawn above the bars.
pub const VALUE_LABELS: i32 = 60;

/// Chart-level titles and annotations.
pub const TITLES: i32 = 80;
