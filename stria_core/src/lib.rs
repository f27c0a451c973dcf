// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained scene model for Stria charts.
//!
//! This crate holds the small vocabulary shared between chart generation and
//! rendering backends:
//! - **Marks** are resolved graphic elements (rects, text, paths) with a
//!   stable identity and a z-order hint.
//! - The **Scene** retains the mark set across redraws and reports changes as
//!   enter/update/exit diffs, so a backend can update a live document in
//!   place and drop elements that no longer exist in the data.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor, TextBaseline,
    TextPayload,
};
pub use scene::{MarkDiff, Scene};
