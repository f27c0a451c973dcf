// Copyright 2025 the Stria Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric label formatting.
//!
//! Tick and value labels share one formatter so a chart's numbers agree on
//! decimal places. The tick step decides how many decimals are meaningful:
//! a step of `0.5` formats `1` as `1.0`, a step of `1` formats it as `1`.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick or value label using the tick step for decimal places.
///
/// With a positive finite `step`, every label gets the fixed number of
/// decimals the step requires (up to 6). With a zero or non-finite `step`
/// the value formats in its shortest form.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    // Avoid "-0" style labels for values rounded to zero.
    let value = if value == 0.0 { 0.0 } else { value };
    let decimals = decimals_for_step(step);
    if decimals == 0 && step > 0.0 {
        alloc::format!("{}", value.round())
    } else if decimals > 0 {
        alloc::format!("{value:.decimals$}")
    } else {
        alloc::format!("{value}")
    }
}

/// Returns the number of decimal places needed to print `step` exactly
/// (capped at 6).
fn decimals_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let mut scaled = step;
    let mut decimals = 0;
    while decimals < 6 {
        let nearest = scaled.round();
        if (scaled - nearest).abs() <= 1.0e-9 * scaled.abs().max(1.0) {
            break;
        }
        scaled *= 10.0;
        decimals += 1;
    }
    decimals
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integer_steps_format_without_decimals() {
        assert_eq!(format_tick_with_step(4.0, 2.0), "4");
        assert_eq!(format_tick_with_step(1000.0, 250.0), "1000");
    }

    #[test]
    fn fractional_steps_keep_consistent_decimals() {
        assert_eq!(format_tick_with_step(1.0, 0.5), "1.0");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
    }

    #[test]
    fn zero_step_formats_shortest() {
        assert_eq!(format_tick_with_step(1.0, 0.0), "1");
        assert_eq!(format_tick_with_step(2.5, 0.0), "2.5");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_tick_with_step(-0.0, 1.0), "0");
    }

    #[test]
    fn non_finite_values_format_empty() {
        assert_eq!(format_tick_with_step(f64::NAN, 1.0), "");
    }
}
