// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain number formatting (en-US grouping, bounded fractional digits).

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Upper bound on rendered fractional digits.
///
/// Requests above this are clamped, mirroring the limit of browser number formatters.
pub const MAX_FRACTION_DIGITS: u32 = 20;

// Above this every f64 is an integer, so scaling for rounding gains nothing.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Formats `value` with exactly `fraction_digits` fractional digits.
///
/// Ties round away from zero, so `2.5` with no fractional digits is `"3"`.
/// When `grouping` is set the integer part is split into groups of three with `,`.
/// A value that rounds to zero never carries a minus sign. Non-finite values render as
/// `NaN`, `∞` or `-∞`.
pub fn format_fixed(value: f64, fraction_digits: u32, grouping: bool) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }

    let digits = fraction_digits.min(MAX_FRACTION_DIGITS);
    let raw = format!("{:.*}", digits as usize, round_half_away(value.abs(), digits));
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };

    let negative = value.is_sign_negative() && raw.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    if grouping {
        push_grouped(&mut out, int_part);
    } else {
        out.push_str(int_part);
    }
    if let Some(frac_part) = frac_part {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Formats `value` with at most `max_fraction_digits` fractional digits and digit grouping.
///
/// Trailing fractional zeros are dropped, so `format_number(2.5, 2)` is `"2.5"` and
/// `format_number(3.0, 2)` is `"3"`.
pub fn format_number(value: f64, max_fraction_digits: u32) -> String {
    trim_decimal_zeros(&format_fixed(value, max_fraction_digits, true))
}

/// Removes trailing zeros after the decimal point, and the point itself if nothing remains.
///
/// Strings without exactly one `.` are returned unchanged.
pub fn trim_decimal_zeros(formatted: &str) -> String {
    let mut parts = formatted.split('.');
    let (Some(int_part), Some(frac_part), None) = (parts.next(), parts.next(), parts.next()) else {
        return String::from(formatted);
    };

    let frac_part = frac_part.trim_end_matches('0');
    if frac_part.is_empty() {
        String::from(int_part)
    } else {
        format!("{int_part}.{frac_part}")
    }
}

// `{:.*}` rounds ties to even; pre-round the magnitude so exact halves go up.
fn round_half_away(magnitude: f64, digits: u32) -> f64 {
    let scale = 10_f64.powf(f64::from(digits));
    let scaled = magnitude * scale;
    if !scaled.is_finite() || scaled >= MAX_EXACT_INTEGER {
        return magnitude;
    }
    scaled.round() / scale
}

fn push_grouped(out: &mut String, digits: &str) {
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        String::from("NaN")
    } else if value > 0.0 {
        String::from("∞")
    } else {
        String::from("-∞")
    }
}
