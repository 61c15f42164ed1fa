// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis label formatting.

extern crate alloc;

use alloc::string::String;

use payviz_format::{MAX_FRACTION_DIGITS, format_number};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Counts the fractional digits needed to print a tick increment.
///
/// Increments are `k × 10^n` values that floating point stores slightly above or below the
/// exact decimal. The fractional part is nudged up by 0.1% so that values stored slightly low
/// round up, and only the first run of non-zero digits after the leading zeros is counted so
/// that values stored slightly high stop at the first zero.
///
/// Integral and non-finite values need no fractional digits.
pub fn count_decimal_places(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }

    let mut frac = (value - value.trunc()).abs();
    if frac == 0.0 {
        return 0;
    }
    frac += frac * 0.001;

    let mut places = 0;
    while (frac * 10.0).floor() == 0.0 && places < MAX_FRACTION_DIGITS {
        frac *= 10.0;
        places += 1;
    }
    while (frac * 10.0).floor() % 10.0 != 0.0 && places < MAX_FRACTION_DIGITS {
        frac *= 10.0;
        places += 1;
    }
    places
}

/// Returns the fractional digits needed for labels of a descending tick set.
///
/// The increment is the difference of the two highest ticks; fewer than two ticks need none.
pub fn increment_digits(ticks: &[f64]) -> u32 {
    match ticks {
        [first, second, ..] => count_decimal_places(first - second),
        _ => 0,
    }
}

/// The built-in tick label formatter.
///
/// Renders values with en-US digit grouping and at most [`DefaultFormatter::fraction_digits`]
/// fractional digits, dropping trailing zeros.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultFormatter {
    fraction_digits: u32,
}

impl DefaultFormatter {
    /// Creates a formatter printing at most `fraction_digits` fractional digits.
    pub fn new(fraction_digits: u32) -> Self {
        Self { fraction_digits }
    }

    /// Returns the maximum number of fractional digits.
    pub fn fraction_digits(&self) -> u32 {
        self.fraction_digits
    }

    /// Formats `value`.
    pub fn format(&self, value: f64) -> String {
        format_number(value, self.fraction_digits)
    }
}

/// A pluggable tick label formatter.
///
/// Implementations receive the raw value and the default formatter, and fully control the
/// output. A typical use decorates the default output:
///
/// ```
/// use payviz_charts::{DefaultFormatter, NumericFormatter};
///
/// let percent = |v: f64, default: &DefaultFormatter| {
///     let sign = if v > 0.0 { "+" } else { "" };
///     format!("{sign}{}%", default.format(v))
/// };
/// assert_eq!(percent.format(2.5, &DefaultFormatter::new(1)), "+2.5%");
/// ```
pub trait NumericFormatter {
    /// Formats `value`, optionally delegating to `default`.
    fn format(&self, value: f64, default: &DefaultFormatter) -> String;
}

impl<F> NumericFormatter for F
where
    F: Fn(f64, &DefaultFormatter) -> String,
{
    fn format(&self, value: f64, default: &DefaultFormatter) -> String {
        self(value, default)
    }
}

/// Formats a tick label with `increment_digits` fractional digits.
///
/// With a custom `formatter`, its output is used verbatim.
pub fn format_tick_label(
    value: f64,
    increment_digits: u32,
    formatter: Option<&dyn NumericFormatter>,
) -> String {
    let default = DefaultFormatter::new(increment_digits);
    match formatter {
        Some(f) => f.format(value, &default),
        None => default.format(value),
    }
}
