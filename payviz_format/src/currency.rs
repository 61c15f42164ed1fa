// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Currency formatting.

extern crate alloc;

use alloc::string::String;

use crate::number::{format_fixed, trim_decimal_zeros};

/// Options for [`format_currency`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    /// Abbreviate thousands to `K`, millions to `M` and billions to `B`.
    pub abbreviate: bool,
    /// Number of digits after the decimal point.
    ///
    /// `None` uses the currency default of two digits.
    pub fraction_digits: Option<u32>,
    /// Whether to group the integer part with `,`.
    pub thousands_separator: bool,
    /// Whether to keep trailing zeros after the decimal point.
    pub show_decimal_zeros: bool,
}

impl FormatOptions {
    /// Creates options with no abbreviation, two fractional digits, grouping and decimal zeros.
    pub fn new() -> Self {
        Self {
            abbreviate: false,
            fraction_digits: None,
            thousands_separator: true,
            show_decimal_zeros: true,
        }
    }

    /// Enables or disables `K`/`M`/`B` abbreviation.
    pub fn with_abbreviate(mut self, abbreviate: bool) -> Self {
        self.abbreviate = abbreviate;
        self
    }

    /// Sets the number of fractional digits.
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = Some(digits);
        self
    }

    /// Enables or disables the thousands separator.
    pub fn with_thousands_separator(mut self, on: bool) -> Self {
        self.thousands_separator = on;
        self
    }

    /// Keeps or drops trailing zeros after the decimal point.
    pub fn with_decimal_zeros(mut self, show: bool) -> Self {
        self.show_decimal_zeros = show;
        self
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new()
    }
}

struct Abbreviation {
    floor: f64,
    suffix: &'static str,
}

// Descending, so the first floor not above the value wins.
const ABBREVIATIONS: &[Abbreviation] = &[
    Abbreviation {
        floor: 1e9,
        suffix: "B",
    },
    Abbreviation {
        floor: 1e6,
        suffix: "M",
    },
    Abbreviation {
        floor: 1e3,
        suffix: "K",
    },
];

const DEFAULT_CURRENCY: &str = "USD";

/// Returns the display prefix for an ISO 4217 currency code.
///
/// Well-known codes map to their symbol (`USD` → `$`); other codes render as the code followed by
/// a non-breaking space.
pub fn currency_symbol(code: &str) -> String {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "INR" => "₹",
        "KRW" => "₩",
        "ILS" => "₪",
        "VND" => "₫",
        "CAD" => "CA$",
        "AUD" => "A$",
        "NZD" => "NZ$",
        "MXN" => "MX$",
        "BRL" => "R$",
        "CNY" => "CN¥",
        "HKD" => "HK$",
        "TWD" => "NT$",
        _ => {
            let mut out = String::from(code);
            out.push('\u{a0}');
            return out;
        }
    };
    String::from(symbol)
}

/// Formats a compensation value as currency.
///
/// `currency` is an ISO 4217 code; only its first three characters are used and anything
/// shorter falls back to `USD`.
///
/// Without `options`, small values (below 100, e.g. hourly pay) get two fractional digits and
/// larger values none. With `options`, the digits come from
/// [`FormatOptions::fraction_digits`].
pub fn format_currency(
    value: f64,
    currency: Option<&str>,
    options: Option<&FormatOptions>,
) -> String {
    let mut value = value;

    let abbreviation = options
        .filter(|o| o.abbreviate)
        .and_then(|_| ABBREVIATIONS.iter().find(|a| value >= a.floor));
    if let Some(a) = abbreviation {
        value /= a.floor;
    }

    let fraction_digits = match options {
        Some(o) => o.fraction_digits.unwrap_or(2),
        None if value.abs() < 100.0 => 2,
        None => 0,
    };
    let grouping = options.is_none_or(|o| o.thousands_separator);

    let code = currency_code(currency);
    let digits = format_fixed(value, fraction_digits, grouping);
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };

    let mut out = String::new();
    out.push_str(sign);
    out.push_str(&currency_symbol(&code));
    out.push_str(digits);

    if options.is_some_and(|o| !o.show_decimal_zeros) {
        out = trim_decimal_zeros(&out);
    }
    if let Some(a) = abbreviation {
        out.push_str(a.suffix);
    }
    out
}

fn currency_code(currency: Option<&str>) -> String {
    match currency {
        Some(c) if c.chars().count() >= 3 => {
            c.chars().take(3).flat_map(char::to_uppercase).collect()
        }
        _ => String::from(DEFAULT_CURRENCY),
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn opts() -> FormatOptions {
        FormatOptions::new()
    }

    #[test]
    fn defaults_to_usd() {
        let o = opts().with_thousands_separator(true);
        assert_eq!(format_currency(1000.0, None, Some(&o)), "$1,000.00");
        assert_eq!(format_currency(1000.0, Some("US"), Some(&o)), "$1,000.00");
    }

    #[test]
    fn includes_currency_symbol() {
        let o = opts();
        assert_eq!(format_currency(1000.0, Some("USD"), Some(&o)), "$1,000.00");
        assert_eq!(format_currency(1000.0, Some("EUR"), Some(&o)), "€1,000.00");
        assert_eq!(format_currency(1000.0, Some("eur"), Some(&o)), "€1,000.00");
        assert_eq!(format_currency(5.0, Some("CHF"), Some(&o)), "CHF\u{a0}5.00");
    }

    #[test]
    fn digits_follow_magnitude_without_options() {
        assert_eq!(format_currency(1000.0, None, None), "$1,000");
        assert_eq!(format_currency(1000.123, None, None), "$1,000");
        assert_eq!(format_currency(99.123, None, None), "$99.12");
        assert_eq!(format_currency(0.0, None, None), "$0.00");
    }

    #[test]
    fn thousands_separator_can_be_disabled() {
        let o = opts().with_thousands_separator(false);
        assert_eq!(format_currency(1000.0, None, Some(&o)), "$1000.00");
    }

    #[test]
    fn honors_fraction_digits() {
        assert_eq!(format_currency(1.0, None, Some(&opts().with_fraction_digits(3))), "$1.000");
        assert_eq!(format_currency(1.123, None, Some(&opts().with_fraction_digits(1))), "$1.1");
        assert_eq!(format_currency(1.123, None, Some(&opts().with_fraction_digits(2))), "$1.12");
        assert_eq!(format_currency(1.123, None, Some(&opts().with_fraction_digits(3))), "$1.123");
    }

    #[test]
    fn exact_halves_round_up() {
        let o = opts().with_fraction_digits(2);
        assert_eq!(format_currency(1.125, None, Some(&o)), "$1.13");
        assert_eq!(format_currency(-1.125, None, Some(&o)), "-$1.13");
        assert_eq!(format_currency(150.5, None, None), "$151");
    }

    #[test]
    fn abbreviates_large_values() {
        let abbr = opts().with_abbreviate(true);
        assert_eq!(format_currency(999.0, None, Some(&abbr.with_fraction_digits(0))), "$999");
        assert_eq!(format_currency(1000.0, None, Some(&abbr.with_fraction_digits(0))), "$1K");
        assert_eq!(format_currency(1100.0, None, Some(&abbr.with_fraction_digits(0))), "$1K");
        assert_eq!(format_currency(1100.0, None, Some(&abbr.with_fraction_digits(1))), "$1.1K");
        assert_eq!(format_currency(1100.0, None, Some(&abbr.with_fraction_digits(2))), "$1.10K");
        assert_eq!(format_currency(85_123.0, None, Some(&abbr.with_fraction_digits(1))), "$85.1K");
        assert_eq!(format_currency(1e6, None, Some(&abbr.with_fraction_digits(0))), "$1M");
        assert_eq!(format_currency(1e9, None, Some(&abbr.with_fraction_digits(0))), "$1B");
    }

    #[test]
    fn abbreviation_drops_decimal_zeros_before_suffix() {
        let o = opts().with_abbreviate(true).with_decimal_zeros(false);
        assert_eq!(format_currency(90_000.0, None, Some(&o.with_fraction_digits(1))), "$90K");
        assert_eq!(format_currency(90_500.0, None, Some(&o.with_fraction_digits(2))), "$90.5K");
    }

    #[test]
    fn removes_decimal_zeros() {
        let o = opts().with_fraction_digits(3).with_decimal_zeros(false);
        assert_eq!(format_currency(1.0, None, Some(&o)), "$1");
        assert_eq!(format_currency(1.1, None, Some(&o)), "$1.1");
        assert_eq!(format_currency(1.11, None, Some(&o)), "$1.11");
    }

    #[test]
    fn negative_values_put_sign_before_symbol() {
        assert_eq!(format_currency(-1500.0, None, None), "-$1,500");
        let abbr = opts().with_abbreviate(true).with_fraction_digits(0);
        assert_eq!(format_currency(-5000.0, None, Some(&abbr)), "-$5,000");
    }
}
