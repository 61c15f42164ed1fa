// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number and currency formatting for chart labels.
//!
//! `PayViz` charts never render text themselves, but they do produce label strings for axis
//! ticks, bar values and tooltips. This crate holds the formatting rules those labels share:
//! - [`format_number`] renders a value with en-US digit grouping and at most a given number of
//!   fractional digits (trailing zeros dropped), and
//! - [`format_currency`] renders compensation values with a currency symbol, optional
//!   `K`/`M`/`B` abbreviation and trailing-zero suppression.
//!
//! The crate is `no_std` (it uses `alloc` for owned strings). Rounding uses `libm` unless the
//! `std` feature is enabled.

#![no_std]

extern crate alloc;

mod currency;
#[cfg(not(feature = "std"))]
mod float;
mod number;

pub use currency::{FormatOptions, currency_symbol, format_currency};
pub use number::{MAX_FRACTION_DIGITS, format_fixed, format_number, trim_decimal_zeros};
