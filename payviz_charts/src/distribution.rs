// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Share-of-total helpers: proportional single-column bars and cohort percentages.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::bar::Bar;

/// One segment of a proportional (single stacked column) bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProportionalSegment {
    /// Index of the source bar.
    pub index: usize,
    /// Share of the column, in percent.
    pub percent_height: f64,
}

/// Splits one column among `bars` in proportion to their values.
///
/// Bars with non-positive (or NaN) values get no segment. A non-positive total yields no
/// segments at all.
pub fn proportional_segments(bars: &[Bar]) -> Vec<ProportionalSegment> {
    let total: f64 = bars.iter().map(|b| b.value).sum();
    if !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    bars.iter()
        .enumerate()
        .filter(|(_, b)| b.value > 0.0)
        .map(|(index, b)| ProportionalSegment {
            index,
            percent_height: b.value / total * 100.0,
        })
        .collect()
}

/// Converts bucket counts into whole-number percentages of their total.
///
/// An all-zero (or empty) distribution maps every bucket to `0` rather than `NaN`.
pub fn cohort_percentages(counts: &[f64]) -> Vec<f64> {
    let total: f64 = counts.iter().sum();
    counts
        .iter()
        .map(|&count| {
            if total == 0.0 {
                0.0
            } else {
                (count / total * 100.0).round()
            }
        })
        .collect()
}
