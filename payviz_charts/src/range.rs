// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quantitative domain computation.

use crate::bar::Bar;

/// Margin reserved above and below the data, as a fraction of the padded span.
pub const BASE_MARGIN: f64 = 0.05;

/// Extra margin reserved on a side whose bars carry value labels.
pub const LABEL_MARGIN: f64 = BASE_MARGIN * 2.0;

/// A closed `[min, max]` interval on the value axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Range {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Range {
    /// The empty domain `[0, 0]`.
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    /// Creates a range from its bounds.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the span used as a percentage denominator.
    ///
    /// Degenerate (zero, negative or NaN) spans are replaced with `1`.
    pub fn layout_span(&self) -> f64 {
        let span = self.span();
        if span > 0.0 { span } else { 1.0 }
    }

    /// Returns the distance of `value` below `max`, as a percentage of [`Range::layout_span`].
    pub fn percent_from_top(&self, value: f64) -> f64 {
        (self.max - value) / self.layout_span() * 100.0
    }

    /// Widens the range to cover the first and last of `ticks`.
    ///
    /// Tick sets are descending, so the first tick bounds the top and the last the bottom.
    pub fn union_ticks(&self, ticks: &[f64]) -> Self {
        match (ticks.first(), ticks.last()) {
            (Some(&top), Some(&bottom)) => Self {
                min: self.min.min(bottom),
                max: self.max.max(top),
            },
            _ => *self,
        }
    }
}

/// Computes the padded value domain for `bars`.
///
/// The domain always contains zero. Each side gets a [`BASE_MARGIN`]; a side gets an extra
/// [`LABEL_MARGIN`] when any bar on it (negative values below, non-negative above) has a
/// label, leaving room for the label text.
///
/// `NaN` values are skipped, so one bad value cannot poison the domain.
pub fn compute_data_range(bars: &[Bar]) -> Range {
    if bars.is_empty() {
        return Range::ZERO;
    }

    let min_val = bars.iter().fold(0.0_f64, |acc, bar| acc.min(bar.value));
    let max_val = bars.iter().fold(0.0_f64, |acc, bar| acc.max(bar.value));

    let negative_labels = bars.iter().any(|bar| bar.has_label() && bar.value < 0.0);
    let positive_labels = bars.iter().any(|bar| bar.has_label() && bar.value >= 0.0);

    let bottom_margin = BASE_MARGIN + if negative_labels { LABEL_MARGIN } else { 0.0 };
    let top_margin = BASE_MARGIN + if positive_labels { LABEL_MARGIN } else { 0.0 };

    let span = max_val - min_val;
    let expanded = span / (1.0 - top_margin - bottom_margin);

    Range {
        min: min_val - expanded * bottom_margin,
        max: max_val + expanded * top_margin,
    }
}
