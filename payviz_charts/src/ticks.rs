// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quantitative axis tick selection.
//!
//! Ticks are spaced by `k × 10^n` with `k` one of [`INCREMENTS`]. The search starts one order of
//! magnitude below the domain span and walks up until the tick count fits the cap. A tick beyond
//! the data is only added when the data reaches more than a third of the way toward it.

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;

use log::trace;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::range::Range;

/// Per-decade tick spacings, ascending.
pub const INCREMENTS: [f64; 4] = [1.0, 2.0, 2.5, 5.0];

/// Default cap on the number of ticks.
pub const DEFAULT_MAX_TICK_COUNT: usize = 5;

// Adding this before truncating a bucket index rounds up only past the first third of a bucket.
const OVERSHOOT: f64 = 0.66;

/// A chosen tick spacing for a domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStep {
    /// Distance between consecutive ticks.
    pub increment: f64,
    /// Bucket index of the top tick (`top tick = top_index × increment`).
    pub top_index: f64,
    /// Number of ticks.
    pub count: usize,
}

impl TickStep {
    /// Returns the tick values, descending from the top tick.
    pub fn values(&self) -> Vec<f64> {
        (0..self.count)
            .map(|i| (self.top_index - i as f64) * self.increment)
            .collect()
    }
}

/// Tick generator with a configurable count cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickGenerator {
    /// Maximum number of ticks to emit.
    pub max_count: usize,
}

impl TickGenerator {
    /// Creates a generator with the default cap of [`DEFAULT_MAX_TICK_COUNT`].
    pub fn new() -> Self {
        Self {
            max_count: DEFAULT_MAX_TICK_COUNT,
        }
    }

    /// Sets the tick count cap.
    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    /// Selects the tick spacing for `range`.
    ///
    /// Returns `None` for empty or non-finite domains and when the cap is zero.
    pub fn step(&self, range: Range) -> Option<TickStep> {
        let Range { mut min, mut max } = range;
        if self.max_count == 0 || !min.is_finite() || !max.is_finite() {
            return None;
        }
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        let span = max - min;
        if span <= 0.0 {
            return None;
        }

        let cap = self.max_count as f64;
        let mut magnitude = 10_f64.powf(span.log10().floor() - 1.0);
        while magnitude.is_finite() && magnitude > 0.0 {
            for k in INCREMENTS {
                let increment = k * magnitude;
                let top_index = (max / increment + OVERSHOOT).trunc();
                let bottom_index = (min / increment - OVERSHOOT).trunc();
                let count = top_index - bottom_index + 1.0;
                if count <= cap {
                    trace!("ticks for {range:?}: increment {increment}, {count} ticks");
                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "count is a positive integer no larger than the cap"
                    )]
                    let count = count as usize;
                    return Some(TickStep {
                        increment,
                        top_index,
                        count,
                    });
                }
            }
            magnitude *= 10.0;
        }
        None
    }

    /// Returns descending tick values for `range`.
    ///
    /// A domain with `min == max` yields the single tick `[max]`.
    pub fn ticks(&self, range: Range) -> Vec<f64> {
        if let Some(step) = self.step(range) {
            return step.values();
        }
        if self.max_count > 0 && range.max.is_finite() && range.min == range.max {
            return vec![range.max];
        }
        Vec::new()
    }
}

impl Default for TickGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns descending tick values for `range`, with at most [`DEFAULT_MAX_TICK_COUNT`] ticks.
pub fn compute_ticks(range: Range) -> Vec<f64> {
    TickGenerator::new().ticks(range)
}
