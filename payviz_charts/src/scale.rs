// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of bar columns along the category axis.

use kurbo::Rect;

/// A discrete band scale dividing a plot's width into one column per bar.
///
/// Padding is measured in band widths: `padding_inner` between neighbouring columns and
/// `padding_outer` before the first and after the last.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a band scale for `count` columns with 20% inner and 10% outer padding.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            padding_inner: 0.2,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units. Negative values are clamped to zero.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the number of columns.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the column width for a plot spanning `width`.
    pub fn band_width(&self, width: f64) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let n = self.count as f64;
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { width.abs() / denom }
    }

    /// Returns the full-height rectangle of column `index` inside `plot`.
    pub fn column(&self, plot: Rect, index: usize) -> Rect {
        let bw = self.band_width(plot.width());
        let step = bw * (1.0 + self.padding_inner);
        let x0 = plot.x0 + bw * self.padding_outer + step * index as f64;
        Rect::new(x0, plot.y0, x0 + bw, plot.y1)
    }
}
