// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout core for compact bar charts.
//!
//! This crate turns a series of [`Bar`]s into render-ready geometry:
//! - a padded **range** around the data,
//! - "nice" **axis ticks** and their labels,
//! - per-bar **chunks** (stacked segments), label anchors and change-from-previous tooltips.
//!
//! Everything is expressed in percentages of the chart body, so any presentation layer
//! (DOM, canvas, a retained scene) can place the results. [`ScaleBand`] and the `*_rects`
//! helpers on [`BarChartLayout`] project them into a `kurbo` plot rectangle.
//!
//! Drawing, colours and hover state are out of scope.
//!
//! ```
//! use payviz_charts::{Bar, BarChartSpec};
//!
//! let spec = BarChartSpec::new().with_quant_axis(true);
//! let layout = spec.layout(&[Bar::new(1.0), Bar::new(2.0)]).unwrap();
//! assert_eq!(layout.tick_labels(), ["2", "1.5", "1", "0.5", "0"]);
//! ```

#![no_std]

extern crate alloc;

mod bar;
mod bar_layout;
mod chart_spec;
mod distribution;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod range;
mod scale;
mod ticks;

pub use bar::Bar;
pub use bar_layout::{
    BarChunk, BarChunks, BarDelta, BarLayout, BarLayoutOptions, DEFAULT_EMPTY_BAR_HEIGHT,
    EMPTY_BAR_FLOOR, MinBarLoc, bar_chunks, delta_percent, format_delta, layout_bars, pad_bars,
};
pub use chart_spec::{AxisLayout, AxisTick, BarChartLayout, BarChartSpec};
pub use distribution::{ProportionalSegment, cohort_percentages, proportional_segments};
pub use error::ChartConfigError;
pub use format::{
    DefaultFormatter, NumericFormatter, count_decimal_places, format_tick_label, increment_digits,
};
pub use range::{BASE_MARGIN, LABEL_MARGIN, Range, compute_data_range};
pub use scale::ScaleBand;
pub use ticks::{DEFAULT_MAX_TICK_COUNT, INCREMENTS, TickGenerator, TickStep, compute_ticks};
