// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart composition.
//!
//! [`BarChartSpec`] owns the chart options and runs the whole layout pipeline:
//! - the padded data range,
//! - axis ticks (when an axis or gridlines are shown), widening the domain to the outer ticks,
//! - per-bar geometry against that domain, and
//! - tick labels.
//!
//! The result is plain data for the presentation layer; nothing here draws.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::Rect;
use log::debug;

use crate::bar::Bar;
use crate::bar_layout::{BarLayout, BarLayoutOptions, EMPTY_BAR_FLOOR, MinBarLoc, layout_bars};
use crate::error::ChartConfigError;
use crate::format::{NumericFormatter, format_tick_label, increment_digits};
use crate::range::{Range, compute_data_range};
use crate::scale::ScaleBand;
use crate::ticks::TickGenerator;

/// Options for a single-axis bar chart.
#[derive(Clone, Default)]
pub struct BarChartSpec {
    /// Whether the quantitative axis (tick labels) is shown.
    pub show_quant_axis: bool,
    /// Whether gridlines are drawn at the ticks.
    pub show_grid_lines: bool,
    /// Bar geometry options.
    pub bar_options: BarLayoutOptions,
    /// Axis tick selection.
    pub tick_generator: TickGenerator,
    /// Optional tick label formatter. The default prints digits matching the tick spacing.
    pub formatter: Option<Arc<dyn NumericFormatter>>,
}

impl core::fmt::Debug for BarChartSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BarChartSpec")
            .field("show_quant_axis", &self.show_quant_axis)
            .field("show_grid_lines", &self.show_grid_lines)
            .field("bar_options", &self.bar_options)
            .field("tick_generator", &self.tick_generator)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}

impl BarChartSpec {
    /// Creates a spec with no axis, no gridlines and default bar options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows or hides the quantitative axis.
    pub fn with_quant_axis(mut self, on: bool) -> Self {
        self.show_quant_axis = on;
        self
    }

    /// Shows or hides gridlines.
    pub fn with_grid_lines(mut self, on: bool) -> Self {
        self.show_grid_lines = on;
        self
    }

    /// Sets the minimum bar height, in percent of the chart body.
    pub fn with_min_bar_height(mut self, height: f64) -> Self {
        self.bar_options.min_bar_height = Some(height);
        self
    }

    /// Pads the chart with empty bars up to `count` bars.
    pub fn with_min_bars(mut self, count: usize) -> Self {
        self.bar_options.min_bars = Some(count);
        self
    }

    /// Sets the side that receives padding bars.
    pub fn with_min_bar_loc(mut self, loc: MinBarLoc) -> Self {
        self.bar_options.min_bar_loc = loc;
        self
    }

    /// Enables or disables the change-from-previous tooltip data.
    pub fn with_delta_tooltip(mut self, on: bool) -> Self {
        self.bar_options.show_delta_tooltip = on;
        self
    }

    /// Caps the number of axis ticks.
    pub fn with_max_tick_count(mut self, count: usize) -> Self {
        self.tick_generator.max_count = count;
        self
    }

    /// Sets the tick label formatter.
    pub fn with_formatter(mut self, formatter: impl NumericFormatter + 'static) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Returns `true` if ticks are needed (for the axis or for gridlines).
    pub fn shows_ticks(&self) -> bool {
        self.show_quant_axis || self.show_grid_lines
    }

    /// Checks the options.
    pub fn validate(&self) -> Result<(), ChartConfigError> {
        if let Some(h) = self.bar_options.min_bar_height
            && !(h.is_finite() && (0.0..=EMPTY_BAR_FLOOR).contains(&h))
        {
            return Err(ChartConfigError::InvalidMinBarHeight(h));
        }
        if self.tick_generator.max_count == 0 {
            return Err(ChartConfigError::ZeroTickCap);
        }
        Ok(())
    }

    /// Lays out `bars`.
    ///
    /// Returns `None` when there are no bars, meaning nothing should be rendered.
    pub fn layout(&self, bars: &[Bar]) -> Option<BarChartLayout> {
        if bars.is_empty() {
            debug!("bar chart layout skipped: no bars");
            return None;
        }

        let data_range = compute_data_range(bars);
        let ticks = if self.shows_ticks() {
            self.tick_generator.ticks(data_range)
        } else {
            Vec::new()
        };
        let domain = data_range.union_ticks(&ticks);
        let axis = self.shows_ticks().then(|| self.axis_layout(&ticks, domain));

        let bars = layout_bars(bars, domain, &self.bar_options);
        let has_axis_labels = bars.iter().any(|l| l.bar.has_axis_label());

        debug!(
            "bar chart layout: {} bars, data {data_range:?}, domain {domain:?}, {} ticks",
            bars.len(),
            ticks.len()
        );

        Some(BarChartLayout {
            data_range,
            domain,
            axis,
            bars,
            has_axis_labels,
            show_quant_axis: self.show_quant_axis,
            show_grid_lines: self.show_grid_lines,
        })
    }

    fn axis_layout(&self, ticks: &[f64], domain: Range) -> AxisLayout {
        let fraction_digits = increment_digits(ticks);
        let formatter = self.formatter.as_deref();
        let ticks = ticks
            .iter()
            .map(|&value| AxisTick {
                value,
                percent_top: domain.percent_from_top(value),
                label: format_tick_label(value, fraction_digits, formatter),
                is_zero: value == 0.0,
            })
            .collect();
        AxisLayout {
            ticks,
            fraction_digits,
        }
    }
}

/// A labelled tick on the quantitative axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Tick value.
    pub value: f64,
    /// Position, in percent from the top of the chart body.
    pub percent_top: f64,
    /// Formatted label.
    pub label: String,
    /// Whether this is the zero line.
    pub is_zero: bool,
}

/// The quantitative axis: descending ticks with labels and positions.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout {
    /// Ticks, highest first.
    pub ticks: Vec<AxisTick>,
    /// Fractional digits used by the default label formatter.
    pub fraction_digits: u32,
}

impl AxisLayout {
    /// Returns the tick values, highest first.
    pub fn values(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.value).collect()
    }

    /// Returns the formatted labels, highest tick first.
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// Returns the spacing between ticks, or `0` with fewer than two ticks.
    pub fn increment(&self) -> f64 {
        match self.ticks.as_slice() {
            [first, second, ..] => first.value - second.value,
            _ => 0.0,
        }
    }

    /// Returns the longest label, used to reserve the axis width.
    ///
    /// Ties keep the earliest (highest) label; an axis without ticks yields `""`.
    pub fn longest_label(&self) -> &str {
        let mut longest = "";
        for tick in &self.ticks {
            if tick.label.len() > longest.len() {
                longest = &tick.label;
            }
        }
        longest
    }
}

/// Render-ready output of [`BarChartSpec::layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct BarChartLayout {
    /// Padded range of the data alone.
    pub data_range: Range,
    /// Domain used for geometry: the data range widened to the outer ticks.
    pub domain: Range,
    /// Quantitative axis, present when an axis or gridlines are shown.
    pub axis: Option<AxisLayout>,
    /// Bar geometry, padding bars included.
    pub bars: Vec<BarLayout>,
    /// Whether any bar has a category axis caption.
    pub has_axis_labels: bool,
    /// Whether the quantitative axis labels should be drawn.
    pub show_quant_axis: bool,
    /// Whether gridlines should be drawn.
    pub show_grid_lines: bool,
}

impl BarChartLayout {
    /// Returns the tick values, highest first (empty without an axis).
    pub fn tick_values(&self) -> Vec<f64> {
        self.axis.as_ref().map(AxisLayout::values).unwrap_or_default()
    }

    /// Returns the formatted tick labels, highest first (empty without an axis).
    pub fn tick_labels(&self) -> Vec<&str> {
        self.axis.as_ref().map(AxisLayout::labels).unwrap_or_default()
    }

    /// Returns a band scale with one column per laid-out bar.
    pub fn band(&self) -> ScaleBand {
        ScaleBand::new(self.bars.len())
    }

    /// Returns the full-height column of each bar inside `plot`.
    pub fn column_rects(&self, plot: Rect, band: &ScaleBand) -> Vec<Rect> {
        (0..self.bars.len()).map(|i| band.column(plot, i)).collect()
    }

    /// Returns every chunk placed inside `plot`, tagged with its bar index.
    pub fn chunk_rects(&self, plot: Rect, band: &ScaleBand) -> Vec<(usize, Rect)> {
        self.bars
            .iter()
            .enumerate()
            .flat_map(|(i, layout)| {
                let column = band.column(plot, i);
                layout.chunks.iter().map(move |c| (i, c.rect_in(column)))
            })
            .collect()
    }

    /// Returns the y coordinate of each tick inside `plot`, highest tick first.
    pub fn tick_positions(&self, plot: Rect) -> Vec<f64> {
        let h = plot.height();
        self.axis
            .iter()
            .flat_map(|a| a.ticks.iter())
            .map(|t| plot.y0 + h * t.percent_top / 100.0)
            .collect()
    }
}
