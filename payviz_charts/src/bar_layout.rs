// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar geometry: percent heights, stacked chunks and padding bars.
//!
//! All geometry is expressed in percent of the chart body height, measured from the top, so
//! the presentation layer can place bars without knowing the domain.
//!
//! A run of rising bars is drawn as strata: each bar is split into the increase over its
//! predecessor (on top) followed by the predecessor's own strata. A pay history with three
//! raises in a row therefore shows every raise as its own band.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::bar::Bar;
use crate::range::Range;

/// Percent-from-top of the baseline used for padding bars and minimum-height bars.
pub const EMPTY_BAR_FLOOR: f64 = 95.0;

/// Height of a padding bar when no minimum bar height is configured.
pub const DEFAULT_EMPTY_BAR_HEIGHT: f64 = 1.0;

/// Where synthetic padding bars go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MinBarLoc {
    /// Before the real bars.
    #[default]
    Left,
    /// After the real bars.
    Right,
}

/// Options for [`layout_bars`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BarLayoutOptions {
    /// Minimum rendered height, in percent of the chart body.
    pub min_bar_height: Option<f64>,
    /// Minimum number of bars; missing bars are filled with padding bars.
    pub min_bars: Option<usize>,
    /// Side on which padding bars are added.
    pub min_bar_loc: MinBarLoc,
    /// Whether to compute the change relative to the previous bar.
    pub show_delta_tooltip: bool,
}

impl BarLayoutOptions {
    /// Creates options with no minimums and no tooltips.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum bar height (percent).
    pub fn with_min_bar_height(mut self, height: f64) -> Self {
        self.min_bar_height = Some(height);
        self
    }

    /// Sets the minimum bar count.
    pub fn with_min_bars(mut self, count: usize) -> Self {
        self.min_bars = Some(count);
        self
    }

    /// Sets where padding bars are placed.
    pub fn with_min_bar_loc(mut self, loc: MinBarLoc) -> Self {
        self.min_bar_loc = loc;
        self
    }

    /// Enables or disables delta tooltips.
    pub fn with_delta_tooltip(mut self, on: bool) -> Self {
        self.show_delta_tooltip = on;
        self
    }

    fn effective_min_height(&self) -> Option<f64> {
        self.min_bar_height.filter(|h| *h > 0.0)
    }
}

/// One rendered segment of a bar, in percent of the chart body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarChunk {
    /// Segment height.
    pub percent_height: f64,
    /// Distance from the top of the chart body to the top of the segment.
    pub percent_top: f64,
}

impl BarChunk {
    /// Creates a chunk.
    pub fn new(percent_height: f64, percent_top: f64) -> Self {
        Self {
            percent_height,
            percent_top,
        }
    }

    /// Distance from the top of the chart body to the bottom of the segment.
    pub fn percent_bottom(&self) -> f64 {
        self.percent_top + self.percent_height
    }

    /// Places the chunk inside `column`, whose top edge is 0% and bottom edge 100%.
    pub fn rect_in(&self, column: Rect) -> Rect {
        let h = column.height();
        Rect::new(
            column.x0,
            column.y0 + h * self.percent_top / 100.0,
            column.x1,
            column.y0 + h * self.percent_bottom() / 100.0,
        )
    }
}

/// Chunk list for one bar, top layer first.
pub type BarChunks = SmallVec<[BarChunk; 4]>;

/// Change of a bar relative to its predecessor.
#[derive(Clone, Debug, PartialEq)]
pub struct BarDelta {
    /// Percent change.
    pub percent: f64,
    /// Display string, e.g. `+4.5%`.
    pub label: String,
}

/// Computed geometry for one bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    /// The bar this geometry belongs to (padding bars included).
    pub bar: Bar,
    /// Height of the whole bar.
    ///
    /// Padding bars report the height of their floor chunk.
    pub percent_height: f64,
    /// Top of the whole bar.
    ///
    /// Padding bars report the top of their floor chunk.
    pub percent_top: f64,
    /// Rendered segments, top layer first.
    pub chunks: BarChunks,
    /// Anchor for the value label, if the bar has one.
    ///
    /// Labels sit above non-negative bars and below negative ones.
    pub label_top: Option<f64>,
    /// Change from the previous bar, when tooltips are enabled and defined.
    pub delta: Option<BarDelta>,
}

/// Returns `bars` padded with [`Bar::empty`] up to `min_bars`.
pub fn pad_bars(bars: &[Bar], min_bars: Option<usize>, loc: MinBarLoc) -> Vec<Bar> {
    let missing = min_bars.map_or(0, |min| min.saturating_sub(bars.len()));
    let padding = core::iter::repeat_with(Bar::empty).take(missing);

    let mut out = Vec::with_capacity(bars.len() + missing);
    match loc {
        MinBarLoc::Left => {
            out.extend(padding);
            out.extend_from_slice(bars);
        }
        MinBarLoc::Right => {
            out.extend_from_slice(bars);
            out.extend(padding);
        }
    }
    out
}

fn percent_height(bar: &Bar, span: f64) -> f64 {
    bar.value.abs() / span * 100.0
}

// A bar stacks on its predecessor while the run keeps rising over real, non-negative bars.
fn stacks_on(bar: &Bar, prev: &Bar) -> bool {
    !prev.is_empty && bar.value >= prev.value && prev.value >= 0.0
}

/// Computes the chunks for `bars[index]` against `range`.
///
/// Walking back from `index`, each bar in a rising run contributes its increase over its
/// predecessor; the walk ends at the first bar that does not stack, which contributes its full
/// height. Chunks are laid out top to bottom without overlap.
///
/// Padding bars, and bars whose chunks add up to less than `min_bar_height`, become a single
/// chunk resting on [`EMPTY_BAR_FLOOR`].
pub fn bar_chunks(
    bars: &[Bar],
    index: usize,
    range: Range,
    min_bar_height: Option<f64>,
) -> BarChunks {
    let min_bar_height = min_bar_height.filter(|h| *h > 0.0);
    let mut chunks = BarChunks::new();
    let Some(bar) = bars.get(index) else {
        return chunks;
    };

    if bar.is_empty {
        let height = min_bar_height.unwrap_or(DEFAULT_EMPTY_BAR_HEIGHT);
        chunks.push(BarChunk::new(height, EMPTY_BAR_FLOOR - height));
        return chunks;
    }

    let span = range.layout_span();
    let mut top = range.percent_from_top(bar.value.max(0.0));
    for i in (0..=index).rev() {
        let current = &bars[i];
        let below = i
            .checked_sub(1)
            .map(|p| &bars[p])
            .filter(|prev| stacks_on(current, prev));

        let mut height = percent_height(current, span);
        if let Some(prev) = below {
            height -= percent_height(prev, span);
        }
        chunks.push(BarChunk::new(height, top));
        top += height;

        if below.is_none() {
            break;
        }
    }

    if let Some(min) = min_bar_height {
        let total: f64 = chunks
            .iter()
            .map(|c| if c.percent_height.is_nan() { 0.0 } else { c.percent_height })
            .sum();
        if total < min {
            chunks.clear();
            chunks.push(BarChunk::new(min, EMPTY_BAR_FLOOR - min));
        }
    }
    chunks
}

/// Percent change from `prev` to `current`.
///
/// Returns `None` for padding bars, a zero predecessor, and non-finite results.
pub fn delta_percent(prev: &Bar, current: &Bar) -> Option<f64> {
    if prev.is_empty || current.is_empty || prev.value == 0.0 {
        return None;
    }
    let pct = (current.value - prev.value) / prev.value * 100.0;
    pct.is_finite().then_some(pct)
}

/// Formats a percent change with a sign for increases and one decimal, e.g. `+4.5%`.
pub fn format_delta(percent: f64) -> String {
    let sign = if percent > 0.0 { "+" } else { "" };
    format!("{sign}{percent:.1}%")
}

/// Lays out `bars` against `range`.
///
/// Padding bars requested by `options` are inserted first, so the result can be longer than
/// `bars`.
pub fn layout_bars(bars: &[Bar], range: Range, options: &BarLayoutOptions) -> Vec<BarLayout> {
    let bars = pad_bars(bars, options.min_bars, options.min_bar_loc);
    let span = range.layout_span();
    let min_bar_height = options.effective_min_height();

    bars.iter()
        .enumerate()
        .map(|(index, bar)| {
            let chunks = bar_chunks(&bars, index, range, min_bar_height);
            let (percent_height, percent_top) = match chunks.as_slice() {
                [floor] if bar.is_empty => (floor.percent_height, floor.percent_top),
                _ => (
                    percent_height(bar, span),
                    range.percent_from_top(bar.value.max(0.0)),
                ),
            };
            let label_top = bar.has_label().then(|| {
                if bar.value < 0.0 {
                    percent_top
                } else {
                    percent_top - percent_height
                }
            });
            let delta = if options.show_delta_tooltip && index > 0 {
                delta_percent(&bars[index - 1], bar).map(|percent| BarDelta {
                    percent,
                    label: format_delta(percent),
                })
            } else {
                None
            };

            BarLayout {
                bar: bar.clone(),
                percent_height,
                percent_top,
                chunks,
                label_top,
                delta,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    const EPS: f64 = 1e-9;

    fn bars(values: &[f64]) -> Vec<Bar> {
        values.iter().copied().map(Bar::new).collect()
    }

    fn chunk_counts(layouts: &[BarLayout]) -> Vec<usize> {
        layouts.iter().map(|l| l.chunks.len()).collect()
    }

    #[test]
    fn rising_bars_stack_into_strata() {
        let layouts = layout_bars(
            &bars(&[1.0, 2.0, 3.0]),
            Range::new(0.0, 4.0),
            &BarLayoutOptions::new(),
        );
        assert_eq!(chunk_counts(&layouts), [1, 2, 3]);

        // Bar 3 is split into the +1 over bar 2, the +1 over bar 1, and bar 1 itself.
        let third = &layouts[2].chunks;
        for chunk in third {
            assert!((chunk.percent_height - 25.0).abs() < EPS, "{third:?}");
        }
        assert!((third[0].percent_top - 25.0).abs() < EPS, "{third:?}");
        assert!((third[1].percent_top - 50.0).abs() < EPS, "{third:?}");
        assert!((third[2].percent_top - 75.0).abs() < EPS, "{third:?}");
    }

    #[test]
    fn falling_bar_breaks_the_run() {
        let layouts = layout_bars(
            &bars(&[1.0, 3.0, 2.0]),
            Range::new(0.0, 4.0),
            &BarLayoutOptions::new(),
        );
        assert_eq!(chunk_counts(&layouts), [1, 2, 1]);
        let last = layouts[2].chunks[0];
        assert!((last.percent_height - 50.0).abs() < EPS, "{last:?}");
        assert!((last.percent_top - 50.0).abs() < EPS, "{last:?}");
    }

    #[test]
    fn chunks_tile_the_bar_without_overlap() {
        let range = Range::new(-0.5, 10.5);
        let layouts = layout_bars(&bars(&[2.0, 4.0, 7.0, 9.5]), range, &BarLayoutOptions::new());
        for layout in &layouts {
            let total: f64 = layout.chunks.iter().map(|c| c.percent_height).sum();
            assert!((total - layout.percent_height).abs() < EPS, "{layout:?}");
            for pair in layout.chunks.windows(2) {
                assert!((pair[0].percent_bottom() - pair[1].percent_top).abs() < EPS, "{layout:?}");
            }
            for c in &layout.chunks {
                assert!(c.percent_top >= 0.0 && c.percent_bottom() <= 100.0 + EPS, "{c:?}");
            }
        }
    }

    #[test]
    fn negative_predecessor_does_not_stack() {
        let layouts = layout_bars(
            &bars(&[-2.0, -1.0, 3.0]),
            Range::new(-3.0, 4.0),
            &BarLayoutOptions::new(),
        );
        assert_eq!(chunk_counts(&layouts), [1, 1, 1]);
    }

    #[test]
    fn pads_on_the_left_by_default() {
        let options = BarLayoutOptions::new().with_min_bars(2);
        let layouts = layout_bars(&bars(&[1.0]), Range::new(0.0, 1.0), &options);
        assert_eq!(layouts.len(), 2);
        assert!(layouts[0].bar.is_empty);
        assert!(!layouts[1].bar.is_empty);
        assert_eq!(layouts[1].chunks.len(), 1);
    }

    #[test]
    fn pads_on_the_right_when_asked() {
        let options = BarLayoutOptions::new()
            .with_min_bars(3)
            .with_min_bar_loc(MinBarLoc::Right);
        let layouts = layout_bars(&bars(&[1.0]), Range::new(0.0, 1.0), &options);
        assert_eq!(layouts.len(), 3);
        assert!(!layouts[0].bar.is_empty);
        assert!(layouts[1].bar.is_empty);
        assert!(layouts[2].bar.is_empty);
    }

    #[test]
    fn padding_is_skipped_when_enough_bars() {
        let padded = pad_bars(&bars(&[1.0, 2.0, 3.0]), Some(2), MinBarLoc::Left);
        assert_eq!(padded.len(), 3);
        assert!(padded.iter().all(|b| !b.is_empty));
    }

    #[test]
    fn padding_bar_geometry_matches_its_floor_chunk() {
        let options = BarLayoutOptions::new().with_min_bars(2);
        let layouts = layout_bars(&bars(&[2.0]), Range::new(0.0, 2.0), &options);
        let padding = &layouts[0];
        assert!(padding.bar.is_empty);
        assert_eq!(padding.percent_height, DEFAULT_EMPTY_BAR_HEIGHT);
        assert_eq!(padding.percent_top, EMPTY_BAR_FLOOR - DEFAULT_EMPTY_BAR_HEIGHT);
        assert_eq!(padding.chunks.as_slice(), &[BarChunk::new(1.0, 94.0)]);

        let options = options.with_min_bar_height(4.0);
        let layouts = layout_bars(&bars(&[2.0]), Range::new(0.0, 2.0), &options);
        assert_eq!(layouts[0].percent_height, 4.0);
        assert_eq!(layouts[0].percent_top, 91.0);
        assert!((layouts[1].percent_height - 100.0).abs() < EPS);
    }

    #[test]
    fn empty_bars_rest_on_the_floor() {
        let chunks = bar_chunks(&[Bar::empty()], 0, Range::new(0.0, 1.0), None);
        assert_eq!(chunks.as_slice(), &[BarChunk::new(1.0, 94.0)]);

        let chunks = bar_chunks(&[Bar::empty()], 0, Range::new(0.0, 1.0), Some(3.0));
        assert_eq!(chunks.as_slice(), &[BarChunk::new(3.0, 92.0)]);
    }

    #[test]
    fn empty_predecessor_does_not_stack() {
        let options = BarLayoutOptions::new().with_min_bars(3);
        let layouts = layout_bars(&bars(&[1.0, 2.0]), Range::new(0.0, 2.0), &options);
        assert_eq!(chunk_counts(&layouts), [1, 1, 2]);
    }

    #[test]
    fn short_bars_are_raised_to_min_height() {
        let options = BarLayoutOptions::new().with_min_bar_height(2.0);
        let layouts = layout_bars(&bars(&[0.01, 100.0]), Range::new(0.0, 100.0), &options);
        assert_eq!(layouts[0].chunks.as_slice(), &[BarChunk::new(2.0, 93.0)]);
        assert_eq!(layouts[1].chunks.len(), 2);
    }

    #[test]
    fn degenerate_range_uses_unit_span() {
        let chunks = bar_chunks(&[Bar::new(0.0)], 0, Range::ZERO, None);
        assert_eq!(chunks.as_slice(), &[BarChunk::new(0.0, 0.0)]);
    }

    #[test]
    fn label_anchor_follows_sign() {
        let input = vec![
            Bar::new(2.0).with_label("up"),
            Bar::new(-2.0).with_label("down"),
            Bar::new(1.0),
        ];
        let layouts = layout_bars(&input, Range::new(-4.0, 4.0), &BarLayoutOptions::new());

        let up = &layouts[0];
        assert_eq!(up.label_top, Some(up.percent_top - up.percent_height));
        let down = &layouts[1];
        assert_eq!(down.label_top, Some(down.percent_top));
        assert_eq!(layouts[2].label_top, None);
    }

    #[test]
    fn delta_tooltips() {
        let options = BarLayoutOptions::new().with_delta_tooltip(true).with_min_bars(4);
        let layouts = layout_bars(&bars(&[100.0, 105.0, 100.0]), Range::new(0.0, 110.0), &options);

        assert_eq!(layouts[0].delta, None, "padding bar");
        assert_eq!(layouts[1].delta, None, "predecessor is padding");
        assert_eq!(layouts[2].delta.as_ref().map(|d| d.label.as_str()), Some("+5.0%"));
        assert_eq!(layouts[3].delta.as_ref().map(|d| d.label.as_str()), Some("-4.8%"));
    }

    #[test]
    fn delta_from_zero_is_omitted() {
        assert_eq!(delta_percent(&Bar::new(0.0), &Bar::new(5.0)), None);
        assert_eq!(delta_percent(&Bar::new(4.0), &Bar::new(5.0)), Some(25.0));
        assert_eq!(format_delta(0.0), "0.0%");
    }

    #[test]
    fn deltas_are_off_by_default() {
        let layouts = layout_bars(
            &bars(&[1.0, 2.0]),
            Range::new(0.0, 2.0),
            &BarLayoutOptions::new(),
        );
        assert!(layouts.iter().all(|l| l.delta.is_none()));
    }

    #[test]
    fn chunk_projects_into_column() {
        let column = Rect::new(10.0, 0.0, 20.0, 200.0);
        let r = BarChunk::new(25.0, 50.0).rect_in(column);
        assert_eq!(r, Rect::new(10.0, 100.0, 20.0, 150.0));
    }
}
