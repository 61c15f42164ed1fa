// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors.

/// A [`BarChartSpec`](crate::BarChartSpec) option outside its valid range.
///
/// Layout never fails on data; only configuration is checked.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ChartConfigError {
    /// The minimum bar height is negative, not finite, or taller than the bar floor.
    #[error("minimum bar height must be a percentage in [0, 95], got {0}")]
    InvalidMinBarHeight(f64),
    /// The tick cap leaves no room for a single tick.
    #[error("axis tick cap must allow at least one tick")]
    ZeroTickCap,
}
