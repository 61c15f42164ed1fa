// Copyright 2025 the PayViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar records.

extern crate alloc;

use alloc::string::String;

/// A single data point to visualize.
///
/// Bars are plain data: callers build a fresh sequence for every layout pass, and the only
/// identity a bar has across passes is its position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bar {
    /// Data value represented by the bar. May be negative.
    pub value: f64,
    /// Text rendered near the bar (above it for non-negative values, below otherwise).
    pub label: Option<String>,
    /// Caption shown on the category axis below the bar.
    pub axis_label: Option<String>,
    /// Opaque styling tag for the presentation layer. Layout ignores it.
    pub group_key: Option<String>,
    /// Marks a synthetic padding bar, rendered at a fixed minimum height.
    pub is_empty: bool,
}

impl Bar {
    /// Creates a bar for `value` with no labels.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    /// Creates a synthetic padding bar.
    ///
    /// Padding bars carry `value = 1` so that they never read as "zero"; layout only ever
    /// draws them at the minimum height.
    pub fn empty() -> Self {
        Self {
            value: 1.0,
            is_empty: true,
            ..Self::default()
        }
    }

    /// Sets the value label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the category axis caption.
    pub fn with_axis_label(mut self, axis_label: impl Into<String>) -> Self {
        self.axis_label = Some(axis_label.into());
        self
    }

    /// Sets the styling tag.
    pub fn with_group_key(mut self, group_key: impl Into<String>) -> Self {
        self.group_key = Some(group_key.into());
        self
    }

    /// Returns `true` if the bar carries a non-empty value label.
    pub fn has_label(&self) -> bool {
        self.label.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Returns `true` if the bar carries a non-empty category axis caption.
    pub fn has_axis_label(&self) -> bool {
        self.axis_label.as_deref().is_some_and(|l| !l.is_empty())
    }
}

impl From<f64> for Bar {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
