//! Geometry helpers: label widths + terminal size plumbing.

use std::fmt::Write;

use terminal_size::{Width, terminal_size};

use crate::core::constants::{
    BORDER_WIDTH, COLUMN_GUTTER, DECIMAL_PRECISION, FALLBACK_TERMINAL_WIDTH, MIN_BAR_WIDTH,
};

/// Current terminal width (80 column fallback).
#[inline]
#[must_use]
pub fn terminal_width() -> Width {
    terminal_size().map_or(Width(FALLBACK_TERMINAL_WIDTH), |(w, _)| w)
}

/// Characters left for the bar once borders and the `low - high value`
/// columns are laid out.
#[inline]
#[must_use]
pub fn bar_width(Width(w): Width, label_width: usize, value_width: usize) -> usize {
    // "low" " - " "high" gutter "value" gutter
    let used = BORDER_WIDTH + 2 * label_width + 3 + value_width + 2 * COLUMN_GUTTER + 2;
    usize::from(w).saturating_sub(used).max(MIN_BAR_WIDTH)
}

/// Range label: whole numbers print bare, anything else with
/// `DECIMAL_PRECISION` decimals.
#[must_use]
pub fn format_label(v: f64) -> String {
    let mut s = String::new();
    if v.fract() == 0.0 {
        let _ = write!(s, "{v:.0}");
    } else {
        let _ = write!(s, "{:.*}", DECIMAL_PRECISION, v);
    }
    s
}

/// How wide will the range labels be for `[low, high]`?
#[inline]
#[must_use]
pub fn label_width(low: f64, high: f64) -> usize {
    format_label(low).len().max(format_label(high).len())
}
