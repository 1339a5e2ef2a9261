//! Count-to-glyph conversion.
//!
//! ### Scale
//! `width / max_total` characters per count, clamped into the configured
//! bounds. With no data the quotient is `+inf` and the clamp pulls it down
//! to `max_scale` (or leaves it infinite when unbounded).
//!
//! ### Error diffusion
//! Each category's exact length `count * scale` is rounded (half away from
//! zero) after adding the remainder carried from the categories before it
//! in the same bar. The carry stays within `[-0.5, 0.5]`, so the whole bar
//! is never more than half a glyph off `total * scale`. Runs are capped at
//! `MAX_BAR_GLYPHS`; `Histogram::render` refuses bars longer than that.

use std::fmt::{Display, Write};

use crate::core::constants::MAX_BAR_GLYPHS;

#[must_use]
pub fn scale(width: usize, max_total: u64, (min_scale, max_scale): (f64, f64)) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let raw = if max_total == 0 {
        f64::INFINITY
    } else {
        width as f64 / max_total as f64
    };
    raw.clamp(min_scale, max_scale)
}

/// Glyph run lengths for one bin, `counts` in registry order.
#[must_use]
pub fn glyph_runs(counts: &[u64], scale: f64) -> Vec<usize> {
    let mut carried = 0.0_f64;
    counts
        .iter()
        .map(|&count| {
            if count == 0 {
                return 0;
            }
            #[allow(clippy::cast_precision_loss)]
            let size = count as f64 * scale + carried;
            #[allow(clippy::cast_precision_loss)]
            let rounded = size.round().clamp(0.0, MAX_BAR_GLYPHS as f64);
            carried = size - rounded;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let run = rounded as usize;
            run
        })
        .collect()
}

/// Concatenate `runs[i]` copies of `glyphs[i]`.
#[must_use]
pub fn bar_text<T: Display>(glyphs: &[T], runs: &[usize]) -> String {
    let mut bar = String::with_capacity(runs.iter().sum());
    for (glyph, &n) in glyphs.iter().zip(runs) {
        for _ in 0..n {
            // writing into a String cannot fail
            let _ = write!(bar, "{glyph}");
        }
    }
    bar
}
