//! Bin layout derivation.
//!
//! Given the observed value range and either a bin width or a bin count,
//! pick `base`, `bin_size` and `bin_count` so that every observed value
//! lands in `[base, base + bin_size * bin_count]`. A value on the top edge
//! is clamped into the last bin.
//!
//! * `Binning::Size(w)`  - base snaps down to a multiple of `w`
//! * `Binning::Count(n)` - base is `floor(min)`, width is a whole number

use crate::core::{config::Binning, constants::MAX_BIN_COUNT, error::HistogramError};

/// Half-open bins `[base + i * bin_size, base + (i + 1) * bin_size)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinLayout {
    pub base: f64,
    pub bin_size: f64,
    pub bin_count: usize,
}

/// `ceil(span / step)`, never below 1.
#[inline]
fn slots(span: f64, step: f64) -> f64 {
    (span / step).ceil().max(1.0)
}

impl BinLayout {
    pub fn derive(min: f64, max: f64, binning: Binning) -> Result<Self, HistogramError> {
        let degenerate = |bin_size: f64, bin_count: f64| HistogramError::DegenerateRange {
            min,
            max,
            bin_size,
            bin_count,
        };

        let (base, bin_size, raw_count) = match binning {
            Binning::Size(bin_size) => {
                let base = (min / bin_size).floor() * bin_size;
                (base, bin_size, slots(max - base, bin_size))
            }
            Binning::Count(count) => {
                let base = min.floor();
                #[allow(clippy::cast_precision_loss)]
                let count = count as f64;
                (base, slots(max - base, count), count)
            }
        };

        #[allow(clippy::cast_precision_loss)]
        let cap = MAX_BIN_COUNT as f64;
        if !base.is_finite()
            || !bin_size.is_finite()
            || bin_size <= 0.0
            || !raw_count.is_finite()
            || raw_count < 1.0
            || raw_count > cap
        {
            return Err(degenerate(bin_size, raw_count));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bin_count = raw_count as usize;
        let layout = Self {
            base,
            bin_size,
            bin_count,
        };
        log::debug!(
            "bin layout over [{min}, {max}]: base {base}, width {bin_size}, {bin_count} bins"
        );
        Ok(layout)
    }

    /// Unclamped bin index of `value`; values on a boundary go to the bin above.
    #[inline]
    #[must_use]
    pub fn position(&self, value: f64) -> f64 {
        ((value - self.base) / self.bin_size).floor()
    }

    /// Bin holding a point, clamped into `[0, bin_count)`.
    #[inline]
    #[must_use]
    pub fn index(&self, value: f64) -> usize {
        self.clamp(value, self.bin_count - 1)
    }

    /// Bin boundary index for an interval endpoint, clamped into `[0, bin_count]`.
    #[inline]
    #[must_use]
    pub fn edge(&self, value: f64) -> usize {
        self.clamp(value, self.bin_count)
    }

    #[inline]
    fn clamp(&self, value: f64, hi: usize) -> usize {
        let p = self.position(value);
        if p <= 0.0 {
            0
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let p = p as usize;
            p.min(hi)
        }
    }

    /// Lower edge of bin `i`.
    #[inline]
    #[must_use]
    pub fn low(&self, i: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let i = i as f64;
        self.base + self.bin_size * i
    }
}
