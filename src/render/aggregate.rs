//! Dense `bin x category` count table.

use crate::render::binning::BinLayout;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountTable {
    categories: usize,
    /// Row-major, `bins * categories` cells.
    counts: Vec<u64>,
    totals: Vec<u64>,
}

impl CountTable {
    #[must_use]
    pub fn new(bins: usize, categories: usize) -> Self {
        Self {
            categories,
            counts: vec![0; bins * categories],
            totals: vec![0; bins],
        }
    }

    /// Count one point in the bin that holds `value`.
    #[inline]
    pub fn add_point(&mut self, layout: &BinLayout, ordinal: usize, value: f64) {
        self.bump(layout.index(value), ordinal);
    }

    /// Count an interval in every bin of `[start_bin, end_bin)`. An interval
    /// that starts and ends in the same bin counts nowhere.
    #[inline]
    pub fn add_interval(&mut self, layout: &BinLayout, ordinal: usize, start: f64, end: f64) {
        for bin in layout.edge(start)..layout.edge(end) {
            self.bump(bin, ordinal);
        }
    }

    #[inline]
    fn bump(&mut self, bin: usize, ordinal: usize) {
        self.counts[bin * self.categories + ordinal] += 1;
        self.totals[bin] += 1;
    }

    #[inline]
    #[must_use]
    pub fn bins(&self) -> usize {
        self.totals.len()
    }

    /// Per-category counts of one bin, in registry order.
    #[inline]
    #[must_use]
    pub fn row(&self, bin: usize) -> &[u64] {
        let start = bin * self.categories;
        &self.counts[start..start + self.categories]
    }

    #[inline]
    #[must_use]
    pub fn count(&self, bin: usize, ordinal: usize) -> u64 {
        self.counts[bin * self.categories + ordinal]
    }

    #[inline]
    #[must_use]
    pub fn total(&self, bin: usize) -> u64 {
        self.totals[bin]
    }

    /// Largest per-bin total, 0 when every bin is empty.
    #[must_use]
    pub fn max_total(&self) -> u64 {
        self.totals.iter().copied().max().unwrap_or(0)
    }

    /// Signed sum over `positive` minus sum over `negative` (ordinal masks).
    #[must_use]
    pub fn signed_value(&self, bin: usize, positive: &[bool], negative: &[bool]) -> i64 {
        let mut value = 0i64;
        for (ordinal, &c) in self.row(bin).iter().enumerate() {
            let c = i64::try_from(c).unwrap_or(i64::MAX);
            if positive[ordinal] {
                value = value.saturating_add(c);
            }
            if negative[ordinal] {
                value = value.saturating_sub(c);
            }
        }
        value
    }
}
