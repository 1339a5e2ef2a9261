//! Category-keyed sample store and its render entry point.
//!
//! Samples are append-only. Everything is indexed by the ordinal the
//! registry hands out, so insertion is one hash lookup plus a push.
//!
//! Samples for a category that was not registered are dropped without an
//! error. Callers feeding unfiltered item streams rely on this; keep it.

use std::{fmt::Display, hash::Hash};

use crate::{
    core::{
        category::Categories,
        config::{Binning, RenderConfig},
        constants::MAX_BAR_GLYPHS,
        error::HistogramError,
        sample::Event,
    },
    render::{
        aggregate::CountTable,
        bar::{bar_text, glyph_runs, scale},
        binning::BinLayout,
    },
};

/// One rendered bin.
#[derive(Clone, Debug, PartialEq)]
pub struct BinRow {
    pub low: f64,
    /// Inclusive upper label, `low + bin_size - 1`.
    pub high: f64,
    pub value: i64,
    pub bar: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderResult {
    pub base: f64,
    pub bin_size: f64,
    pub bin_count: usize,
    /// Characters per count actually used for the bars.
    pub scale: f64,
    pub rows: Vec<BinRow>,
}

#[derive(Debug, Clone)]
pub struct Histogram<T> {
    categories: Categories<T>,
    points: Vec<Vec<f64>>,
    intervals: Vec<Vec<(f64, f64)>>,
}

impl<T> Histogram<T>
where
    T: Copy + Eq + Hash + Display,
{
    pub fn new(categories: impl IntoIterator<Item = T>) -> Self {
        let categories = Categories::new(categories);
        let n = categories.len();
        Self {
            categories,
            points: vec![Vec::new(); n],
            intervals: vec![Vec::new(); n],
        }
    }

    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[T] {
        self.categories.tokens()
    }

    /// Record a point. Unknown categories and non-finite values are dropped.
    pub fn add_point(&mut self, category: T, value: f64) {
        match self.categories.ordinal(category) {
            Some(i) if value.is_finite() => self.points[i].push(value),
            _ => log::trace!("dropped point {value} for `{category}`"),
        }
    }

    /// Record an interval, swapping the ends if given reversed. Unknown
    /// categories and non-finite ends are dropped.
    pub fn add_interval(&mut self, category: T, start: f64, end: f64) {
        match self.categories.ordinal(category) {
            Some(i) if start.is_finite() && end.is_finite() => {
                self.intervals[i].push((start.min(end), start.max(end)));
            }
            _ => log::trace!("dropped interval [{start}, {end}] for `{category}`"),
        }
    }

    pub fn add_event(&mut self, event: Event<T>) {
        match event {
            Event::Point { category, value } => self.add_point(category, value),
            Event::Interval {
                category,
                start,
                end,
            } => self.add_interval(category, start, end),
        }
    }

    #[inline]
    #[must_use]
    pub fn points(&self, category: T) -> &[f64] {
        match self.categories.ordinal(category) {
            Some(i) => &self.points[i],
            None => &[],
        }
    }

    #[inline]
    #[must_use]
    pub fn intervals(&self, category: T) -> &[(f64, f64)] {
        match self.categories.ordinal(category) {
            Some(i) => &self.intervals[i],
            None => &[],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Vec::is_empty) && self.intervals.iter().all(Vec::is_empty)
    }

    /// Smallest and largest value over every point and interval end.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let values = self
            .points
            .iter()
            .flatten()
            .copied()
            .chain(self.intervals.iter().flatten().flat_map(|&(s, e)| [s, e]));

        values.fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((v.min(lo), v.max(hi))),
        })
    }

    pub fn layout(&self, binning: Binning) -> Result<BinLayout, HistogramError> {
        let (min, max) = self.value_range().ok_or(HistogramError::EmptyDataset)?;
        BinLayout::derive(min, max, binning)
    }

    #[must_use]
    pub fn aggregate(&self, layout: &BinLayout) -> CountTable {
        let mut table = CountTable::new(layout.bin_count, self.categories.len());
        for (ordinal, values) in self.points.iter().enumerate() {
            for &v in values {
                table.add_point(layout, ordinal, v);
            }
        }
        for (ordinal, spans) in self.intervals.iter().enumerate() {
            for &(s, e) in spans {
                table.add_interval(layout, ordinal, s, e);
            }
        }
        table
    }

    /// Bin, count and draw every sample.
    ///
    /// `positive` and `negative` select the categories summed into (resp.
    /// subtracted from) each row's value. Unknown tokens contribute zero.
    pub fn render(
        &self,
        config: &RenderConfig,
        positive: &[T],
        negative: &[T],
    ) -> Result<RenderResult, HistogramError> {
        let binning = config.binning()?;
        let bounds = config.scale_bounds()?;
        let layout = self.layout(binning)?;
        let table = self.aggregate(&layout);

        let max_total = table.max_total();
        let scale = scale(config.width, max_total, bounds);
        log::debug!("max bin total {max_total}, scale {scale} chars/count");

        let positive = self.categories.mask(positive);
        let negative = self.categories.mask(negative);
        let glyphs = self.categories.tokens();

        let rows = (0..layout.bin_count)
            .map(|bin| {
                #[allow(clippy::cast_precision_loss)]
                let (total, limit) = (table.total(bin) as f64, MAX_BAR_GLYPHS as f64);
                let length = total * scale;
                // zero totals draw nothing, even at an infinite scale
                if total > 0.0 && (length.is_nan() || length > limit) {
                    return Err(HistogramError::BarTooLong {
                        bin,
                        glyphs: length,
                        limit: MAX_BAR_GLYPHS,
                    });
                }
                let low = layout.low(bin);
                let runs = glyph_runs(table.row(bin), scale);
                Ok(BinRow {
                    low,
                    high: low + layout.bin_size - 1.0,
                    value: table.signed_value(bin, &positive, &negative),
                    bar: bar_text(glyphs, &runs),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RenderResult {
            base: layout.base,
            bin_size: layout.bin_size,
            bin_count: layout.bin_count,
            scale,
            rows,
        })
    }
}
