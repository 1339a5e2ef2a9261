//! Tiny LCG feeding the synthetic item source used by `demo`.

use crate::core::{
    constants::{COMPLETED, FLAGGED, OVERDUE, UNFLAGGED},
    sample::Event,
};

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    #[must_use]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.subsec_nanos());
        Self(u64::from(nanos) ^ 0x9E37_79B9_7F4A_7C15)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_possible_truncation)]
        let hi = (self.0 >> 32) as u32;
        hi
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Exponential sample with the given mean.
    #[inline]
    pub fn exp(&mut self, mean: f64) -> f64 {
        -mean * (1.0 - self.next_f64()).ln()
    }
}

/// Stream of synthetic flagged items: ages in days, roughly a third of the
/// items carrying a flag. With `spans` each flag also yields the interval
/// from when it was set to now.
pub struct ItemSource {
    rng: Lcg,
    mean_age: f64,
    due_days: f64,
    spans: bool,
    pending: Option<Event<char>>,
}

impl ItemSource {
    #[must_use]
    pub fn new(rng: Lcg, mean_age: f64, due_days: f64, spans: bool) -> Self {
        Self {
            rng,
            mean_age,
            due_days,
            spans,
            pending: None,
        }
    }
}

impl Iterator for ItemSource {
    type Item = Event<char>;

    fn next(&mut self) -> Option<Event<char>> {
        if let Some(e) = self.pending.take() {
            return Some(e);
        }

        let age = self.rng.exp(self.mean_age);
        let roll = self.rng.next_f64();
        let category = if roll < 0.66 {
            UNFLAGGED
        } else if roll < 0.83 {
            COMPLETED
        } else if age > self.due_days {
            OVERDUE
        } else {
            FLAGGED
        };

        if self.spans && category != UNFLAGGED {
            let flagged_for = self.rng.next_f64() * age;
            self.pending = Some(Event::Interval {
                category,
                start: 0.0,
                end: flagged_for,
            });
        }
        Some(Event::Point {
            category,
            value: age,
        })
    }
}
