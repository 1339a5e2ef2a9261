//! Render configuration object + fluent builder.

use crate::core::error::ConfigError;

/// How the bin layout is pinned down; the other dimension is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binning {
    Size(f64),
    Count(usize),
}

/// Parameters handed to `Histogram::render`.
///
/// Fields are public so callers can build one by hand; `render` validates
/// them through [`RenderConfig::binning`] either way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderConfig {
    pub bin_size: Option<f64>,
    pub bin_count: Option<usize>,
    /// Character budget for the longest bar.
    pub width: usize,
    /// Lower bound on characters per count; `None` is unbounded.
    pub min_scale: Option<f64>,
    /// Upper bound on characters per count; `None` is unbounded.
    pub max_scale: Option<f64>,
}

impl RenderConfig {
    #[inline]
    pub fn builder(width: usize) -> RenderConfigBuilder {
        RenderConfigBuilder::new(width)
    }

    /// Check the whole configuration and return the binning to use.
    pub fn binning(&self) -> Result<Binning, ConfigError> {
        let (low, high) = self.scale_bounds()?;
        if low > high {
            return Err(ConfigError::InvalidScaleRange { low, high });
        }

        let size = self.bin_size.filter(|s| *s > 0.0 && s.is_finite());
        let count = self.bin_count.filter(|c| *c > 0);
        match (size, count) {
            (Some(size), None) => Ok(Binning::Size(size)),
            (None, Some(count)) => Ok(Binning::Count(count)),
            (Some(size), Some(count)) => Err(ConfigError::ConflictingBinning { size, count }),
            (None, None) => Err(ConfigError::MissingBinning),
        }
    }

    /// `(min_scale, max_scale)` with unset bounds widened to -inf / +inf.
    /// A bound that is set must be finite.
    pub fn scale_bounds(&self) -> Result<(f64, f64), ConfigError> {
        if let Some(v) = self.min_scale.filter(|v| !v.is_finite()) {
            return Err(ConfigError::InvalidScale {
                field: "min_scale",
                value: v,
            });
        }
        if let Some(v) = self.max_scale.filter(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::InvalidScale {
                field: "max_scale",
                value: v,
            });
        }
        Ok((
            self.min_scale.unwrap_or(f64::NEG_INFINITY),
            self.max_scale.unwrap_or(f64::INFINITY),
        ))
    }
}

/// Fluent builder; `build` runs the same validation as `render`.
#[derive(Debug)]
pub struct RenderConfigBuilder {
    cfg: RenderConfig,
}

impl RenderConfigBuilder {
    pub(crate) fn new(width: usize) -> Self {
        Self {
            cfg: RenderConfig {
                width,
                ..RenderConfig::default()
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn bin_size(mut self, size: f64) -> Self {
        self.cfg.bin_size = Some(size);
        self
    }
    #[inline]
    #[must_use]
    pub fn bin_count(mut self, count: usize) -> Self {
        self.cfg.bin_count = Some(count);
        self
    }
    #[inline]
    #[must_use]
    pub fn min_scale(mut self, v: f64) -> Self {
        self.cfg.min_scale = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_scale(mut self, v: f64) -> Self {
        self.cfg.max_scale = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn scale_range(mut self, r: std::ops::RangeInclusive<f64>) -> Self {
        self.cfg.min_scale = Some(*r.start());
        self.cfg.max_scale = Some(*r.end());
        self
    }
    #[inline]
    #[must_use]
    pub fn min_scale_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.cfg.min_scale = v;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn max_scale_opt(mut self, v: Option<f64>) -> Self {
        if v.is_some() {
            self.cfg.max_scale = v;
        }
        self
    }

    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        self.cfg.binning()?;
        Ok(self.cfg)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<RenderConfigBuilder> for Result<RenderConfig, ConfigError> {
    fn from(b: RenderConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_or_count_required() {
        assert_eq!(
            RenderConfig::default().binning(),
            Err(ConfigError::MissingBinning)
        );
        let zeroes = RenderConfig {
            bin_size: Some(0.0),
            bin_count: Some(0),
            ..RenderConfig::default()
        };
        assert_eq!(zeroes.binning(), Err(ConfigError::MissingBinning));
    }

    #[test]
    fn both_positive_conflict() {
        let err = RenderConfig::builder(20)
            .bin_size(7.0)
            .bin_count(3)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ConflictingBinning { count: 3, .. }));
    }

    #[test]
    fn non_positive_side_is_ignored() {
        let cfg = RenderConfig {
            bin_size: Some(-1.0),
            bin_count: Some(4),
            ..RenderConfig::default()
        };
        assert_eq!(cfg.binning(), Ok(Binning::Count(4)));
    }

    #[test]
    fn unset_scale_bounds_are_unbounded() {
        let cfg = RenderConfig::builder(20).bin_size(1.0).build().unwrap();
        assert_eq!(
            cfg.scale_bounds(),
            Ok((f64::NEG_INFINITY, f64::INFINITY))
        );
    }

    #[test]
    fn inverted_scale_range() {
        let err = RenderConfig::builder(20)
            .bin_size(1.0)
            .scale_range(2.0..=1.0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidScaleRange { low: 2.0, high: 1.0 });
    }

    #[test]
    fn negative_max_scale() {
        let err = RenderConfig::builder(20)
            .bin_count(2)
            .max_scale(-1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScale { field: "max_scale", .. }));
    }

    #[test]
    fn infinite_scale_bounds_are_rejected() {
        let err = RenderConfig::builder(20)
            .bin_size(1.0)
            .min_scale(f64::INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScale { field: "min_scale", .. }));

        let err = RenderConfig::builder(20)
            .bin_size(1.0)
            .max_scale(f64::INFINITY)
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidScale { field: "max_scale", .. }));

        let cfg = RenderConfig {
            bin_count: Some(2),
            min_scale: Some(f64::NEG_INFINITY),
            ..RenderConfig::default()
        };
        assert!(cfg.binning().is_err());
    }
}
