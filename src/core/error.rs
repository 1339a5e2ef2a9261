//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

use crate::core::sample::ParseEventError;

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("must supply positive bin width or bin count")]
    MissingBinning,
    #[error("bin width {size} and bin count {count} are mutually exclusive")]
    ConflictingBinning { size: f64, count: usize },
    #[error("min scale {low} must be <= max scale {high}")]
    InvalidScaleRange { low: f64, high: f64 },
    #[error("invalid scale bound `{field}`: {value}")]
    InvalidScale { field: &'static str, value: f64 },
}

/// Failures of a single `render` call. Insertion never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HistogramError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no samples or intervals to bin")]
    EmptyDataset,
    #[error("cannot derive bins over [{min}, {max}]: width {bin_size}, count {bin_count}")]
    DegenerateRange {
        min: f64,
        max: f64,
        bin_size: f64,
        bin_count: f64,
    },
    #[error("bar for bin {bin} would be {glyphs} glyphs long (limit {limit})")]
    BarTooLong { bin: usize, glyphs: f64, limit: usize },
}

/// Top-level error type bubbled up by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] ParseEventError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Histogram(#[from] HistogramError),
    #[error("cannot install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
