//! Public-facing crate root – re-exports + one-shot helper.
//!
//! The core is [`Histogram`]: register categories once, feed it point and
//! interval samples, then [`Histogram::render`] bins, counts and draws them
//! as proportional multi-glyph bars.
//!
//! ```
//! use flagged_histogram::{Histogram, RenderConfig};
//!
//! let mut h = Histogram::new(['#', '+', '-', '.']);
//! h.add_point('+', 1.0);
//! h.add_point('-', 2.0);
//! h.add_point('#', 10.0);
//! h.add_point('?', 4.0); // not registered: dropped
//!
//! let cfg = RenderConfig::builder(20).bin_size(7.0).build()?;
//! let out = h.render(&cfg, &['+', '-'], &[])?;
//! assert_eq!(out.rows[0].bar, "++++++++++----------");
//! assert_eq!(out.rows[0].value, 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Binning, RenderConfig, RenderConfigBuilder},
    constants::{DECIMAL_PRECISION, DEFAULT_CATEGORIES},
    error::{AppError, ConfigError, HistogramError},
    histogram::{BinRow, Histogram, RenderResult},
    sample::{Event, ParseEventError, read_events},
};

pub use crate::render::{BinLayout, CountTable, Table};

/// Convenience function: bins `events` over `config` and prints the table
/// to stdout with every category counted positive.
///
/// ```
/// use flagged_histogram::{Event, HistogramError, RenderConfig, plot_events};
///
/// let events = [
///     Event::Point { category: '#', value: 10.0 },
///     Event::Interval { category: '+', start: 0.0, end: 15.0 },
/// ];
/// let cfg = RenderConfig::builder(20).bin_size(7.0).build()?;
/// plot_events(events, &cfg, "Flagged items by age")?;
///
/// // nothing to bin
/// let err = plot_events([], &cfg, "empty").unwrap_err();
/// assert!(matches!(
///     err,
///     flagged_histogram::AppError::Histogram(HistogramError::EmptyDataset)
/// ));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn plot_events(
    events: impl IntoIterator<Item = Event<char>>,
    config: &RenderConfig,
    title: &str,
) -> Result<(), AppError> {
    let mut hist = Histogram::new(DEFAULT_CATEGORIES);
    for e in events {
        hist.add_event(e);
    }
    let result = hist.render(config, &DEFAULT_CATEGORIES, &[])?;
    Table::new(title).write_to(&mut std::io::stdout().lock(), &result)?;
    Ok(())
}
