//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod category;
pub mod config;
pub mod constants;
pub mod error;
pub mod histogram;
pub mod rng;
pub mod sample;

// re-export frequently-used items for convenience
pub use category::Categories;
pub use config::{Binning, RenderConfig, RenderConfigBuilder};
pub use constants::{DECIMAL_PRECISION, DEFAULT_CATEGORIES};
pub use error::{AppError, ConfigError, HistogramError};
pub use histogram::{BinRow, Histogram, RenderResult};
pub use sample::{Event, ParseEventError};
