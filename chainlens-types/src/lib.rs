//! Chainlens data transfer objects, configuration primitives and the shared error type.
#![warn(missing_docs)]

mod category;
mod chart;
mod config;
mod error;
mod reports;
mod series;

pub use category::{Category, CategoryTable, OTHERS_CATEGORY, display_case};
pub use chart::ChainTransformResult;
pub use config::{ChainConfig, DEFAULT_TOP_ACTIONS};
pub use error::ChainLensError;
pub use reports::TableReport;
pub use series::{ActionCount, ActionSeries, TimeBucket};
