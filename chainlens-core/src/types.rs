//! Re-export of foundational types from `chainlens-types`.
// Consolidated re-exports so downstream crates can depend on `chainlens-core` only

pub use chainlens_types::{ChainConfig, ChainLensError, DEFAULT_TOP_ACTIONS};

pub use chainlens_types::{ActionCount, ActionSeries, TimeBucket};

pub use chainlens_types::{Category, CategoryTable, OTHERS_CATEGORY, display_case};

pub use chainlens_types::{ChainTransformResult, TableReport};
