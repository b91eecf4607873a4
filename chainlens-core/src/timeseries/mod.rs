//! Time-series utilities shared by chains.
//!
//! Modules include:
//! - `aggregate`: totals per raw action and per-bucket category vectors
//! - `shape`: the category-based and top-K-plus-other chart strategies
/// Aggregation of raw action counts.
pub mod aggregate;
/// Chart shaping strategies producing `ChainTransformResult`s.
pub mod shape;
