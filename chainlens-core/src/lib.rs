//! chainlens-core
//!
//! Core types, traits, and utilities shared across the chainlens ecosystem.
//!
//! - `types`: common data structures (action series, category tables, chart results).
//! - `transform`: the `ChainTransform` trait every chain implements, and the
//!   validating `generate_table` entry point.
//! - `timeseries`: aggregation of raw action counts and chart shaping strategies.
//! - `registry`: the name-keyed `ChainRegistry` factory.
//! - `reader`: parsing of action-over-time JSON documents.
//! - `report`: record decoding and LaTeX helpers for chain reports.
//!
//! Everything here is synchronous and pure apart from the reader's `io::Read`
//! entry point; chains are `Send + Sync` and immutable once constructed.
#![warn(missing_docs)]

/// Input document parsing.
pub mod reader;
/// Name-keyed chain factory.
pub mod registry;
/// Report building blocks.
pub mod report;
/// Time-series aggregation and shaping.
pub mod timeseries;
/// The chain transform contract.
pub mod transform;
pub mod types;

pub use reader::{actions_over_time_from_str, parse_actions_over_time, read_actions_over_time};
pub use registry::{ChainConstructor, ChainRegistry};
pub use timeseries::aggregate::{
    ActionTotals, aggregate_by_category, aggregate_totals, bucket_total, count_in_bucket,
};
pub use timeseries::shape::{OTHER_LABEL, shape_by_category, shape_top_k};
pub use transform::{ChainTransform, generate_table};
pub use types::*;
