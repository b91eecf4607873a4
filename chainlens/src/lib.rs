//! chainlens turns time-bucketed blockchain action logs into chart-ready
//! series and per-chain report tables.
//!
//! Overview
//! - Each chain implements the `ChainTransform` contract from `chainlens_core`.
//! - Chains are looked up by name in a `ChainRegistry`; bundled chains are
//!   added by [`register_default_chains`], further chains by their own
//!   `register` function.
//! - [`ChainLens`] bundles a registry with the construction parameters
//!   (`ChainConfig`) passed to every chain it creates.
//!
//! Key behaviors
//! - Category-based chains (EOS) emit one series per category, whatever the
//!   data; top-K chains (Tezos) emit `min(K, distinct actions)` series plus
//!   `Other`.
//! - Report names are validated against the chain's declared tables before
//!   any formatting happens.
//! - Nothing is registered implicitly; the process-wide registry returned by
//!   [`default_registry`] is built once on first use.
//!
//! Examples
//! ```rust,ignore
//! use chainlens::{ChainLens, read_actions_over_time};
//!
//! let lens = ChainLens::builder().with_default_chains()?.top_actions(3).build()?;
//! let series = read_actions_over_time(std::fs::File::open("tezos.json")?)?;
//! let chart = lens.plot_actions_over_time("tezos", &series)?;
//! println!("{}", serde_json::to_string_pretty(&chart)?);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod defaults;

pub use core::{ChainLens, ChainLensBuilder};
pub use defaults::{default_chains, default_registry, register_default_chains};

pub use chainlens_core::report;
pub use chainlens_core::{
    ActionCount, ActionSeries, ActionTotals, Category, CategoryTable, ChainConfig,
    ChainConstructor, ChainLensError, ChainRegistry, ChainTransform, ChainTransformResult,
    DEFAULT_TOP_ACTIONS, OTHER_LABEL, TableReport, TimeBucket, actions_over_time_from_str,
    aggregate_by_category, aggregate_totals, generate_table, parse_actions_over_time,
    read_actions_over_time, shape_by_category, shape_top_k,
};
pub use chainlens_eos::EosChain;
pub use chainlens_tezos::TezosChain;
