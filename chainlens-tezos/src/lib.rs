//! chainlens-tezos
//!
//! Tezos chain for chainlens. Tezos operations have a small, uneven
//! vocabulary (endorsements dwarf everything else), so time series keep the
//! `top_actions` most frequent operations and fold the rest into `Other`.
//! Reports list the accounts sending the most operations.
#![warn(missing_docs)]

mod report;

use chainlens_core::{
    ActionSeries, ChainConfig, ChainLensError, ChainRegistry, ChainTransform,
    ChainTransformResult, DEFAULT_TOP_ACTIONS, shape_top_k,
};
use serde_json::Value;

/// Registry name of the Tezos chain.
pub const NAME: &str = "tezos";
/// Table listing the accounts that send the most operations.
pub const TOP_SENDERS: &str = "top-senders";

const TABLES: &[&str] = &[TOP_SENDERS];

/// Top-K chain transform for Tezos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TezosChain {
    top_actions: usize,
}

impl Default for TezosChain {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_ACTIONS)
    }
}

impl TezosChain {
    /// Keep the `top_actions` most frequent operations as their own series.
    #[must_use]
    pub const fn new(top_actions: usize) -> Self {
        Self { top_actions }
    }

    /// Build the chain from registry construction parameters.
    #[must_use]
    pub const fn from_config(config: &ChainConfig) -> Self {
        Self::new(config.top_actions)
    }

    /// Number of operations kept as their own series.
    #[must_use]
    pub const fn top_actions(&self) -> usize {
        self.top_actions
    }
}

impl ChainTransform for TezosChain {
    fn name(&self) -> &'static str {
        NAME
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "chainlens_tezos::transform_actions_over_time",
            skip(self, series),
            fields(buckets = series.len(), k = self.top_actions),
        )
    )]
    fn transform_actions_over_time(
        &self,
        series: &ActionSeries,
    ) -> Result<ChainTransformResult, ChainLensError> {
        shape_top_k(series, self.top_actions)
    }

    fn available_tables(&self) -> &'static [&'static str] {
        TABLES
    }

    fn generate_table_body(&self, table_name: &str, data: &Value) -> Result<String, ChainLensError> {
        match table_name {
            TOP_SENDERS => report::top_senders(data),
            other => Err(ChainLensError::unknown_table(NAME, other, TABLES.iter().copied())),
        }
    }
}

/// Register the Tezos chain under [`NAME`].
///
/// # Errors
/// Returns `DuplicateChain` if the name is already taken.
pub fn register(registry: &mut ChainRegistry) -> Result<(), ChainLensError> {
    registry.register(NAME, |config: &ChainConfig| {
        Ok(Box::new(TezosChain::from_config(config)) as Box<dyn ChainTransform>)
    })
}
