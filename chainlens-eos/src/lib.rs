//! chainlens-eos
//!
//! EOS chain for chainlens. EOS contracts expose a rich, stable set of
//! action names, so time series are shaped by category: every raw action is
//! mapped through a category table (embedded from `data/eos-categories.json`
//! unless one is injected through [`ChainConfig`]) and each category becomes
//! one series. Reports list the accounts receiving the most actions.
#![warn(missing_docs)]

mod report;

use chainlens_core::{
    ActionSeries, CategoryTable, ChainConfig, ChainLensError, ChainRegistry, ChainTransform,
    ChainTransformResult, shape_by_category,
};
use serde_json::Value;

/// Registry name of the EOS chain.
pub const NAME: &str = "eos";
/// Table listing the accounts that receive the most actions.
pub const TOP_RECEIVERS: &str = "top-receivers";

const TABLES: &[&str] = &[TOP_RECEIVERS];
const CATEGORIES_ASSET: &str = include_str!("../data/eos-categories.json");

/// Parse the category table compiled into this crate.
///
/// # Errors
/// Returns `InvalidCategoryTable` if the embedded asset is inconsistent.
pub fn embedded_categories() -> Result<CategoryTable, ChainLensError> {
    CategoryTable::from_json_str(CATEGORIES_ASSET)
}

/// Category-based chain transform for EOS.
#[derive(Debug, Clone)]
pub struct EosChain {
    categories: CategoryTable,
}

impl EosChain {
    /// Build the chain from the embedded category table.
    ///
    /// # Errors
    /// Returns `InvalidCategoryTable` if the embedded asset is inconsistent.
    pub fn new() -> Result<Self, ChainLensError> {
        Self::with_categories(embedded_categories()?)
    }

    /// Build the chain from an injected category table.
    ///
    /// # Errors
    /// Returns `InvalidCategoryTable` if the table lacks the `others` fallback.
    pub fn with_categories(categories: CategoryTable) -> Result<Self, ChainLensError> {
        categories.require_fallback()?;
        Ok(Self { categories })
    }

    /// Build the chain from registry construction parameters.
    ///
    /// Uses `config.categories` when present, the embedded table otherwise.
    ///
    /// # Errors
    /// See [`EosChain::with_categories`].
    pub fn from_config(config: &ChainConfig) -> Result<Self, ChainLensError> {
        match &config.categories {
            Some(table) => Self::with_categories(table.clone()),
            None => Self::new(),
        }
    }

    /// The category table in use.
    #[must_use]
    pub const fn categories(&self) -> &CategoryTable {
        &self.categories
    }
}

impl ChainTransform for EosChain {
    fn name(&self) -> &'static str {
        NAME
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "chainlens_eos::transform_actions_over_time",
            skip(self, series),
            fields(buckets = series.len()),
        )
    )]
    fn transform_actions_over_time(
        &self,
        series: &ActionSeries,
    ) -> Result<ChainTransformResult, ChainLensError> {
        shape_by_category(series, &self.categories)
    }

    fn available_tables(&self) -> &'static [&'static str] {
        TABLES
    }

    fn generate_table_body(&self, table_name: &str, data: &Value) -> Result<String, ChainLensError> {
        match table_name {
            TOP_RECEIVERS => report::top_receivers(data),
            other => Err(ChainLensError::unknown_table(NAME, other, TABLES.iter().copied())),
        }
    }
}

/// Register the EOS chain under [`NAME`].
///
/// # Errors
/// Returns `DuplicateChain` if the name is already taken.
pub fn register(registry: &mut ChainRegistry) -> Result<(), ChainLensError> {
    registry.register(NAME, |config: &ChainConfig| {
        EosChain::from_config(config).map(|c| Box::new(c) as Box<dyn ChainTransform>)
    })
}
