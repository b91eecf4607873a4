use chainlens_core::{
    ActionSeries, CategoryTable, ChainConfig, ChainLensError, ChainRegistry, ChainTransform,
    ChainTransformResult, TableReport,
};
use serde_json::Value;

use crate::defaults::register_default_chains;

/// A registry of chains plus the parameters every chain is built with.
#[derive(Debug)]
pub struct ChainLens {
    registry: ChainRegistry,
    config: ChainConfig,
}

/// Builder for [`ChainLens`].
#[derive(Debug, Default)]
pub struct ChainLensBuilder {
    registry: ChainRegistry,
    config: ChainConfig,
}

impl ChainLensBuilder {
    /// Start with an empty registry and default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the bundled chains.
    ///
    /// # Errors
    /// Returns `DuplicateChain` if a bundled name was already registered.
    pub fn with_default_chains(mut self) -> Result<Self, ChainLensError> {
        register_default_chains(&mut self.registry)?;
        Ok(self)
    }

    /// Add chains through a crate's `register` function.
    ///
    /// # Errors
    /// Whatever `register` returns, typically `DuplicateChain`.
    pub fn with_chains<F>(mut self, register: F) -> Result<Self, ChainLensError>
    where
        F: FnOnce(&mut ChainRegistry) -> Result<(), ChainLensError>,
    {
        register(&mut self.registry)?;
        Ok(self)
    }

    /// Number of actions top-K chains keep as their own series.
    #[must_use]
    pub const fn top_actions(mut self, k: usize) -> Self {
        self.config.top_actions = k;
        self
    }

    /// Category table replacing the embedded asset of category-based chains.
    #[must_use]
    pub fn categories(mut self, table: CategoryTable) -> Self {
        self.config.categories = Some(table);
        self
    }

    /// Replace all construction parameters at once.
    #[must_use]
    pub fn config(mut self, config: ChainConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the [`ChainLens`].
    ///
    /// # Errors
    /// Returns `InvalidArg` if no chain has been registered.
    pub fn build(self) -> Result<ChainLens, ChainLensError> {
        if self.registry.is_empty() {
            return Err(ChainLensError::InvalidArg(
                "no chains registered; add some via with_default_chains() or with_chains(...)"
                    .to_string(),
            ));
        }
        Ok(ChainLens {
            registry: self.registry,
            config: self.config,
        })
    }
}

impl ChainLens {
    /// Start building a new [`ChainLens`].
    #[must_use]
    pub fn builder() -> ChainLensBuilder {
        ChainLensBuilder::new()
    }

    /// Registered chain names, sorted.
    #[must_use]
    pub fn available_chains(&self) -> Vec<&'static str> {
        self.registry.available_names()
    }

    /// Parameters passed to every chain constructor.
    #[must_use]
    pub const fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Instantiate the chain registered under `name`.
    ///
    /// # Errors
    /// Returns `UnknownChain` (listing the registered names) or the
    /// constructor's error.
    pub fn chain(&self, name: &str) -> Result<Box<dyn ChainTransform>, ChainLensError> {
        self.registry.create_with(name, &self.config)
    }

    /// Chart-ready series for `series` as shaped by chain `name`.
    ///
    /// # Errors
    /// See [`ChainLens::chain`]; also the chain's transform error.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "chainlens::plot_actions_over_time", skip(self, series))
    )]
    pub fn plot_actions_over_time(
        &self,
        name: &str,
        series: &ActionSeries,
    ) -> Result<ChainTransformResult, ChainLensError> {
        self.chain(name)?.transform_actions_over_time(series)
    }

    /// Report `table` of chain `name` from a results document.
    ///
    /// # Errors
    /// See [`ChainLens::chain`]; `UnknownTable` for an undeclared table, or
    /// `Data` when `data` does not match the table's schema.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "chainlens::generate_table", skip(self, data))
    )]
    pub fn generate_table(
        &self,
        name: &str,
        table: &str,
        data: &Value,
    ) -> Result<TableReport, ChainLensError> {
        self.chain(name)?.generate_table(table, data)
    }
}
