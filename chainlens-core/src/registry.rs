use std::collections::BTreeMap;

use crate::{ChainConfig, ChainLensError, ChainTransform};

/// Constructor stored in the registry; receives the caller's construction parameters.
pub type ChainConstructor =
    Box<dyn Fn(&ChainConfig) -> Result<Box<dyn ChainTransform>, ChainLensError> + Send + Sync>;

/// Name-keyed factory of chain transforms.
///
/// The registry owns constructors only; instances it creates belong to the
/// caller. It is populated once during initialisation (each chain crate
/// exposes a `register` function) and read-only afterwards.
///
/// Registering a name twice is rejected with `DuplicateChain`, leaving the
/// first registration in place.
#[derive(Default)]
pub struct ChainRegistry {
    constructors: BTreeMap<&'static str, ChainConstructor>,
}

impl ChainRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `constructor` under `name`.
    ///
    /// # Errors
    /// Returns `DuplicateChain` if `name` is already registered.
    pub fn register<F>(&mut self, name: &'static str, constructor: F) -> Result<(), ChainLensError>
    where
        F: Fn(&ChainConfig) -> Result<Box<dyn ChainTransform>, ChainLensError> + Send + Sync + 'static,
    {
        if self.constructors.contains_key(name) {
            return Err(ChainLensError::duplicate_chain(name));
        }
        self.constructors.insert(name, Box::new(constructor));

        #[cfg(feature = "tracing")]
        tracing::debug!(chain = name, "registered chain");

        Ok(())
    }

    /// Builder-style [`ChainRegistry::register`].
    ///
    /// # Errors
    /// Returns `DuplicateChain` if `name` is already registered.
    pub fn with_chain<F>(mut self, name: &'static str, constructor: F) -> Result<Self, ChainLensError>
    where
        F: Fn(&ChainConfig) -> Result<Box<dyn ChainTransform>, ChainLensError> + Send + Sync + 'static,
    {
        self.register(name, constructor)?;
        Ok(self)
    }

    /// Instantiate `name` with the default [`ChainConfig`].
    ///
    /// # Errors
    /// Returns `UnknownChain` (listing every registered name) when `name` is
    /// not registered, or the constructor's own error.
    pub fn create(&self, name: &str) -> Result<Box<dyn ChainTransform>, ChainLensError> {
        self.create_with(name, &ChainConfig::default())
    }

    /// Instantiate `name` with explicit construction parameters.
    ///
    /// # Errors
    /// See [`ChainRegistry::create`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "chainlens::registry::create", skip(self, config))
    )]
    pub fn create_with(
        &self,
        name: &str,
        config: &ChainConfig,
    ) -> Result<Box<dyn ChainTransform>, ChainLensError> {
        let constructor = self
            .constructors
            .get(name)
            .ok_or_else(|| ChainLensError::unknown_chain(name, self.available_names()))?;
        constructor(config)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn available_names(&self) -> Vec<&'static str> {
        self.constructors.keys().copied().collect()
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    /// True when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl core::fmt::Debug for ChainRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChainRegistry")
            .field("chains", &self.available_names())
            .finish()
    }
}
