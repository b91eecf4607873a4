use std::sync::OnceLock;

use chainlens_core::{ChainLensError, ChainRegistry};

/// Register every bundled chain (`eos`, `tezos`) into `registry`.
///
/// Each chain crate's `register` is called exactly once.
///
/// # Errors
/// Returns `DuplicateChain` if `registry` already holds one of the names.
pub fn register_default_chains(registry: &mut ChainRegistry) -> Result<(), ChainLensError> {
    chainlens_eos::register(registry)?;
    chainlens_tezos::register(registry)?;
    Ok(())
}

/// A fresh registry holding the bundled chains.
///
/// # Errors
/// Returns `DuplicateChain` if two bundled chains share a name.
pub fn default_chains() -> Result<ChainRegistry, ChainLensError> {
    let mut registry = ChainRegistry::new();
    register_default_chains(&mut registry)?;
    Ok(registry)
}

/// Process-wide read-only registry of the bundled chains, built on first use.
///
/// # Errors
/// Returns the error [`default_chains`] produced on first use, on every call.
pub fn default_registry() -> Result<&'static ChainRegistry, ChainLensError> {
    static REGISTRY: OnceLock<Result<ChainRegistry, ChainLensError>> = OnceLock::new();
    REGISTRY.get_or_init(default_chains).as_ref().map_err(Clone::clone)
}
