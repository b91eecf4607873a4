//! Construction parameters shared by chain constructors.

use serde::{Deserialize, Serialize};

use crate::category::CategoryTable;

/// Default number of ranked actions kept by top-K chains.
pub const DEFAULT_TOP_ACTIONS: usize = 2;

/// Parameters passed to every chain constructor by the registry.
///
/// Chains read the fields they understand and ignore the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Number of ranked actions emitted before the synthetic `Other` series.
    pub top_actions: usize,
    /// Category table replacing a chain's embedded asset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<CategoryTable>,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            top_actions: DEFAULT_TOP_ACTIONS,
            categories: None,
        }
    }
}

impl ChainConfig {
    /// Set the number of ranked actions for top-K chains.
    #[must_use]
    pub const fn with_top_actions(mut self, k: usize) -> Self {
        self.top_actions = k;
        self
    }

    /// Inject a category table for taxonomy-based chains.
    #[must_use]
    pub fn with_categories(mut self, table: CategoryTable) -> Self {
        self.categories = Some(table);
        self
    }
}
