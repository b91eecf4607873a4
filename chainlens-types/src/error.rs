use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the chainlens workspace.
///
/// Lookup failures carry the offending name together with the valid
/// alternatives so they can be diagnosed without re-running anything.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChainLensError {
    /// The requested chain has no registered constructor.
    #[error("unknown chain `{name}`; available chains: {}", available.join(", "))]
    UnknownChain {
        /// Chain name that was requested.
        name: String,
        /// Every registered chain name, sorted.
        available: Vec<String>,
    },

    /// The requested table is not produced by the selected chain.
    #[error("unknown table `{table}` for chain `{chain}`; available tables: {}", available.join(", "))]
    UnknownTable {
        /// Chain the table was requested from.
        chain: String,
        /// Table name that was requested.
        table: String,
        /// Tables the chain declares, in declaration order.
        available: Vec<String>,
    },

    /// A raw action resolved to a category missing from the loaded table.
    #[error("action `{action}` maps to category `{category}` which is not in the category table")]
    UnknownCategory {
        /// Raw action name being aggregated.
        action: String,
        /// Category the action resolved to.
        category: String,
    },

    /// A chain name was registered twice.
    #[error("chain `{name}` is already registered")]
    DuplicateChain {
        /// Name that collided.
        name: String,
    },

    /// The category table asset violates its invariants.
    #[error("invalid category table: {0}")]
    InvalidCategoryTable(String),

    /// The input document could not be parsed (JSON shape, timestamps).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Issues with the report document or with derived data.
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid argument supplied by the caller.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl ChainLensError {
    /// Helper: build an `UnknownChain` error from the requested name and the known names.
    pub fn unknown_chain<I, S>(name: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownChain {
            name: name.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Helper: build an `UnknownTable` error.
    pub fn unknown_table<I, S>(chain: impl Into<String>, table: impl Into<String>, available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::UnknownTable {
            chain: chain.into(),
            table: table.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Helper: build an `UnknownCategory` error.
    pub fn unknown_category(action: impl Into<String>, category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            action: action.into(),
            category: category.into(),
        }
    }

    /// Helper: build a `DuplicateChain` error.
    pub fn duplicate_chain(name: impl Into<String>) -> Self {
        Self::DuplicateChain { name: name.into() }
    }

    /// Returns true if the error stems from a lookup against a registry or a
    /// declared name list (chain, table, or category).
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(
            self,
            Self::UnknownChain { .. } | Self::UnknownTable { .. } | Self::UnknownCategory { .. }
        )
    }
}

impl From<serde_json::Error> for ChainLensError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
