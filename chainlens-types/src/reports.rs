//! Report envelopes produced by chains.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Formatted textual report keyed by table and chain.
///
/// The text is opaque; generation is deterministic for identical input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReport {
    /// Table name the report was generated for.
    pub table: String,
    /// Chain that produced the report.
    pub chain: String,
    /// Rendered report body.
    pub text: String,
}

impl TableReport {
    /// Wrap a rendered body.
    pub fn new(table: impl Into<String>, chain: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            chain: chain.into(),
            text: text.into(),
        }
    }

    /// Rendered body.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume the report and return its body.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
