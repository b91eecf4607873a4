use serde_json::Value;

use crate::{ActionSeries, ChainLensError, ChainTransformResult, TableReport};

/// Per-chain transformation of raw action logs into chart data and reports.
///
/// Implementations choose their own aggregation strategy (see
/// [`crate::timeseries::shape`]) but must honor the
/// [`ChainTransformResult`] shape invariants. Callers reach reports through
/// [`generate_table`], which validates the table name before calling
/// [`ChainTransform::generate_table_body`].
pub trait ChainTransform: Send + Sync {
    /// Stable identifier used by the registry (e.g. "eos", "tezos").
    fn name(&self) -> &'static str;

    /// Turn an ordered action series into labelled, colored series over time.
    ///
    /// # Errors
    /// Chain-specific; category-based chains surface `UnknownCategory`.
    fn transform_actions_over_time(
        &self,
        series: &ActionSeries,
    ) -> Result<ChainTransformResult, ChainLensError>;

    /// REQUIRED: table names this chain can produce, in declaration order.
    fn available_tables(&self) -> &'static [&'static str];

    /// Render the body of `table_name` from a raw results document.
    ///
    /// Only called with a name listed in [`ChainTransform::available_tables`].
    ///
    /// # Errors
    /// Returns `Data` when the document does not match the table's schema.
    fn generate_table_body(&self, table_name: &str, data: &Value) -> Result<String, ChainLensError>;

    /// Whether `table_name` is listed in [`ChainTransform::available_tables`].
    fn supports_table(&self, table_name: &str) -> bool {
        self.available_tables().contains(&table_name)
    }
}

/// Validate `table_name` against the chain's declared tables, then render it.
///
/// # Errors
/// Returns `UnknownTable` (listing the valid names) for an undeclared table,
/// otherwise whatever the chain's formatter returns.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "chainlens::transform::generate_table",
        skip(chain, data),
        fields(chain = chain.name(), table = table_name),
    )
)]
pub fn generate_table<C>(chain: &C, table_name: &str, data: &Value) -> Result<TableReport, ChainLensError>
where
    C: ChainTransform + ?Sized,
{
    if !chain.supports_table(table_name) {
        return Err(ChainLensError::unknown_table(
            chain.name(),
            table_name,
            chain.available_tables().iter().copied(),
        ));
    }
    let text = chain.generate_table_body(table_name, data)?;
    Ok(TableReport::new(table_name, chain.name(), text))
}

impl dyn ChainTransform {
    /// Method form of [`generate_table`] for boxed chains.
    ///
    /// # Errors
    /// See [`generate_table`].
    pub fn generate_table(&self, table_name: &str, data: &Value) -> Result<TableReport, ChainLensError> {
        generate_table(self, table_name, data)
    }
}
