//! chainlens-mock
//!
//! Deterministic chain and fixture documents for tests and demos. The mock
//! chain is not part of the default registry; register it explicitly with
//! [`register`] to see a new chain plug in next to the bundled ones.
use chainlens_core::report::latex::{escape, join_rows, row, thousands};
use chainlens_core::report::records::collection;
use chainlens_core::{
    ActionSeries, ChainConfig, ChainLensError, ChainRegistry, ChainTransform,
    ChainTransformResult, aggregate_totals, count_in_bucket,
};
use serde_json::Value;

/// Static fixture documents.
pub mod fixtures;

/// Registry name of the mock chain.
pub const NAME: &str = "mock";
/// Table listing every entity of every results collection.
pub const RAW_DUMP: &str = "raw-dump";
/// Color given to every series.
pub const SERIES_COLOR: &str = "black";
/// An action with this name makes the transform fail.
pub const FAIL_ACTION: &str = "FAIL";

const TABLES: &[&str] = &[RAW_DUMP];

/// Mock chain: one series per distinct action, in first-seen order.
#[derive(Debug, Clone, Copy)]
pub struct MockChain;

impl Default for MockChain {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChain {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn raw_dump(data: &Value) -> Result<String, ChainLensError> {
        let results = data
            .get("Results")
            .and_then(Value::as_object)
            .ok_or_else(|| ChainLensError::Data("missing `Results` object".into()))?;
        let mut rows = Vec::new();
        for key in results.keys() {
            let entities = collection(data, key)?;
            for record in &entities.actions {
                rows.push(row(&[escape(key), escape(&record.name), thousands(record.count)]));
            }
        }
        Ok(join_rows(&rows))
    }
}

impl ChainTransform for MockChain {
    fn name(&self) -> &'static str {
        NAME
    }

    fn transform_actions_over_time(
        &self,
        series: &ActionSeries,
    ) -> Result<ChainTransformResult, ChainLensError> {
        let totals = aggregate_totals(series)?;
        if totals.get(FAIL_ACTION).is_some() {
            return Err(ChainLensError::Data(format!(
                "{NAME}: forced failure on `{FAIL_ACTION}`"
            )));
        }
        let names: Vec<&str> = totals.iter().map(|(name, _)| name).collect();
        let columns = names
            .iter()
            .map(|name| series.iter().map(|b| count_in_bucket(b, name)).collect())
            .collect::<Result<Vec<Vec<u64>>, _>>()?;
        let labels = names.iter().map(|n| (*n).to_string()).collect();
        let colors = vec![SERIES_COLOR.to_string(); names.len()];
        ChainTransformResult::new(labels, series.dates(), columns, colors)
    }

    fn available_tables(&self) -> &'static [&'static str] {
        TABLES
    }

    fn generate_table_body(&self, table_name: &str, data: &Value) -> Result<String, ChainLensError> {
        match table_name {
            RAW_DUMP => Self::raw_dump(data),
            other => Err(ChainLensError::unknown_table(NAME, other, TABLES.iter().copied())),
        }
    }
}

/// Register the mock chain under [`NAME`]; construction parameters are ignored.
///
/// # Errors
/// Returns `DuplicateChain` if the name is already taken.
pub fn register(registry: &mut ChainRegistry) -> Result<(), ChainLensError> {
    registry.register(NAME, |_: &ChainConfig| {
        Ok(Box::new(MockChain::new()) as Box<dyn ChainTransform>)
    })
}
