use serde::Deserialize;
use serde_json::Value;

use crate::ChainLensError;
use crate::timeseries::aggregate::checked_sum;

/// A named count inside an entity breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedCount {
    /// Sub-item name (action name, counterpart address, ...).
    #[serde(rename = "Name")]
    pub name: String,
    /// Occurrences attributed to the sub-item.
    #[serde(rename = "Count")]
    pub count: u64,
}

/// Distinct-value summary attached to an entity, optionally with counts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Breakdown {
    /// Number of distinct values.
    #[serde(rename = "UniqueCount")]
    pub unique_count: u64,
    /// Per-value counts, when the collector recorded them.
    #[serde(rename = "Counts", default)]
    pub counts: Vec<NamedCount>,
}

/// One entity (sender, receiver, ...) of a grouped results collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityRecord {
    /// Entity identifier (account name, address).
    #[serde(rename = "Name")]
    pub name: String,
    /// Number of actions attributed to the entity.
    #[serde(rename = "Count")]
    pub count: u64,
    /// Distinct senders, for receiver-grouped collections.
    #[serde(rename = "Senders", default)]
    pub senders: Option<Breakdown>,
    /// Distinct receivers, for sender-grouped collections.
    #[serde(rename = "Receivers", default)]
    pub receivers: Option<Breakdown>,
    /// Distinct action names with their counts.
    #[serde(rename = "Names", default)]
    pub names: Option<Breakdown>,
}

/// A named collection under `Results`, e.g. `ActionsBySender`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EntityCollection {
    /// Entity records as produced by the collector.
    #[serde(rename = "Actions")]
    pub actions: Vec<EntityRecord>,
    /// Total actions across all entities, when recorded.
    #[serde(rename = "TotalCount", default)]
    pub total_count: Option<u64>,
}

impl EntityCollection {
    /// Recorded total, or the sum of every entity count.
    ///
    /// # Errors
    /// Returns `Data` if the summed counts overflow `u64`.
    pub fn total(&self) -> Result<u64, ChainLensError> {
        match self.total_count {
            Some(total) => Ok(total),
            None => checked_sum(self.actions.iter().map(|r| r.count), "entity counts"),
        }
    }

    /// The `n` entities with the highest count, descending; ties keep document order.
    #[must_use]
    pub fn top(&self, n: usize) -> Vec<&EntityRecord> {
        let mut sorted: Vec<&EntityRecord> = self.actions.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(n);
        sorted
    }
}

/// Extract and decode `Results.<name>` from a results document.
///
/// # Errors
/// Returns `Data` when the collection is missing or does not match the schema.
pub fn collection(data: &Value, name: &str) -> Result<EntityCollection, ChainLensError> {
    let raw = data
        .get("Results")
        .and_then(|r| r.get(name))
        .ok_or_else(|| ChainLensError::Data(format!("missing `Results.{name}` collection")))?;
    EntityCollection::deserialize(raw)
        .map_err(|e| ChainLensError::Data(format!("`Results.{name}`: {e}")))
}

/// `part / whole` as a float, zero when `whole` is zero.
#[must_use]
pub fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Sub-items of an entity worth listing, paired with their share of `whole`.
///
/// Items are ranked by descending count (stable), only those whose share is
/// strictly above `threshold` are kept, and at most `limit` are returned.
/// A zero `whole` yields nothing.
#[must_use]
pub fn dominant_items(
    items: &[NamedCount],
    whole: u64,
    limit: usize,
    threshold: f64,
) -> Vec<(&NamedCount, f64)> {
    if whole == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<&NamedCount> = items.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
        .into_iter()
        .map(|item| (item, ratio(item.count, whole)))
        .filter(|(_, share)| *share > threshold)
        .take(limit)
        .collect()
}
