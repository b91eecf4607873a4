//! Time-bucketed action logs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Number of occurrences of one raw action name inside a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionCount {
    /// Raw, chain-specific action name (e.g. `transfer`).
    #[serde(rename = "Name")]
    pub name: String,
    /// Occurrences within the bucket.
    #[serde(rename = "Count")]
    pub count: u64,
}

impl ActionCount {
    /// Construct an action count.
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

/// All actions observed during one time bucket.
///
/// Names are usually unique within a bucket but this is not enforced;
/// aggregation sums duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// Start of the bucket (naive, UTC).
    pub timestamp: NaiveDateTime,
    /// Action counts in source order.
    pub actions: Vec<ActionCount>,
}

impl TimeBucket {
    /// Construct a bucket.
    #[must_use]
    pub const fn new(timestamp: NaiveDateTime, actions: Vec<ActionCount>) -> Self {
        Self { timestamp, actions }
    }
}

/// Buckets in ascending timestamp order.
///
/// Ordering is established by the reader; the series itself never re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionSeries {
    buckets: Vec<TimeBucket>,
}

impl ActionSeries {
    /// Wrap already-ordered buckets.
    #[must_use]
    pub const fn new(buckets: Vec<TimeBucket>) -> Self {
        Self { buckets }
    }

    /// Buckets in order.
    #[must_use]
    pub fn buckets(&self) -> &[TimeBucket] {
        &self.buckets
    }

    /// Iterate over buckets in order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeBucket> {
        self.buckets.iter()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when the series holds no bucket.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Bucket timestamps, parallel to the buckets.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDateTime> {
        self.buckets.iter().map(|b| b.timestamp).collect()
    }

    /// Consume the series and return its buckets.
    #[must_use]
    pub fn into_buckets(self) -> Vec<TimeBucket> {
        self.buckets
    }
}

impl From<Vec<TimeBucket>> for ActionSeries {
    fn from(buckets: Vec<TimeBucket>) -> Self {
        Self::new(buckets)
    }
}

impl<'a> IntoIterator for &'a ActionSeries {
    type Item = &'a TimeBucket;
    type IntoIter = std::slice::Iter<'a, TimeBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
