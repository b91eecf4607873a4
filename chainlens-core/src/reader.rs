//! Parsing of action-over-time documents into an [`ActionSeries`].
//!
//! Accepted layouts:
//! - `{"Actions": {<timestamp>: <bucket>}}`
//! - `{"Results": {"GroupedActionsOverTime": {"Actions": {<timestamp>: <bucket>}}}}`
//!
//! A bucket is either `{"Actions": [{"Name": .., "Count": ..}]}` or a flat
//! `{<name>: <count>}` object. Text input is read entry by entry, so flat
//! buckets keep document order and repeated names (summed downstream), and a
//! repeated timestamp yields two buckets. An already-built [`Value`] has lost
//! repeated keys and iterates its objects in key order.

use std::fmt;
use std::io::Read;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;

use crate::{ActionCount, ActionSeries, ChainLensError, TimeBucket};

const LISTED_KEY: &str = "Actions";

#[derive(Deserialize)]
struct Document {
    #[serde(rename = "Actions")]
    actions: Option<RawBuckets>,
    #[serde(rename = "Results")]
    results: Option<Results>,
}

#[derive(Deserialize)]
struct Results {
    #[serde(rename = "GroupedActionsOverTime")]
    grouped: Option<Grouped>,
}

#[derive(Deserialize)]
struct Grouped {
    #[serde(rename = "Actions")]
    actions: RawBuckets,
}

/// `(key, actions)` pairs in document order.
struct RawBuckets(Vec<(String, Vec<ActionCount>)>);

impl<'de> Deserialize<'de> for RawBuckets {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BucketsVisitor;

        impl<'de> Visitor<'de> for BucketsVisitor {
            type Value = RawBuckets;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("`Actions` mapping timestamps to buckets")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawBuckets, A::Error> {
                let mut buckets = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    let actions = map.next_value_seed(BucketSeed { key: &key })?;
                    buckets.push((key, actions));
                }
                Ok(RawBuckets(buckets))
            }
        }

        deserializer.deserialize_map(BucketsVisitor)
    }
}

/// Reads one bucket entry by entry so repeated flat names survive.
struct BucketSeed<'k> {
    key: &'k str,
}

impl<'de> DeserializeSeed<'de> for BucketSeed<'_> {
    type Value = Vec<ActionCount>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for BucketSeed<'_> {
    type Value = Vec<ActionCount>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bucket `{}` as an object", self.key)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let key = self.key;
        let mut actions = Vec::new();
        while let Some(name) = map.next_key::<String>()? {
            match map.next_value::<Value>()? {
                Value::Array(listed) if name == LISTED_KEY => {
                    for entry in listed {
                        let action = ActionCount::deserialize(entry).map_err(|e| {
                            <A::Error as de::Error>::custom(format!("bucket `{key}`: {e}"))
                        })?;
                        actions.push(action);
                    }
                }
                count => {
                    let count = count.as_u64().ok_or_else(|| {
                        <A::Error as de::Error>::custom(format!(
                            "bucket `{key}`: count for `{name}` is not a non-negative integer"
                        ))
                    })?;
                    actions.push(ActionCount::new(name, count));
                }
            }
        }
        Ok(actions)
    }
}

/// Parse an ISO-8601 bucket key.
///
/// A trailing `Z` is stripped. Accepted forms: `YYYY-MM-DDTHH:MM:SS[.f]`
/// (or with a space separator), a timestamp with an explicit UTC offset
/// (converted to UTC), or a bare `YYYY-MM-DD` (midnight).
///
/// # Errors
/// Returns `InvalidInput` naming the offending key.
pub fn parse_timestamp(key: &str) -> Result<NaiveDateTime, ChainLensError> {
    let trimmed = key.trim().trim_end_matches('Z');
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.naive_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN));
    }
    Err(ChainLensError::InvalidInput(format!(
        "unparseable timestamp `{key}`"
    )))
}

impl Document {
    fn into_buckets(self) -> Result<RawBuckets, ChainLensError> {
        self.actions
            .or_else(|| self.results.and_then(|r| r.grouped).map(|g| g.actions))
            .ok_or_else(|| {
                ChainLensError::InvalidInput(
                    "expected `Actions` or `Results.GroupedActionsOverTime.Actions`".into(),
                )
            })
    }
}

fn build_series(doc: Document) -> Result<ActionSeries, ChainLensError> {
    let RawBuckets(raw) = doc.into_buckets()?;
    let mut buckets = Vec::with_capacity(raw.len());
    for (key, actions) in raw {
        buckets.push(TimeBucket::new(parse_timestamp(&key)?, actions));
    }
    buckets.sort_by_key(|b| b.timestamp);

    #[cfg(feature = "tracing")]
    tracing::debug!(buckets = buckets.len(), "parsed action series");

    Ok(ActionSeries::new(buckets))
}

/// Build an ascending [`ActionSeries`] from a parsed document.
///
/// Buckets are sorted by parsed timestamp with a stable sort.
///
/// # Errors
/// Returns `InvalidInput` for a missing `Actions` mapping, an unparseable
/// timestamp, or a malformed bucket.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "chainlens::reader::parse_actions_over_time", skip(doc))
)]
pub fn parse_actions_over_time(doc: &Value) -> Result<ActionSeries, ChainLensError> {
    build_series(Document::deserialize(doc)?)
}

/// Parse a JSON string into an [`ActionSeries`].
///
/// Unlike [`parse_actions_over_time`], repeated names inside a flat bucket
/// are all kept (and later summed), since the text is read entry by entry.
///
/// # Errors
/// See [`parse_actions_over_time`]; malformed JSON is `InvalidInput` too.
pub fn actions_over_time_from_str(json: &str) -> Result<ActionSeries, ChainLensError> {
    build_series(serde_json::from_str(json)?)
}

/// Read a JSON document from `reader` into an [`ActionSeries`].
///
/// Repeated flat names are kept as in [`actions_over_time_from_str`].
///
/// # Errors
/// See [`parse_actions_over_time`]; malformed JSON is `InvalidInput` too.
pub fn read_actions_over_time<R: Read>(reader: R) -> Result<ActionSeries, ChainLensError> {
    build_series(serde_json::from_reader(reader)?)
}
