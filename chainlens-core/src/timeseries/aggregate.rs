use std::collections::HashMap;

use crate::{ActionSeries, CategoryTable, ChainLensError, TimeBucket};

/// Total count per raw action name, iterated in first-seen order.
///
/// First-seen order is the order in which names are encountered walking the
/// series bucket by bucket and each bucket's actions in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionTotals {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl ActionTotals {
    /// Add `count` to `name`, appending it if unseen.
    ///
    /// # Errors
    /// Returns `Data` if the total for `name` no longer fits in a `u64`.
    pub fn add(&mut self, name: &str, count: u64) -> Result<(), ChainLensError> {
        if let Some(&i) = self.index.get(name) {
            let total = &mut self.entries[i].1;
            *total = total
                .checked_add(count)
                .ok_or_else(|| overflow(&format!("`{name}`")))?;
        } else {
            self.index.insert(name.to_string(), self.entries.len());
            self.entries.push((name.to_string(), count));
        }
        Ok(())
    }

    /// Total for `name`, if it was seen.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u64> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no action was seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, total)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), *c))
    }

    /// Names ranked by descending total.
    ///
    /// The sort is stable: equal totals keep their first-seen order.
    #[must_use]
    pub fn ranked(&self) -> Vec<(&str, u64)> {
        let mut out: Vec<(&str, u64)> = self.iter().collect();
        out.sort_by(|a, b| b.1.cmp(&a.1));
        out
    }

    /// Sum of every total.
    ///
    /// # Errors
    /// Returns `Data` on `u64` overflow.
    pub fn grand_total(&self) -> Result<u64, ChainLensError> {
        checked_sum(self.entries.iter().map(|(_, c)| *c), "all actions")
    }
}

/// Sum counts per raw action name across every bucket of the series.
///
/// An empty series (or one made of empty buckets) yields empty totals;
/// duplicate names inside a bucket are summed.
///
/// # Errors
/// Returns `Data` if a total overflows `u64`.
pub fn aggregate_totals(series: &ActionSeries) -> Result<ActionTotals, ChainLensError> {
    let mut totals = ActionTotals::default();
    for bucket in series {
        for action in &bucket.actions {
            totals.add(&action.name, action.count)?;
        }
    }
    Ok(totals)
}

/// Per-category counts for one bucket, parallel to the table's category order.
///
/// Every action is resolved through the table mapping with the `others`
/// fallback. The result is count-conserving: its sum equals
/// [`bucket_total`].
///
/// # Errors
/// Returns `UnknownCategory` if an action resolves to a category the table
/// does not declare, `Data` if a category count overflows `u64`.
pub fn aggregate_by_category(
    bucket: &TimeBucket,
    table: &CategoryTable,
) -> Result<Vec<u64>, ChainLensError> {
    let mut counts = vec![0u64; table.len()];
    for action in &bucket.actions {
        let category = table.category_of(&action.name);
        let pos = table
            .position(category)
            .ok_or_else(|| ChainLensError::unknown_category(&action.name, category))?;
        counts[pos] = counts[pos]
            .checked_add(action.count)
            .ok_or_else(|| overflow(&format!("category `{category}`")))?;
    }
    Ok(counts)
}

/// Sum of every raw action count in the bucket.
///
/// # Errors
/// Returns `Data` on `u64` overflow.
pub fn bucket_total(bucket: &TimeBucket) -> Result<u64, ChainLensError> {
    checked_sum(bucket.actions.iter().map(|a| a.count), "a bucket")
}

/// Count of `name` in the bucket, summing duplicate entries.
///
/// # Errors
/// Returns `Data` on `u64` overflow.
pub fn count_in_bucket(bucket: &TimeBucket, name: &str) -> Result<u64, ChainLensError> {
    checked_sum(
        bucket.actions.iter().filter(|a| a.name == name).map(|a| a.count),
        &format!("`{name}`"),
    )
}

fn overflow(what: &str) -> ChainLensError {
    ChainLensError::Data(format!("counts overflow u64 while summing {what}"))
}

/// Sum `counts`, failing with `Data` instead of wrapping.
pub(crate) fn checked_sum<I>(counts: I, what: &str) -> Result<u64, ChainLensError>
where
    I: IntoIterator<Item = u64>,
{
    counts
        .into_iter()
        .try_fold(0u64, |acc, c| acc.checked_add(c).ok_or_else(|| overflow(what)))
}
