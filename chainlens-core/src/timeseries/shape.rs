use super::aggregate::{aggregate_by_category, aggregate_totals, bucket_total, count_in_bucket};
use crate::{ActionSeries, CategoryTable, ChainLensError, ChainTransformResult, display_case};

/// Label of the synthetic series collecting every non-top action.
pub const OTHER_LABEL: &str = "Other";
/// Color of the synthetic `Other` series.
pub const OTHER_COLOR: &str = "brown";
/// Colors assigned to ranked series, cycled when K exceeds its length.
pub const TOP_COLORS: &[&str] = &["blue", "green", "violet", "coral", "teal", "gray"];

/// Shape a series with a fixed taxonomy: one series per category of `table`.
///
/// The width of the result is the number of categories, independent of the
/// data; categories that never occur are emitted as all-zero series.
///
/// # Errors
/// Propagates `UnknownCategory` and overflow `Data` errors from
/// [`aggregate_by_category`].
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "chainlens::shape::by_category",
        skip(series, table),
        fields(buckets = series.len(), categories = table.len()),
    )
)]
pub fn shape_by_category(
    series: &ActionSeries,
    table: &CategoryTable,
) -> Result<ChainTransformResult, ChainLensError> {
    let mut columns: Vec<Vec<u64>> = vec![Vec::with_capacity(series.len()); table.len()];
    for bucket in series {
        let counts = aggregate_by_category(bucket, table)?;
        for (column, count) in columns.iter_mut().zip(counts) {
            column.push(count);
        }
    }
    ChainTransformResult::new(table.labels(), series.dates(), columns, table.colors())
}

/// Shape a series without a taxonomy: the `k` most frequent actions plus `Other`.
///
/// Actions are ranked by total count over the whole series, descending; ties
/// keep first-seen order (see [`crate::timeseries::aggregate::ActionTotals::ranked`]).
/// When fewer than `k` distinct actions exist, all of them are kept, so the
/// result has `min(k, distinct) + 1` series rather than always `k + 1`; no
/// all-zero placeholder series are padded in. For every bucket the emitted
/// values sum to the bucket's raw total.
///
/// # Errors
/// Returns `Data` when a count overflows `u64` or the assembled result breaks
/// its shape invariants.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "chainlens::shape::top_k",
        skip(series),
        fields(buckets = series.len(), k = k),
    )
)]
pub fn shape_top_k(series: &ActionSeries, k: usize) -> Result<ChainTransformResult, ChainLensError> {
    let totals = aggregate_totals(series)?;
    let top: Vec<&str> = totals
        .ranked()
        .into_iter()
        .take(k)
        .map(|(name, _)| name)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(top = ?top, distinct = totals.len(), "selected top actions");

    let mut columns: Vec<Vec<u64>> = vec![Vec::with_capacity(series.len()); top.len() + 1];
    for bucket in series {
        let total = bucket_total(bucket)?;
        let mut kept = 0u64;
        for (column, name) in columns.iter_mut().zip(&top) {
            let count = count_in_bucket(bucket, name)?;
            // Each top name is a distinct part of the bucket, so `kept <= total`.
            kept += count;
            column.push(count);
        }
        if let Some(other) = columns.last_mut() {
            other.push(total - kept);
        }
    }

    let mut labels: Vec<String> = top.iter().map(|name| display_case(name)).collect();
    labels.push(OTHER_LABEL.to_string());
    let mut colors: Vec<String> = TOP_COLORS
        .iter()
        .cycle()
        .take(top.len())
        .map(|c| (*c).to_string())
        .collect();
    colors.push(OTHER_COLOR.to_string());

    ChainTransformResult::new(labels, series.dates(), columns, colors)
}
