use chainlens_core::{
    ActionCount, ActionSeries, Category, CategoryTable, ChainConfig, ChainLensError,
    ChainTransform, TimeBucket, bucket_total,
};
use chainlens_eos::{EosChain, embedded_categories};
use chainlens_mock::fixtures;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use std::collections::BTreeMap;

#[test]
fn embedded_table_has_fallback() {
    let table = embedded_categories().unwrap();
    assert!(table.has_fallback());
    assert_eq!(
        table.labels(),
        ["Tokens", "Others", "Games", "Betting", "Exchanges", "System"]
    );
}

#[test]
fn day_fixture_by_category() {
    let series = fixtures::series::series("eos-day").unwrap();
    let result = EosChain::new().unwrap().transform_actions_over_time(&series).unwrap();

    assert_eq!(result.dates().len(), 4);
    assert_eq!(
        result.series(),
        &[
            vec![1000, 1000, 1200, 0],
            vec![0, 0, 7, 0],
            vec![0, 0, 300, 0],
            vec![0, 60, 45, 0],
            vec![80, 0, 0, 0],
            vec![7200, 0, 0, 0],
        ]
    );
    assert_eq!(result.colors(), ["green", "gray", "teal", "violet", "blue", "brown"]);
}

#[test]
fn empty_series_keeps_every_category() {
    let chain = EosChain::new().unwrap();
    let result = chain.transform_actions_over_time(&ActionSeries::default()).unwrap();
    assert!(result.dates().is_empty());
    assert_eq!(result.labels().len(), chain.categories().len());
    assert!(result.series().iter().all(Vec::is_empty));
}

fn tiny_table(with_fallback: bool) -> CategoryTable {
    let mut categories = vec![Category::new("transfers", "blue")];
    if with_fallback {
        categories.push(Category::new("others", "gray"));
    }
    let mapping = BTreeMap::from([("transfer".to_string(), "transfers".to_string())]);
    CategoryTable::new(categories, mapping).unwrap()
}

#[test]
fn injected_categories_replace_the_asset() {
    let config = ChainConfig::default().with_categories(tiny_table(true));
    let chain = EosChain::from_config(&config).unwrap();
    let series = fixtures::series::series("single-bucket").unwrap();
    let result = chain.transform_actions_over_time(&series).unwrap();
    assert_eq!(result.labels(), ["Transfers", "Others"]);
    assert_eq!(result.series(), &[vec![10], vec![2]]);
}

#[test]
fn injected_table_without_fallback_is_rejected() {
    let err = EosChain::with_categories(tiny_table(false)).unwrap_err();
    assert!(matches!(err, ChainLensError::InvalidCategoryTable(_)));
}

const NAMES: &[&str] = &["transfer", "onblock", "mine", "bet", "trade", "mystery", "noop"];

fn arb_series() -> impl Strategy<Value = ActionSeries> {
    let bucket = prop::collection::vec((0..NAMES.len(), 0u64..10_000), 0..8);
    prop::collection::vec(bucket, 0..12).prop_map(|buckets| {
        let start = NaiveDate::from_ymd_opt(2019, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ActionSeries::new(
            buckets
                .into_iter()
                .enumerate()
                .map(|(i, actions)| {
                    TimeBucket::new(
                        start + Duration::hours(6 * i as i64),
                        actions
                            .into_iter()
                            .map(|(n, c)| ActionCount::new(NAMES[n], c))
                            .collect(),
                    )
                })
                .collect(),
        )
    })
}

proptest! {
    #[test]
    fn widths_follow_the_table(series in arb_series()) {
        let chain = EosChain::new().unwrap();
        let result = chain.transform_actions_over_time(&series).unwrap();
        prop_assert_eq!(result.dates().len(), series.len());
        prop_assert_eq!(result.labels().len(), chain.categories().len());
        prop_assert_eq!(result.colors().len(), chain.categories().len());
        for s in result.series() {
            prop_assert_eq!(s.len(), series.len());
        }
    }

    #[test]
    fn every_action_lands_in_some_category(series in arb_series()) {
        let result = EosChain::new().unwrap().transform_actions_over_time(&series).unwrap();
        for (i, bucket) in series.iter().enumerate() {
            prop_assert_eq!(result.column(i).iter().sum::<u64>(), bucket_total(bucket).unwrap());
        }
    }
}
