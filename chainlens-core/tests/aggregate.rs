use chainlens_core::{
    ActionCount, ActionSeries, Category, CategoryTable, ChainLensError, TimeBucket,
    aggregate_by_category, aggregate_totals, bucket_total,
};
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn ts(day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 1, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn bucket(day: u32, actions: &[(&str, u64)]) -> TimeBucket {
    TimeBucket::new(
        ts(day),
        actions.iter().map(|(n, c)| ActionCount::new(*n, *c)).collect(),
    )
}

fn table(with_others: bool) -> CategoryTable {
    let mut categories = vec![Category::new("tokens", "green")];
    if with_others {
        categories.push(Category::new("others", "gray"));
    }
    categories.push(Category::new("games", "teal"));
    let mut mapping = BTreeMap::new();
    mapping.insert("transfer".to_string(), "tokens".to_string());
    mapping.insert("mine".to_string(), "games".to_string());
    CategoryTable::new(categories, mapping).unwrap()
}

#[test]
fn totals_of_empty_series_are_empty() {
    let totals = aggregate_totals(&ActionSeries::default()).unwrap();
    assert!(totals.is_empty());
    assert_eq!(totals.grand_total().unwrap(), 0);
}

#[test]
fn totals_tolerate_empty_buckets() {
    let series = ActionSeries::new(vec![bucket(1, &[]), bucket(2, &[("vote", 1)]), bucket(3, &[])]);
    let totals = aggregate_totals(&series).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("vote"), Some(1));
}

#[test]
fn duplicate_names_in_a_bucket_are_summed() {
    let series = ActionSeries::new(vec![bucket(1, &[("login", 3), ("login", 2)])]);
    let totals = aggregate_totals(&series).unwrap();
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.get("login"), Some(5));
}

#[test]
fn totals_keep_first_seen_order() {
    let series = ActionSeries::new(vec![
        bucket(1, &[("b", 1), ("a", 1)]),
        bucket(2, &[("c", 1), ("a", 4)]),
    ]);
    let totals = aggregate_totals(&series).unwrap();
    let names: Vec<&str> = totals.iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["b", "a", "c"]);
}

#[test]
fn ranking_breaks_ties_by_first_seen_order() {
    let series = ActionSeries::new(vec![bucket(1, &[("A", 5), ("B", 5), ("C", 1)])]);
    let totals = aggregate_totals(&series).unwrap();
    for _ in 0..10 {
        let ranked = totals.ranked();
        assert_eq!(ranked[0], ("A", 5));
        assert_eq!(ranked[1], ("B", 5));
        assert_eq!(ranked[2], ("C", 1));
    }
}

#[test]
fn category_counts_follow_table_order_with_fallback() {
    let b = bucket(1, &[("mine", 4), ("transfer", 10), ("vote", 2), ("transfer", 1)]);
    let counts = aggregate_by_category(&b, &table(true)).unwrap();
    assert_eq!(counts, vec![11, 2, 4]);
    assert_eq!(counts.iter().sum::<u64>(), bucket_total(&b).unwrap());
}

#[test]
fn unmapped_action_without_fallback_fails_fast() {
    let b = bucket(1, &[("transfer", 10), ("vote", 2)]);
    let err = aggregate_by_category(&b, &table(false)).unwrap_err();
    assert_eq!(
        err,
        ChainLensError::UnknownCategory {
            action: "vote".into(),
            category: "others".into()
        }
    );
}

#[test]
fn overflowing_totals_are_data_errors() {
    let b = bucket(1, &[("a", u64::MAX), ("b", 1)]);
    assert!(matches!(bucket_total(&b), Err(ChainLensError::Data(_))));

    let series = ActionSeries::new(vec![bucket(1, &[("a", u64::MAX)]), bucket(2, &[("a", 1)])]);
    assert!(matches!(aggregate_totals(&series), Err(ChainLensError::Data(_))));

    let distinct = ActionSeries::new(vec![b.clone()]);
    let totals = aggregate_totals(&distinct).unwrap();
    assert!(matches!(totals.grand_total(), Err(ChainLensError::Data(_))));

    let err = aggregate_by_category(&bucket(1, &[("transfer", u64::MAX), ("transfer", 1)]), &table(true))
        .unwrap_err();
    assert!(matches!(err, ChainLensError::Data(msg) if msg.contains("tokens")));
}

#[test]
fn largest_single_count_is_kept_exactly() {
    let b = bucket(1, &[("a", u64::MAX - 1), ("b", 1)]);
    assert_eq!(bucket_total(&b).unwrap(), u64::MAX);
}
