use chainlens::{
    CategoryTable, ChainLens, ChainLensError, OTHER_LABEL, actions_over_time_from_str,
};
use chainlens_mock::fixtures;

#[test]
fn build_requires_a_chain() {
    let err = ChainLens::builder().build().unwrap_err();
    assert!(matches!(err, ChainLensError::InvalidArg(_)));
}

#[test]
fn mock_chain_plugs_in_next_to_bundled_ones() {
    let lens = ChainLens::builder()
        .with_default_chains()
        .unwrap()
        .with_chains(chainlens_mock::register)
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(lens.available_chains(), ["eos", "mock", "tezos"]);

    let series = fixtures::series::series("single-bucket").unwrap();
    let chart = lens.plot_actions_over_time("mock", &series).unwrap();
    assert_eq!(chart.labels(), ["transfer", "vote"]);

    let report = lens
        .generate_table("mock", "raw-dump", &fixtures::results::tezos_senders())
        .unwrap();
    assert_eq!(report.chain, "mock");
    assert!(report.as_str().contains("ActionsBySender & tz1aaa & 120,000"));
}

#[test]
fn top_actions_flows_to_tezos() {
    let lens = ChainLens::builder()
        .with_default_chains()
        .unwrap()
        .top_actions(1)
        .build()
        .unwrap();
    let series = actions_over_time_from_str(fixtures::series::SINGLE_BUCKET).unwrap();
    let chart = lens.plot_actions_over_time("tezos", &series).unwrap();
    assert_eq!(chart.labels(), ["Transfer", OTHER_LABEL]);
    assert_eq!(chart.series(), &[vec![10], vec![2]]);
}

#[test]
fn categories_flow_to_eos() {
    let table = CategoryTable::from_json_str(
        r#"{"categories": [{"name": "others", "color": "gray", "label": "Everything"}], "mapping": {}}"#,
    )
    .unwrap();
    let lens = ChainLens::builder()
        .with_default_chains()
        .unwrap()
        .categories(table)
        .build()
        .unwrap();
    let series = fixtures::series::series("eos-day").unwrap();
    let chart = lens.plot_actions_over_time("eos", &series).unwrap();
    assert_eq!(chart.labels(), ["Everything"]);
    assert_eq!(chart.series(), &[vec![8280, 1060, 1552, 0]]);
}

#[test]
fn unknown_chain_and_table_surface_from_the_lens() {
    let lens = ChainLens::builder().with_default_chains().unwrap().build().unwrap();
    assert!(matches!(
        lens.chain("ethereum"),
        Err(ChainLensError::UnknownChain { .. })
    ));
    let err = lens
        .generate_table("eos", "top-senders", &fixtures::results::eos_receivers())
        .unwrap_err();
    assert!(matches!(err, ChainLensError::UnknownTable { .. }));
    assert_eq!(lens.chain("eos").unwrap().available_tables(), ["top-receivers"]);
}
