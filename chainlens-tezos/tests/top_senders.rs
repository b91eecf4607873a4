use chainlens_core::{ChainLensError, ChainRegistry, ChainTransform, generate_table};
use chainlens_mock::fixtures;
use chainlens_tezos::{NAME, TOP_SENDERS, TezosChain};
use serde_json::json;

fn report() -> String {
    generate_table(&TezosChain::default(), TOP_SENDERS, &fixtures::results::tezos_senders())
        .unwrap()
        .into_string()
}

#[test]
fn rows_are_ranked_and_limited_to_five() {
    let text = report();
    let expected = "\\tezaddr{tz1ddd} & 1,500,000 & 2 & 750000.00\\\\\n    \
                    \\tezaddr{tz1aaa} & 120,000 & 3 & 40000.00\\\\\n    \
                    \\tezaddr{tz1bbb} & 98,765 & 98,765 & 1.00\\\\\n    \
                    \\tezaddr{KT1ccc} & 4,321 & 7 & 617.29\\\\\n    \
                    \\tezaddr{tz1eee} & 10 & 4 & 2.50\\\\";
    assert!(text.contains(expected), "{text}");
    assert!(!text.contains("tz1fff"));
}

#[test]
fn wrapped_in_figure() {
    let text = report();
    assert!(text.starts_with("\\begin{figure*}[tbp]"));
    assert!(text.contains("\\label{tab:tezos-account-edges}"));
    assert!(text.ends_with("\\end{figure*}"));
    assert_eq!(text, report());
}

#[test]
fn zero_receivers_with_sends_is_a_data_error() {
    let data = json!({"Results": {"ActionsBySender": {"Actions": [
        {"Name": "tz1zero", "Count": 5, "Receivers": {"UniqueCount": 0}}
    ]}}});
    let err = TezosChain::default().generate_table_body(TOP_SENDERS, &data).unwrap_err();
    assert!(matches!(err, ChainLensError::Data(msg) if msg.contains("tz1zero")));
}

#[test]
fn idle_sender_averages_zero() {
    let data = json!({"Results": {"ActionsBySender": {"Actions": [
        {"Name": "tz1idle", "Count": 0, "Receivers": {"UniqueCount": 0}}
    ]}}});
    let text = TezosChain::default().generate_table_body(TOP_SENDERS, &data).unwrap();
    assert!(text.contains("\\tezaddr{tz1idle} & 0 & 0 & 0.00"));
}

#[test]
fn unknown_table_is_rejected_before_formatting() {
    let err = generate_table(&TezosChain::default(), "top-receivers", &json!(null)).unwrap_err();
    assert!(matches!(err, ChainLensError::UnknownTable { ref available, .. } if available == &["top-senders"]));
}

#[test]
fn registry_passes_top_actions() {
    let mut registry = ChainRegistry::new();
    chainlens_tezos::register(&mut registry).unwrap();
    let config = chainlens_core::ChainConfig::default().with_top_actions(1);
    let chain = registry.create_with(NAME, &config).unwrap();
    let series = fixtures::series::series("tezos-days").unwrap();
    let result = chain.transform_actions_over_time(&series).unwrap();
    assert_eq!(result.labels(), ["Endorsement", "Other"]);
    assert!(chainlens_tezos::register(&mut registry).is_err());
}

#[test]
fn empty_collection_has_no_stray_row_terminator() {
    let data = json!({"Results": {"ActionsBySender": {"Actions": []}}});
    let text = TezosChain::default().generate_table_body(TOP_SENDERS, &data).unwrap();
    assert!(text.contains("\\midrule\n    \n    \\bottomrule"), "{text}");
    assert!(!text.contains("    \\\\\n"), "{text}");
}
