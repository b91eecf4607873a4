use chainlens_types::{Category, CategoryTable, ChainLensError, OTHERS_CATEGORY, display_case};

#[test]
fn parses_asset_and_preserves_order() {
    let table = CategoryTable::from_json_str(
        r#"{
            "categories": [
                {"name": "tokens", "color": "green"},
                {"name": "others", "color": "gray"},
                {"name": "dex", "color": "blue", "label": "DEX"}
            ],
            "mapping": {"transfer": "tokens", "swap": "dex"}
        }"#,
    )
    .expect("valid table");

    assert_eq!(table.len(), 3);
    assert_eq!(table.labels(), vec!["Tokens", "Others", "DEX"]);
    assert_eq!(table.colors(), vec!["green", "gray", "blue"]);
    assert_eq!(table.position("dex"), Some(2));
    assert_eq!(table.category_of("swap"), "dex");
    assert_eq!(table.category_of("never-seen"), OTHERS_CATEGORY);
}

#[test]
fn missing_others_fails_the_fallback_requirement() {
    let table = CategoryTable::from_json_str(
        r#"{"categories": [{"name": "tokens", "color": "green"}], "mapping": {}}"#,
    )
    .expect("structurally valid table");
    assert!(!table.has_fallback());
    let err = table.require_fallback().unwrap_err();
    assert!(matches!(err, ChainLensError::InvalidCategoryTable(_)));
}

#[test]
fn mapping_to_undeclared_category_is_rejected() {
    let err = CategoryTable::from_json_str(
        r#"{
            "categories": [{"name": "others", "color": "gray"}],
            "mapping": {"transfer": "tokens"}
        }"#,
    )
    .unwrap_err();
    match err {
        ChainLensError::InvalidCategoryTable(msg) => {
            assert!(msg.contains("transfer"));
            assert!(msg.contains("tokens"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_category_is_rejected() {
    let err = CategoryTable::new(
        vec![Category::new("others", "gray"), Category::new("others", "teal")],
        Default::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ChainLensError::InvalidCategoryTable(_)));
}

#[test]
fn malformed_json_is_a_table_error() {
    let err = CategoryTable::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, ChainLensError::InvalidCategoryTable(_)));
}

#[test]
fn display_case_capitalizes_first_letter_only() {
    assert_eq!(display_case("transfer"), "Transfer");
    assert_eq!(display_case("eosio.TOKEN"), "Eosio.token");
    assert_eq!(display_case(""), "");
}
