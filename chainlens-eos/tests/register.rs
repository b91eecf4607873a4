use chainlens_core::{ChainConfig, ChainLensError, ChainRegistry};

#[test]
fn register_and_create() {
    let mut registry = ChainRegistry::new();
    chainlens_eos::register(&mut registry).unwrap();
    assert_eq!(registry.available_names(), ["eos"]);
    let chain = registry.create("eos").unwrap();
    assert_eq!(chain.name(), "eos");
    assert_eq!(chain.available_tables(), ["top-receivers"]);
}

#[test]
fn second_registration_is_rejected() {
    let mut registry = ChainRegistry::new();
    chainlens_eos::register(&mut registry).unwrap();
    let err = chainlens_eos::register(&mut registry).unwrap_err();
    assert_eq!(err, ChainLensError::DuplicateChain { name: "eos".into() });
    assert_eq!(registry.len(), 1);
}

#[test]
fn constructor_sees_injected_config() {
    let mut registry = ChainRegistry::new();
    chainlens_eos::register(&mut registry).unwrap();
    let table = chainlens_core::CategoryTable::from_json_str(
        r#"{"categories": [{"name": "misc", "color": "red"}], "mapping": {}}"#,
    )
    .unwrap();
    let err = registry
        .create_with("eos", &ChainConfig::default().with_categories(table))
        .err()
        .expect("invalid category table must fail");
    assert!(matches!(err, ChainLensError::InvalidCategoryTable(_)));
}
