use chainlens_core::{
    ActionSeries, ChainLensError, ChainTransform, ChainTransformResult, generate_table, shape_top_k,
};
use serde_json::{Value, json};

struct Counting;

impl ChainTransform for Counting {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn transform_actions_over_time(
        &self,
        series: &ActionSeries,
    ) -> Result<ChainTransformResult, ChainLensError> {
        shape_top_k(series, 0)
    }

    fn available_tables(&self) -> &'static [&'static str] {
        &["keys", "size"]
    }

    fn generate_table_body(&self, table_name: &str, data: &Value) -> Result<String, ChainLensError> {
        let obj = data
            .as_object()
            .ok_or_else(|| ChainLensError::Data("expected an object".into()))?;
        Ok(match table_name {
            "keys" => obj.keys().cloned().collect::<Vec<_>>().join(","),
            _ => obj.len().to_string(),
        })
    }
}

#[test]
fn valid_table_is_delegated_and_tagged() {
    let report = generate_table(&Counting, "keys", &json!({"b": 1, "a": 2})).unwrap();
    assert_eq!(report.as_str(), "a,b");
    assert_eq!(report.table, "keys");
    assert_eq!(report.chain, "counting");
}

#[test]
fn unknown_table_lists_valid_names() {
    let err = generate_table(&Counting, "bogus-table", &json!({})).unwrap_err();
    assert_eq!(
        err,
        ChainLensError::UnknownTable {
            chain: "counting".into(),
            table: "bogus-table".into(),
            available: vec!["keys".into(), "size".into()],
        }
    );
}

#[test]
fn boxed_chain_uses_the_same_validation() {
    let chain: Box<dyn ChainTransform> = Box::new(Counting);
    assert_eq!(chain.generate_table("size", &json!({"x": 1})).unwrap().to_string(), "1");
    assert!(chain.generate_table("nope", &json!({})).is_err());
}

#[test]
fn body_errors_propagate() {
    let err = generate_table(&Counting, "size", &json!([1, 2])).unwrap_err();
    assert!(matches!(err, ChainLensError::Data(_)));
}
