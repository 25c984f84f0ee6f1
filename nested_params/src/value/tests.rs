//! Unit tests for the parameter tree value model.

use anyhow::{Result, ensure};
use rstest::rstest;
use serde_json::json;

use super::{ParamValue, Parameters};
use crate::ParamsError;

fn sample() -> Result<Parameters> {
    Ok(Parameters::try_from(json!({
        "a": {"nested": {"key": "value"}},
        "empty": "",
        "unset": null,
    }))?)
}

#[rstest]
#[case::top_level("empty", Some(""))]
#[case::deep("a.nested.key", Some("value"))]
#[case::missing_leaf("a.nested.other", None)]
#[case::through_leaf("empty.more", None)]
#[case::map_is_not_a_string("a.nested", None)]
#[case::empty_path("", None)]
fn looks_up_dotted_paths(#[case] path: &str, #[case] expected: Option<&str>) -> Result<()> {
    let params = sample()?;
    let found = params.get_path(path).and_then(ParamValue::as_str);
    ensure!(found == expected, "path {path}: expected {expected:?}, got {found:?}");
    Ok(())
}

#[test]
fn null_leaves_are_distinct_from_missing_keys() -> Result<()> {
    let params = sample()?;
    ensure!(params.get("unset").is_some_and(ParamValue::is_null));
    ensure!(params.get("absent").is_none());
    Ok(())
}

#[test]
fn collects_from_pairs() {
    let params: Parameters = [("b", "2"), ("a", "1")].into_iter().collect();
    assert_eq!(params.len(), 2);
    assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn option_converts_to_null_or_string() {
    assert_eq!(ParamValue::from(None::<String>), ParamValue::Null);
    assert_eq!(
        ParamValue::from(Some(String::from("x"))),
        ParamValue::String("x".into())
    );
}

#[rstest]
#[case::number(json!({"port": 8080}))]
#[case::boolean(json!({"debug": true}))]
#[case::array(json!({"list": ["a"]}))]
#[case::nested_number(json!({"a": {"b": 1}}))]
#[case::not_an_object(json!("scalar"))]
fn rejects_unsupported_json(#[case] value: serde_json::Value) {
    let result = Parameters::try_from(value);
    assert!(matches!(result, Err(ParamsError::Json(_))));
}

#[test]
fn converts_into_json_value() -> Result<()> {
    let value = serde_json::Value::from(sample()?);
    ensure!(
        value
            == json!({
                "a": {"nested": {"key": "value"}},
                "empty": "",
                "unset": null,
            }),
        "unexpected JSON {value}"
    );
    Ok(())
}

#[test]
fn encodes_json_in_key_order() -> Result<()> {
    let params: Parameters = [("z", ParamValue::Null), ("a", ParamValue::from("x"))]
        .into_iter()
        .collect();
    let text = params.to_json_string()?;
    ensure!(text == r#"{"a":"x","z":null}"#, "unexpected encoding {text}");
    Ok(())
}
