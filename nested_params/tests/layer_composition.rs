//! Integration tests for ordered parameter layers.

use anyhow::{Result, anyhow, ensure};
use nested_params::{LayerComposer, LayerSource, ParamValue, Parameters, ParamsError};
use rstest::rstest;
use serde_json::json;

fn tree(value: serde_json::Value) -> Result<Parameters> {
    Ok(Parameters::try_from(value)?)
}

#[test]
fn layers_keep_push_order_and_provenance() -> Result<()> {
    let mut composer = LayerComposer::new();
    composer.push_defaults(tree(json!({"mode": "dev"}))?);
    composer.push_file_json(r#"{"mode": "staging", "region": null}"#, "values.json")?;
    composer.push_vars(["mode=prod"])?;

    let sources: Vec<LayerSource> = composer.layers().iter().map(|layer| layer.source()).collect();
    ensure!(
        sources == vec![LayerSource::Defaults, LayerSource::File, LayerSource::Vars],
        "unexpected order {sources:?}"
    );
    let file_path = composer
        .layers()
        .get(1)
        .and_then(|layer| layer.path())
        .map(|path| path.as_str());
    ensure!(file_path == Some("values.json"), "unexpected path {file_path:?}");

    let merged = composer.merge();
    ensure!(merged.get("mode").and_then(ParamValue::as_str) == Some("prod"));
    ensure!(merged.get("region").is_some_and(ParamValue::is_null));
    Ok(())
}

#[test]
fn merges_nested_layers_deeply() -> Result<()> {
    let mut composer = LayerComposer::new();
    composer.push_defaults(tree(json!({"server": {"host": "localhost", "port": "80"}}))?);
    composer.push_vars(["server.port=8080"])?;
    let merged = composer.merge();
    ensure!(
        merged == tree(json!({"server": {"host": "localhost", "port": "8080"}}))?,
        "unexpected merge {merged:?}"
    );
    Ok(())
}

#[test]
fn failed_vars_push_nothing() -> Result<()> {
    let mut composer = LayerComposer::new();
    let err = composer
        .push_vars(["novalue"])
        .err()
        .ok_or_else(|| anyhow!("expected a pattern mismatch"))?;
    ensure!(matches!(err, ParamsError::PatternMismatch { index: 0, .. }));
    ensure!(composer.layers().is_empty(), "no layer should be pushed");
    ensure!(composer.merge().is_empty());
    Ok(())
}

#[rstest]
#[case::malformed("{\"mode\": ")]
#[case::number(r#"{"port": 8080}"#)]
#[case::not_an_object(r#""flat""#)]
fn bad_values_files_name_their_path(#[case] json: &str) -> Result<()> {
    let mut composer = LayerComposer::new();
    let err = composer
        .push_file_json(json, "conf/values.json")
        .err()
        .ok_or_else(|| anyhow!("expected {json:?} to be rejected"))?;
    ensure!(
        matches!(&err, ParamsError::File { path, .. } if path.as_str() == "conf/values.json"),
        "unexpected error {err:?}"
    );
    ensure!(
        err.to_string().starts_with("values file error in 'conf/values.json': "),
        "unexpected message {err}"
    );
    ensure!(composer.layers().is_empty(), "no layer should be pushed");
    Ok(())
}
