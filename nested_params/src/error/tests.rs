//! Unit tests for error display and classification.

use rstest::rstest;

use super::ParamsError;

#[rstest]
#[case::nil(ParamsError::NilParameters, "unexpected nil parameters")]
#[case::empty(ParamsError::EmptyKey, "unexpected empty nestedKey")]
#[case::conflict(
    ParamsError::conflict("key", "string"),
    "key conflict: key 'key' already exists and is not a map, it has type: 'string'"
)]
#[case::null_conflict(
    ParamsError::conflict("outer", "null"),
    "key conflict: key 'outer' already exists and is not a map, it has type: 'null'"
)]
#[case::mismatch(
    ParamsError::PatternMismatch { index: 2, input: "novalue".into() },
    "no match for input string 2: 'novalue'"
)]
#[case::too_deep(
    ParamsError::PathTooDeep { depth: 65, max: 64 },
    "path too deep: 65 levels exceeds the maximum of 64"
)]
fn renders_messages(#[case] err: ParamsError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn classifies_conflicts() {
    assert!(ParamsError::conflict("k", "string").is_conflict());
    assert!(!ParamsError::EmptyKey.is_conflict());
}

#[test]
fn wraps_json_errors() {
    let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("expected truncated JSON to fail");
    };
    let err = ParamsError::from(source);
    assert!(matches!(err, ParamsError::Json(_)));
    assert!(err.to_string().starts_with("JSON error: "));
}

#[test]
fn wraps_regex_errors() {
    let Err(source) = regex::Regex::new("(") else {
        panic!("expected unbalanced group to fail");
    };
    let err = ParamsError::PatternRegex { source };
    assert!(err.to_string().starts_with("invalid variable pattern: "));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn names_the_values_file() {
    let Err(source) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("expected truncated JSON to fail");
    };
    let err = ParamsError::File {
        path: "values.json".into(),
        source,
    };
    assert!(err.to_string().starts_with("values file error in 'values.json': "));
}
