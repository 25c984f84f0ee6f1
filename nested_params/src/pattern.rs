//! Recognition of `name=value` variable strings.
//!
//! The name is a run of characters containing neither `=` nor whitespace,
//! usually a dotted path such as `a.b.c`. The value is everything after the
//! first `=`. A value wrapped in a matching pair of single or double quotes
//! is returned without them.

use std::sync::LazyLock;

use regex::Regex;

use crate::{ParamsError, ParamsResult};

static VAR_PATTERN: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| {
    Regex::new(r#"(?s)\A(?P<name>[^=\s]+)=(?:"(?P<double>.*)"|'(?P<single>.*)'|(?P<plain>.*))\z"#)
});

fn var_pattern() -> ParamsResult<&'static Regex> {
    VAR_PATTERN
        .as_ref()
        .map_err(|source| ParamsError::PatternRegex {
            source: source.clone(),
        })
}

/// The parts of a matched `name=value` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VarMatch<'a> {
    /// The name, possibly a dotted path.
    pub name: &'a str,
    /// The value with any surrounding quotes removed.
    pub value: &'a str,
}

/// Split `input` into its name and value.
///
/// Returns `Ok(None)` when `input` is not of the form `name=value`.
///
/// # Errors
///
/// Returns [`ParamsError::PatternRegex`] if the variable pattern fails to
/// compile.
///
/// # Examples
///
/// ```
/// use nested_params::{VarMatch, match_var};
///
/// assert_eq!(
///     match_var("key=value=with=equals")?,
///     Some(VarMatch { name: "key", value: "value=with=equals" })
/// );
/// assert_eq!(
///     match_var("first='a value'")?,
///     Some(VarMatch { name: "first", value: "a value" })
/// );
/// assert_eq!(match_var("keyvalue")?, None);
/// # Ok::<_, nested_params::ParamsError>(())
/// ```
pub fn match_var(input: &str) -> ParamsResult<Option<VarMatch<'_>>> {
    Ok(split_captures(var_pattern()?, input))
}

fn split_captures<'a>(pattern: &Regex, input: &'a str) -> Option<VarMatch<'a>> {
    let captures = pattern.captures(input)?;
    let name = captures.name("name")?.as_str();
    let value = ["double", "single", "plain"]
        .into_iter()
        .find_map(|group| captures.name(group))?
        .as_str();
    Some(VarMatch { name, value })
}
