//! Parsing of command-line style `key.path=value` strings into a tree.

use crate::{Parameters, ParamsError, ParamsResult, match_var};

/// Build a [`Parameters`] tree from `name=value` strings.
///
/// Names may be dotted paths. Strings are applied in order, so a later
/// string for the same key replaces an earlier one. An empty input yields an
/// empty tree.
///
/// # Errors
///
/// Stops at the first failure and returns
/// [`ParamsError::PatternMismatch`] for a string that is not an assignment,
/// or the insertion error from [`crate::append_nested`].
///
/// # Examples
///
/// ```
/// use nested_params::from_vars;
///
/// let params = from_vars(["key.nested=value", r#"first="a value""#])?;
/// assert_eq!(params.get_path("key.nested").and_then(|v| v.as_str()), Some("value"));
/// assert_eq!(params.get("first").and_then(|v| v.as_str()), Some("a value"));
/// # Ok::<_, nested_params::ParamsError>(())
/// ```
pub fn from_vars<I, S>(vars: I) -> ParamsResult<Parameters>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut params = Parameters::new();
    for (index, var) in vars.into_iter().enumerate() {
        let input = var.as_ref();
        let assignment = match_var(input)?.ok_or_else(|| ParamsError::PatternMismatch {
            index,
            input: input.to_owned(),
        })?;
        params = params.with_path(assignment.name, assignment.value)?;
    }
    tracing::debug!(keys = params.len(), "parsed parameters from vars");
    Ok(params)
}
