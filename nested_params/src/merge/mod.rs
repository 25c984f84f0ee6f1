//! Deep merging of parameter trees.
//!
//! Trees are combined key by key with later trees taking precedence:
//!
//! - when every tree that defines a key holds a nested tree there, those
//!   nested trees are merged recursively;
//! - otherwise the value from the last tree defining the key wins outright,
//!   whatever shape earlier trees used.
//!
//! Unlike [`crate::append_nested`], mixing a leaf and a nested tree under one
//! key is not a conflict here.

use std::collections::BTreeMap;

use crate::{ParamValue, Parameters};

/// Merge `trees` into a new tree, later trees overriding earlier ones.
///
/// Inputs are left untouched. Merging nothing yields an empty tree and
/// merging a single tree yields a copy of it.
///
/// # Examples
///
/// ```
/// use nested_params::{Parameters, from_vars, merge};
///
/// let defaults: Parameters = [("akey", "avalue")].into_iter().collect();
/// let overrides: Parameters = [("akey", "overridden")].into_iter().collect();
/// let vars = from_vars(["akey=overridden2", "anotherkey=somevalue"])?;
///
/// let merged = merge([&defaults, &overrides, &vars]);
/// assert_eq!(merged.get("akey").and_then(|v| v.as_str()), Some("overridden2"));
/// assert_eq!(merged.get("anotherkey").and_then(|v| v.as_str()), Some("somevalue"));
/// # Ok::<_, nested_params::ParamsError>(())
/// ```
#[must_use]
pub fn merge<'a, I>(trees: I) -> Parameters
where
    I: IntoIterator<Item = &'a Parameters>,
{
    let ordered: Vec<&Parameters> = trees.into_iter().collect();
    tracing::debug!(trees = ordered.len(), "merging parameter trees");
    merge_trees(&ordered)
}

fn merge_trees(trees: &[&Parameters]) -> Parameters {
    let mut definitions: BTreeMap<&str, Vec<&ParamValue>> = BTreeMap::new();
    for tree in trees {
        for (key, value) in tree.iter() {
            definitions.entry(key).or_default().push(value);
        }
    }
    definitions
        .into_iter()
        .filter_map(|(key, values)| resolve(&values).map(|value| (key, value)))
        .collect()
}

fn resolve(values: &[&ParamValue]) -> Option<ParamValue> {
    let nested: Option<Vec<&Parameters>> = values.iter().map(|value| value.as_map()).collect();
    match nested {
        Some(maps) => Some(ParamValue::Map(merge_trees(&maps))),
        None => values.last().map(|value| (*value).clone()),
    }
}
