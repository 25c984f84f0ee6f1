//! Insertion of dotted key paths into a parameter tree.

use std::collections::btree_map::Entry;

use crate::{ParamValue, Parameters, ParamsError, ParamsResult};

/// Deepest tree an insertion may produce, counted in nested maps.
///
/// A path of `n` segments holding a string or null leaf reaches depth `n`;
/// a nested tree stored at the leaf adds its own [`Parameters::depth`].
/// The bound keeps every built tree well inside the nesting JSON decoders
/// accept, so trees always read back after [`Parameters::to_json_string`].
pub const MAX_DEPTH: usize = 64;

/// Insert `value` at the dotted `path` of `params` and return the tree.
///
/// Intermediate segments are created as empty nested trees when absent and
/// descended into when they already hold a tree. The final segment is
/// overwritten whatever it held before, including a nested tree. The tree is
/// consumed, so on error nothing is returned.
///
/// # Errors
///
/// - [`ParamsError::NilParameters`] when `params` is `None`.
/// - [`ParamsError::EmptyKey`] when `path` or any of its segments is empty.
/// - [`ParamsError::KeyConflict`] when a segment that must be descended into
///   holds a string or null leaf.
/// - [`ParamsError::PathTooDeep`] when the result would exceed [`MAX_DEPTH`].
///
/// # Examples
///
/// ```
/// use nested_params::{Parameters, append_nested};
///
/// let params = append_nested(Some(Parameters::new()), "key.nested", "value")?;
/// assert_eq!(params.get_path("key.nested").and_then(|v| v.as_str()), Some("value"));
///
/// let err = append_nested(Some(params), "key.nested.more", None::<String>).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "key conflict: key 'nested' already exists and is not a map, it has type: 'string'"
/// );
/// # Ok::<_, nested_params::ParamsError>(())
/// ```
pub fn append_nested(
    params: Option<Parameters>,
    path: &str,
    value: impl Into<ParamValue>,
) -> ParamsResult<Parameters> {
    let mut tree = params.ok_or(ParamsError::NilParameters)?;
    insert_path(&mut tree, path, value.into())?;
    Ok(tree)
}

impl Parameters {
    /// Insert `value` at the dotted `path`, consuming and returning the tree.
    ///
    /// This is [`append_nested`] for a tree that is known to be present.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::EmptyKey`], [`ParamsError::KeyConflict`] or
    /// [`ParamsError::PathTooDeep`] under the same conditions as
    /// [`append_nested`].
    pub fn with_path(mut self, path: &str, value: impl Into<ParamValue>) -> ParamsResult<Self> {
        insert_path(&mut self, path, value.into())?;
        Ok(self)
    }
}

fn split_path(path: &str) -> ParamsResult<(Vec<&str>, &str)> {
    let mut segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(ParamsError::EmptyKey);
    }
    let leaf = segments.pop().ok_or(ParamsError::EmptyKey)?;
    Ok((segments, leaf))
}

fn insert_path(root: &mut Parameters, path: &str, value: ParamValue) -> ParamsResult<()> {
    let (parents, leaf) = split_path(path)?;
    let depth = parents.len() + 1 + value.depth();
    if depth > MAX_DEPTH {
        return Err(ParamsError::PathTooDeep {
            depth,
            max: MAX_DEPTH,
        });
    }
    let mut current = root;
    for segment in parents {
        current = descend(current, segment)?;
    }
    tracing::trace!(path, kind = value.type_name(), "inserting parameter");
    current.entries_mut().insert(leaf.to_owned(), value);
    Ok(())
}

fn descend<'a>(params: &'a mut Parameters, segment: &str) -> ParamsResult<&'a mut Parameters> {
    let slot = match params.entries_mut().entry(segment.to_owned()) {
        Entry::Vacant(vacant) => vacant.insert(ParamValue::Map(Parameters::new())),
        Entry::Occupied(occupied) => occupied.into_mut(),
    };
    match slot {
        ParamValue::Map(child) => Ok(child),
        leaf => Err(ParamsError::conflict(segment, leaf.type_name())),
    }
}
