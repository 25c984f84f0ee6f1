//! The nested parameter tree and its value type.
//!
//! A [`Parameters`] tree maps string keys to [`ParamValue`]s. A value is a
//! string, an explicit null, or another tree, so every tree serializes
//! losslessly to JSON and back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ParamsError, ParamsResult};

/// A single value stored in a [`Parameters`] tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A string leaf.
    String(String),
    /// An explicit null leaf.
    Null,
    /// A nested tree.
    Map(Parameters),
}

impl ParamValue {
    /// Name of the value's shape, used in diagnostics.
    ///
    /// ```
    /// use nested_params::{ParamValue, Parameters};
    /// assert_eq!(ParamValue::from("x").type_name(), "string");
    /// assert_eq!(ParamValue::Null.type_name(), "null");
    /// assert_eq!(ParamValue::from(Parameters::new()).type_name(), "map");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Null => "null",
            Self::Map(_) => "map",
        }
    }

    /// Returns the string leaf, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            Self::Null | Self::Map(_) => None,
        }
    }

    /// Returns the nested tree, if this is one.
    #[must_use]
    pub const fn as_map(&self) -> Option<&Parameters> {
        match self {
            Self::Map(map) => Some(map),
            Self::String(_) | Self::Null => None,
        }
    }

    /// Levels of nested maps this value spans; `0` for leaves.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Map(map) => map.depth(),
            Self::String(_) | Self::Null => 0,
        }
    }

    /// Returns `true` for the null leaf.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Option<String>> for ParamValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::String)
    }
}

impl From<Parameters> for ParamValue {
    fn from(value: Parameters) -> Self {
        Self::Map(value)
    }
}

/// Hierarchical key/value parameters.
///
/// Keys are unique and iteration is in key order. Trees are built by
/// [`crate::from_vars`], [`crate::append_nested`] and [`crate::merge`], or
/// decoded from JSON.
///
/// # Examples
///
/// ```
/// use nested_params::Parameters;
///
/// let params = Parameters::from_json_str(r#"{"a": {"b": "c"}, "d": null}"#)?;
/// assert_eq!(params.get_path("a.b").and_then(|v| v.as_str()), Some("c"));
/// assert!(params.get("d").is_some_and(|v| v.is_null()));
/// # Ok::<_, nested_params::ParamsError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, ParamValue>);

impl Parameters {
    /// Create an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the tree has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Levels of nested maps, counting this tree as one.
    ///
    /// ```
    /// use nested_params::{Parameters, from_vars};
    /// assert_eq!(Parameters::new().depth(), 1);
    /// assert_eq!(from_vars(["a.b.c=x", "d=y"])?.depth(), 3);
    /// # Ok::<_, nested_params::ParamsError>(())
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.0.values().map(ParamValue::depth).max().unwrap_or(0)
    }

    /// Look up a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Look up a dotted path such as `a.b.c`.
    ///
    /// Returns `None` when any segment is missing or an intermediate segment
    /// is not a nested tree.
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&ParamValue> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        segments.try_fold(self.get(first)?, |current, segment| {
            current.as_map()?.get(segment)
        })
    }

    /// Iterate over top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Iterate over top-level keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Decode a tree from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Json`] when the text is not a JSON object whose
    /// leaves are all strings or nulls.
    pub fn from_json_str(json: &str) -> ParamsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the tree as compact JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Json`] if the serializer fails.
    pub fn to_json_string(&self) -> ParamsResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub(crate) const fn entries_mut(&mut self) -> &mut BTreeMap<String, ParamValue> {
        &mut self.0
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Parameters {
    type Item = (String, ParamValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl TryFrom<serde_json::Value> for Parameters {
    type Error = ParamsError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(value)?)
    }
}

impl From<Parameters> for serde_json::Value {
    fn from(params: Parameters) -> Self {
        Self::Object(
            params
                .into_iter()
                .map(|(key, value)| (key, value.into()))
                .collect(),
        )
    }
}

impl From<ParamValue> for serde_json::Value {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::String(text) => Self::String(text),
            ParamValue::Null => Self::Null,
            ParamValue::Map(map) => map.into(),
        }
    }
}

#[cfg(test)]
mod tests;
