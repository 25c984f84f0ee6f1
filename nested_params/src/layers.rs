//! Ordered parameter layers with provenance.
//!
//! A [`LayerComposer`] collects defaults, values files and command-line vars
//! in precedence order. Each layer remembers where it came from so failures
//! and debug logs can name their origin; [`LayerComposer::merge`] then folds
//! the layers with [`merge`], later layers winning.

use camino::Utf8PathBuf;

use crate::{Parameters, ParamsError, ParamsResult, from_vars, merge};

/// Origin of a parameter layer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum LayerSource {
    /// Built-in default parameters.
    Defaults,
    /// A JSON values file.
    File,
    /// `name=value` strings.
    Vars,
}

/// A parameter tree tagged with its origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterLayer {
    source: LayerSource,
    params: Parameters,
    path: Option<Utf8PathBuf>,
}

impl ParameterLayer {
    /// Where the layer came from.
    #[must_use]
    pub const fn source(&self) -> LayerSource {
        self.source
    }

    /// Path of the values file, for file layers.
    #[must_use]
    pub const fn path(&self) -> Option<&Utf8PathBuf> {
        self.path.as_ref()
    }

    /// The layer's tree.
    #[must_use]
    pub const fn params(&self) -> &Parameters {
        &self.params
    }
}

/// Ordered collection of parameter layers.
///
/// # Examples
///
/// ```
/// use nested_params::LayerComposer;
///
/// let mut composer = LayerComposer::new();
/// composer.push_defaults([("greeting", "hello")].into_iter().collect());
/// composer.push_file_json(r#"{"audience": {"name": "team"}}"#, "values.json")?;
/// composer.push_vars(["greeting=hi", "audience.name=world"])?;
///
/// let merged = composer.merge();
/// assert_eq!(merged.get("greeting").and_then(|v| v.as_str()), Some("hi"));
/// assert_eq!(merged.get_path("audience.name").and_then(|v| v.as_str()), Some("world"));
/// # Ok::<_, nested_params::ParamsError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayerComposer {
    layers: Vec<ParameterLayer>,
}

impl LayerComposer {
    /// A composer with no layers.
    #[must_use]
    pub const fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Append `params` as the defaults layer.
    pub fn push_defaults(&mut self, params: Parameters) {
        self.layers.push(ParameterLayer {
            source: LayerSource::Defaults,
            params,
            path: None,
        });
    }

    /// Decode the JSON text of the values file at `path` and append it.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::File`] naming `path` when the text is not a
    /// JSON object of string, null and nested-object values. Nothing is
    /// appended then.
    pub fn push_file_json(&mut self, json: &str, path: impl Into<Utf8PathBuf>) -> ParamsResult<()> {
        let file_path = path.into();
        let params = serde_json::from_str(json).map_err(|source| ParamsError::File {
            path: file_path.clone(),
            source,
        })?;
        self.layers.push(ParameterLayer {
            source: LayerSource::File,
            params,
            path: Some(file_path),
        });
        Ok(())
    }

    /// Parse `vars` with [`from_vars`] and append the result.
    ///
    /// # Errors
    ///
    /// Returns the parse error; nothing is appended then.
    pub fn push_vars<I, S>(&mut self, vars: I) -> ParamsResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let params = from_vars(vars)?;
        self.layers.push(ParameterLayer {
            source: LayerSource::Vars,
            params,
            path: None,
        });
        Ok(())
    }

    /// Layers in the order they were pushed.
    #[must_use]
    pub fn layers(&self) -> &[ParameterLayer] {
        &self.layers
    }

    /// Merge every layer, later layers taking precedence.
    #[must_use]
    pub fn merge(&self) -> Parameters {
        for (position, layer) in self.layers.iter().enumerate() {
            tracing::debug!(
                position,
                source = ?layer.source,
                path = ?layer.path,
                keys = layer.params.len(),
                "merging parameter layer"
            );
        }
        merge(self.layers.iter().map(ParameterLayer::params))
    }
}
