//! Primary error enum for parameter tree construction.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type ParamsResult<T> = Result<T, ParamsError>;

/// Errors that can occur while parsing or inserting parameters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParamsError {
    /// The insertion target was absent.
    #[error("unexpected nil parameters")]
    NilParameters,

    /// A dotted path, or one of its segments, was empty.
    #[error("unexpected empty nestedKey")]
    EmptyKey,

    /// A dotted path tried to descend through a leaf value.
    ///
    /// `found` is `string` for a string leaf and `null` for a null leaf, so
    /// messages read `... it has type: 'null'` rather than Go-style `'<nil>'`.
    #[error("key conflict: key '{key}' already exists and is not a map, it has type: '{found}'")]
    KeyConflict {
        /// Path segment that already holds a leaf.
        key: String,
        /// Type name of the value currently stored under `key`.
        found: &'static str,
    },

    /// A variable string did not have the `name=value` form.
    #[error("no match for input string {index}: '{input}'")]
    PatternMismatch {
        /// Zero-based position of the offending string in the input list.
        index: usize,
        /// The rejected input.
        input: String,
    },

    /// An insertion would nest the tree deeper than [`crate::MAX_DEPTH`].
    #[error("path too deep: {depth} levels exceeds the maximum of {max}")]
    PathTooDeep {
        /// Nesting depth the insertion would produce.
        depth: usize,
        /// The enforced maximum.
        max: usize,
    },

    /// The `name=value` pattern failed to compile.
    #[error("invalid variable pattern: {source}")]
    PatternRegex {
        /// Error reported by the regex compiler.
        #[source]
        source: regex::Error,
    },

    /// A values file did not hold a valid parameter tree.
    #[error("values file error in '{path}': {source}")]
    File {
        /// Path of the offending values file.
        path: Utf8PathBuf,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParamsError {
    /// Construct a conflict error for `key` holding a value of type `found`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nested_params::ParamsError;
    /// let err = ParamsError::conflict("key", "string");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "key conflict: key 'key' already exists and is not a map, it has type: 'string'"
    /// );
    /// ```
    #[must_use]
    pub fn conflict(key: impl Into<String>, found: &'static str) -> Self {
        Self::KeyConflict {
            key: key.into(),
            found,
        }
    }

    /// Returns `true` when the error is a [`ParamsError::KeyConflict`].
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::KeyConflict { .. })
    }
}
