//! Nested key/value parameter trees.
//!
//! This crate models hierarchical configuration as a [`Parameters`] tree whose
//! leaves are strings or nulls. Trees can be parsed from command-line style
//! `key.path=value` strings with [`from_vars`], extended one dotted path at a
//! time with [`append_nested`], and combined with [`merge`], where later trees
//! win at every nesting level.
//!
//! ```rust
//! use nested_params::{Parameters, from_vars, merge};
//! use serde_json::json;
//!
//! let defaults = Parameters::try_from(json!({"a": {"nested": {"key": "avalue"}}}))?;
//! let vars = from_vars(["a.nested.key=overridden", "anotherkey=somevalue"])?;
//!
//! let merged = merge([&defaults, &vars]);
//! assert_eq!(
//!     serde_json::Value::from(merged),
//!     json!({"a": {"nested": {"key": "overridden"}}, "anotherkey": "somevalue"})
//! );
//! # Ok::<_, nested_params::ParamsError>(())
//! ```

mod error;
mod layers;
mod merge;
mod nested;
mod pattern;
mod provider;
mod value;
mod vars;

pub use error::{ParamsError, ParamsResult};
pub use layers::{LayerComposer, LayerSource, ParameterLayer};
pub use merge::merge;
pub use nested::{MAX_DEPTH, append_nested};
pub use pattern::{VarMatch, match_var};
pub use value::{ParamValue, Parameters};
pub use vars::from_vars;
