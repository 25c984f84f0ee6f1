//! Error types produced while building parameter trees.

mod types;

pub use types::{ParamsError, ParamsResult};

#[cfg(test)]
mod tests;
