//! Errors raised while reading button options.
//!
//! None of these reach the caller of [`crate::ButtonConfig::from_options`]:
//! each one is logged and the affected option keeps its default.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("option `{key}`: `{value}` is not a number")]
    NotANumber { key: String, value: String },
    #[error("option `{key}`: {value} is outside {range}")]
    OutOfRange {
        key: String,
        value: f32,
        range: &'static str,
    },
    #[error("option `{key}` must not be empty")]
    Empty { key: String },
    #[error("option `{key}` refers to layer {layer}, but only {count} layers exist")]
    UnknownLayer {
        key: String,
        layer: usize,
        count: usize,
    },
    #[error("unrecognised option `{0}`")]
    UnknownOption(String),
}
