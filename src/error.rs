//! Error types.
//!
//! One top-level [`Error`] wraps a narrower enum per stage so callers can
//! match on where a run went wrong without string inspection.

use thiserror::Error;

/// Top-level error for a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Invalid action inputs.
#[derive(Error, Debug)]
pub enum InputError {
    /// A boolean input outside the YAML 1.2 core schema.
    #[error(
        "input does not meet YAML 1.2 \"Core Schema\" specification: {name} (got '{value}'). \
         Support boolean input list: `true | True | TRUE | false | False | FALSE`"
    )]
    InvalidBoolean { name: String, value: String },

    /// A secret identifier pattern that could not be compiled.
    #[error("invalid secret pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Secret store failures.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to list secrets: {0}")]
    List(String),

    #[error("failed to fetch secret values: {0}")]
    Fetch(String),

    #[error("secrets could not be retrieved: {}", .0.join(", "))]
    Missing(Vec<String>),

    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    #[error("no secret store backend compiled in (rebuild with --features aws)")]
    Unavailable,
}

/// Failures writing to the pipeline host.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("missing file at path: {0}")]
    MissingFile(String),

    #[error("unexpected input: {field} should not contain the delimiter \"{delimiter}\"")]
    Delimiter { field: &'static str, delimiter: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
