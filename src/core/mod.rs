//! Core library components.
//!
//! Input parsing, identifier resolution, value transformation and injection,
//! independent of the command line.

pub mod config;
pub mod constants;
pub mod domain;
pub mod flatten;
pub mod host;
pub mod inject;
pub mod pipeline;
pub mod resolve;
pub mod store;
pub mod types;
pub mod validation;
