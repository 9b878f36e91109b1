//! sm-inject - AWS Secrets Manager secrets for GitHub Actions steps.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface and input wiring
//! └── core/             # Core library components
//!     ├── config        # Action inputs → immutable Inputs
//!     ├── resolve       # Wildcard patterns → store identifiers
//!     ├── store/        # Secret store trait
//!     │   └── aws       # AWS Secrets Manager backend
//!     ├── flatten       # JSON object values → one entry per leaf
//!     ├── validation    # POSIX variable names
//!     ├── inject        # Mask, export and publish entries
//!     ├── host/         # Runner facilities
//!     │   └── actions   # GitHub Actions workflow and file commands
//!     └── pipeline      # One complete run
//! ```
//!
//! # Features
//!
//! - Wildcard secret selection (`prod/*`)
//! - Optional flattening of JSON secrets into one variable per field
//! - POSIX-safe variable names
//! - Values masked in logs before they are exported

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::Inputs;
pub use crate::core::domain::{Entry, Secret};
pub use crate::core::host::{Actions, Host};
pub use crate::core::pipeline::{run, Report};
pub use crate::core::store::{BatchOutcome, FetchFailure, SecretStore};
