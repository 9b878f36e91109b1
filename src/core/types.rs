//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A secret identifier as known to the store (name or pattern, e.g. `db/*`).
pub type SecretId = String;

/// A variable name as injected into the pipeline (e.g. `DB_USER`).
pub type VarName = String;
