//! Secret store access.
//!
//! Abstracts listing and batch retrieval so the run logic can be exercised
//! against an in-process fake, with AWS Secrets Manager as the real backend.
//!
//! ## Adding a New Store Backend
//!
//! 1. Implement the `SecretStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! #[async_trait]
//! impl SecretStore for Vault {
//!     async fn list_secret_ids(&self) -> Result<Vec<SecretId>> {
//!         // Page through every secret path
//!     }
//!     async fn batch_get(&self, ids: &[SecretId]) -> Result<BatchOutcome> {
//!         // Read each path, recording per-secret failures
//!     }
//! }
//! ```

use async_trait::async_trait;

use crate::core::domain::Secret;
use crate::core::types::SecretId;
use crate::error::Result;

#[cfg(feature = "aws")]
mod aws;

#[cfg(feature = "aws")]
pub use aws::{AwsSecretsManager, AwsSettings};

/// A secret that the store could not return as part of a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// Identifier as requested
    pub id: SecretId,
    /// Service error code (e.g. `ResourceNotFoundException`)
    pub code: String,
    /// Human-readable detail
    pub message: String,
}

impl FetchFailure {
    pub fn new(id: impl Into<SecretId>, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.message.is_empty() {
            write!(f, "{} ({})", self.id, self.code)
        } else {
            write!(f, "{} ({}: {})", self.id, self.code, self.message)
        }
    }
}

/// Result of a batch retrieval.
///
/// Secrets that could be read are in `secrets`, keyed by the name the store
/// reports; the rest are listed in `failures`.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub secrets: Vec<Secret>,
    pub failures: Vec<FetchFailure>,
}

/// Secret store trait.
///
/// # Errors
///
/// Both operations return `StoreError` when the call as a whole fails
/// (network, credentials, permissions). Per-secret problems during a batch
/// are reported through [`BatchOutcome::failures`] instead.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// List the identifiers of every secret visible to the caller.
    ///
    /// Pages through the store until exhausted.
    async fn list_secret_ids(&self) -> Result<Vec<SecretId>>;

    /// Retrieve the current values of the given secrets.
    async fn batch_get(&self, ids: &[SecretId]) -> Result<BatchOutcome>;
}
