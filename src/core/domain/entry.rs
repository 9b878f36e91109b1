//! Entry type.
//!
//! A variable name paired with the value it will carry in the pipeline.
//! Entries come from flattening a secret and are renamed by sanitizing.

use zeroize::Zeroizing;

use crate::core::types::VarName;

/// A (name, value) pair ready for injection
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    name: VarName,
    value: Zeroizing<String>,
}

impl Entry {
    /// Create a new entry
    pub fn new(name: impl Into<VarName>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Zeroizing::new(value.into()),
        }
    }

    /// Variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plaintext value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Same value under a different name.
    pub fn renamed(&self, name: impl Into<VarName>) -> Self {
        Self {
            name: name.into(),
            value: self.value.clone(),
        }
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("value", &"[redacted]")
            .finish()
    }
}
