//! Secret type.
//!
//! A single secret as returned by the store: its identifier and plaintext
//! value. The value is wiped from memory when the secret is dropped.

use zeroize::Zeroizing;

use crate::core::types::SecretId;

/// A fetched secret with its identifier
#[derive(Clone, PartialEq, Eq)]
pub struct Secret {
    id: SecretId,
    value: Zeroizing<String>,
}

impl Secret {
    /// Create a new secret from an identifier and plaintext value
    pub fn new(id: impl Into<SecretId>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: Zeroizing::new(value.into()),
        }
    }

    /// Secret's identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Plaintext value
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secret")
            .field("id", &self.id)
            .field("value", &"[redacted]")
            .finish()
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_new() {
        let secret = Secret::new("db/password", "hunter2");

        assert_eq!(secret.id(), "db/password");
        assert_eq!(secret.value(), "hunter2");
    }

    #[test]
    fn test_secret_display() {
        let secret = Secret::new("api-key", "sk-test");
        assert_eq!(format!("{}", secret), "api-key");
    }

    #[test]
    fn test_secret_debug_redacts_value() {
        let secret = Secret::new("api-key", "sk-test-12345");
        let debug = format!("{:?}", secret);
        assert!(debug.contains("api-key"));
        assert!(!debug.contains("sk-test-12345"));
    }
}
