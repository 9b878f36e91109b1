//! Identifier resolution.
//!
//! When any requested identifier contains `*`, every identifier in the store
//! is listed and kept if it matches one of the requested patterns. `*` stands
//! for any sequence of characters (including `/`); everything else matches
//! literally and the whole identifier must match.

use regex::Regex;
use tracing::debug;

use crate::core::config::dedup;
use crate::core::constants::WILDCARD;
use crate::core::store::SecretStore;
use crate::core::types::SecretId;
use crate::error::{InputError, Result};

/// Check whether any identifier is a wildcard pattern.
pub fn has_wildcard(ids: &[SecretId]) -> bool {
    ids.iter().any(|id| id.contains(WILDCARD))
}

/// Translate a wildcard pattern into an anchored regular expression.
///
/// # Examples
///
/// ```
/// use sm_inject::core::resolve::pattern_to_regex;
///
/// assert_eq!(pattern_to_regex("db/*"), "^db/.*$");
/// assert_eq!(pattern_to_regex("a.b"), r"^a\.b$");
/// ```
pub fn pattern_to_regex(pattern: &str) -> String {
    let body: Vec<String> = pattern.split(WILDCARD).map(regex::escape).collect();
    format!("^{}$", body.join(".*"))
}

/// Compiled set of wildcard patterns.
#[derive(Debug, Clone)]
pub struct Patterns {
    regexes: Vec<Regex>,
}

impl Patterns {
    /// Compile every pattern.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidPattern` if a pattern cannot be compiled
    /// (only possible for pathologically long input).
    pub fn new(patterns: &[SecretId]) -> Result<Self> {
        let regexes = patterns
            .iter()
            .map(|p| {
                Regex::new(&pattern_to_regex(p)).map_err(|source| InputError::InvalidPattern {
                    pattern: p.clone(),
                    source,
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self { regexes })
    }

    /// Whether an identifier matches at least one pattern.
    pub fn is_match(&self, id: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(id))
    }

    /// Keep the identifiers matching any pattern, each at most once, in
    /// the order given.
    pub fn filter(&self, available: impl IntoIterator<Item = SecretId>) -> Vec<SecretId> {
        dedup(available.into_iter().filter(|id| self.is_match(id)))
    }
}

/// Resolve requested identifiers into the identifiers to fetch.
///
/// Without wildcards the request is returned unchanged and the store is not
/// contacted.
///
/// # Errors
///
/// Returns `StoreError::List` if listing fails and `InputError::InvalidPattern`
/// if a pattern cannot be compiled.
pub async fn resolve<S>(store: &S, requested: &[SecretId]) -> Result<Vec<SecretId>>
where
    S: SecretStore + ?Sized,
{
    if !has_wildcard(requested) {
        return Ok(requested.to_vec());
    }

    debug!("found wildcard secret names");
    let patterns = Patterns::new(requested)?;
    let available = store.list_secret_ids().await?;
    let resolved = patterns.filter(available);

    debug!(
        patterns = requested.len(),
        resolved = resolved.len(),
        "resolved wildcard patterns"
    );
    Ok(resolved)
}
