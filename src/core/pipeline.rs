//! One complete run.
//!
//! resolve → fetch → flatten → sanitize → inject, strictly in sequence.
//! A store or host error stops the run where it happens.

use tracing::{debug, info};

use crate::core::config::Inputs;
use crate::core::domain::Entry;
use crate::core::flatten::flatten;
use crate::core::host::Host;
use crate::core::inject::inject;
use crate::core::resolve::resolve;
use crate::core::store::{FetchFailure, SecretStore};
use crate::core::types::{SecretId, VarName};
use crate::error::{Result, StoreError};

/// What a run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Identifiers after resolving wildcards
    pub resolved: Vec<SecretId>,
    /// Number of secrets whose values were retrieved
    pub fetched: usize,
    /// Secrets the store could not return
    pub missing: Vec<FetchFailure>,
    /// Injected variable names, in order
    pub injected: Vec<VarName>,
}

/// Run the whole pipeline for one set of inputs.
///
/// Secrets are injected in the order they were resolved. The store keys a
/// returned secret by its name, so one requested by ARN has no position in
/// that order; such secrets follow the others, in the order the store
/// returned them.
///
/// # Errors
///
/// Returns `StoreError` if listing or fetching fails, or
/// `StoreError::Missing` when `fail_on_missing` is set and some secrets
/// could not be retrieved; nothing is injected in either case. Returns
/// `HostError` if injection fails.
pub async fn run<S, H>(store: &S, host: &mut H, inputs: &Inputs) -> Result<Report>
where
    S: SecretStore + ?Sized,
    H: Host + ?Sized,
{
    let mut report = Report {
        resolved: resolve(store, &inputs.secret_ids).await?,
        ..Report::default()
    };

    if report.resolved.is_empty() {
        debug!("no secrets to fetch");
        return Ok(report);
    }

    let mut outcome = store.batch_get(&report.resolved).await?;

    if !outcome.failures.is_empty() {
        if inputs.fail_on_missing {
            return Err(StoreError::Missing(
                outcome.failures.iter().map(ToString::to_string).collect(),
            )
            .into());
        }
        for failure in &outcome.failures {
            host.warn(&format!(
                "Secret '{}' could not be retrieved and was skipped: {}",
                failure.id, failure.code
            ))?;
        }
    }

    // Batches come back in service order; inject in requested order. The
    // sort is stable, so unmatched ids keep their service order at the end.
    outcome.secrets.sort_by_key(|secret| {
        report
            .resolved
            .iter()
            .position(|id| id == secret.id())
            .unwrap_or(usize::MAX)
    });

    let entries: Vec<Entry> = outcome
        .secrets
        .iter()
        .flat_map(|secret| flatten(secret, inputs.parse_json))
        .collect();

    let injected = inject(host, &entries, inputs)?;

    report.fetched = outcome.secrets.len();
    report.missing = outcome.failures;
    report.injected = injected.iter().map(|e| e.name().to_string()).collect();

    info!(
        resolved = report.resolved.len(),
        fetched = report.fetched,
        missing = report.missing.len(),
        injected = report.injected.len(),
        "run complete"
    );
    Ok(report)
}
