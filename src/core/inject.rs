//! Injection into the pipeline.
//!
//! Each entry is masked, renamed to a POSIX name, exported and published as
//! an output, in that order, depending on the run's switches.

use tracing::debug;

use crate::core::config::Inputs;
use crate::core::constants::POSIX_WARNING;
use crate::core::domain::Entry;
use crate::core::host::Host;
use crate::core::validation::to_posix_name;
use crate::error::Result;

/// Rename an entry to its POSIX form, warning through the host when the
/// name changes.
///
/// The warning is skipped when `suppress_warning` is set.
pub fn sanitize<H>(host: &mut H, entry: &Entry, suppress_warning: bool) -> Result<Entry>
where
    H: Host + ?Sized,
{
    let posix = to_posix_name(entry.name());

    if posix != entry.name() && !suppress_warning {
        host.warn(POSIX_WARNING)?;
        host.debug(&format!(
            "Secret name '{}' is not POSIX compliant. It will be transformed to '{}'.",
            entry.name(),
            posix
        ))?;
    }

    Ok(entry.renamed(posix))
}

/// Inject entries into the host.
///
/// Returns the sanitized entries in injection order.
///
/// # Errors
///
/// Returns `HostError` if the host rejects a command or a file cannot be
/// written. Entries before the failing one have already been injected.
pub fn inject<H>(host: &mut H, entries: &[Entry], inputs: &Inputs) -> Result<Vec<Entry>>
where
    H: Host + ?Sized,
{
    let mut injected = Vec::with_capacity(entries.len());

    for entry in entries {
        if inputs.mask_secrets && !entry.value().is_empty() {
            host.redact(entry.value())?;
        }

        let entry = sanitize(host, entry, inputs.suppress_posix_warning)?;

        if inputs.add_to_steps_env {
            host.debug(&format!("Injecting environment variable '{}'.", entry.name()))?;
            host.export_var(entry.name(), entry.value())?;
        }

        if inputs.add_to_step_output {
            host.debug(&format!("Adding variable '{}' to the step output.", entry.name()))?;
            host.set_output(entry.name(), entry.value())?;
        }

        injected.push(entry);
    }

    debug!(count = injected.len(), "injected entries");
    Ok(injected)
}
