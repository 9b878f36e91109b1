//! Action input handling.
//!
//! Raw input strings are parsed once into an immutable [`Inputs`] value,
//! which is then passed by reference to every stage of a run.

use tracing::debug;

use crate::core::constants::input;
use crate::core::types::SecretId;
use crate::error::{InputError, Result};

/// Action inputs exactly as the runner provides them.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub secrets: String,
    pub parse_json: String,
    pub suppress_posix_warning: String,
    pub add_to_steps_env: String,
    pub add_to_step_output: String,
    pub mask_secrets: String,
    pub fail_on_missing: String,
}

/// Validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    /// Distinct secret identifiers in the order given, wildcards allowed
    pub secret_ids: Vec<SecretId>,
    /// Flatten JSON object values into one variable per leaf
    pub parse_json: bool,
    /// Skip the warning for names that had to be rewritten
    pub suppress_posix_warning: bool,
    /// Export each variable to later steps
    pub add_to_steps_env: bool,
    /// Publish each variable as a step output
    pub add_to_step_output: bool,
    /// Register each value with the log masker
    pub mask_secrets: bool,
    /// Abort instead of warning when some secrets cannot be fetched
    pub fail_on_missing: bool,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            secret_ids: Vec::new(),
            parse_json: false,
            suppress_posix_warning: false,
            add_to_steps_env: true,
            add_to_step_output: false,
            mask_secrets: true,
            fail_on_missing: false,
        }
    }
}

impl Inputs {
    /// Parse raw input strings.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidBoolean` if a flag is not a YAML 1.2 core
    /// schema boolean.
    pub fn parse(raw: &RawInputs) -> Result<Self> {
        let inputs = Self {
            secret_ids: parse_multiline(&raw.secrets),
            parse_json: parse_bool(input::PARSE_JSON, &raw.parse_json)?,
            suppress_posix_warning: parse_bool(
                input::SUPPRESS_POSIX_WARNING,
                &raw.suppress_posix_warning,
            )?,
            add_to_steps_env: parse_bool(input::ADD_TO_STEPS_ENV, &raw.add_to_steps_env)?,
            add_to_step_output: parse_bool(input::ADD_TO_STEP_OUTPUT, &raw.add_to_step_output)?,
            mask_secrets: parse_bool(input::MASK_SECRETS, &raw.mask_secrets)?,
            fail_on_missing: parse_bool(input::FAIL_ON_MISSING, &raw.fail_on_missing)?,
        };

        debug!(
            secrets = inputs.secret_ids.len(),
            parse_json = inputs.parse_json,
            add_to_steps_env = inputs.add_to_steps_env,
            add_to_step_output = inputs.add_to_step_output,
            mask_secrets = inputs.mask_secrets,
            "inputs parsed"
        );

        Ok(inputs)
    }

    /// Replace the secret identifiers, deduplicating them.
    pub fn with_secret_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SecretId>,
    {
        self.secret_ids = dedup(ids.into_iter().map(Into::into));
        self
    }
}

/// Split a multiline input into trimmed, non-empty, distinct lines.
pub fn parse_multiline(value: &str) -> Vec<SecretId> {
    dedup(
        value
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string),
    )
}

/// Remove duplicates, keeping the first occurrence of each identifier.
pub fn dedup(ids: impl IntoIterator<Item = SecretId>) -> Vec<SecretId> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

/// Parse a boolean input using the YAML 1.2 core schema.
///
/// # Errors
///
/// Returns `InputError::InvalidBoolean` for anything other than
/// `true | True | TRUE | false | False | FALSE`.
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => Err(InputError::InvalidBoolean {
            name: name.to_string(),
            value: other.to_string(),
        }
        .into()),
    }
}
