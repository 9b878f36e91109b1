//! Constants used throughout sm-inject.
//!
//! Centralizes input names, workflow command names and service limits.

/// Action input names as declared for the workflow.
///
/// The runner exposes each as `INPUT_<NAME>` with the name uppercased.
pub mod input {
    pub const SECRETS: &str = "secrets";
    pub const PARSE_JSON: &str = "parse-json";
    pub const SUPPRESS_POSIX_WARNING: &str = "suppress-posix-warning";
    pub const ADD_TO_STEPS_ENV: &str = "add-to-steps-env";
    pub const ADD_TO_STEP_OUTPUT: &str = "add-to-step-output";
    pub const MASK_SECRETS: &str = "mask-secrets";
    pub const FAIL_ON_MISSING: &str = "fail-on-missing";
}

/// Character that marks an identifier as a pattern.
pub const WILDCARD: char = '*';

/// Maximum identifiers accepted by one `BatchGetSecretValue` call.
pub const BATCH_SIZE: usize = 20;

/// Page size requested from `ListSecrets`.
pub const LIST_PAGE_SIZE: i32 = 100;

/// Environment variable naming the file that collects exported variables.
pub const GITHUB_ENV: &str = "GITHUB_ENV";

/// Environment variable naming the file that collects step outputs.
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Prefix of the heredoc delimiter used in file commands.
pub const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Environment variable that overrides the log filter.
pub const LOG_ENV: &str = "SM_INJECT_LOG";

/// Warning shown when a secret name has to be rewritten.
pub const POSIX_WARNING: &str = "One of the secrets has a name that is not POSIX compliant and hence \
cannot directly be used/injected as an environment variable name. Therefore, it will be transformed \
into a POSIX compliant environment variable name. Enable GitHub Actions Debug Logging \
(https://docs.github.com/en/actions/monitoring-and-troubleshooting-workflows/enabling-debug-logging) \
to see the transformed environment variable name.\nPOSIX compliance: environment variable names can \
only contain upper case letters, digits and underscores. It cannot begin with a digit.";
