//! Command-line interface.
//!
//! Every flag falls back to the `INPUT_*` variable the runner sets for the
//! matching action input, so the binary runs unchanged as an action step.

use clap::Parser;
use tracing::debug;

use crate::core::config::{Inputs, RawInputs};
use crate::core::host::Actions;
use crate::core::pipeline::{self, Report};
use crate::core::store::SecretStore;
use crate::error::{Result, StoreError};

/// sm-inject - AWS Secrets Manager secrets for GitHub Actions steps.
#[derive(Parser, Debug)]
#[command(
    name = "sm-inject",
    about = "Inject AWS Secrets Manager secrets into GitHub Actions steps",
    version
)]
pub struct Cli {
    /// Secret identifiers, one per line (`*` matches any sequence)
    #[arg(long, env = "INPUT_SECRETS", default_value = "")]
    pub secrets: String,

    /// Flatten JSON object values into one variable per field
    #[arg(long, env = "INPUT_PARSE-JSON", default_value = "false")]
    pub parse_json: String,

    /// Do not warn when a name has to be rewritten to be POSIX compliant
    #[arg(long, env = "INPUT_SUPPRESS-POSIX-WARNING", default_value = "false")]
    pub suppress_posix_warning: String,

    /// Export each secret as an environment variable for later steps
    #[arg(long, env = "INPUT_ADD-TO-STEPS-ENV", default_value = "true")]
    pub add_to_steps_env: String,

    /// Publish each secret as an output of this step
    #[arg(long, env = "INPUT_ADD-TO-STEP-OUTPUT", default_value = "false")]
    pub add_to_step_output: String,

    /// Mask secret values in the job log
    #[arg(long, env = "INPUT_MASK-SECRETS", default_value = "true")]
    pub mask_secrets: String,

    /// Fail instead of warning when a secret cannot be retrieved
    #[arg(long, env = "INPUT_FAIL-ON-MISSING", default_value = "false")]
    pub fail_on_missing: String,

    /// AWS region (defaults to the environment's)
    #[arg(long, env = "INPUT_AWS-REGION")]
    pub aws_region: Option<String>,

    /// Custom Secrets Manager endpoint
    #[arg(long, env = "INPUT_ENDPOINT-URL")]
    pub endpoint_url: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Raw action inputs as given on the command line or by the runner.
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs {
            secrets: self.secrets.clone(),
            parse_json: self.parse_json.clone(),
            suppress_posix_warning: self.suppress_posix_warning.clone(),
            add_to_steps_env: self.add_to_steps_env.clone(),
            add_to_step_output: self.add_to_step_output.clone(),
            mask_secrets: self.mask_secrets.clone(),
            fail_on_missing: self.fail_on_missing.clone(),
        }
    }
}

/// Execute one run against the configured store and the current runner.
///
/// # Errors
///
/// Returns error if the inputs are invalid or the run fails.
pub fn execute(cli: &Cli) -> Result<Report> {
    let inputs = Inputs::parse(&cli.raw_inputs())?;

    if inputs.secret_ids.is_empty() {
        debug!("no secrets requested");
        return Ok(Report::default());
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(StoreError::Runtime)?;

    let mut host = Actions::from_env();
    runtime.block_on(async {
        let store = connect(cli).await?;
        pipeline::run(store.as_ref(), &mut host, &inputs).await
    })
}

#[cfg(feature = "aws")]
async fn connect(cli: &Cli) -> Result<Box<dyn SecretStore>> {
    use crate::core::store::{AwsSecretsManager, AwsSettings};

    let settings = AwsSettings {
        region: cli.aws_region.clone(),
        endpoint_url: cli.endpoint_url.clone(),
    };
    Ok(Box::new(AwsSecretsManager::connect(&settings).await))
}

#[cfg(not(feature = "aws"))]
async fn connect(_cli: &Cli) -> Result<Box<dyn SecretStore>> {
    Err(StoreError::Unavailable.into())
}
