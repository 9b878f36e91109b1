//! sm-inject - AWS Secrets Manager secrets for GitHub Actions steps.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sm_inject::cli::{execute, Cli};
use sm_inject::core::constants::LOG_ENV;
use sm_inject::core::host::{Actions, Host};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries workflow commands.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let runner_debug = std::env::var("RUNNER_DEBUG").is_ok_and(|v| v == "1");
        if cli.verbose || runner_debug {
            EnvFilter::new("sm_inject=debug")
        } else {
            EnvFilter::new("sm_inject=warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    match execute(&cli) {
        Ok(report) => {
            info!(injected = report.injected.len(), "done");
        }
        Err(e) => {
            let message = format!("Action failed with error: {}", e);
            if Actions::from_env().fail(&message).is_err() {
                eprintln!("{}", message);
            }
            std::process::exit(1);
        }
    }
}
