//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an sm-inject command inside the runner environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - GITHUB_ENV and GITHUB_OUTPUT pointing at the temp files
    /// - dummy AWS credentials and region, with the metadata service off
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("sm-inject").expect("failed to find sm-inject binary");
        cmd.env_clear();
        if let Some(path) = std::env::var_os("PATH") {
            cmd.env("PATH", path);
        }
        cmd.env("HOME", self.home.path());
        cmd.env("GITHUB_ENV", self.env_file());
        cmd.env("GITHUB_OUTPUT", self.output_file());
        cmd.env("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE");
        cmd.env("AWS_SECRET_ACCESS_KEY", "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY");
        cmd.env("AWS_REGION", "us-east-1");
        cmd.env("AWS_EC2_METADATA_DISABLED", "true");
        cmd.env("AWS_MAX_ATTEMPTS", "1");
        cmd
    }

    /// Run with the given secrets input and extra flags.
    pub fn run(&self, secrets: &str, args: &[&str]) -> Output {
        self.cmd()
            .env("INPUT_SECRETS", secrets)
            .args(args)
            .output()
            .expect("failed to run sm-inject")
    }

    /// Run against an endpoint where nothing listens.
    pub fn run_unreachable(&self, secrets: &str) -> Output {
        self.cmd()
            .env("INPUT_SECRETS", secrets)
            .args(["--endpoint-url", "http://127.0.0.1:1"])
            .output()
            .expect("failed to run sm-inject")
    }
}
