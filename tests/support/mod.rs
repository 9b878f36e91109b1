//! Test support utilities for sm-inject integration tests.
//!
//! Provides an in-memory store, a recording host and an isolated runner
//! environment for the binary.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fakes;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fakes::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Runner environment with isolated temp files.
///
/// Holds empty `GITHUB_ENV` and `GITHUB_OUTPUT` files and a home directory
/// so the AWS SDK never reads the developer's profile. No process-global
/// state is mutated; child processes get everything through `.env()`.
pub struct Test {
    /// Temporary directory for runner files
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new runner environment with empty command files.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        std::fs::write(dir.path().join("github_env"), "").expect("failed to create env file");
        std::fs::write(dir.path().join("github_output"), "")
            .expect("failed to create output file");

        Self { dir, home }
    }

    /// Path of the `GITHUB_ENV` file.
    pub fn env_file(&self) -> PathBuf {
        self.dir.path().join("github_env")
    }

    /// Path of the `GITHUB_OUTPUT` file.
    pub fn output_file(&self) -> PathBuf {
        self.dir.path().join("github_output")
    }

    /// Contents of the `GITHUB_ENV` file.
    pub fn env_contents(&self) -> String {
        std::fs::read_to_string(self.env_file()).expect("failed to read env file")
    }

    /// Contents of the `GITHUB_OUTPUT` file.
    pub fn output_contents(&self) -> String {
        std::fs::read_to_string(self.output_file()).expect("failed to read output file")
    }
}
