//! GitHub Actions host.
//!
//! Masks, warnings and debug messages are workflow commands on stdout.
//! Variables and outputs are appended to the files named by `GITHUB_ENV` and
//! `GITHUB_OUTPUT`; older runners without those files get the legacy
//! `set-env`/`set-output` commands instead.

use std::fs::OpenOptions;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

use tracing::trace;
use uuid::Uuid;

use super::command::WorkflowCommand;
use super::Host;
use crate::core::constants::{DELIMITER_PREFIX, GITHUB_ENV, GITHUB_OUTPUT};
use crate::error::{HostError, Result};

/// Host backed by a GitHub Actions runner
#[derive(Debug)]
pub struct Actions<W: Write = Stdout> {
    out: W,
    env_file: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl Actions<Stdout> {
    /// Host writing commands to stdout, with file paths from the environment.
    pub fn from_env() -> Self {
        Self::new(
            io::stdout(),
            file_from_env(GITHUB_ENV),
            file_from_env(GITHUB_OUTPUT),
        )
    }
}

impl<W: Write> Actions<W> {
    /// Host writing commands to `out`.
    ///
    /// `None` for a file selects the legacy stdout command for that kind.
    pub fn new(out: W, env_file: Option<PathBuf>, output_file: Option<PathBuf>) -> Self {
        Self {
            out,
            env_file,
            output_file,
        }
    }

    /// Give back the command writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn issue(&mut self, command: WorkflowCommand<'_>) -> Result<()> {
        writeln!(self.out, "{}", command).map_err(HostError::Io)?;
        Ok(())
    }
}

impl<W: Write> Host for Actions<W> {
    fn redact(&mut self, value: &str) -> Result<()> {
        self.issue(WorkflowCommand::new("add-mask", value))
    }

    fn export_var(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.env_file {
            Some(path) => append_file_command(path, name, value),
            None => self.issue(WorkflowCommand::new("set-env", value).property("name", name)),
        }
    }

    fn set_output(&mut self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => append_file_command(path, name, value),
            None => {
                writeln!(self.out).map_err(HostError::Io)?;
                self.issue(WorkflowCommand::new("set-output", value).property("name", name))
            }
        }
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        self.issue(WorkflowCommand::new("warning", message))
    }

    fn debug(&mut self, message: &str) -> Result<()> {
        self.issue(WorkflowCommand::new("debug", message))
    }

    fn fail(&mut self, message: &str) -> Result<()> {
        self.issue(WorkflowCommand::new("error", message))
    }
}

fn file_from_env(var: &str) -> Option<PathBuf> {
    std::env::var_os(var)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Build a `NAME<<DELIMITER` heredoc entry with a fresh random delimiter.
///
/// # Errors
///
/// Returns `HostError::Delimiter` if the name or value contains the
/// delimiter, which would let the value inject further entries.
pub fn key_value_message(name: &str, value: &str) -> Result<String> {
    let delimiter = format!("{}{}", DELIMITER_PREFIX, Uuid::new_v4());

    if name.contains(&delimiter) {
        return Err(HostError::Delimiter {
            field: "name",
            delimiter,
        }
        .into());
    }
    if value.contains(&delimiter) {
        return Err(HostError::Delimiter {
            field: "value",
            delimiter,
        }
        .into());
    }

    Ok(format!("{}<<{}\n{}\n{}", name, delimiter, value, delimiter))
}

fn append_file_command(path: &Path, name: &str, value: &str) -> Result<()> {
    if !path.exists() {
        return Err(HostError::MissingFile(path.display().to_string()).into());
    }

    let message = key_value_message(name, value)?;
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(HostError::Io)?;
    writeln!(file, "{}", message).map_err(HostError::Io)?;

    trace!(path = %path.display(), name, "appended file command");
    Ok(())
}
