//! Pipeline host facilities.
//!
//! Everything a run does to the outside world besides talking to the store
//! goes through [`Host`]: masking values, exporting variables, publishing
//! step outputs and reporting warnings or failure.

mod actions;
mod command;

pub use actions::Actions;
pub use command::{escape_data, escape_property, WorkflowCommand};

use crate::error::Result;

/// Capabilities of the CI runner executing the step.
pub trait Host {
    /// Register a value so the runner redacts it from all later log output.
    fn redact(&mut self, value: &str) -> Result<()>;

    /// Make a variable visible to every later step of the job.
    fn export_var(&mut self, name: &str, value: &str) -> Result<()>;

    /// Publish a named output of the current step.
    fn set_output(&mut self, name: &str, value: &str) -> Result<()>;

    /// Show a warning annotation.
    fn warn(&mut self, message: &str) -> Result<()>;

    /// Emit a message only shown when step debugging is enabled.
    fn debug(&mut self, message: &str) -> Result<()>;

    /// Report the run as failed.
    fn fail(&mut self, message: &str) -> Result<()>;
}
