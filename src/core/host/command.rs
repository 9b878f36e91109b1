//! Workflow command formatting.
//!
//! Runners parse lines of the form `::name key=value,key=value::message`
//! from stdout. Data and property values are percent-escaped so that
//! newlines and separators cannot break out of the command.

use std::fmt;

/// A single `::command::` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowCommand<'a> {
    name: &'a str,
    properties: Vec<(&'a str, &'a str)>,
    message: &'a str,
}

impl<'a> WorkflowCommand<'a> {
    pub fn new(name: &'a str, message: &'a str) -> Self {
        Self {
            name,
            properties: Vec::new(),
            message,
        }
    }

    /// Attach a `key=value` property.
    pub fn property(mut self, key: &'a str, value: &'a str) -> Self {
        self.properties.push((key, value));
        self
    }
}

impl fmt::Display for WorkflowCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.name)?;

        for (i, (key, value)) in self.properties.iter().enumerate() {
            let sep = if i == 0 { " " } else { "," };
            write!(f, "{}{}={}", sep, key, escape_property(value))?;
        }

        write!(f, "::{}", escape_data(self.message))
    }
}

/// Escape a command message.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value.
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
