//! Error types for samba-tool administration
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for samba-tool administration
#[derive(Error, Debug)]
pub enum SambaError {
    /// The samba-tool executable could not be located
    #[error("Command '{program}' cannot be found")]
    ToolNotFound { program: String },

    /// Process execution errors
    #[error("Process error: {command} failed: {stderr}")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A line of tool output did not contain a `key:value` separator
    #[error("Malformed output at line {line_number}: '{line}' has no ':' separator")]
    MalformedLine { line_number: usize, line: String },

    /// The userAccountControl attribute was not a base-10 unsigned 32-bit integer
    #[error("Invalid userAccountControl value: '{value}'")]
    InvalidAccountControl {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// A record lacks an attribute the operation depends on
    #[error("{entity} '{name}' has no '{attribute}' attribute")]
    MissingAttribute {
        entity: &'static str,
        name: String,
        attribute: String,
    },

    /// The user or group does not exist
    #[error("{entity} '{name}' does not exist")]
    NotFound { entity: &'static str, name: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SambaError {
    /// Create a new tool-not-found error
    pub fn tool_not_found(program: impl Into<String>) -> Self {
        Self::ToolNotFound {
            program: program.into(),
        }
    }

    /// Create a new process error
    pub fn process(
        command: impl Into<String>,
        exit_code: Option<i32>,
        stdout: impl Into<String>,
        stderr: impl Into<String>,
    ) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
            source: None,
        }
    }

    /// Create a new process error for a command that could not be spawned
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            stdout: String::new(),
            stderr: format!("Failed to execute command: {source}"),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new malformed-line error
    pub fn malformed_line(line_number: usize, line: impl Into<String>) -> Self {
        Self::MalformedLine {
            line_number,
            line: line.into(),
        }
    }

    /// Create a new invalid userAccountControl error
    pub fn invalid_account_control(
        value: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        Self::InvalidAccountControl {
            value: value.into(),
            source,
        }
    }

    /// Create a new missing-attribute error
    pub fn missing_attribute(
        entity: &'static str,
        name: impl Into<String>,
        attribute: impl Into<String>,
    ) -> Self {
        Self::MissingAttribute {
            entity,
            name: name.into(),
            attribute: attribute.into(),
        }
    }

    /// Create a new not-found error for a user
    pub fn user_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "User",
            name: name.into(),
        }
    }

    /// Create a new not-found error for a group
    pub fn group_not_found(name: impl Into<String>) -> Self {
        Self::NotFound {
            entity: "Group",
            name: name.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SambaError>;
