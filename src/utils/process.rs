//! Process execution utilities
//!
//! Provides process execution with proper error handling and logging.

use crate::error::{Result, SambaError};
use std::{
    env,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};
use tracing::{debug, instrument};

/// Something that can run an argument vector and report what happened.
///
/// Implementations must only fail when the process could not be run at
/// all; a non-zero exit is reported through [`ProcessResult`].
pub trait CommandExecutor {
    fn execute(&self, argv: &[String]) -> Result<ProcessResult>;
}

/// Result of a process execution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessResult {
    /// Exit status code
    pub exit_code: Option<i32>,
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
    /// Whether the process was successful
    pub success: bool,
}

impl ProcessResult {
    /// A successful result with the given stdout
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    /// A failed result with the given exit code and stderr
    pub fn failed(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }
}

/// Utility for running external processes
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Run a command and capture its output
    #[instrument(skip(self))]
    pub fn run_command_with_output(&self, command: &str, args: &[String]) -> Result<ProcessResult> {
        let cmd_str = format!("{} {}", command, args.join(" "));

        let output = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| SambaError::spawn(cmd_str, e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let success = output.status.success();
        let exit_code = output.status.code();

        debug!(
            "Command finished: success={}, exit_code={:?}, stdout_len={}, stderr_len={}",
            success,
            exit_code,
            stdout.len(),
            stderr.len()
        );

        Ok(ProcessResult {
            exit_code,
            stdout,
            stderr,
            success,
        })
    }
}

impl CommandExecutor for ProcessRunner {
    fn execute(&self, argv: &[String]) -> Result<ProcessResult> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| SambaError::config("Cannot execute an empty command line"))?;
        self.run_command_with_output(program, args)
    }
}

/// Locate an executable.
///
/// A name containing a path separator is checked as-is; a bare name is
/// searched for in `PATH`.
#[instrument]
pub fn find_program(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    let found = env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|path| path.is_file());

    debug!("Lookup of '{}' in PATH: {:?}", program, found);
    found
}
