//! samba-tool invocation
//!
//! Builds the argument vector, runs it through a [`CommandExecutor`] and
//! decides whether a failed run is an error.

use crate::{
    config::ToolConfig,
    error::{Result, SambaError},
    utils::process::{CommandExecutor, ProcessRunner, find_program},
};
use tracing::{debug, instrument};

/// A resolved samba-tool executable bound to an executor
#[derive(Debug)]
pub struct SambaTool<E = ProcessRunner> {
    executor: E,
    program: String,
    connection_args: Vec<String>,
}

impl SambaTool<ProcessRunner> {
    /// Locate samba-tool as configured and run it as a child process
    pub fn locate(config: &ToolConfig) -> Result<Self> {
        Self::with_executor(ProcessRunner::new(), config)
    }
}

impl<E: CommandExecutor> SambaTool<E> {
    /// Locate samba-tool as configured and run it through `executor`
    #[instrument(skip(executor, config), fields(program = %config.program))]
    pub fn with_executor(executor: E, config: &ToolConfig) -> Result<Self> {
        let program = find_program(&config.program)
            .ok_or_else(|| SambaError::tool_not_found(&config.program))?;
        debug!("Using {}", program.display());

        Ok(Self {
            executor,
            program: program.to_string_lossy().into_owned(),
            connection_args: config.connection_args(),
        })
    }

    /// Bind an already known program path without looking it up
    pub fn new(executor: E, program: impl Into<String>, config: &ToolConfig) -> Self {
        Self {
            executor,
            program: program.into(),
            connection_args: config.connection_args(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `samba-tool <args>` and return its stdout.
    ///
    /// With `ignore_error` a non-zero exit still yields stdout (typically
    /// empty, which callers read as "not found").
    ///
    /// # Errors
    /// Fails if the process cannot be run, or exits non-zero while
    /// `ignore_error` is false.
    #[instrument(skip(self))]
    pub fn run(&self, args: &[&str], ignore_error: bool) -> Result<String> {
        let argv: Vec<String> = std::iter::once(self.program.clone())
            .chain(self.connection_args.iter().cloned())
            .chain(args.iter().map(|arg| (*arg).to_string()))
            .collect();

        let cmd_str = self.display_command(args);
        debug!("Running: {}", cmd_str);

        let result = self.executor.execute(&argv)?;

        if !result.success {
            if !ignore_error {
                return Err(SambaError::process(
                    cmd_str,
                    result.exit_code,
                    result.stdout,
                    result.stderr.trim(),
                ));
            }
            debug!(
                "Ignoring failure of '{}' (exit code {:?}): {}",
                cmd_str,
                result.exit_code,
                result.stderr.trim()
            );
        }

        Ok(result.stdout)
    }

    /// Run and split stdout into sorted, non-empty lines
    pub fn run_lines(&self, args: &[&str], ignore_error: bool) -> Result<Vec<String>> {
        let stdout = self.run(args, ignore_error)?;
        let mut lines: Vec<String> = stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        lines.sort();
        Ok(lines)
    }

    /// Command line for logs and errors, with the password redacted
    fn display_command(&self, args: &[&str]) -> String {
        let connection = self.connection_args.iter().map(|arg| {
            if arg.starts_with("--password=") {
                "--password=****"
            } else {
                arg.as_str()
            }
        });

        std::iter::once(self.program.as_str())
            .chain(connection)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
