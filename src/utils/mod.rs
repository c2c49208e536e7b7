//! Utility modules for common functionality
//!
//! Provides process execution and executable lookup.

pub mod process;

pub use process::{CommandExecutor, ProcessResult, ProcessRunner, find_program};
