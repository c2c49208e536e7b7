//! Command-line interface module
//!
//! Provides argument parsing, command execution and result rendering.

pub mod args;
pub mod commands;
pub mod output;

pub use args::{Args, Command, GroupAction, Passthrough, UserAction, parse_args};
pub use commands::execute_command;
