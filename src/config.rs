//! Configuration management for samba-tool administration
//!
//! Centralizes configuration options and provides validation.

use crate::{cli::Args, error::SambaError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default name of the directory-service tool
pub const DEFAULT_TOOL: &str = "samba-tool";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// How results are printed
    pub format: OutputFormat,
    /// samba-tool invocation settings
    pub tool: ToolConfig,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// samba-tool invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Program name or path
    pub program: String,
    /// LDB URL of the database to operate on (`-H`)
    pub url: Option<String>,
    /// Username to authenticate as (`-U`)
    pub username: Option<String>,
    /// Password for the authenticating user
    #[serde(skip_serializing, default)]
    pub password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            format: OutputFormat::default(),
            tool: ToolConfig::default(),
        }
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_TOOL.to_string(),
            url: None,
            username: None,
            password: None,
        }
    }
}

impl ToolConfig {
    /// Connection options placed between the program and the subcommand
    pub fn connection_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(url) = &self.url {
            args.push("-H".to_string());
            args.push(url.clone());
        }
        if let Some(username) = &self.username {
            args.push("-U".to_string());
            args.push(username.clone());
        }
        if let Some(password) = &self.password {
            args.push(format!("--password={password}"));
        }

        args
    }
}

impl Config {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, SambaError> {
        let config = Self {
            debug: args.debug,
            format: args.format,
            tool: ToolConfig {
                program: args.tool.clone(),
                url: args.url.clone(),
                username: args.username.clone(),
                password: args.password.clone(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SambaError> {
        if self.tool.program.trim().is_empty() {
            return Err(SambaError::config("samba-tool program must not be empty"));
        }

        for (flag, value) in [("-H", &self.tool.url), ("-U", &self.tool.username)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(SambaError::config(format!("{flag} must not be empty")));
            }
        }

        if self.tool.password.is_some() && self.tool.username.is_none() {
            return Err(SambaError::config("--password requires -U/--username"));
        }

        Ok(())
    }
}
