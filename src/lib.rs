//! # samba-admin
//!
//! User and group administration on top of `samba-tool`, shaped for use by
//! configuration management agents: every state-changing operation is
//! idempotent and reports whether it changed anything.
//!
//! ## Features
//!
//! - Parsing of `samba-tool ... show` output into attribute maps
//! - Decoding of the `userAccountControl` bitfield into named flags
//! - User listing, lookup, enable/disable, unlock, delete and group membership
//! - Group listing, lookup, membership and statistics
//! - Pluggable command execution for testing without a domain controller
//!
//! ## Example
//!
//! ```no_run
//! use samba_admin::{config::ToolConfig, core::{SambaTool, UserManager}};
//!
//! let tool = SambaTool::locate(&ToolConfig::default())?;
//! let users = UserManager::new(tool);
//! if let Some(user) = users.show("alice")? {
//!     println!("disabled: {}", user.is_disabled());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with appropriate verbosity.
///
/// Logs go to stderr; stdout carries command results.
pub fn setup_logging(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
