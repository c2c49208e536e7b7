//! Command-line argument parsing and validation

use crate::config::{DEFAULT_TOOL, OutputFormat};
use clap::{Parser, Subcommand};

/// samba-admin - user and group administration through samba-tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "samba-admin")]
pub struct Args {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format for results
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// samba-tool program name or path
    #[arg(long, global = true, env = "SAMBA_TOOL", default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// LDB URL of the database to operate on
    #[arg(short = 'H', long, global = true, env = "SAMBA_URL")]
    pub url: Option<String>,

    /// Username to authenticate as
    #[arg(short = 'U', long, global = true, env = "SAMBA_USERNAME")]
    pub username: Option<String>,

    /// Password for the authenticating user
    #[arg(long, global = true, env = "SAMBA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },
}

/// Arguments accepted and ignored by operations that are not implemented
#[derive(clap::Args, Debug, Default)]
pub struct Passthrough {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub args: Vec<String>,
}

/// User operations
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List all users
    List,

    /// Display a user AD object
    Show { name: String },

    /// Enable a user
    Enable { name: String },

    /// Disable a user
    Disable { name: String },

    /// Unlock a user account
    Unlock { name: String },

    /// Delete a user
    Delete { name: String },

    /// Get the direct group memberships of a user account
    #[command(name = "getgroups", alias = "groups")]
    GetGroups { name: String },

    /// Add a new user (not supported)
    Add(Passthrough),

    /// Add RFC2307 attributes to a user (not supported)
    #[command(name = "addunixattrs")]
    AddUnixattrs(Passthrough),

    /// Add a new user (not supported)
    Create(Passthrough),

    /// Modify a user AD object (not supported)
    Edit(Passthrough),

    /// Get the password fields of a user/computer account (not supported)
    #[command(name = "getpassword")]
    GetPassword(Passthrough),

    /// Move a user to an organizational unit/container (not supported)
    Move(Passthrough),

    /// Change password for a user account (not supported)
    Password(Passthrough),

    /// Rename a user and related attributes (not supported)
    Rename(Passthrough),

    /// Set/unset or show UF_NOT_DELEGATED for an account (not supported)
    Sensitive(Passthrough),

    /// Set the expiration of a user account (not supported)
    #[command(name = "setexpiry")]
    SetExpiry(Passthrough),

    /// Set or reset the password of a user account (not supported)
    #[command(name = "setpassword")]
    SetPassword(Passthrough),

    /// Set the primary group a user account (not supported)
    #[command(name = "setprimarygroup")]
    SetPrimaryGroup(Passthrough),

    /// Sync the password of user accounts (not supported)
    #[command(name = "syncpasswords")]
    SyncPasswords(Passthrough),
}

/// Group operations
#[derive(Subcommand, Debug)]
pub enum GroupAction {
    /// List all groups
    List,

    /// Display a group AD object
    Show { name: String },

    /// List all members of a group
    #[command(name = "listmembers", alias = "members")]
    ListMembers { name: String },

    /// Summary statistics about group memberships
    Stats,

    /// Create a new group (not supported)
    Add(Passthrough),

    /// Add members to a group (not supported)
    #[command(name = "addmembers")]
    AddMembers(Passthrough),

    /// Add RFC2307 attributes to a group (not supported)
    #[command(name = "addunixattrs")]
    AddUnixattrs(Passthrough),

    /// Create a new group (not supported)
    Create(Passthrough),

    /// Delete a group (not supported)
    Delete(Passthrough),

    /// Modify a group AD object (not supported)
    Edit(Passthrough),

    /// Move a group to an organizational unit/container (not supported)
    Move(Passthrough),

    /// Remove members from a group (not supported)
    #[command(name = "removemembers")]
    RemoveMembers(Passthrough),

    /// Rename a group and related attributes (not supported)
    Rename(Passthrough),
}

/// Parse command line arguments
pub fn parse_args() -> Args {
    Args::parse()
}
