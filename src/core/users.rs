//! User account operations
//!
//! Every state-changing operation looks the account up first and only runs
//! samba-tool when the account is not already in the requested state.

use crate::{
    core::{
        outcome::Outcome,
        parser::parse_output,
        record::UserRecord,
        tool::SambaTool,
    },
    error::{Result, SambaError},
    utils::process::{CommandExecutor, ProcessRunner},
};
use tracing::{debug, info, instrument};

/// User management through samba-tool
#[derive(Debug)]
pub struct UserManager<E = ProcessRunner> {
    tool: SambaTool<E>,
}

impl<E: CommandExecutor> UserManager<E> {
    #[must_use]
    pub const fn new(tool: SambaTool<E>) -> Self {
        Self { tool }
    }

    /// List all users, sorted
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<String>> {
        self.tool.run_lines(&["user", "list"], true)
    }

    /// Look a user up; `None` when samba-tool prints nothing
    #[instrument(skip(self))]
    pub fn show(&self, name: &str) -> Result<Option<UserRecord>> {
        let output = self.tool.run(&["user", "show", name], true)?;
        let attributes = parse_output(&output)?;

        if attributes.is_empty() {
            debug!("User '{}' not found", name);
            return Ok(None);
        }

        UserRecord::from_attributes(name, attributes).map(Some)
    }

    fn require(&self, name: &str) -> Result<UserRecord> {
        self.show(name)?
            .ok_or_else(|| SambaError::user_not_found(name))
    }

    /// Delete a user; deleting a missing user changes nothing
    #[instrument(skip(self))]
    pub fn delete(&self, name: &str) -> Result<Outcome> {
        if self.show(name)?.is_none() {
            return Ok(Outcome::Unchanged);
        }

        let output = self.tool.run(&["user", "delete", name], false)?;
        info!("Deleted user '{}'", name);
        Ok(Outcome::changed(output))
    }

    /// Disable a user; missing or already disabled users are left alone
    #[instrument(skip(self))]
    pub fn disable(&self, name: &str) -> Result<Outcome> {
        match self.show(name)? {
            None => return Ok(Outcome::Unchanged),
            Some(user) if user.is_disabled() => {
                debug!("User '{}' is already disabled", name);
                return Ok(Outcome::Unchanged);
            }
            Some(_) => {}
        }

        let output = self.tool.run(&["user", "disable", name], false)?;
        info!("Disabled user '{}'", name);
        Ok(Outcome::changed(output))
    }

    /// Enable a user
    ///
    /// # Errors
    /// [`SambaError::NotFound`] when the user does not exist.
    #[instrument(skip(self))]
    pub fn enable(&self, name: &str) -> Result<Outcome> {
        let user = self.require(name)?;
        if !user.is_disabled() {
            debug!("User '{}' is already enabled", name);
            return Ok(Outcome::Unchanged);
        }

        let output = self.tool.run(&["user", "enable", name], false)?;
        info!("Enabled user '{}'", name);
        Ok(Outcome::changed(output))
    }

    /// Unlock a user locked out by failed logons
    ///
    /// # Errors
    /// [`SambaError::NotFound`] when the user does not exist.
    #[instrument(skip(self))]
    pub fn unlock(&self, name: &str) -> Result<Outcome> {
        let user = self.require(name)?;
        if !user.is_locked_out() {
            debug!("User '{}' is not locked out", name);
            return Ok(Outcome::Unchanged);
        }

        if let Some(since) = user.lockout_time() {
            debug!("User '{}' locked out since {}", name, since.to_rfc3339());
        }

        let output = self.tool.run(&["user", "unlock", name], false)?;
        info!("Unlocked user '{}'", name);
        Ok(Outcome::changed(output))
    }

    /// Direct group memberships of a user, sorted
    ///
    /// # Errors
    /// [`SambaError::NotFound`] when the user does not exist.
    #[instrument(skip(self))]
    pub fn get_groups(&self, name: &str) -> Result<Vec<String>> {
        self.require(name)?;
        self.tool.run_lines(&["user", "getgroups", name], true)
    }
}

/// Subcommands reported as unsupported; they never run samba-tool
impl UserManager {
    pub const fn add() -> Outcome {
        Outcome::Unsupported { operation: "user add" }
    }

    pub const fn add_unixattrs() -> Outcome {
        Outcome::Unsupported {
            operation: "user addunixattrs",
        }
    }

    pub const fn create() -> Outcome {
        Outcome::Unsupported {
            operation: "user create",
        }
    }

    pub const fn update() -> Outcome {
        Outcome::Unsupported {
            operation: "user edit",
        }
    }

    pub const fn get_password() -> Outcome {
        Outcome::Unsupported {
            operation: "user getpassword",
        }
    }

    pub const fn move_() -> Outcome {
        Outcome::Unsupported {
            operation: "user move",
        }
    }

    pub const fn password() -> Outcome {
        Outcome::Unsupported {
            operation: "user password",
        }
    }

    pub const fn rename() -> Outcome {
        Outcome::Unsupported {
            operation: "user rename",
        }
    }

    pub const fn sensitive() -> Outcome {
        Outcome::Unsupported {
            operation: "user sensitive",
        }
    }

    pub const fn set_expiry() -> Outcome {
        Outcome::Unsupported {
            operation: "user setexpiry",
        }
    }

    pub const fn set_password() -> Outcome {
        Outcome::Unsupported {
            operation: "user setpassword",
        }
    }

    pub const fn set_primary_group() -> Outcome {
        Outcome::Unsupported {
            operation: "user setprimarygroup",
        }
    }

    pub const fn sync_passwords() -> Outcome {
        Outcome::Unsupported {
            operation: "user syncpasswords",
        }
    }
}
