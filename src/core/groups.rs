//! Group operations

use crate::{
    core::{outcome::Outcome, parser::parse_output, record::GroupRecord, tool::SambaTool},
    error::{Result, SambaError},
    utils::process::{CommandExecutor, ProcessRunner},
};
use tracing::{debug, instrument};

/// Group management through samba-tool
#[derive(Debug)]
pub struct GroupManager<E = ProcessRunner> {
    tool: SambaTool<E>,
}

impl<E: CommandExecutor> GroupManager<E> {
    #[must_use]
    pub const fn new(tool: SambaTool<E>) -> Self {
        Self { tool }
    }

    /// List all groups, sorted
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<String>> {
        self.tool.run_lines(&["group", "list"], true)
    }

    /// Look a group up; `None` when samba-tool prints nothing
    #[instrument(skip(self))]
    pub fn show(&self, name: &str) -> Result<Option<GroupRecord>> {
        let output = self.tool.run(&["group", "show", name], true)?;
        let attributes = parse_output(&output)?;

        if attributes.is_empty() {
            debug!("Group '{}' not found", name);
            return Ok(None);
        }

        Ok(Some(GroupRecord::new(attributes)))
    }

    /// Members of a group, sorted
    ///
    /// # Errors
    /// [`SambaError::NotFound`] when the group does not exist.
    #[instrument(skip(self))]
    pub fn list_members(&self, name: &str) -> Result<Vec<String>> {
        if self.show(name)?.is_none() {
            return Err(SambaError::group_not_found(name));
        }
        self.tool.run_lines(&["group", "listmembers", name], true)
    }

    /// Summary statistics about group memberships, as printed by samba-tool
    #[instrument(skip(self))]
    pub fn stats(&self) -> Result<String> {
        let output = self.tool.run(&["group", "stats"], true)?;
        Ok(output.trim_end().to_string())
    }
}

/// Subcommands reported as unsupported; they never run samba-tool
impl GroupManager {
    pub const fn add() -> Outcome {
        Outcome::Unsupported {
            operation: "group add",
        }
    }

    pub const fn add_members() -> Outcome {
        Outcome::Unsupported {
            operation: "group addmembers",
        }
    }

    pub const fn add_unixattrs() -> Outcome {
        Outcome::Unsupported {
            operation: "group addunixattrs",
        }
    }

    pub const fn create() -> Outcome {
        Outcome::Unsupported {
            operation: "group create",
        }
    }

    pub const fn delete() -> Outcome {
        Outcome::Unsupported {
            operation: "group delete",
        }
    }

    pub const fn edit() -> Outcome {
        Outcome::Unsupported {
            operation: "group edit",
        }
    }

    pub const fn move_() -> Outcome {
        Outcome::Unsupported {
            operation: "group move",
        }
    }

    pub const fn remove_members() -> Outcome {
        Outcome::Unsupported {
            operation: "group removemembers",
        }
    }

    pub const fn rename() -> Outcome {
        Outcome::Unsupported {
            operation: "group rename",
        }
    }
}
