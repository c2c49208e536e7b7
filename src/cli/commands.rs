//! Command implementations for the CLI

use crate::{
    cli::{Command, GroupAction, UserAction, output::Printer},
    config::Config,
    core::{GroupManager, Outcome, SambaTool, UserManager},
    error::SambaError,
    utils::process::CommandExecutor,
};
use anyhow::{Context, bail};
use tracing::{info, instrument, warn};

/// Execute the appropriate command based on CLI arguments.
///
/// samba-tool is only located once a subcommand actually needs it.
#[instrument(skip(config))]
pub fn execute_command(config: &Config, command: &Command) -> anyhow::Result<()> {
    let tool = || SambaTool::locate(&config.tool).context("Failed to locate samba-tool");
    let printer = Printer::new(config.format);

    let rendered = match command {
        Command::User { action } => {
            execute_user_command(|| tool().map(UserManager::new), &printer, action)?
        }
        Command::Group { action } => {
            execute_group_command(|| tool().map(GroupManager::new), &printer, action)?
        }
    };

    println!("{rendered}");
    Ok(())
}

/// Execute a user subcommand and render its result
///
/// `users` is only called for subcommands that run samba-tool.
#[instrument(skip(users, printer))]
pub fn execute_user_command<E, F>(
    users: F,
    printer: &Printer,
    action: &UserAction,
) -> anyhow::Result<String>
where
    E: CommandExecutor,
    F: FnOnce() -> anyhow::Result<UserManager<E>>,
{
    match action {
        UserAction::List => printer.list(&users()?.list().context("Failed to list users")?),
        UserAction::Show { name } => {
            let user = users()?
                .show(name)
                .with_context(|| format!("Failed to show user '{name}'"))?
                .ok_or_else(|| SambaError::user_not_found(name))?;
            printer.user(&user)
        }
        UserAction::GetGroups { name } => printer.list(
            &users()?
                .get_groups(name)
                .with_context(|| format!("Failed to get groups of user '{name}'"))?,
        ),
        UserAction::Enable { name } => report(
            printer,
            users()?
                .enable(name)
                .with_context(|| format!("Failed to enable user '{name}'"))?,
        ),
        UserAction::Disable { name } => report(
            printer,
            users()?
                .disable(name)
                .with_context(|| format!("Failed to disable user '{name}'"))?,
        ),
        UserAction::Unlock { name } => report(
            printer,
            users()?
                .unlock(name)
                .with_context(|| format!("Failed to unlock user '{name}'"))?,
        ),
        UserAction::Delete { name } => report(
            printer,
            users()?
                .delete(name)
                .with_context(|| format!("Failed to delete user '{name}'"))?,
        ),
        UserAction::Add(_) => report(printer, UserManager::add()),
        UserAction::AddUnixattrs(_) => report(printer, UserManager::add_unixattrs()),
        UserAction::Create(_) => report(printer, UserManager::create()),
        UserAction::Edit(_) => report(printer, UserManager::update()),
        UserAction::GetPassword(_) => report(printer, UserManager::get_password()),
        UserAction::Move(_) => report(printer, UserManager::move_()),
        UserAction::Password(_) => report(printer, UserManager::password()),
        UserAction::Rename(_) => report(printer, UserManager::rename()),
        UserAction::Sensitive(_) => report(printer, UserManager::sensitive()),
        UserAction::SetExpiry(_) => report(printer, UserManager::set_expiry()),
        UserAction::SetPassword(_) => report(printer, UserManager::set_password()),
        UserAction::SetPrimaryGroup(_) => report(printer, UserManager::set_primary_group()),
        UserAction::SyncPasswords(_) => report(printer, UserManager::sync_passwords()),
    }
}

/// Execute a group subcommand and render its result
#[instrument(skip(groups, printer))]
pub fn execute_group_command<E, F>(
    groups: F,
    printer: &Printer,
    action: &GroupAction,
) -> anyhow::Result<String>
where
    E: CommandExecutor,
    F: FnOnce() -> anyhow::Result<GroupManager<E>>,
{
    match action {
        GroupAction::List => printer.list(&groups()?.list().context("Failed to list groups")?),
        GroupAction::Show { name } => {
            let group = groups()?
                .show(name)
                .with_context(|| format!("Failed to show group '{name}'"))?
                .ok_or_else(|| SambaError::group_not_found(name))?;
            printer.group(&group)
        }
        GroupAction::ListMembers { name } => printer.list(
            &groups()?
                .list_members(name)
                .with_context(|| format!("Failed to list members of group '{name}'"))?,
        ),
        GroupAction::Stats => printer.text(
            &groups()?
                .stats()
                .context("Failed to collect group statistics")?,
        ),
        GroupAction::Add(_) => report(printer, GroupManager::add()),
        GroupAction::AddMembers(_) => report(printer, GroupManager::add_members()),
        GroupAction::AddUnixattrs(_) => report(printer, GroupManager::add_unixattrs()),
        GroupAction::Create(_) => report(printer, GroupManager::create()),
        GroupAction::Delete(_) => report(printer, GroupManager::delete()),
        GroupAction::Edit(_) => report(printer, GroupManager::edit()),
        GroupAction::Move(_) => report(printer, GroupManager::move_()),
        GroupAction::RemoveMembers(_) => report(printer, GroupManager::remove_members()),
        GroupAction::Rename(_) => report(printer, GroupManager::rename()),
    }
}

/// Render an outcome; unsupported operations are reported as errors
fn report(printer: &Printer, outcome: Outcome) -> anyhow::Result<String> {
    match &outcome {
        Outcome::Unsupported { operation } => {
            warn!("Operation '{}' is not supported", operation);
            bail!("Operation '{operation}' is not supported");
        }
        Outcome::Changed { .. } => info!("{}", outcome),
        Outcome::Unchanged => info!("Nothing to do"),
    }
    printer.outcome(&outcome)
}
