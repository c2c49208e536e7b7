//! Rendering of command results to stdout

use crate::{
    config::OutputFormat,
    core::{GroupRecord, Outcome, UserRecord, record::LOCKOUT_TIME},
};
use anyhow::Context;
use serde::Serialize;
use std::fmt::Write;

/// Formats results in the configured output format
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    format: OutputFormat,
}

impl Printer {
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn list(&self, items: &[String]) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&items),
            OutputFormat::Text => Ok(items.join("\n")),
        }
    }

    pub fn user(&self, user: &UserRecord) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json(user),
            OutputFormat::Text => {
                let mut text = String::new();
                for (key, value) in user.attributes() {
                    match (key.as_str(), user.lockout_time()) {
                        (LOCKOUT_TIME, Some(since)) => {
                            writeln!(text, "{key}: {value} ({})", since.to_rfc3339())?;
                        }
                        _ => writeln!(text, "{key}: {value}")?,
                    }
                }
                write!(text, "userAccountControl: {}", user.account_control())?;
                Ok(text)
            }
        }
    }

    pub fn group(&self, group: &GroupRecord) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json(group),
            OutputFormat::Text => Ok(group
                .attributes()
                .iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    pub fn outcome(&self, outcome: &Outcome) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json(outcome),
            OutputFormat::Text => Ok(outcome.to_string()),
        }
    }

    pub fn text(&self, text: &str) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json(&text),
            OutputFormat::Text => Ok(text.to_string()),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize result")
}
