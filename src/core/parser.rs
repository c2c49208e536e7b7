//! `key:value` output parsing
//!
//! `samba-tool user show` and `samba-tool group show` print one attribute per
//! line in LDIF style (`name: value`). Parsing never executes anything and
//! never guesses: a line without a separator is an error.

use crate::error::{Result, SambaError};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Attribute name to value mapping
pub type Attributes = BTreeMap<String, String>;

/// Parse `key:value` lines into a mapping.
///
/// Each line is split on its first colon only, so values may contain
/// colons themselves, and the value is kept exactly as it follows the
/// colon. Later duplicates overwrite earlier ones. An empty input produces
/// an empty mapping.
///
/// # Errors
/// Returns [`SambaError::MalformedLine`] for any line without a colon,
/// blank lines included.
#[instrument(skip(lines))]
pub fn parse_lines<I, S>(lines: I) -> Result<Attributes>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut attributes = Attributes::new();

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let (key, value) = line
            .split_once(':')
            .ok_or_else(|| SambaError::malformed_line(index + 1, line))?;

        attributes.insert(key.to_string(), value.to_string());
    }

    debug!("Parsed {} attributes", attributes.len());
    Ok(attributes)
}

/// Join LDIF continuation lines onto the line they continue.
///
/// A line starting with exactly one space continues the previous line; the
/// leading space is removed before joining (RFC 2849 line folding).
pub fn unfold_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        match (line.strip_prefix(' '), lines.last_mut()) {
            (Some(rest), Some(previous)) if !previous.is_empty() => previous.push_str(rest),
            _ => lines.push(line.to_string()),
        }
    }

    lines
}

/// Parse raw LDIF-style tool output.
///
/// Continuation lines are unfolded, blank record separators are dropped
/// and the space after `name:` is stripped from each value before the
/// lines go through [`parse_lines`].
pub fn parse_output(text: &str) -> Result<Attributes> {
    let lines = unfold_lines(text)
        .into_iter()
        .filter(|line| !line.trim().is_empty());

    let mut attributes = parse_lines(lines)?;
    for value in attributes.values_mut() {
        let trimmed = value.trim_start().to_string();
        *value = trimmed;
    }

    Ok(attributes)
}
