//! Result of a state-changing operation

use serde::Serialize;
use std::fmt;

/// What an operation did to the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum Outcome {
    /// The directory already was in the requested state
    Unchanged,
    /// samba-tool was run to change the directory
    Changed {
        #[serde(skip_serializing_if = "String::is_empty")]
        output: String,
    },
    /// The operation is not implemented
    Unsupported { operation: &'static str },
}

impl Outcome {
    pub(crate) fn changed(output: impl Into<String>) -> Self {
        Self::Changed {
            output: output.into().trim_end().to_string(),
        }
    }

    pub const fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::Changed { output } if output.is_empty() => write!(f, "changed"),
            Self::Changed { output } => write!(f, "changed: {output}"),
            Self::Unsupported { operation } => write!(f, "'{operation}' is not supported"),
        }
    }
}
