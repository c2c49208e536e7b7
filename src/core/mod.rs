//! Core functionality for samba-tool administration
//!
//! Contains output parsing, userAccountControl decoding, and the user and
//! group operations built on them.

pub mod filetime;
pub mod groups;
pub mod outcome;
pub mod parser;
pub mod record;
pub mod tool;
pub mod uac;
pub mod users;

pub use groups::GroupManager;
pub use outcome::Outcome;
pub use parser::{Attributes, parse_lines, parse_output, unfold_lines};
pub use record::{GroupRecord, UserRecord};
pub use tool::SambaTool;
pub use uac::UserAccountControl;
pub use users::UserManager;
