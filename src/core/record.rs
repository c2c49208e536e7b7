//! Directory entries as returned by `samba-tool ... show`

use crate::{
    core::{filetime, parser::Attributes, uac::UserAccountControl},
    error::{Result, SambaError},
};
use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const USER_ACCOUNT_CONTROL: &str = "userAccountControl";
pub const LOCKOUT_TIME: &str = "lockoutTime";

/// A user account with its decoded `userAccountControl`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    name: String,
    attributes: Attributes,
    account_control: UserAccountControl,
}

impl UserRecord {
    /// Build a user record from parsed attributes.
    ///
    /// # Errors
    /// Fails when `userAccountControl` is absent or not a valid `u32`.
    pub fn from_attributes(name: &str, mut attributes: Attributes) -> Result<Self> {
        let raw = attributes
            .remove(USER_ACCOUNT_CONTROL)
            .ok_or_else(|| SambaError::missing_attribute("User", name, USER_ACCOUNT_CONTROL))?;
        let account_control = raw.parse()?;

        Ok(Self {
            name: name.to_string(),
            attributes,
            account_control,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn account_control(&self) -> UserAccountControl {
        self.account_control
    }

    /// Raw value of any attribute other than `userAccountControl`
    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub const fn is_disabled(&self) -> bool {
        self.account_control.is_disabled()
    }

    /// Whether `lockoutTime` is present and non-zero
    pub fn is_locked_out(&self) -> bool {
        self.get(LOCKOUT_TIME)
            .is_some_and(|value| !matches!(value.trim().parse::<i64>(), Ok(0)))
    }

    /// When the account was locked out
    pub fn lockout_time(&self) -> Option<DateTime<Utc>> {
        self.get(LOCKOUT_TIME).and_then(filetime::parse_datetime)
    }
}

impl Serialize for UserRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.attributes.len() + 1))?;
        let mut control_written = false;
        for (key, value) in &self.attributes {
            if !control_written && key.as_str() > USER_ACCOUNT_CONTROL {
                map.serialize_entry(USER_ACCOUNT_CONTROL, &self.account_control)?;
                control_written = true;
            }
            map.serialize_entry(key, value)?;
        }
        if !control_written {
            map.serialize_entry(USER_ACCOUNT_CONTROL, &self.account_control)?;
        }
        map.end()
    }
}

/// A group entry; attributes are kept as returned
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct GroupRecord {
    attributes: Attributes,
}

impl GroupRecord {
    pub const fn new(attributes: Attributes) -> Self {
        Self { attributes }
    }

    pub fn get(&self, attribute: &str) -> Option<&str> {
        self.attributes.get(attribute).map(String::as_str)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
