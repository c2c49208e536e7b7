//! userAccountControl bitfield decoding
//!
//! Flag values follow libds/common/flags.h in the Samba tree.

use crate::error::{Result, SambaError};
use bitflags::{Flags, bitflags};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::{fmt, str::FromStr};

bitflags! {
    /// https://learn.microsoft.com/en-us/troubleshoot/windows-server/active-directory/useraccountcontrol-manipulate-account-properties
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UserAccountControl: u32 {
        const SCRIPT = 0x0000_0001;
        const ACCOUNTDISABLE = 0x0000_0002;
        const HOMEDIR_REQUIRED = 0x0000_0008;
        const LOCKOUT = 0x0000_0010;
        const PASSWD_NOTREQD = 0x0000_0020;
        const PASSWD_CANT_CHANGE = 0x0000_0040;
        const ENCRYPTED_TEXT_PWD_ALLOWED = 0x0000_0080;
        const TEMP_DUPLICATE_ACCOUNT = 0x0000_0100;
        const NORMAL_ACCOUNT = 0x0000_0200;
        const INTERDOMAIN_TRUST_ACCOUNT = 0x0000_0800;
        const WORKSTATION_TRUST_ACCOUNT = 0x0000_1000;
        const SERVER_TRUST_ACCOUNT = 0x0000_2000;
        const DONT_EXPIRE_PASSWORD = 0x0001_0000;
        const MNS_LOGON_ACCOUNT = 0x0002_0000;
        const SMARTCARD_REQUIRED = 0x0004_0000;
        const TRUSTED_FOR_DELEGATION = 0x0008_0000;
        const NOT_DELEGATED = 0x0010_0000;
        const USE_DES_KEY_ONLY = 0x0020_0000;
        const DONT_REQ_PREAUTH = 0x0040_0000;
        const PASSWORD_EXPIRED = 0x0080_0000;
        const TRUSTED_TO_AUTH_FOR_DELEGATION = 0x0100_0000;
        const NO_AUTH_DATA_REQUIRE = 0x0200_0000;
        const PARTIAL_SECRETS_ACCOUNT = 0x0400_0000;
        const USE_AES_KEY = 0x0800_0000;
    }
}

impl UserAccountControl {
    /// Decode a raw attribute value. Bits outside the known set are kept.
    #[must_use]
    pub const fn decode(value: u32) -> Self {
        Self::from_bits_retain(value)
    }

    /// The raw value reduced to the known flags
    #[must_use]
    pub const fn known(&self) -> u32 {
        self.bits() & Self::all().bits()
    }

    /// Every known flag name paired with whether it is set, in table order
    pub fn flag_states(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        Self::FLAGS
            .iter()
            .map(|flag| (flag.name(), self.contains(*flag.value())))
    }

    /// Names of the set flags, in table order
    pub fn set_flags(&self) -> Vec<&'static str> {
        self.flag_states()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    /// Look up the state of a flag by name; `None` for unknown names
    pub fn flag(&self, name: &str) -> Option<bool> {
        Self::from_name(name).map(|flag| self.contains(flag))
    }

    pub const fn is_disabled(&self) -> bool {
        self.contains(Self::ACCOUNTDISABLE)
    }

    pub const fn is_locked_out(&self) -> bool {
        self.contains(Self::LOCKOUT)
    }
}

impl FromStr for UserAccountControl {
    type Err = SambaError;

    /// Parse the base-10 textual attribute value
    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u32>()
            .map(Self::decode)
            .map_err(|e| SambaError::invalid_account_control(s, e))
    }
}

impl fmt::Display for UserAccountControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.set_flags();
        if names.is_empty() {
            write!(f, "{}", self.bits())
        } else {
            write!(f, "{} ({})", self.bits(), names.join(" | "))
        }
    }
}

impl Serialize for UserAccountControl {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Self::FLAGS.len()))?;
        for (name, set) in self.flag_states() {
            map.serialize_entry(name, &set)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(uac: &UserAccountControl) -> u32 {
        UserAccountControl::FLAGS
            .iter()
            .filter(|flag| uac.flag(flag.name()) == Some(true))
            .fold(0, |acc, flag| acc | flag.value().bits())
    }

    #[test]
    fn test_table_has_all_flags() {
        assert_eq!(UserAccountControl::FLAGS.len(), 24);
        assert_eq!(UserAccountControl::all().bits(), 0x0FFF_3BFB);
    }

    #[test]
    fn test_masks_are_distinct_single_bits() {
        let mut seen = 0u32;
        for flag in UserAccountControl::FLAGS {
            let bits = flag.value().bits();
            assert_eq!(bits.count_ones(), 1, "{} is not a single bit", flag.name());
            assert_eq!(seen & bits, 0, "{} overlaps another flag", flag.name());
            seen |= bits;
        }
    }

    #[test]
    fn test_decode_zero() {
        let uac = UserAccountControl::decode(0);
        assert!(uac.flag_states().all(|(_, set)| !set));
        assert_eq!(uac.flag_states().count(), 24);
    }

    #[test]
    fn test_decode_account_disabled_only() {
        let uac = UserAccountControl::decode(0x0000_0002);

        assert_eq!(uac.set_flags(), vec!["ACCOUNTDISABLE"]);
        assert!(uac.is_disabled());
        assert!(!uac.is_locked_out());
    }

    #[test]
    fn test_decode_two_flags() {
        let uac = UserAccountControl::decode(0x0000_0200 | 0x0001_0000);
        assert_eq!(uac.set_flags(), vec!["NORMAL_ACCOUNT", "DONT_EXPIRE_PASSWORD"]);
    }

    #[test]
    fn test_decode_ignores_unknown_bits() {
        let values = [
            0u32,
            1,
            0x0000_0004,
            0x0000_0202,
            0x0000_4000,
            0x0080_0000,
            0x1000_0000,
            0x8000_0000,
            0xDEAD_BEEF,
            0x1234_5678,
            u32::MAX,
        ];

        for value in values {
            let uac = UserAccountControl::decode(value);
            assert_eq!(reassemble(&uac), value & UserAccountControl::all().bits());
            assert_eq!(uac.known(), reassemble(&uac));
            assert_eq!(uac.bits(), value);
        }
    }

    #[test]
    fn test_every_single_bit() {
        for shift in 0..32 {
            let value = 1u32 << shift;
            let uac = UserAccountControl::decode(value);
            let expected = usize::from(UserAccountControl::all().bits() & value != 0);
            assert_eq!(uac.set_flags().len(), expected, "bit {shift}");
        }
    }

    #[test]
    fn test_trusted_for_delegation_distinct_from_password_expired() {
        let uac = UserAccountControl::decode(0x0008_0000);
        assert_eq!(uac.flag("TRUSTED_FOR_DELEGATION"), Some(true));
        assert_eq!(uac.flag("PASSWORD_EXPIRED"), Some(false));
    }

    #[test]
    fn test_parse_from_str() {
        let uac: UserAccountControl = "66048".parse().unwrap();
        assert!(uac.contains(UserAccountControl::NORMAL_ACCOUNT));
        assert!(uac.contains(UserAccountControl::DONT_EXPIRE_PASSWORD));
        assert_eq!(uac.flag("NOT_A_FLAG"), None);
    }

    #[test]
    fn test_parse_invalid_values() {
        for value in ["", "abc", "-1", "4294967296", "0x200"] {
            let result = value.parse::<UserAccountControl>();
            assert!(
                matches!(result, Err(SambaError::InvalidAccountControl { .. })),
                "{value:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serialize_full_map() {
        let uac = UserAccountControl::decode(0x0000_0202);
        let json = serde_json::to_value(uac).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 24);
        assert_eq!(object["ACCOUNTDISABLE"], true);
        assert_eq!(object["NORMAL_ACCOUNT"], true);
        assert_eq!(object["LOCKOUT"], false);
    }

    #[test]
    fn test_display() {
        assert_eq!(UserAccountControl::decode(0).to_string(), "0");
        assert_eq!(
            UserAccountControl::decode(514).to_string(),
            "514 (ACCOUNTDISABLE | NORMAL_ACCOUNT)"
        );
    }
}
