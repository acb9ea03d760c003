//! The `Entry` type stored inside a vault.
//!
//! Entries serialize as `{"name": …, "address": …, "secret": …}`.  The
//! `name` field is omitted for unnamed entries.  Secret material is wiped
//! when an `Entry` is dropped and never shows up in `Debug` output.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::KeyPair;

/// One stored identity.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Entry {
    /// Optional display label.  Not required to be unique.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Checksummed `0x…` address derived from `secret`.
    pub address: String,

    /// Hex-encoded private key, no prefix.
    pub secret: String,
}

impl Entry {
    /// Build an entry from a fresh key pair.  An empty name means unnamed.
    pub fn from_keypair(pair: &KeyPair, name: Option<&str>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()).map(str::to_string),
            address: pair.address.clone(),
            secret: pair.secret.to_string(),
        }
    }

    /// Whether `query` equals this entry's name or address, ignoring case.
    ///
    /// Unnamed entries never match on name.
    pub fn matches(&self, query: &str) -> bool {
        let name_hit = self
            .name
            .as_deref()
            .is_some_and(|name| eq_ignore_case(name, query));
        name_hit || eq_ignore_case(&self.address, query)
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("name", &self.name)
            .field("address", &self.address)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: Option<&str>, address: &str) -> Entry {
        Entry {
            name: name.map(str::to_string),
            address: address.to_string(),
            secret: "11".repeat(32),
        }
    }

    #[test]
    fn matches_name_and_address_ignoring_case() {
        let e = entry(Some("Alice"), "0xAbCd000000000000000000000000000000000001");
        assert!(e.matches("alice"));
        assert!(e.matches("ALICE"));
        assert!(e.matches("0xabcd000000000000000000000000000000000001"));
        assert!(!e.matches("bob"));
    }

    #[test]
    fn unnamed_entry_does_not_match_empty_query() {
        let e = entry(None, "0x0000000000000000000000000000000000000001");
        assert!(!e.matches(""));
    }

    #[test]
    fn matches_non_ascii_names() {
        let e = entry(Some("Ärger"), "0x01");
        assert!(e.matches("ärger"));
    }

    #[test]
    fn unnamed_entry_omits_name_field() {
        let json = serde_json::to_string(&entry(None, "0x01")).unwrap();
        assert!(!json.contains("name"));

        let parsed: Entry = serde_json::from_str(r#"{"address":"0x01","secret":"ab"}"#).unwrap();
        assert_eq!(parsed.name, None);
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", entry(Some("a"), "0x01"));
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains(&"11".repeat(32)));
    }
}
