//! Snapshot Types
//!
//! Plain data describing a server, its roles and the acting member at the
//! moment a reorder is attempted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::error::{Error, Result};

mod role;
mod server;

pub use role::{Rank, Role};
pub use server::{Member, Server};

/// Declares a validated string identifier.
///
/// Identifiers are opaque to this crate; the only constraint is that they are
/// non-empty.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident => $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(SmolStr);

        impl $name {
            /// Validate and wrap an identifier.
            pub fn new(value: impl AsRef<str>) -> Result<Self> {
                let value = value.as_ref();
                if value.is_empty() {
                    return Err(Error::InvalidId {
                        kind: $kind,
                        value: value.to_owned(),
                    });
                }
                Ok(Self(SmolStr::new(value)))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0.to_string()
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Role identifier.
    RoleId => "role"
);

string_id!(
    /// User identifier.
    UserId => "user"
);

string_id!(
    /// Server identifier.
    ServerId => "server"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_rejects_empty() {
        assert!(RoleId::new("").is_err());
        assert!(matches!(
            UserId::new(""),
            Err(Error::InvalidId { kind: "user", .. })
        ));
    }

    #[test]
    fn test_id_allows_spaces() {
        let id = RoleId::new("Senior Mod").unwrap();
        assert_eq!(id.as_str(), "Senior Mod");

        let parsed: RoleId = serde_json::from_str("\"Senior Mod\"").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_id_display_and_parse() {
        let id: ServerId = "01HZX3".parse().unwrap();
        assert_eq!(id.to_string(), "01HZX3");
        assert_eq!(id.as_str(), "01HZX3");
    }

    #[test]
    fn test_id_deserialize_validates() {
        let ok: RoleId = serde_json::from_str("\"mod\"").unwrap();
        assert_eq!(ok.as_str(), "mod");

        let err = serde_json::from_str::<RoleId>("\"\"");
        assert!(err.is_err());
    }
}
