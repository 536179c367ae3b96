//! Entity keys used to address report tables
//!
//! Campaigns are addressed by integer id. Localities and cost kinds are
//! free-form strings compared case-insensitively: they are trimmed and
//! lowercased on construction, so two spellings of the same name resolve
//! to the same table entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Campaign identifier
pub type CampaignId = u32;

/// Error returned when a string key is blank after trimming
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("key must not be empty")]
pub struct EmptyKey;

macro_rules! normalized_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: &str) -> Result<Self, EmptyKey> {
                let key = raw.trim().to_lowercase();
                if key.is_empty() {
                    return Err(EmptyKey);
                }
                Ok(Self(key))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = EmptyKey;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(&raw)
            }
        }

        impl From<$name> for String {
            fn from(key: $name) -> Self {
                key.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

normalized_key!(
    /// Locality name (e.g. `santiago`)
    LocalityKey
);

normalized_key!(
    /// Expense category (e.g. `advertising`)
    CostKind
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let a = LocalityKey::new("  Santiago ").unwrap();
        let b = LocalityKey::new("SANTIAGO").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "santiago");
    }

    #[test]
    fn test_blank_key_rejected() {
        assert_eq!(CostKind::new("   "), Err(EmptyKey));
        assert_eq!(CostKind::new(""), Err(EmptyKey));
    }

    #[test]
    fn test_deserialize_normalizes() {
        let key: CostKind = serde_json::from_str(r#""Advertising""#).unwrap();
        assert_eq!(key.to_string(), "advertising");
        assert!(serde_json::from_str::<CostKind>(r#""  ""#).is_err());
    }
}
