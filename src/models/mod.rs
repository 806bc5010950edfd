//! Domain models
//!
//! This module contains the four record types managed by the dashboard and
//! the [`Record`] contract every store implementation works against.

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

/// A document stored in one collection of the record store.
///
/// `Draft` is a validated creation payload with defaults already applied,
/// `Changes` a set of optional field replacements (merge-only).
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Draft: Send + 'static;
    type Changes: Send + 'static;

    /// Collection (and URL segment) name, e.g. `users`
    const COLLECTION: &'static str;

    /// Key wrapping a single document in responses, e.g. `user`
    const SINGULAR: &'static str;

    /// Capitalised name used in response messages, e.g. `User`
    const TITLE: &'static str;

    /// Message returned when a lookup by id finds nothing
    const NOT_FOUND: &'static str;

    fn id(&self) -> Uuid;

    /// Build a stored document from a draft; `now` becomes both timestamps
    fn from_draft(id: Uuid, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Apply the supplied fields and bump `updated_at`
    fn apply(&mut self, changes: Self::Changes, now: DateTime<Utc>);

    /// Field values that must be unique across the collection
    fn unique_fields(&self) -> Vec<UniqueField> {
        Vec::new()
    }
}

/// A value covered by a uniqueness constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueField {
    pub name: &'static str,
    pub value: String,
    /// Message reported when another document already holds the value
    pub message: &'static str,
}

/// Error returned when a closed set of values does not contain the input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field} '{value}', expected one of: {expected}")]
pub struct UnknownVariant {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}

/// Declares a closed set of string values with its wire representation.
///
/// Generates `as_str`, `ALL`, `Display`, `FromStr` and serde impls that
/// reject anything outside the declared set.
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every accepted value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::models::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    _ => Err($crate::models::UnknownVariant {
                        field: $field,
                        value: s.to_string(),
                        expected: [$($text),+].join(", "),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use text_enum;

pub mod content;
pub mod reward;
pub mod ticket;
pub mod user;

pub use content::*;
pub use reward::*;
pub use ticket::*;
pub use user::*;

/// Keep a supplied string only if it carries a value.
///
/// Empty strings count as "not supplied", for both presence checks on create
/// and merge-only updates.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("a".into())), Some("a".to_string()));
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_unknown_variant_message() {
        let err = "urgent".parse::<TicketPriority>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid priority 'urgent', expected one of: low, medium, high"
        );
    }

    #[test]
    fn test_text_enum_serde() {
        let status: RewardStatus = serde_json::from_str("\"inactive\"").unwrap();
        assert_eq!(status, RewardStatus::Inactive);
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        assert!(serde_json::from_str::<Role>("\"root\"").is_err());
    }
}
