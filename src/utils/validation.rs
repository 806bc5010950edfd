//! Input validation utilities

use std::{fmt::Display, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;
use validator::ValidationError;

use crate::{error::AppError, models::non_empty};

/// Simple `local@domain.tld` shape check
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Validate email format (basic validation).
///
/// An empty string is accepted here; whether the field was required is the
/// presence check's concern.
pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || EMAIL_PATTERN.is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Please enter a valid email address".into()))
    }
}

/// Parse a record identifier taken from a path or query string.
///
/// Anything that is not a UUID cannot name a stored document.
pub fn parse_record_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Deserialize an optional closed-set value, treating `""` like an absent field
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Collects required fields that were not supplied.
///
/// Absent, `null` and empty-string values all count as missing.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    /// Take a required text field
    pub fn text(&mut self, name: &'static str, value: Option<String>) -> Option<String> {
        self.value(name, non_empty(value))
    }

    /// Take a required non-text field
    pub fn value<T>(&mut self, name: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(name);
        }
        value
    }

    /// Error describing every missing field
    pub fn into_error(self) -> AppError {
        if self.missing.is_empty() {
            AppError::Validation("All fields are required".to_string())
        } else {
            AppError::Validation(format!(
                "Missing required fields: {}",
                self.missing.join(", ")
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_format() {
        assert!(validate_email_format("user@example.com").is_ok());
        assert!(validate_email_format("invalid").is_err());
        assert!(validate_email_format("@example.com").is_err());
        assert!(validate_email_format("user@example").is_err());
        assert!(validate_email_format("user name@example.com").is_err());
        assert!(validate_email_format("").is_ok());
    }

    #[test]
    fn test_parse_record_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_record_id(&id.to_string()), Some(id));
        assert_eq!(parse_record_id("64f1c2e9a1b2c3d4e5f60718"), None);
    }

    #[test]
    fn test_required_fields_lists_all_missing() {
        let mut required = RequiredFields::default();
        assert!(required.text("subject", Some("Login broken".into())).is_some());
        assert!(required.text("description", Some(String::new())).is_none());
        assert!(required.value::<f64>("pointsRequired", None).is_none());

        assert_eq!(
            required.into_error().to_string(),
            "Missing required fields: description, pointsRequired"
        );
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "empty_as_none")]
        role: Option<crate::models::Role>,
    }

    #[test]
    fn test_empty_as_none() {
        let probe: Probe = serde_json::from_str(r#"{"role": ""}"#).unwrap();
        assert!(probe.role.is_none());
        let probe: Probe = serde_json::from_str(r#"{}"#).unwrap();
        assert!(probe.role.is_none());
        let probe: Probe = serde_json::from_str(r#"{"role": "admin"}"#).unwrap();
        assert_eq!(probe.role, Some(crate::models::Role::Admin));
        assert!(serde_json::from_str::<Probe>(r#"{"role": "root"}"#).is_err());
    }
}
