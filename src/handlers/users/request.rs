//! User request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::{
    error::AppResult,
    models::{non_empty, NewUser, Role, UserChanges},
    utils::{empty_as_none, RequiredFields},
};

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    pub username: Option<String>,

    pub password: Option<String>,

    #[validate(custom(function = "crate::utils::validate_email_format"))]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub role: Option<Role>,
}

impl CreateUserRequest {
    pub fn into_draft(self) -> AppResult<NewUser> {
        self.validate()?;

        let mut required = RequiredFields::default();
        let username = required.text("username", self.username);
        let password = required.text("password", self.password);
        let email = required.text("email", self.email);

        let (Some(username), Some(password), Some(email)) = (username, password, email) else {
            return Err(required.into_error());
        };

        Ok(NewUser {
            username,
            password,
            email,
            role: self.role.unwrap_or_default(),
        })
    }
}

/// Update user request; absent or empty fields are left unchanged
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub new_username: Option<String>,

    pub new_password: Option<String>,

    #[validate(custom(function = "crate::utils::validate_email_format"))]
    pub new_email: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub new_role: Option<Role>,
}

impl UpdateUserRequest {
    pub fn into_changes(self) -> AppResult<UserChanges> {
        self.validate()?;

        Ok(UserChanges {
            username: non_empty(self.new_username),
            password: non_empty(self.new_password),
            email: non_empty(self.new_email),
            role: self.new_role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn parse(body: serde_json::Value) -> CreateUserRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let err = parse(serde_json::json!({ "username": "alice", "password": "" }))
            .into_draft()
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields: password, email");
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let err = parse(serde_json::json!({
            "username": "alice",
            "password": "pw",
            "email": "not-an-email"
        }))
        .into_draft()
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Please enter a valid email address"));
    }

    #[test]
    fn test_role_defaults_to_user() {
        let draft = parse(serde_json::json!({
            "username": "alice",
            "password": "pw",
            "email": "alice@example.com",
            "role": ""
        }))
        .into_draft()
        .unwrap();
        assert_eq!(draft.role, Role::User);
    }

    #[test]
    fn test_unknown_role_fails_to_parse() {
        let parsed = serde_json::from_value::<CreateUserRequest>(serde_json::json!({
            "role": "superuser"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_ignores_empty_strings() {
        let changes = serde_json::from_value::<UpdateUserRequest>(serde_json::json!({
            "newUsername": "",
            "newRole": "admin"
        }))
        .unwrap()
        .into_changes()
        .unwrap();

        assert!(changes.username.is_none());
        assert_eq!(changes.role, Some(Role::Admin));
    }
}
