//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Record, UniqueField};
use crate::constants::collections;

text_enum! {
    /// Dashboard role of a user account
    pub enum Role: "role" {
        Admin => "admin",
        User => "user",
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// User document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    /// Stored and returned as given; this dashboard does not hash passwords
    pub password: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated fields of a user about to be created
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
}

/// Fields to replace on an existing user
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

impl User {
    /// Check if user has admin privileges
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl Record for User {
    type Draft = NewUser;
    type Changes = UserChanges;

    const COLLECTION: &'static str = collections::USERS;
    const SINGULAR: &'static str = "user";
    const TITLE: &'static str = "User";
    const NOT_FOUND: &'static str = "could not find user";

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: NewUser, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: draft.username,
            password: draft.password,
            email: draft.email,
            role: draft.role,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, changes: UserChanges, now: DateTime<Utc>) {
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(password) = changes.password {
            self.password = password;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(role) = changes.role {
            self.role = role;
        }
        self.updated_at = now;
    }

    fn unique_fields(&self) -> Vec<UniqueField> {
        vec![
            UniqueField {
                name: "username",
                value: self.username.clone(),
                message: "Username already exists",
            },
            UniqueField {
                name: "email",
                value: self.email.clone(),
                message: "Email already exists",
            },
        ]
    }
}
