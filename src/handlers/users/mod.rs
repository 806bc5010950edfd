//! User management handlers

pub mod request;

pub use request::*;

use axum::Router;

use crate::{
    error::AppResult,
    models::{NewUser, User, UserChanges},
    state::AppState,
};

use super::records::{self, Resource};

impl Resource for User {
    type CreateRequest = CreateUserRequest;
    type UpdateRequest = UpdateUserRequest;

    fn draft(request: CreateUserRequest) -> AppResult<NewUser> {
        request.into_draft()
    }

    fn changes(request: UpdateUserRequest) -> AppResult<UserChanges> {
        request.into_changes()
    }
}

/// User routes
pub fn routes() -> Router<AppState> {
    records::routes::<User>()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_utils::{send, TestApp};

    fn alice() -> serde_json::Value {
        json!({ "username": "alice", "password": "pw", "email": "alice@example.com" })
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let app = TestApp::new();

        let (status, body) = send(&app, "POST", "/api/users", Some(alice())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "User created successfully");
        assert_eq!(body["user"]["role"], "user");

        let id = body["user"]["_id"].as_str().unwrap().to_string();
        let (status, body) = send(&app, "GET", &format!("/api/users/{id}"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["user"]["username"], "alice");
    }

    #[tokio::test]
    async fn test_duplicate_username_or_email_conflicts() {
        let app = TestApp::new();
        send(&app, "POST", "/api/users", Some(alice())).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({ "username": "alice", "password": "pw", "email": "other@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Username already exists");

        let (status, body) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({ "username": "bob", "password": "pw", "email": "alice@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Email already exists");

        let (_, body) = send(&app, "GET", "/api/users", None).await;
        assert_eq!(body["users"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_to_taken_email_conflicts() {
        let app = TestApp::new();
        send(&app, "POST", "/api/users", Some(alice())).await;
        let (_, body) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({ "username": "bob", "password": "pw", "email": "bob@example.com" })),
        )
        .await;
        let bob = body["user"]["_id"].as_str().unwrap().to_string();

        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/users?id={bob}"),
            Some(json!({ "newEmail": "alice@example.com" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/users?id={bob}"),
            Some(json!({ "newRole": "admin" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User updated");
        assert_eq!(body["user"]["role"], "admin");
        assert_eq!(body["user"]["email"], "bob@example.com");
    }

    #[tokio::test]
    async fn test_invalid_email_is_bad_request() {
        let app = TestApp::new();
        let (status, body) = send(
            &app,
            "POST",
            "/api/users",
            Some(json!({ "username": "alice", "password": "pw", "email": "nope" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Please enter a valid email address");
    }
}
