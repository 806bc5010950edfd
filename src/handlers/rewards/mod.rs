//! Reward management handlers

pub mod request;

pub use request::*;

use axum::Router;

use crate::{
    error::AppResult,
    models::{NewReward, Reward, RewardChanges},
    state::AppState,
};

use super::records::{self, Resource};

impl Resource for Reward {
    type CreateRequest = CreateRewardRequest;
    type UpdateRequest = UpdateRewardRequest;

    fn draft(request: CreateRewardRequest) -> AppResult<NewReward> {
        request.into_draft()
    }

    fn changes(request: UpdateRewardRequest) -> AppResult<RewardChanges> {
        request.into_changes()
    }
}

/// Reward routes
pub fn routes() -> Router<AppState> {
    records::routes::<Reward>()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_utils::{send, TestApp};

    fn mug() -> serde_json::Value {
        json!({
            "name": "Mug",
            "description": "Coffee mug",
            "pointsRequired": 250,
            "category": "merch"
        })
    }

    #[tokio::test]
    async fn test_missing_points_leaves_list_unchanged() {
        let app = TestApp::new();
        let (status, body) = send(
            &app,
            "POST",
            "/api/rewards",
            Some(json!({ "name": "Mug", "description": "Coffee mug", "category": "merch" })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Missing required fields: pointsRequired");

        let (_, body) = send(&app, "GET", "/api/rewards", None).await;
        assert!(body["rewards"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_points_can_be_set_to_zero() {
        let app = TestApp::new();
        let (_, body) = send(&app, "POST", "/api/rewards", Some(mug())).await;
        let id = body["reward"]["_id"].as_str().unwrap().to_string();
        assert_eq!(body["reward"]["status"], "active");

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/rewards?id={id}"),
            Some(json!({ "newPointsRequired": 0 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["reward"]["pointsRequired"].as_f64(), Some(0.0));
        assert_eq!(body["reward"]["name"], "Mug");
    }

    #[tokio::test]
    async fn test_fractional_points_are_stored() {
        let app = TestApp::new();
        let mut body = mug();
        body["pointsRequired"] = json!(10.5);

        let (status, body) = send(&app, "POST", "/api/rewards", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["reward"]["pointsRequired"].as_f64(), Some(10.5));
        let id = body["reward"]["_id"].as_str().unwrap().to_string();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/rewards/{id}"),
            Some(json!({ "newPointsRequired": -0.5 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "newPointsRequired must not be negative");
    }

    #[tokio::test]
    async fn test_points_must_be_a_number() {
        let app = TestApp::new();
        let mut body = mug();
        body["pointsRequired"] = json!("lots");

        let (status, body) = send(&app, "POST", "/api/rewards", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_update_unknown_reward_is_not_found() {
        let app = TestApp::new();
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/rewards/{}", uuid::Uuid::new_v4()),
            Some(json!({ "newName": "Cup" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Reward not found");
    }
}
