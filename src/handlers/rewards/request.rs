//! Reward request DTOs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{non_empty, NewReward, RewardChanges, RewardStatus},
    utils::{empty_as_none, parse_datetime, RequiredFields},
};

/// Create reward request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRewardRequest {
    pub name: Option<String>,

    pub description: Option<String>,

    /// Any non-negative number, fractions included
    #[validate(range(min = 0.0, message = "pointsRequired must not be negative"))]
    pub points_required: Option<f64>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<RewardStatus>,

    pub category: Option<String>,

    /// RFC 3339 timestamp or `YYYY-MM-DD`
    pub expiration_date: Option<String>,
}

impl CreateRewardRequest {
    pub fn into_draft(self) -> AppResult<NewReward> {
        self.validate()?;

        let mut required = RequiredFields::default();
        let name = required.text("name", self.name);
        let description = required.text("description", self.description);
        let points_required = required.value("pointsRequired", self.points_required);
        let category = required.text("category", self.category);

        let (Some(name), Some(description), Some(points_required), Some(category)) =
            (name, description, points_required, category)
        else {
            return Err(required.into_error());
        };

        Ok(NewReward {
            name,
            description,
            points_required: finite("pointsRequired", points_required)?,
            status: self.status.unwrap_or_default(),
            category,
            expiration_date: expiration("expirationDate", self.expiration_date)?,
        })
    }
}

/// Update reward request
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRewardRequest {
    pub new_name: Option<String>,

    pub new_description: Option<String>,

    /// Zero is a supplied value
    #[validate(range(min = 0.0, message = "newPointsRequired must not be negative"))]
    pub new_points_required: Option<f64>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub new_status: Option<RewardStatus>,

    pub new_category: Option<String>,

    pub new_expiration_date: Option<String>,
}

impl UpdateRewardRequest {
    pub fn into_changes(self) -> AppResult<RewardChanges> {
        self.validate()?;

        Ok(RewardChanges {
            name: non_empty(self.new_name),
            description: non_empty(self.new_description),
            points_required: self
                .new_points_required
                .map(|points| finite("newPointsRequired", points))
                .transpose()?,
            status: self.new_status,
            category: non_empty(self.new_category),
            expiration_date: expiration("newExpirationDate", self.new_expiration_date)?,
        })
    }
}

/// `range` lets NaN through, so points are also checked for being a real number
fn finite(field: &str, points: f64) -> AppResult<f64> {
    if points.is_finite() {
        Ok(points)
    } else {
        Err(AppError::Validation(format!("{field} must be a number")))
    }
}

fn expiration(field: &str, raw: Option<String>) -> AppResult<Option<DateTime<Utc>>> {
    match non_empty(raw) {
        None => Ok(None),
        Some(raw) => parse_datetime(&raw)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("Invalid {field} '{raw}'"))),
    }
}
