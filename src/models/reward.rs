//! Reward model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;
use crate::constants::collections;

text_enum! {
    /// Whether a reward can currently be redeemed
    pub enum RewardStatus: "status" {
        Active => "active",
        Inactive => "inactive",
    }
}

impl Default for RewardStatus {
    fn default() -> Self {
        RewardStatus::Active
    }
}

impl RewardStatus {
    pub fn toggled(self) -> Self {
        match self {
            RewardStatus::Active => RewardStatus::Inactive,
            RewardStatus::Inactive => RewardStatus::Active,
        }
    }
}

/// Reward document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Non-negative; fractional values are allowed
    pub points_required: f64,
    pub status: RewardStatus,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReward {
    pub name: String,
    pub description: String,
    pub points_required: f64,
    pub status: RewardStatus,
    pub category: String,
    pub expiration_date: Option<DateTime<Utc>>,
}

/// Supplied reward fields; an expiration date can be set but not cleared
#[derive(Debug, Clone, Default)]
pub struct RewardChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub points_required: Option<f64>,
    pub status: Option<RewardStatus>,
    pub category: Option<String>,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl Record for Reward {
    type Draft = NewReward;
    type Changes = RewardChanges;

    const COLLECTION: &'static str = collections::REWARDS;
    const SINGULAR: &'static str = "reward";
    const TITLE: &'static str = "Reward";
    const NOT_FOUND: &'static str = "could not find reward";

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: NewReward, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            points_required: draft.points_required,
            status: draft.status,
            category: draft.category,
            expiration_date: draft.expiration_date,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, changes: RewardChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(points) = changes.points_required {
            self.points_required = points;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(category) = changes.category {
            self.category = category;
        }
        if let Some(expiration_date) = changes.expiration_date {
            self.expiration_date = Some(expiration_date);
        }
        self.updated_at = now;
    }
}
