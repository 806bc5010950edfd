//! Content item model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;
use crate::constants::{collections, DEFAULT_CONTENT_STATUS, LIVE_CONTENT_STATUS};

/// Content document.
///
/// `status` is free-form; the dashboard itself only uses `draft` and `live`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub author: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContent {
    pub title: String,
    pub description: String,
    pub content_type: String,
    pub author: String,
    pub status: String,
}

#[derive(Debug, Clone, Default)]
pub struct ContentChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content_type: Option<String>,
    pub author: Option<String>,
    pub status: Option<String>,
}

impl Content {
    pub fn is_live(&self) -> bool {
        self.status == LIVE_CONTENT_STATUS
    }

    /// Status the publish toggle moves this item to
    pub fn toggled_status(&self) -> &'static str {
        if self.is_live() {
            DEFAULT_CONTENT_STATUS
        } else {
            LIVE_CONTENT_STATUS
        }
    }
}

impl Record for Content {
    type Draft = NewContent;
    type Changes = ContentChanges;

    const COLLECTION: &'static str = collections::CONTENTS;
    const SINGULAR: &'static str = "content";
    const TITLE: &'static str = "Content";
    const NOT_FOUND: &'static str = "could not find content item";

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: NewContent, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            content_type: draft.content_type,
            author: draft.author,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, changes: ContentChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(content_type) = changes.content_type {
            self.content_type = content_type;
        }
        if let Some(author) = changes.author {
            self.author = author;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.updated_at = now;
    }
}
