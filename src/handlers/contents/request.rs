//! Content request DTOs

use serde::Deserialize;

use crate::{
    constants::DEFAULT_CONTENT_STATUS,
    error::AppResult,
    models::{non_empty, ContentChanges, NewContent},
    utils::RequiredFields,
};

/// Create content request
#[derive(Debug, Deserialize)]
pub struct CreateContentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub author: Option<String>,
    /// Free-form; `draft` when omitted
    pub status: Option<String>,
}

impl CreateContentRequest {
    pub fn into_draft(self) -> AppResult<NewContent> {
        let mut required = RequiredFields::default();
        let title = required.text("title", self.title);
        let description = required.text("description", self.description);
        let content_type = required.text("type", self.content_type);
        let author = required.text("author", self.author);

        let (Some(title), Some(description), Some(content_type), Some(author)) =
            (title, description, content_type, author)
        else {
            return Err(required.into_error());
        };

        Ok(NewContent {
            title,
            description,
            content_type,
            author,
            status: non_empty(self.status).unwrap_or_else(|| DEFAULT_CONTENT_STATUS.to_string()),
        })
    }
}

/// Update content request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContentRequest {
    pub new_title: Option<String>,
    pub new_description: Option<String>,
    pub new_type: Option<String>,
    pub new_author: Option<String>,
    pub new_status: Option<String>,
}

impl UpdateContentRequest {
    pub fn into_changes(self) -> AppResult<ContentChanges> {
        Ok(ContentChanges {
            title: non_empty(self.new_title),
            description: non_empty(self.new_description),
            content_type: non_empty(self.new_type),
            author: non_empty(self.new_author),
            status: non_empty(self.new_status),
        })
    }
}
