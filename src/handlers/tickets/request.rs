//! Ticket request DTOs

use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{non_empty, AssignedUser, NewTicket, TicketChanges, TicketPriority, TicketStatus},
    utils::{empty_as_none, RequiredFields},
};

/// Create ticket request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    pub subject: Option<String>,

    pub description: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<TicketStatus>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub priority: Option<TicketPriority>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub assigned_user: Option<AssignedUser>,
}

impl CreateTicketRequest {
    pub fn into_draft(self) -> AppResult<NewTicket> {
        let mut required = RequiredFields::default();
        let subject = required.text("subject", self.subject);
        let description = required.text("description", self.description);

        let (Some(subject), Some(description)) = (subject, description) else {
            return Err(required.into_error());
        };

        Ok(NewTicket {
            subject,
            description,
            status: self.status.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
            assigned_user: self.assigned_user.unwrap_or_default(),
        })
    }
}

/// Update ticket request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTicketRequest {
    pub new_subject: Option<String>,

    pub new_description: Option<String>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub new_status: Option<TicketStatus>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub new_priority: Option<TicketPriority>,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub new_assigned_user: Option<AssignedUser>,
}

impl UpdateTicketRequest {
    pub fn into_changes(self) -> AppResult<TicketChanges> {
        Ok(TicketChanges {
            subject: non_empty(self.new_subject),
            description: non_empty(self.new_description),
            status: self.new_status,
            priority: self.new_priority,
            assigned_user: self.new_assigned_user,
        })
    }
}
