//! Support ticket model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Record;
use crate::constants::{agents, collections};

text_enum! {
    pub enum TicketStatus: "status" {
        Assigned => "assigned",
        Pending => "pending",
        Closed => "closed",
    }
}

text_enum! {
    pub enum TicketPriority: "priority" {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

text_enum! {
    /// Support agent a ticket is routed to.
    ///
    /// Not linked to user records.
    pub enum AssignedUser: "assignedUser" {
        Unassigned => "none",
        Mrcharm => "mrcharm",
        Fungeey => "fungeey",
        Deelulu => "deelulu",
        Finchrinch => "finchrinch",
        Bangladesh => "bangladesh",
        Tanim => "tanim",
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Assigned
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        TicketPriority::Low
    }
}

impl Default for AssignedUser {
    fn default() -> Self {
        AssignedUser::Unassigned
    }
}

impl AssignedUser {
    pub fn is_assigned(&self) -> bool {
        self.as_str() != agents::NONE
    }
}

/// Ticket document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assigned_user: AssignedUser,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTicket {
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub assigned_user: AssignedUser,
}

#[derive(Debug, Clone, Default)]
pub struct TicketChanges {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assigned_user: Option<AssignedUser>,
}

impl Record for Ticket {
    type Draft = NewTicket;
    type Changes = TicketChanges;

    const COLLECTION: &'static str = collections::TICKETS;
    const SINGULAR: &'static str = "ticket";
    const TITLE: &'static str = "Ticket";
    const NOT_FOUND: &'static str = "could not find ticket";

    fn id(&self) -> Uuid {
        self.id
    }

    fn from_draft(id: Uuid, draft: NewTicket, now: DateTime<Utc>) -> Self {
        Self {
            id,
            subject: draft.subject,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            assigned_user: draft.assigned_user,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, changes: TicketChanges, now: DateTime<Utc>) {
        if let Some(subject) = changes.subject {
            self.subject = subject;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(assigned_user) = changes.assigned_user {
            self.assigned_user = assigned_user;
        }
        self.updated_at = now;
    }
}
