//! How each record type appears on its management page
//!
//! Columns and actions are described against the record's JSON document, so
//! the server-rendered table and the browser script render rows the same way.

use serde::Serialize;
use serde_json::Value;

use crate::{
    constants::{DEFAULT_CONTENT_STATUS, LIVE_CONTENT_STATUS},
    db::Collection,
    models::{AssignedUser, Content, Reward, RewardStatus, Role, Ticket, TicketPriority, TicketStatus, User},
    utils::{format_timestamp, parse_datetime},
};

/// How a cell value is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    /// Full timestamp, `YYYY-MM-DD HH:MM:SS UTC`
    Timestamp,
    /// Calendar date only
    Date,
}

impl Format {
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Timestamp => "timestamp",
            Format::Date => "date",
        }
    }
}

/// A table column bound to a key of the record document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub field: &'static str,
    pub format: Format,
}

impl Column {
    const fn text(title: &'static str, field: &'static str) -> Self {
        Self {
            title,
            field,
            format: Format::Text,
        }
    }

    const fn timestamp(title: &'static str, field: &'static str) -> Self {
        Self {
            title,
            field,
            format: Format::Timestamp,
        }
    }

    /// Cell text for `document`; missing and null values render empty
    pub fn render(&self, document: &Value) -> String {
        match document.get(self.field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(raw)) => {
                let parsed = match self.format {
                    Format::Text => None,
                    Format::Timestamp => parse_datetime(raw).map(|dt| format_timestamp(&dt)),
                    Format::Date => parse_datetime(raw).map(|dt| dt.format("%Y-%m-%d").to_string()),
                };
                parsed.unwrap_or_else(|| raw.clone())
            }
            // Whole numbers print without a fraction, as in the browser
            Some(Value::Number(n)) => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
                _ => n.to_string(),
            },
            Some(other) => other.to_string(),
        }
    }
}

/// One step of a [`Action::Switch`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transition {
    /// Current value this step applies to; `None` matches anything
    pub when: Option<&'static str>,
    pub to: &'static str,
    pub label: &'static str,
}

impl Transition {
    fn on(when: &'static str, to: &'static str, label: &'static str) -> Self {
        Self {
            when: Some(when),
            to,
            label,
        }
    }

    fn otherwise(to: &'static str, label: &'static str) -> Self {
        Self {
            when: None,
            to,
            label,
        }
    }
}

/// Inline button shown in a row's Actions column
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Send `field: to` for the first transition matching the record's
    /// `source` value; hidden when none matches
    Switch {
        source: &'static str,
        field: &'static str,
        transitions: Vec<Transition>,
    },
    /// Ask for a value, then send it as `field`
    Prompt {
        label: &'static str,
        field: &'static str,
        numeric: bool,
    },
    Delete,
}

impl Action {
    fn switch(source: &'static str, field: &'static str, transitions: Vec<Transition>) -> Self {
        Action::Switch {
            source,
            field,
            transitions,
        }
    }

    fn prompt(label: &'static str, field: &'static str, numeric: bool) -> Self {
        Action::Prompt {
            label,
            field,
            numeric,
        }
    }

    /// The switch step that applies to `document`
    pub fn transition(&self, document: &Value) -> Option<&Transition> {
        let Action::Switch {
            source, transitions, ..
        } = self
        else {
            return None;
        };
        let current = document.get(*source).and_then(Value::as_str);
        transitions
            .iter()
            .find(|step| step.when.is_none() || step.when == current)
    }
}

/// Input control used by the create form
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Text,
    Password,
    Email,
    Number,
    Date,
    Select(Vec<&'static str>),
}

impl Input {
    pub fn html_type(&self) -> &'static str {
        match self {
            Input::Text | Input::Select(_) => "text",
            Input::Password => "password",
            Input::Email => "email",
            Input::Number => "number",
            Input::Date => "date",
        }
    }
}

/// One create form field; `name` is the JSON key sent to the API
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub input: Input,
    pub required: bool,
}

impl FormField {
    fn required(name: &'static str, label: &'static str, input: Input) -> Self {
        Self {
            name,
            label,
            input,
            required: true,
        }
    }

    fn select(name: &'static str, label: &'static str, options: Vec<&'static str>) -> Self {
        Self {
            name,
            label,
            input: Input::Select(options),
            required: false,
        }
    }
}

/// A record type with a management page
pub trait Listed: Collection {
    const PAGE_TITLE: &'static str;
    const PAGE_PATH: &'static str;

    fn columns() -> &'static [Column];

    fn actions() -> Vec<Action>;

    fn form() -> Vec<FormField>;

    /// The document as the API sends it
    fn document(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Cell text, one per column
    fn cells(&self) -> Vec<String> {
        let document = self.document();
        Self::columns()
            .iter()
            .map(|column| column.render(&document))
            .collect()
    }
}

impl Listed for User {
    const PAGE_TITLE: &'static str = "User Management";
    const PAGE_PATH: &'static str = "/user-management";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::text("Username", "username"),
            Column::text("Email", "email"),
            Column::text("Role", "role"),
            Column::timestamp("Created", "createdAt"),
        ];
        COLUMNS
    }

    fn actions() -> Vec<Action> {
        vec![
            Action::switch(
                "role",
                "newRole",
                vec![
                    Transition::on(Role::Admin.as_str(), Role::User.as_str(), "Make user"),
                    Transition::otherwise(Role::Admin.as_str(), "Make admin"),
                ],
            ),
            Action::Delete,
        ]
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::required("username", "Username", Input::Text),
            FormField::required("password", "Password", Input::Password),
            FormField::required("email", "Email", Input::Email),
            FormField::select("role", "Role", Role::ALL.iter().map(Role::as_str).collect()),
        ]
    }
}

impl Listed for Content {
    const PAGE_TITLE: &'static str = "Content Management";
    const PAGE_PATH: &'static str = "/content-management";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::text("Title", "title"),
            Column::text("Description", "description"),
            Column::text("Type", "type"),
            Column::text("Author", "author"),
            Column::text("Status", "status"),
            Column::timestamp("Created", "createdAt"),
        ];
        COLUMNS
    }

    fn actions() -> Vec<Action> {
        vec![
            Action::switch(
                "status",
                "newStatus",
                vec![
                    Transition::on(LIVE_CONTENT_STATUS, DEFAULT_CONTENT_STATUS, "Unpublish"),
                    Transition::otherwise(LIVE_CONTENT_STATUS, "Publish"),
                ],
            ),
            Action::Delete,
        ]
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::required("title", "Title", Input::Text),
            FormField::required("description", "Description", Input::Text),
            FormField::required("type", "Type", Input::Text),
            FormField::required("author", "Author", Input::Text),
        ]
    }
}

impl Listed for Reward {
    const PAGE_TITLE: &'static str = "Rewards Management";
    const PAGE_PATH: &'static str = "/rewards-management";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::text("Name", "name"),
            Column::text("Description", "description"),
            Column::text("Points", "pointsRequired"),
            Column::text("Status", "status"),
            Column::text("Category", "category"),
            Column {
                title: "Expires",
                field: "expirationDate",
                format: Format::Date,
            },
        ];
        COLUMNS
    }

    fn actions() -> Vec<Action> {
        let steps = RewardStatus::ALL
            .iter()
            .map(|status| {
                let label = match status {
                    RewardStatus::Active => "Deactivate",
                    RewardStatus::Inactive => "Activate",
                };
                Transition::on(status.as_str(), status.toggled().as_str(), label)
            })
            .collect();
        vec![
            Action::switch("status", "newStatus", steps),
            Action::prompt("Edit points", "newPointsRequired", true),
            Action::Delete,
        ]
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::required("name", "Name", Input::Text),
            FormField::required("description", "Description", Input::Text),
            FormField::required("pointsRequired", "Points required", Input::Number),
            FormField::required("category", "Category", Input::Text),
            FormField::select(
                "status",
                "Status",
                RewardStatus::ALL.iter().map(RewardStatus::as_str).collect(),
            ),
            FormField {
                name: "expirationDate",
                label: "Expires",
                input: Input::Date,
                required: false,
            },
        ]
    }
}

impl Listed for Ticket {
    const PAGE_TITLE: &'static str = "Ticket Management";
    const PAGE_PATH: &'static str = "/ticket-management";

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::text("Subject", "subject"),
            Column::text("Description", "description"),
            Column::text("Status", "status"),
            Column::text("Priority", "priority"),
            Column::text("Assigned", "assignedUser"),
            Column::timestamp("Created", "createdAt"),
        ];
        COLUMNS
    }

    fn actions() -> Vec<Action> {
        // Closed tickets have no matching step, which hides the button
        let close = TicketStatus::ALL
            .iter()
            .filter(|status| **status != TicketStatus::Closed)
            .map(|status| Transition::on(status.as_str(), TicketStatus::Closed.as_str(), "Close"))
            .collect();
        vec![
            Action::prompt("Edit subject", "newSubject", false),
            Action::prompt("Assign", "newAssignedUser", false),
            Action::switch("status", "newStatus", close),
            Action::Delete,
        ]
    }

    fn form() -> Vec<FormField> {
        vec![
            FormField::required("subject", "Subject", Input::Text),
            FormField::required("description", "Description", Input::Text),
            FormField::select(
                "status",
                "Status",
                TicketStatus::ALL.iter().map(TicketStatus::as_str).collect(),
            ),
            FormField::select(
                "priority",
                "Priority",
                TicketPriority::ALL.iter().map(TicketPriority::as_str).collect(),
            ),
            FormField::select(
                "assignedUser",
                "Assigned to",
                AssignedUser::ALL.iter().map(AssignedUser::as_str).collect(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use uuid::Uuid;

    use super::*;
    use crate::models::{NewReward, Record};

    fn mug(points_required: f64) -> Reward {
        Reward::from_draft(
            Uuid::new_v4(),
            NewReward {
                name: "Mug".into(),
                description: "Coffee mug".into(),
                points_required,
                status: RewardStatus::Active,
                category: "merch".into(),
                expiration_date: None,
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_reward_switch_follows_status() {
        let mut reward = mug(250.0);
        let actions = Reward::actions();
        let status = &actions[0];

        let step = status.transition(&reward.document()).unwrap();
        assert_eq!((step.to, step.label), ("inactive", "Deactivate"));

        reward.status = RewardStatus::Inactive;
        let step = status.transition(&reward.document()).unwrap();
        assert_eq!((step.to, step.label), ("active", "Activate"));

        assert_eq!(actions.last(), Some(&Action::Delete));
        assert_eq!(reward.cells().len(), Reward::columns().len());
    }

    #[test]
    fn test_points_cell_drops_whole_fraction() {
        assert_eq!(mug(250.0).cells()[2], "250");
        assert_eq!(mug(10.5).cells()[2], "10.5");
        assert_eq!(mug(250.0).cells()[5], "");
    }

    #[test]
    fn test_close_hidden_for_closed_tickets() {
        let close = &Ticket::actions()[2];
        let open = json!({ "status": "pending" });
        assert_eq!(close.transition(&open).map(|step| step.to), Some("closed"));
        assert!(close.transition(&json!({ "status": "closed" })).is_none());
    }

    #[test]
    fn test_content_publish_accepts_any_draft_status() {
        let publish = &Content::actions()[0];
        let step = publish.transition(&json!({ "status": "review" })).unwrap();
        assert_eq!((step.to, step.label), ("live", "Publish"));
        let step = publish.transition(&json!({ "status": "live" })).unwrap();
        assert_eq!(step.to, "draft");
    }

    #[test]
    fn test_timestamp_and_date_columns() {
        let document = json!({
            "createdAt": "2024-01-15T12:30:05.123Z",
            "expirationDate": "2026-12-31T00:00:00Z"
        });
        assert_eq!(
            Column::timestamp("Created", "createdAt").render(&document),
            "2024-01-15 12:30:05 UTC"
        );
        assert_eq!(Reward::columns()[5].render(&document), "2026-12-31");
    }

    #[test]
    fn test_forms_offer_every_agent() {
        let form = Ticket::form();
        let agents = form.iter().find(|f| f.name == "assignedUser").unwrap();
        assert_eq!(agents.input, Input::Select(AssignedUser::ALL.iter().map(AssignedUser::as_str).collect()));
    }
}
