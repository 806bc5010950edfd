//! Admin page view state
//!
//! One [`AdminPage`] per management screen. It loads the collection once on
//! mount and afterwards patches its rows from mutation responses instead of
//! refetching.

use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    client::{ApiClient, ClientError},
    models::{AssignedUser, Content, Reward, Role, Ticket, TicketPriority, TicketStatus, User},
};

use super::{
    html::{self, ViewState},
    view::Listed,
};

/// View state of a management page
#[derive(Debug)]
pub struct AdminPage<R> {
    client: ApiClient,
    rows: Vec<R>,
    loading: bool,
    load_error: Option<String>,
    action_error: Option<String>,
}

impl<R: Listed> AdminPage<R> {
    /// A page that has not loaded yet
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            rows: Vec::new(),
            loading: true,
            load_error: None,
            action_error: None,
        }
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// Fetch the collection
    pub async fn mount(&mut self) {
        match self.client.list::<R>().await {
            Ok(rows) => {
                self.rows = rows;
                self.load_error = None;
            }
            Err(e) => {
                tracing::warn!(collection = R::COLLECTION, error = %e, "Failed to load page");
                self.load_error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    /// Create a record and append it; returns whether the server accepted it
    pub async fn create(&mut self, body: &impl Serialize) -> bool {
        let result = self.client.create::<R>(body).await;
        self.settle(result, |rows, record| rows.push(record))
    }

    /// Update a record and replace its row with the stored version
    pub async fn update(&mut self, id: Uuid, changes: &impl Serialize) -> bool {
        let result = self.client.update::<R>(id, changes).await;
        self.settle(result, |rows, record| {
            if let Some(row) = rows.iter_mut().find(|row| row.id() == record.id()) {
                *row = record;
            }
        })
    }

    /// Delete a record and drop its row
    pub async fn delete(&mut self, id: Uuid) -> bool {
        let result = self.client.delete::<R>(id).await;
        self.settle(result, |rows, ()| rows.retain(|row| row.id() != id))
    }

    fn settle<T>(
        &mut self,
        result: Result<T, ClientError>,
        patch: impl FnOnce(&mut Vec<R>, T),
    ) -> bool {
        match result {
            Ok(value) => {
                patch(&mut self.rows, value);
                self.action_error = None;
                true
            }
            Err(e) => {
                self.action_error = Some(e.to_string());
                false
            }
        }
    }

    fn row(&self, id: Uuid) -> Option<&R> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Page body HTML for the current state
    pub fn render(&self) -> String {
        html::collection(ViewState {
            rows: &self.rows,
            loading: self.loading,
            load_error: self.load_error.as_deref(),
            action_error: self.action_error.as_deref(),
        })
    }
}

impl AdminPage<User> {
    pub async fn change_role(&mut self, id: Uuid, role: Role) -> bool {
        self.update(id, &json!({ "newRole": role })).await
    }
}

impl AdminPage<Content> {
    /// Move an item between `draft` and `live`
    pub async fn toggle_status(&mut self, id: Uuid) -> bool {
        let Some(status) = self.row(id).map(Content::toggled_status) else {
            return false;
        };
        self.update(id, &json!({ "newStatus": status })).await
    }
}

impl AdminPage<Reward> {
    /// Flip a reward between `active` and `inactive`
    pub async fn toggle_status(&mut self, id: Uuid) -> bool {
        let Some(status) = self.row(id).map(|reward| reward.status.toggled()) else {
            return false;
        };
        self.update(id, &json!({ "newStatus": status })).await
    }

    pub async fn update_points(&mut self, id: Uuid, points: f64) -> bool {
        self.update(id, &json!({ "newPointsRequired": points })).await
    }
}

/// Fields changed by the ticket inline editor
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_status: Option<TicketStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_assigned_user: Option<AssignedUser>,
}

impl AdminPage<Ticket> {
    pub async fn edit(&mut self, id: Uuid, edit: &TicketEdit) -> bool {
        self.update(id, edit).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::net::TcpListener;

    use super::*;
    use crate::{db::Store, test_utils::TestApp};

    async fn serve(app: TestApp) -> ApiClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app.router).await.unwrap();
        });
        ApiClient::new(format!("http://{addr}"))
    }

    #[tokio::test]
    async fn test_loading_until_mounted() {
        let client = serve(TestApp::new()).await;
        let mut page = AdminPage::<Ticket>::new(client);
        assert!(page.is_loading());
        assert!(page.render().contains("Loading..."));

        page.mount().await;
        assert!(!page.is_loading());
        assert!(page.rows().is_empty());
        assert!(page.render().contains("<table>"));
    }

    #[tokio::test]
    async fn test_mount_failure_shows_error_without_table() {
        let client = serve(TestApp::with_store(Store::disconnected())).await;
        let mut page = AdminPage::<User>::new(client);
        page.mount().await;

        assert_eq!(page.load_error(), Some("Failed to fetch users"));
        let html = page.render();
        assert!(html.contains("Error: Failed to fetch users"));
        assert!(!html.contains("<table>"));
    }

    #[tokio::test]
    async fn test_mutations_patch_rows() {
        let client = serve(TestApp::new()).await;
        let mut page = AdminPage::<Ticket>::new(client);
        page.mount().await;

        assert!(page.create(&json!({ "subject": "Login broken", "description": "Cannot log in" })).await);
        assert_eq!(page.rows().len(), 1);
        let id = page.rows()[0].id;

        let edit = TicketEdit {
            new_priority: Some(TicketPriority::High),
            new_assigned_user: Some(AssignedUser::Deelulu),
            ..Default::default()
        };
        assert!(page.edit(id, &edit).await);
        assert_eq!(page.rows()[0].priority, TicketPriority::High);
        assert_eq!(page.rows()[0].assigned_user, AssignedUser::Deelulu);
        assert_eq!(page.rows()[0].subject, "Login broken");

        assert!(page.delete(id).await);
        assert!(page.rows().is_empty());
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_rows_and_shows_error() {
        let client = serve(TestApp::new()).await;
        let mut page = AdminPage::<User>::new(client);
        page.mount().await;

        let alice = json!({ "username": "alice", "password": "pw", "email": "alice@example.com" });
        assert!(page.create(&alice).await);
        assert!(!page.create(&alice).await);

        assert_eq!(page.rows().len(), 1);
        assert_eq!(page.action_error(), Some("Username already exists"));
        let html = page.render();
        assert!(html.contains("Username already exists"));
        assert!(html.contains("alice@example.com"));

        let id = page.rows()[0].id;
        assert!(page.change_role(id, Role::Admin).await);
        assert!(page.rows()[0].is_admin());
        assert_eq!(page.action_error(), None);
    }

    #[tokio::test]
    async fn test_reward_and_content_toggles() {
        let client = serve(TestApp::new()).await;

        let mut rewards = AdminPage::<Reward>::new(client.clone());
        rewards.mount().await;
        rewards
            .create(&json!({
                "name": "Mug",
                "description": "Coffee mug",
                "pointsRequired": 250,
                "category": "merch"
            }))
            .await;
        let id = rewards.rows()[0].id;
        assert!(rewards.toggle_status(id).await);
        assert_eq!(rewards.rows()[0].status, crate::models::RewardStatus::Inactive);
        assert!(rewards.update_points(id, 12.5).await);
        assert_eq!(rewards.rows()[0].points_required, 12.5);

        let mut contents = AdminPage::<Content>::new(client);
        contents.mount().await;
        contents
            .create(&json!({
                "title": "Launch",
                "description": "Launch post",
                "type": "article",
                "author": "sam"
            }))
            .await;
        let id = contents.rows()[0].id;
        assert!(contents.toggle_status(id).await);
        assert!(contents.rows()[0].is_live());
        assert!(!contents.toggle_status(Uuid::new_v4()).await);
    }
}
