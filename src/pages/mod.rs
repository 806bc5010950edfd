//! Admin dashboard pages
//!
//! The same page body is produced two ways: by [`AdminPage`], a view state
//! driven through the HTTP API, and by the server-rendered routes below.

mod admin_page;
mod handler;
pub mod html;
pub mod view;

pub use admin_page::{AdminPage, TicketEdit};
pub use view::{Action, Column, Format, FormField, Input, Listed, Transition};

use axum::{routing::get, Router};

use crate::{
    models::{Content, Reward, Ticket, User},
    state::AppState,
};

/// Page routes, mounted at the root
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::index))
        .route(User::PAGE_PATH, get(handler::management::<User>))
        .route(Content::PAGE_PATH, get(handler::management::<Content>))
        .route(Reward::PAGE_PATH, get(handler::management::<Reward>))
        .route(Ticket::PAGE_PATH, get(handler::management::<Ticket>))
        .route("/assets/admin.js", get(handler::admin_script))
}
