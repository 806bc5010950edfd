//! Ticket management handlers

pub mod request;

pub use request::*;

use axum::Router;

use crate::{
    error::AppResult,
    models::{NewTicket, Ticket, TicketChanges},
    state::AppState,
};

use super::records::{self, Resource};

impl Resource for Ticket {
    type CreateRequest = CreateTicketRequest;
    type UpdateRequest = UpdateTicketRequest;

    fn draft(request: CreateTicketRequest) -> AppResult<NewTicket> {
        request.into_draft()
    }

    fn changes(request: UpdateTicketRequest) -> AppResult<TicketChanges> {
        request.into_changes()
    }
}

/// Ticket routes
pub fn routes() -> Router<AppState> {
    records::routes::<Ticket>()
}
