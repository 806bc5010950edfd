//! Server-rendered page handlers

use std::fmt::Write;

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::{
    models::{Content, Reward, Ticket, User},
    services::RecordService,
    state::AppState,
};

use super::{
    html::{self, escape, ViewState},
    view::Listed,
};

const ADMIN_SCRIPT: &str = include_str!("../../assets/admin.js");

/// Dashboard index with a card per management page
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let mut body = String::from("<h1>Dashboard</h1><ul class=\"cards\">");
    card::<User>(&state, &mut body).await;
    card::<Content>(&state, &mut body).await;
    card::<Reward>(&state, &mut body).await;
    card::<Ticket>(&state, &mut body).await;
    body.push_str("</ul>");

    Html(html::document("Dashboard", &body))
}

async fn card<R: Listed>(state: &AppState, out: &mut String) {
    let count = match RecordService::list::<R>(state.store()).await {
        Ok(rows) => rows.len().to_string(),
        Err(_) => "unavailable".to_string(),
    };
    let _ = write!(
        out,
        r#"<li><a href="{}">{}</a> <span class="count">{}</span></li>"#,
        R::PAGE_PATH,
        escape(R::PAGE_TITLE),
        count
    );
}

/// Management page rendered from the current store contents
pub async fn management<R: Listed>(State(state): State<AppState>) -> Html<String> {
    let (rows, load_error) = match RecordService::list::<R>(state.store()).await {
        Ok(rows) => (rows, None),
        Err(e) => (
            Vec::new(),
            Some(e.into_bad_request(&format!("Failed to fetch {}", R::COLLECTION)).public_message()),
        ),
    };

    let body = html::collection(ViewState {
        rows: &rows,
        loading: false,
        load_error: load_error.as_deref(),
        action_error: None,
    });

    Html(html::document(R::PAGE_TITLE, &body))
}

/// Script wiring the page buttons and forms to the API
pub async fn admin_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        ADMIN_SCRIPT,
    )
}
