//! HTML rendering for the management pages

use std::fmt::Write;

use serde_json::Value;

use super::view::{Action, Input, Listed};

/// Escape text for use in element content and quoted attributes
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// What a management page currently shows
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a, R> {
    pub rows: &'a [R],
    pub loading: bool,
    /// The list fetch failed; no table is shown
    pub load_error: Option<&'a str>,
    /// The last create, update or delete failed; the table stays visible
    pub action_error: Option<&'a str>,
}

/// Render the body of a management page
pub fn collection<R: Listed>(state: ViewState<'_, R>) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<section class="admin-page" data-collection="{}" data-singular="{}">"#,
        R::COLLECTION,
        R::SINGULAR
    );
    let _ = write!(out, "<h1>{}</h1>", escape(R::PAGE_TITLE));

    if state.loading {
        out.push_str("<p>Loading...</p>");
    } else if let Some(error) = state.load_error {
        let _ = write!(out, r#"<p class="error">Error: {}</p>"#, escape(error));
    } else {
        if let Some(error) = state.action_error {
            let _ = write!(out, r#"<p class="error">{}</p>"#, escape(error));
        }
        create_form::<R>(&mut out);
        table(&mut out, state.rows);
    }

    out.push_str("</section>");
    out
}

fn create_form<R: Listed>(out: &mut String) {
    let _ = write!(
        out,
        r#"<form class="create-form" data-collection="{}">"#,
        R::COLLECTION
    );
    for field in R::form() {
        let _ = write!(out, r#"<label>{} "#, escape(field.label));
        match field.input {
            Input::Select(options) => {
                let _ = write!(out, r#"<select name="{}">"#, field.name);
                for option in options {
                    let _ = write!(out, r#"<option value="{0}">{0}</option>"#, escape(option));
                }
                out.push_str("</select>");
            }
            input => {
                let _ = write!(
                    out,
                    r#"<input name="{}" type="{}"{}>"#,
                    field.name,
                    input.html_type(),
                    if field.required { " required" } else { "" }
                );
            }
        }
        out.push_str("</label>");
    }
    let _ = write!(out, r#"<button type="submit">Add {}</button></form>"#, R::TITLE);
}

fn table<R: Listed>(out: &mut String, rows: &[R]) {
    let actions = R::actions();

    out.push_str("<table><thead><tr>");
    for column in R::columns() {
        let _ = write!(
            out,
            r#"<th data-field="{}" data-format="{}">{}</th>"#,
            column.field,
            column.format.as_str(),
            escape(column.title)
        );
    }
    out.push_str("<th>Actions</th></tr></thead><tbody>");

    for row in rows {
        let document = row.document();
        let _ = write!(
            out,
            r#"<tr data-id="{}" data-record="{}">"#,
            row.id(),
            escape(&document.to_string())
        );
        for column in R::columns() {
            let _ = write!(out, "<td>{}</td>", escape(&column.render(&document)));
        }
        actions_cell(out, &actions, Some(&document));
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");

    // Blank row the script clones for records created in the browser
    out.push_str(r#"<template class="row-template"><tr>"#);
    for _ in R::columns() {
        out.push_str("<td></td>");
    }
    actions_cell(out, &actions, None);
    out.push_str("</tr></template>");
}

fn actions_cell(out: &mut String, actions: &[Action], document: Option<&Value>) {
    out.push_str("<td>");
    for action in actions {
        action_button(out, action, document);
    }
    out.push_str("</td>");
}

fn action_button(out: &mut String, action: &Action, document: Option<&Value>) {
    match action {
        Action::Switch {
            source,
            field,
            transitions,
        } => {
            let step = document.and_then(|document| action.transition(document));
            let _ = write!(
                out,
                r#"<button data-action="switch" data-source="{}" data-field="{}" data-transitions="{}"{}>{}</button>"#,
                source,
                field,
                escape(&serde_json::to_string(transitions).unwrap_or_default()),
                if step.is_some() { "" } else { " hidden" },
                escape(step.map(|step| step.label).unwrap_or_default())
            );
        }
        Action::Prompt { label, field, numeric } => {
            let _ = write!(
                out,
                r#"<button data-action="prompt" data-field="{}"{}>{}</button>"#,
                field,
                if *numeric { r#" data-numeric="true""# } else { "" },
                escape(label)
            );
        }
        Action::Delete => out.push_str(r#"<button data-action="delete">Delete</button>"#),
    }
}

/// Wrap a page body in the dashboard layout
pub fn document(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">",
            "<title>{title}</title></head><body>",
            "<nav><a href=\"/\">Dashboard</a> ",
            "<a href=\"/user-management\">Users</a> ",
            "<a href=\"/content-management\">Content</a> ",
            "<a href=\"/rewards-management\">Rewards</a> ",
            "<a href=\"/ticket-management\">Tickets</a></nav>",
            "<main>{body}</main>",
            "<script src=\"/assets/admin.js\"></script></body></html>"
        ),
        title = escape(title),
        body = body
    )
}
