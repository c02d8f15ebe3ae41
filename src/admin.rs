//! Rendering for the submission admin screens.

use askama::Template;

use crate::models::Submission;

/// Selection checkbox column, kept ahead of the field columns.
pub const CHECKBOX_COLUMN: &str = "cb";

/// Bookkeeping keys that never appear in the detail box.
pub const HIDDEN_KEYS: [&str; 2] = ["_edit_lock", "_edit_last"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

static COLUMNS: [Column; 5] = [
    Column { key: CHECKBOX_COLUMN, label: "" },
    Column { key: "name", label: "Name" },
    Column { key: "email", label: "Email" },
    Column { key: "phone", label: "Phone" },
    Column { key: "message", label: "Message" },
];

pub fn list_columns() -> &'static [Column] {
    &COLUMNS
}

/// Raw stored value for one list column. Escaping happens in the template.
pub fn render_list_cell(submission: &Submission, key: &str) -> String {
    match key {
        "name" | "email" | "phone" | "message" => {
            submission.field(key).unwrap_or_default().to_string()
        }
        _ => String::new(),
    }
}

pub struct DetailRow {
    pub label: String,
    pub value: String,
}

#[derive(Template)]
#[template(path = "admin/detail_box.html")]
struct DetailBoxTemplate {
    rows: Vec<DetailRow>,
}

pub fn detail_rows(submission: &Submission) -> Vec<DetailRow> {
    submission
        .fields
        .iter()
        .filter(|(key, _)| !HIDDEN_KEYS.contains(&key.as_str()))
        .map(|(key, value)| DetailRow {
            label: capitalize(key),
            value: value.clone(),
        })
        .collect()
}

/// `<ul>` listing every visible field as `Key: value`.
pub fn render_detail(submission: &Submission) -> askama::Result<String> {
    DetailBoxTemplate {
        rows: detail_rows(submission),
    }
    .render()
}

fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
