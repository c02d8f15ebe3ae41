use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect};
use serde::Deserialize;
use uuid::Uuid;

use crate::admin::{self, Column};
use crate::auth::extractor::AdminUser;
use crate::error::AppError;
use crate::state::SharedState;

struct SubmissionRow {
    id: String,
    cells: Vec<String>,
    created_at: String,
}

#[derive(Template)]
#[template(path = "admin/submissions.html")]
struct SubmissionsTemplate {
    columns: Vec<Column>,
    rows: Vec<SubmissionRow>,
    total: i64,
    page: i64,
    per_page: i64,
    total_pages: i64,
}

#[derive(Template)]
#[template(path = "admin/submission.html")]
struct SubmissionTemplate {
    detail: String,
    created_at: String,
}

#[derive(Deserialize)]
pub struct TableParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

pub async fn index(_admin: AdminUser) -> impl IntoResponse {
    Redirect::to("/admin/submissions")
}

pub async fn submissions_page(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Query(params): Query<TableParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(20).clamp(1, 100);
    let offset = (page - 1)
        .checked_mul(per_page)
        .ok_or_else(|| AppError::BadRequest("Page out of range".to_string()))?;

    let submissions = state.store.list_page(per_page, offset).await?;
    let total = state.store.count().await?;

    let columns = admin::list_columns().to_vec();
    let rows: Vec<SubmissionRow> = submissions
        .iter()
        .map(|sub| SubmissionRow {
            id: sub.id.to_string(),
            cells: columns
                .iter()
                .filter(|c| c.key != admin::CHECKBOX_COLUMN)
                .map(|c| admin::render_list_cell(sub, c.key))
                .collect(),
            created_at: sub.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    let total_pages = (total + per_page - 1) / per_page;

    let template = SubmissionsTemplate {
        columns,
        rows,
        total,
        page,
        per_page,
        total_pages,
    };
    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template error: {e}")))?;
    Ok(Html(html))
}

pub async fn submission_page(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let submission = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

    let detail = admin::render_detail(&submission)
        .map_err(|e| AppError::Internal(format!("Template error: {e}")))?;
    let template = SubmissionTemplate {
        detail,
        created_at: submission.created_at.format("%Y-%m-%d %H:%M").to_string(),
    };
    let html = template
        .render()
        .map_err(|e| AppError::Internal(format!("Template error: {e}")))?;
    Ok(Html(html))
}
