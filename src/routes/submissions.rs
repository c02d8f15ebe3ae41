use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::extractor::AdminUser;
use crate::error::AppError;
use crate::models::Submission;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub submissions: Vec<Submission>,
    pub total: i64,
}

pub async fn list(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<ListResponse>, AppError> {
    let limit = q.limit.unwrap_or(50).clamp(1, 500);
    let offset = q.offset.unwrap_or(0).max(0);

    let submissions = state.store.list_page(limit, offset).await?;
    let total = state.store.count().await?;

    Ok(Json(ListResponse { submissions, total }))
}

pub async fn get(
    _admin: AdminUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Submission>, AppError> {
    let submission = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Submission not found".to_string()))?;

    Ok(Json(submission))
}
