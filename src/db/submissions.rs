use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::models::{Fields, Submission};

use super::{StoreError, SubmissionStore, validate_fields};

const COLUMNS: &str = "id, name, fields, created_at";

/// PostgreSQL-backed store. Each create is a single INSERT, so a submission
/// is either fully recorded or not at all.
#[derive(Clone)]
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn create(&self, fields: Fields) -> Result<Uuid, StoreError> {
        let name = validate_fields(&fields)?;

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO submissions (id, name, fields)
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(Uuid::now_v7())
        .bind(name)
        .bind(Json(&fields))
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Submission>, StoreError> {
        let submission = sqlx::query_as::<_, Submission>(&format!(
            "SELECT {COLUMNS} FROM submissions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let submissions = sqlx::query_as::<_, Submission>(&format!(
            "SELECT {COLUMNS} FROM submissions ORDER BY created_at DESC, seq DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Submission>, StoreError> {
        let submissions = sqlx::query_as::<_, Submission>(&format!(
            "SELECT {COLUMNS} FROM submissions
             ORDER BY created_at DESC, seq DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM submissions")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.0)
    }
}
