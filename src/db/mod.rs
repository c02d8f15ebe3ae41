//! Submission storage.
//!
//! Handlers depend on the [`SubmissionStore`] trait; `main` picks the
//! PostgreSQL backend when a database is configured and falls back to the
//! in-memory backend otherwise.

pub mod memory;
pub mod submissions;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Fields, Submission};

pub use memory::MemorySubmissionStore;
pub use submissions::PgSubmissionStore;

#[derive(Debug)]
pub enum StoreError {
    InvalidInput(String),
    Database(sqlx::Error),
    Internal(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            StoreError::Database(err) => write!(f, "Database error: {err}"),
            StoreError::Internal(msg) => write!(f, "Internal store error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err)
    }
}

/// Persistence for contact-form submissions.
///
/// Submissions are append-only: there is no update or delete path.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist every key in `fields` verbatim and return the new id.
    ///
    /// Fails with [`StoreError::InvalidInput`] when `name` is missing or blank.
    async fn create(&self, fields: Fields) -> Result<Uuid, StoreError>;

    async fn get(&self, id: Uuid) -> Result<Option<Submission>, StoreError>;

    /// All submissions, most recent first.
    async fn list(&self) -> Result<Vec<Submission>, StoreError>;

    /// One page of [`SubmissionStore::list`].
    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Submission>, StoreError>;

    async fn count(&self) -> Result<i64, StoreError>;
}

/// Check a field bag before it is stored and extract its display title.
///
/// Every backend applies the same rules: `name` must be present and not
/// blank, and no key or value may contain a NUL character (PostgreSQL text
/// cannot hold one).
pub(crate) fn validate_fields(fields: &Fields) -> Result<String, StoreError> {
    if let Some(key) = fields
        .iter()
        .find(|(k, v)| k.contains('\0') || v.contains('\0'))
        .map(|(k, _)| k)
    {
        return Err(StoreError::InvalidInput(format!(
            "NUL character in field: {}",
            key.escape_default()
        )));
    }

    match fields.get("name") {
        Some(name) if !name.trim().is_empty() => Ok(name.clone()),
        Some(_) => Err(StoreError::InvalidInput(
            "Required field is empty: name".to_string(),
        )),
        None => Err(StoreError::InvalidInput(
            "Missing required field: name".to_string(),
        )),
    }
}
