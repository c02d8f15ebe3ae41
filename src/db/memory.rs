use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Fields, Submission};

use super::{StoreError, SubmissionStore, validate_fields};

/// In-process store used when no database is configured.
///
/// Records are kept in creation order; the write lock makes id assignment
/// and insertion a single step.
#[derive(Default)]
pub struct MemorySubmissionStore {
    records: RwLock<Vec<Submission>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn create(&self, fields: Fields) -> Result<Uuid, StoreError> {
        let name = validate_fields(&fields)?;

        let mut records = self.records.write().await;
        let submission = Submission {
            id: Uuid::now_v7(),
            name,
            fields,
            created_at: Utc::now(),
        };
        let id = submission.id;
        records.push(submission);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Submission>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|s| s.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Submission>, StoreError> {
        let records = self.records.read().await;
        Ok(records.iter().rev().cloned().collect())
    }

    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<Submission>, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .rev()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.records.read().await.len() as i64)
    }
}
