use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Field name to submitted value. Keys are kept verbatim.
pub type Fields = BTreeMap<String, String>;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub name: String,
    #[sqlx(json)]
    pub fields: Fields,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}
