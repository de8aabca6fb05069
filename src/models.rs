// src/models.rs

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One diary entry as stored in the `diaries` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryRecord {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl DiaryRecord {
    /// First eight characters of the id, as shown by `diary list`.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    /// First non-blank line of the body, used as a one-line preview.
    pub fn preview(&self) -> &str {
        self.body
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
    }
}
