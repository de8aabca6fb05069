// src/store.rs

use crate::error::{DiaryError, Result};
use crate::models::DiaryRecord;
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use uuid::Uuid;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS diaries (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    created_at TEXT NOT NULL
)";

const SELECT_ENTRY: &str = "SELECT id, title, body, created_at FROM diaries";

/// Owns the diary database. Every mutating call is committed before it returns.
pub struct DiaryStore {
    conn: Connection,
}

/// A row as SQLite hands it back, before the id and timestamp are parsed.
struct StoredRow {
    id: String,
    title: String,
    body: String,
    created_at: String,
}

impl StoredRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(StoredRow {
            id: row.get(0)?,
            title: row.get(1)?,
            body: row.get(2)?,
            created_at: row.get(3)?,
        })
    }

    fn decode(self) -> Result<DiaryRecord> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| DiaryError::Decode(format!("bad id '{}': {}", self.id, e)))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| {
                DiaryError::Decode(format!(
                    "bad timestamp '{}' on entry {}: {}",
                    self.created_at, self.id, e
                ))
            })?
            .with_timezone(&Utc);
        Ok(DiaryRecord {
            id,
            title: self.title,
            body: self.body,
            created_at,
        })
    }
}

// Fixed width, so ordering the text column orders by time.
fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

impl DiaryStore {
    /// Opens (or creates) the database file, creating parent directories and
    /// the `diaries` table as needed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        conn.execute(SCHEMA, [])?;
        log::info!("opened diary store at {}", path.display());
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Inserts a new entry under a freshly generated id.
    pub fn create(
        &mut self,
        title: &str,
        body: &str,
        created_at: DateTime<Utc>,
    ) -> Result<DiaryRecord> {
        if !(0..=9999).contains(&created_at.year()) {
            return Err(DiaryError::InvalidInput(format!(
                "timestamp {} is outside years 0000-9999",
                created_at
            )));
        }
        let record = DiaryRecord {
            id: Uuid::new_v4(),
            title: title.to_string(),
            body: body.to_string(),
            created_at,
        };
        self.conn.execute(
            "INSERT INTO diaries (id, title, body, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.id.to_string(),
                record.title,
                record.body,
                encode_timestamp(&record.created_at)
            ],
        )?;
        log::debug!("created entry {}", record.id);
        Ok(record)
    }

    pub fn get(&self, id: &Uuid) -> Result<DiaryRecord> {
        let row = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_ENTRY),
                [id.to_string()],
                StoredRow::from_row,
            )
            .optional()?;
        row.ok_or_else(|| DiaryError::NotFound(id.to_string()))?
            .decode()
    }

    /// Resolves a full id or a unique prefix of one (hyphens optional).
    pub fn find_by_prefix(&self, prefix: &str) -> Result<DiaryRecord> {
        let prefix = prefix.trim().to_ascii_lowercase();
        if !prefix.chars().any(|c| c.is_ascii_hexdigit())
            || !prefix.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
        {
            return Err(DiaryError::InvalidInput(format!(
                "'{}' is not an entry id",
                prefix
            )));
        }
        if let Ok(id) = Uuid::parse_str(&prefix) {
            return self.get(&id);
        }

        let needle: String = prefix.chars().filter(|c| *c != '-').collect();
        let mut stmt = self.conn.prepare(&format!(
            "{} WHERE replace(id, '-', '') LIKE ?1 || '%' LIMIT 2",
            SELECT_ENTRY
        ))?;
        let mut rows = stmt
            .query_map([&needle], StoredRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        match rows.len() {
            0 => Err(DiaryError::NotFound(prefix)),
            1 => rows.remove(0).decode(),
            _ => Err(DiaryError::InvalidInput(format!(
                "id prefix '{}' matches more than one entry",
                prefix
            ))),
        }
    }

    /// Replaces title and body of an existing entry. `created_at` is untouched,
    /// and nothing is written when the text is unchanged.
    pub fn update(&mut self, id: &Uuid, title: &str, body: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        let current: Option<(String, String)> = tx
            .query_row(
                "SELECT title, body FROM diaries WHERE id = ?1",
                [id.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let (old_title, old_body) = current.ok_or_else(|| DiaryError::NotFound(id.to_string()))?;
        if old_title == title && old_body == body {
            log::debug!("entry {} unchanged, nothing to commit", id);
            return Ok(());
        }

        tx.execute(
            "UPDATE diaries SET title = ?1, body = ?2 WHERE id = ?3",
            params![title, body, id.to_string()],
        )?;
        tx.commit()?;
        log::debug!("updated entry {}", id);
        Ok(())
    }

    /// All entries, oldest first. Entries sharing a timestamp keep insertion order.
    pub fn list_all(&self) -> Result<Vec<DiaryRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} ORDER BY created_at ASC, rowid ASC",
            SELECT_ENTRY
        ))?;
        let rows = stmt
            .query_map([], StoredRow::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        rows.into_iter().map(StoredRow::decode).collect()
    }

    /// Removes an entry. Deleting an id that is already gone is not an error.
    pub fn delete(&mut self, id: &Uuid) -> Result<()> {
        let count = self
            .conn
            .execute("DELETE FROM diaries WHERE id = ?1", [id.to_string()])?;
        if count == 0 {
            log::debug!("entry {} already absent", id);
        } else {
            log::debug!("deleted entry {}", id);
        }
        Ok(())
    }
}
