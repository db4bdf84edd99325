//! SQLite storage implementation
//!
//! This module provides a SQLite-backed document store for recipe records.

use crate::model::RecipeRecord;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{RecipeStore, StorageResult};
use crate::storage::{AuthorCount, PortionEntry};
use crate::HarvestError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

/// SQLite storage backend
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens or creates the database file and its schema
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Successfully opened/created database
    /// * `Err(HarvestError)` - Failed to open database
    pub fn new(path: &Path) -> Result<Self, HarvestError> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self { conn })
    }

    /// Creates an in-memory database (for testing)
    #[cfg(test)]
    pub fn new_in_memory() -> Result<Self, HarvestError> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self { conn })
    }

    fn average_array_length(&self, collection: &str, path: &str) -> StorageResult<Option<f64>> {
        let average = self.conn.query_row(
            "SELECT AVG(json_array_length(document, ?2)) FROM documents WHERE collection = ?1",
            params![collection, path],
            |row| row.get(0),
        )?;
        Ok(average)
    }
}

impl RecipeStore for SqliteStore {
    // ===== Collection Management =====

    fn drop_collection(&mut self, collection: &str) -> StorageResult<bool> {
        let removed = self.conn.execute(
            "DELETE FROM documents WHERE collection = ?1",
            params![collection],
        )?;
        Ok(removed > 0)
    }

    fn insert_many(&mut self, collection: &str, records: &[RecipeRecord]) -> StorageResult<usize> {
        if records.is_empty() {
            return Ok(0);
        }

        let now = Utc::now().to_rfc3339();
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO documents (collection, document, inserted_at) VALUES (?1, ?2, ?3)",
            )?;
            for record in records {
                let document = serde_json::to_string(record)?;
                stmt.execute(params![collection, document, now])?;
            }
        }
        tx.commit()?;

        Ok(records.len())
    }

    fn load_records(&self, collection: &str) -> StorageResult<Vec<RecipeRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT document FROM documents WHERE collection = ?1 ORDER BY id")?;

        let documents = stmt
            .query_map(params![collection], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        documents
            .iter()
            .map(|document| serde_json::from_str(document).map_err(Into::into))
            .collect()
    }

    // ===== Aggregates =====

    fn count(&self, collection: &str) -> StorageResult<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM documents WHERE collection = ?1",
            params![collection],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    fn average_ingredients(&self, collection: &str) -> StorageResult<Option<f64>> {
        self.average_array_length(collection, "$.ingredients")
    }

    fn average_cooking_stages(&self, collection: &str) -> StorageResult<Option<f64>> {
        self.average_array_length(collection, "$.cookingStages")
    }

    fn top_author(&self, collection: &str) -> StorageResult<Option<AuthorCount>> {
        let top = self
            .conn
            .query_row(
                "SELECT json_extract(document, '$.authorName') AS author, COUNT(*) AS recipes
                 FROM documents
                 WHERE collection = ?1
                 GROUP BY author
                 ORDER BY recipes DESC, author ASC
                 LIMIT 1",
                params![collection],
                |row| {
                    Ok(AuthorCount {
                        author_name: row.get(0)?,
                        recipe_count: row.get::<_, i64>(1)? as u64,
                    })
                },
            )
            .optional()?;
        Ok(top)
    }

    fn list_portions(&self, collection: &str) -> StorageResult<Vec<PortionEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT json_extract(document, '$.name'),
                    json_extract(document, '$.url'),
                    json_extract(document, '$.portion')
             FROM documents
             WHERE collection = ?1 AND json_type(document, '$.portion') = 'text'
             ORDER BY id",
        )?;

        let entries = stmt
            .query_map(params![collection], |row| {
                Ok(PortionEntry {
                    name: row.get(0)?,
                    url: row.get(1)?,
                    portion: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }
}
