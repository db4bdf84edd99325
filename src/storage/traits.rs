//! Storage traits and error types
//!
//! This module defines the document-store interface the crawl results are handed to and
//! the read-only aggregates the statistics report is built from.

use crate::model::RecipeRecord;
use crate::storage::{AuthorCount, PortionEntry};
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for document store implementations
///
/// Records are grouped into named collections. Writes replace whole collections; nothing
/// is updated in place.
pub trait RecipeStore {
    // ===== Collection Management =====

    /// Removes every document in a collection
    ///
    /// # Returns
    ///
    /// `true` if the collection held any documents
    fn drop_collection(&mut self, collection: &str) -> StorageResult<bool>;

    /// Inserts records into a collection in one transaction
    ///
    /// # Returns
    ///
    /// The number of documents written
    fn insert_many(&mut self, collection: &str, records: &[RecipeRecord]) -> StorageResult<usize>;

    /// Loads every record of a collection in insertion order
    fn load_records(&self, collection: &str) -> StorageResult<Vec<RecipeRecord>>;

    // ===== Aggregates =====

    /// Counts the documents in a collection
    fn count(&self, collection: &str) -> StorageResult<u64>;

    /// Mean ingredient list length, `None` for an empty collection
    fn average_ingredients(&self, collection: &str) -> StorageResult<Option<f64>>;

    /// Mean cooking stage count, `None` for an empty collection
    fn average_cooking_stages(&self, collection: &str) -> StorageResult<Option<f64>>;

    /// Author with the most recipes; ties go to the alphabetically first name
    fn top_author(&self, collection: &str) -> StorageResult<Option<AuthorCount>>;

    /// Name, URL, and raw portion text of every document, in insertion order
    fn list_portions(&self, collection: &str) -> StorageResult<Vec<PortionEntry>>;
}
