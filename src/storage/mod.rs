//! Storage module for persisting crawl results
//!
//! This module handles the document store the finished crawl is written to:
//! - SQLite database initialization and schema
//! - Collection replacement (drop, then insert)
//! - Read-only aggregates used by the statistics report

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{RecipeStore, StorageError, StorageResult};

use crate::model::RecipeRecord;
use crate::HarvestError;
use std::path::Path;

/// Initializes or opens a storage database
pub fn open_store(path: &Path) -> Result<SqliteStore, HarvestError> {
    SqliteStore::new(path)
}

/// An author and the number of stored recipes credited to them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCount {
    pub author_name: String,
    pub recipe_count: u64,
}

/// The portion text of one stored recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortionEntry {
    pub name: String,
    pub url: String,
    pub portion: String,
}

/// Replaces a collection's contents with the given records
///
/// The drop and the insert are separate steps: a failure between them leaves the
/// collection empty.
///
/// # Returns
///
/// The number of records written
pub fn replace_collection(
    store: &mut dyn RecipeStore,
    collection: &str,
    records: &[RecipeRecord],
) -> Result<usize, HarvestError> {
    if store.drop_collection(collection)? {
        tracing::info!("Collection '{}' has been deleted", collection);
    } else {
        tracing::info!("Collection '{}' does not exist", collection);
    }

    let saved = store.insert_many(collection, records)?;
    if saved > 0 {
        tracing::info!("Saved {} recipes to collection '{}'", saved, collection);
    }
    Ok(saved)
}
