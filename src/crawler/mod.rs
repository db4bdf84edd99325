//! Crawler module for recipe discovery and extraction
//!
//! This module contains the crawl pipeline, including:
//! - HTTP fetching and HTML parsing
//! - Field extraction helpers over the selector schema
//! - Category, listing, and recipe page stages
//! - Overall crawl coordination

mod categories;
mod context;
mod coordinator;
mod extract;
mod fetcher;
mod listings;
mod recipe;

pub use categories::{list_categories, parse_categories, resolve_target};
pub use context::CrawlContext;
pub use coordinator::{Coordinator, CrawlOutcome, CrawlReport};
pub use extract::{clean_text, extract_all, extract_attr, extract_text, resolve_link};
pub use fetcher::{build_http_client, PageFetcher};
pub use listings::{collect_all, collect_for_category, parse_recipe_links};
pub use recipe::{
    extract_all_recipes, extract_recipe, normalize_portion, parse_recipe, RecipeOrigin,
};

use crate::config::Config;
use crate::HarvestError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and compile the selector schema
/// 2. Resolve the configured main category
/// 3. Collect recipe URLs from every sub-category
/// 4. Extract one record per recipe page
///
/// Nothing is persisted here; see [`crate::storage::replace_collection`].
///
/// # Example
///
/// ```no_run
/// use recipe_harvest::config::load_config;
/// use recipe_harvest::crawler::crawl;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("config.toml"))?;
/// let outcome = crawl(&config).await?;
/// println!("{} recipes", outcome.records.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config) -> Result<CrawlOutcome, HarvestError> {
    Coordinator::new(config)?.run().await
}
