//! Crawler coordinator - main crawl orchestration logic
//!
//! The stages run strictly in sequence, each one fanning its items out concurrently:
//! 1. Resolve the main category on the category index (fatal if absent)
//! 2. List the main category's sub-categories
//! 3. Collect recipe URLs for every sub-category
//! 4. Extract a record for every recipe URL

use crate::config::Config;
use crate::crawler::categories::{list_categories, resolve_target};
use crate::crawler::context::CrawlContext;
use crate::crawler::listings::collect_all;
use crate::crawler::recipe::extract_all_recipes;
use crate::model::{Category, RecipeRecord, SubCategory};
use crate::HarvestError;

/// Counts describing how a crawl went
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Sub-categories listed under the main category
    pub sub_categories: usize,

    /// Sub-categories that yielded no recipe URLs (empty or failed listing)
    pub empty_listings: usize,

    /// Recipe URLs discovered across all listings
    pub recipe_urls: usize,

    /// Records successfully extracted
    pub records: usize,

    /// Recipe pages that could not be fetched or were missing required elements
    pub failed_recipes: usize,
}

/// Result of a completed crawl
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub main_category: Category,
    pub sub_categories: Vec<SubCategory>,
    pub records: Vec<RecipeRecord>,
    pub report: CrawlReport,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    ctx: CrawlContext,
    index_url: String,
    main_category_name: String,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - HTTP client built and selector schema compiled
    /// * `Err(HarvestError)` - The configuration could not be turned into a crawl context
    pub fn new(config: &Config) -> Result<Self, HarvestError> {
        let ctx = CrawlContext::from_config(config)?;
        let index_url = ctx.base_url.join(&config.categories_url)?.to_string();

        Ok(Self {
            ctx,
            index_url,
            main_category_name: config.main_category_name.clone(),
        })
    }

    /// URL of the category index page
    pub fn index_url(&self) -> &str {
        &self.index_url
    }

    /// Runs every stage and returns the extracted records in listing order
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlOutcome)` - The crawl finished; individual pages may have failed
    /// * `Err(HarvestError::MainCategoryNotFound)` - The configured category is not on the index
    pub async fn run(&self) -> Result<CrawlOutcome, HarvestError> {
        tracing::info!("Fetching categories from {}", self.index_url);
        let main_category = self.resolve_main_category().await?;

        tracing::info!("Fetching sub-categories for {}", main_category.name);
        let categories = list_categories(&self.ctx, &main_category.url).await;

        tracing::info!(
            "Fetching recipe URLs from {} sub-categories",
            categories.len()
        );
        let sub_categories = collect_all(&self.ctx, &categories).await;

        let recipe_urls: usize = sub_categories.iter().map(|s| s.recipe_urls.len()).sum();
        tracing::info!("Scraping {} recipe pages", recipe_urls);
        let (records, failed_recipes) =
            extract_all_recipes(&self.ctx, &main_category, &sub_categories).await;

        let report = CrawlReport {
            sub_categories: sub_categories.len(),
            empty_listings: sub_categories
                .iter()
                .filter(|s| s.recipe_urls.is_empty())
                .count(),
            recipe_urls,
            records: records.len(),
            failed_recipes,
        };

        tracing::info!(
            "Crawl completed: {} records from {} recipe pages ({} failed)",
            report.records,
            report.recipe_urls,
            report.failed_recipes
        );

        Ok(CrawlOutcome {
            main_category,
            sub_categories,
            records,
            report,
        })
    }

    async fn resolve_main_category(&self) -> Result<Category, HarvestError> {
        let categories = list_categories(&self.ctx, &self.index_url).await;

        let url = resolve_target(&categories, &self.main_category_name).ok_or_else(|| {
            HarvestError::MainCategoryNotFound {
                name: self.main_category_name.clone(),
            }
        })?;

        Ok(Category::new(self.main_category_name.clone(), url))
    }
}
