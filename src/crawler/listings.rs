//! Sub-category listing pages and the recipe links on them

use crate::config::SelectorSchema;
use crate::crawler::context::CrawlContext;
use crate::crawler::extract::{extract_all, find_first, resolve_link};
use crate::model::{Category, SubCategory};
use crate::HarvestError;
use futures::future::join_all;
use scraper::Html;
use url::Url;

/// Collects the recipe URLs listed on one sub-category page
///
/// A failed fetch or a page without the recipes container is logged and produces a
/// sub-category with no recipe URLs.
pub async fn collect_for_category(ctx: &CrawlContext, category: &Category) -> SubCategory {
    let recipe_urls = match ctx.fetcher.fetch(&category.url).await {
        Some(doc) => parse_recipe_links(&doc, &ctx.schema, &ctx.base_url, &category.url)
            .unwrap_or_else(|e| {
                tracing::warn!(
                    "Error extracting recipes for category '{}': {}",
                    category.name,
                    e
                );
                Vec::new()
            }),
        None => {
            tracing::warn!("Failed to fetch recipes from category '{}'", category.name);
            Vec::new()
        }
    };

    SubCategory {
        name: category.name.clone(),
        url: category.url.clone(),
        recipe_urls,
    }
}

/// Collects every category's listing concurrently, keeping input order
pub async fn collect_all(ctx: &CrawlContext, categories: &[Category]) -> Vec<SubCategory> {
    join_all(
        categories
            .iter()
            .map(|category| collect_for_category(ctx, category)),
    )
    .await
}

/// Extracts recipe links inside the recipes container, in document order
///
/// Links whose href is missing or does not resolve are skipped.
pub fn parse_recipe_links(
    doc: &Html,
    schema: &SelectorSchema,
    base_url: &Url,
    page_url: &str,
) -> Result<Vec<String>, HarvestError> {
    let container = find_first(doc.root_element(), &schema.recipes_container).ok_or_else(|| {
        HarvestError::MissingElement {
            url: page_url.to_string(),
            field: "recipes container",
        }
    })?;

    Ok(extract_all(container, &schema.recipe_link)
        .into_iter()
        .filter_map(|link| {
            let resolved = link
                .value()
                .attr("href")
                .and_then(|href| resolve_link(href, base_url));
            if resolved.is_none() {
                tracing::debug!(
                    "Skipping recipe link without a usable href on {}: {:?}",
                    page_url,
                    link.value().attr("href")
                );
            }
            resolved
        })
        .collect())
}
