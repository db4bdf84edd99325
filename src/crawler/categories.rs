//! Category index parsing and main category resolution

use crate::config::SelectorSchema;
use crate::crawler::context::CrawlContext;
use crate::crawler::extract::{extract_all, extract_text, find_first, resolve_link};
use crate::model::Category;
use crate::HarvestError;
use scraper::Html;
use url::Url;

/// Fetches a category page and lists the categories linked from it
///
/// Used both for the site's category index and for a main category's own page, whose
/// entries are its sub-categories. Any failure is logged and yields an empty list.
pub async fn list_categories(ctx: &CrawlContext, page_url: &str) -> Vec<Category> {
    let Some(doc) = ctx.fetcher.fetch(page_url).await else {
        tracing::warn!(
            "Failed to retrieve categories from {}: invalid URL or network issue",
            page_url
        );
        return Vec::new();
    };

    match parse_categories(&doc, &ctx.schema, &ctx.base_url, page_url) {
        Ok(categories) => {
            tracing::debug!("Found {} categories on {}", categories.len(), page_url);
            categories
        }
        Err(e) => {
            tracing::warn!("Error extracting categories: {}", e);
            Vec::new()
        }
    }
}

/// Extracts every category anchor inside the categories container, in document order
///
/// An anchor without its name element or a resolvable href invalidates the whole page.
pub fn parse_categories(
    doc: &Html,
    schema: &SelectorSchema,
    base_url: &Url,
    page_url: &str,
) -> Result<Vec<Category>, HarvestError> {
    let missing = |field: &'static str| HarvestError::MissingElement {
        url: page_url.to_string(),
        field,
    };

    let container = find_first(doc.root_element(), &schema.category_container)
        .ok_or_else(|| missing("category container"))?;

    extract_all(container, &schema.category_item)
        .into_iter()
        .map(|anchor| {
            let name = extract_text(anchor, &schema.category_text)
                .ok_or_else(|| missing("category name"))?;
            let url = anchor
                .value()
                .attr("href")
                .and_then(|href| resolve_link(href, base_url))
                .ok_or_else(|| missing("category href"))?;
            Ok::<_, HarvestError>(Category { name, url })
        })
        .collect()
}

/// Finds the URL of the first category whose name matches exactly
pub fn resolve_target<'a>(categories: &'a [Category], target_name: &str) -> Option<&'a str> {
    let found = categories
        .iter()
        .find(|category| category.name == target_name)
        .map(|category| category.url.as_str());

    if found.is_none() {
        tracing::error!("Main category '{}' not found", target_name);
    }
    found
}
