//! Recipe detail page extraction
//!
//! A recipe is either extracted completely or not at all: every mandatory element must be
//! present, otherwise the page is reported as a structure mismatch and no record is built.
//!
//! Mandatory elements:
//!
//! | Field          | Lookup                                                   |
//! |----------------|----------------------------------------------------------|
//! | name           | text of the title container                              |
//! | main image     | `src` of the first `img` inside the image container      |
//! | description    | text of the description container                        |
//! | author         | text of the author-name tag inside the author container  |
//! | cooking stages | every stage needs its count element and a `p`            |
//! | portion        | the second portion container                             |
//!
//! Ingredients may legitimately be empty.

use crate::config::SelectorSchema;
use crate::crawler::context::CrawlContext;
use crate::crawler::extract::{element_text, extract_all, extract_attr, extract_text, find_first};
use crate::model::{Category, CookingStage, RecipeRecord, SubCategory};
use crate::HarvestError;
use futures::future::join_all;
use scraper::Html;

/// Bare "portion" as the site prints it for a single serving
const BARE_PORTION: &str = "ულუფა";

/// Replacement for [`BARE_PORTION`]
const SINGLE_PORTION: &str = "1 ულუფა";

/// Position of the serving count among the portion containers
const PORTION_INDEX: usize = 1;

/// Where a recipe URL was found
#[derive(Debug, Clone, Copy)]
pub struct RecipeOrigin<'a> {
    pub main_category: &'a Category,
    pub sub_category: &'a SubCategory,
}

/// Fetches one recipe page and extracts its record
///
/// Fetch failures and missing elements are logged with the URL and produce `None`.
pub async fn extract_recipe(
    ctx: &CrawlContext,
    recipe_url: &str,
    origin: RecipeOrigin<'_>,
) -> Option<RecipeRecord> {
    let Some(doc) = ctx.fetcher.fetch(recipe_url).await else {
        tracing::warn!("Failed to retrieve recipe details from {}", recipe_url);
        return None;
    };

    match parse_recipe(&doc, &ctx.schema, recipe_url, origin) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!("Error extracting recipe details: {}", e);
            None
        }
    }
}

/// Extracts every recipe listed under the given sub-categories concurrently
///
/// Results follow the flattened (sub-category, recipe URL) order; failed pages are dropped.
/// The second value is the number of recipe pages that produced no record.
pub async fn extract_all_recipes(
    ctx: &CrawlContext,
    main_category: &Category,
    sub_categories: &[SubCategory],
) -> (Vec<RecipeRecord>, usize) {
    let tasks = sub_categories.iter().flat_map(move |sub_category| {
        let origin = RecipeOrigin {
            main_category,
            sub_category,
        };
        sub_category
            .recipe_urls
            .iter()
            .map(move |url| extract_recipe(ctx, url, origin))
    });

    let outcomes = join_all(tasks).await;
    let attempted = outcomes.len();
    let records: Vec<RecipeRecord> = outcomes.into_iter().flatten().collect();
    let failed = attempted - records.len();
    (records, failed)
}

/// Builds a record from a parsed recipe page
pub fn parse_recipe(
    doc: &Html,
    schema: &SelectorSchema,
    recipe_url: &str,
    origin: RecipeOrigin<'_>,
) -> Result<RecipeRecord, HarvestError> {
    let missing = |field: &'static str| HarvestError::MissingElement {
        url: recipe_url.to_string(),
        field,
    };
    let root = doc.root_element();

    let name = extract_text(root, &schema.recipe_title).ok_or_else(|| missing("recipe title"))?;

    let main_image_url = find_first(root, &schema.main_image)
        .and_then(|container| extract_attr(container, &schema.image, "src"))
        .ok_or_else(|| missing("main image"))?;

    let description =
        extract_text(root, &schema.description).ok_or_else(|| missing("description"))?;

    let author_name = find_first(root, &schema.author)
        .and_then(|container| extract_text(container, &schema.author_name))
        .ok_or_else(|| missing("author name"))?;

    let ingredients = extract_all(root, &schema.ingredients)
        .into_iter()
        .map(element_text)
        .collect();

    let cooking_stages = extract_all(root, &schema.cooking_stages)
        .into_iter()
        .map(|item| {
            let stage =
                extract_text(item, &schema.stage_count).ok_or_else(|| missing("stage count"))?;
            let text =
                extract_text(item, &schema.stage_text).ok_or_else(|| missing("stage text"))?;
            Ok::<_, HarvestError>(CookingStage { stage, text })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let portion = extract_all(root, &schema.portion)
        .get(PORTION_INDEX)
        .map(|element| normalize_portion(&element.text().collect::<String>()))
        .ok_or_else(|| missing("portion"))?;

    Ok(RecipeRecord {
        name,
        url: recipe_url.to_string(),
        main_category_name: origin.main_category.name.clone(),
        main_category_url: origin.main_category.url.clone(),
        sub_category_name: origin.sub_category.name.clone(),
        sub_category_url: origin.sub_category.url.clone(),
        main_image_url,
        description,
        author_name,
        ingredients,
        cooking_stages,
        portion,
    })
}

/// Trims the portion text and spells out the site's bare singular form
pub fn normalize_portion(raw: &str) -> String {
    let portion = raw.trim();
    if portion == BARE_PORTION {
        SINGLE_PORTION.to_string()
    } else {
        portion.to_string()
    }
}
