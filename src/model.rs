//! Records produced by the crawl stages
//!
//! Every type here is built once by the stage that discovers it and never mutated after.

use serde::{Deserialize, Serialize};

/// A top-level site section, or a sub-category listed under one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub url: String,
}

impl Category {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// A sub-category listing page and the recipe URLs found on it
///
/// `recipe_urls` is empty both when the listing has no recipes and when it could not be
/// fetched or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubCategory {
    pub name: String,
    pub url: String,
    pub recipe_urls: Vec<String>,
}

/// One numbered step of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookingStage {
    pub stage: String,
    pub text: String,
}

/// A fully extracted recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub name: String,
    pub url: String,
    pub main_category_name: String,
    pub main_category_url: String,
    pub sub_category_name: String,
    pub sub_category_url: String,
    pub main_image_url: String,
    pub description: String,
    pub author_name: String,
    pub ingredients: Vec<String>,
    pub cooking_stages: Vec<CookingStage>,
    pub portion: String,
}
