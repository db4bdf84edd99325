//! Configuration module for Recipe-Harvest
//!
//! This module handles loading, parsing, and validating the TOML file describing the
//! target site, its selector schema, and where results are stored.
//!
//! # Example
//!
//! ```no_run
//! use recipe_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Crawling category: {}", config.main_category_name);
//! ```

mod parser;
mod selectors;
mod types;
mod validation;

// Re-export types
pub use selectors::SelectorSchema;
pub use types::{
    CategoryClasses, Config, RecipePageClasses, RecipesClasses, StorageConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

#[cfg(test)]
pub(crate) fn test_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        categories_url: "/categories".to_string(),
        main_category_name: "Bakery".to_string(),
        user_agent: "TestHarvest/1.0".to_string(),
        category_classes: CategoryClasses {
            main_category: "categories".to_string(),
            category_item: "category-item".to_string(),
            category_text: "category-text".to_string(),
        },
        recipes_classes: RecipesClasses {
            recipes_container: "recipes".to_string(),
            recipe_link: "recipe-link".to_string(),
        },
        recipe_page_classes: RecipePageClasses {
            recipe_title: "recipe-title".to_string(),
            main_image: "main-image".to_string(),
            description: "description".to_string(),
            author: "author".to_string(),
            author_name: "span".to_string(),
            ingredients: "ingredient".to_string(),
            cooking_stages: "stage".to_string(),
            stage_count: "stage-count".to_string(),
            portion: "portion".to_string(),
        },
        storage: StorageConfig {
            database_path: ":memory:".to_string(),
            collection_name: "recipes".to_string(),
        },
    }
}
