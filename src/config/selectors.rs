//! Compiled selector schema
//!
//! The configured class names are turned into CSS selectors once, at startup, and the
//! resulting [`SelectorSchema`] is handed by reference to every extraction call.

use crate::config::types::Config;
use crate::ConfigError;
use scraper::Selector;

/// All selectors needed by the crawl stages
#[derive(Debug, Clone)]
pub struct SelectorSchema {
    pub category_container: Selector,
    pub category_item: Selector,
    pub category_text: Selector,

    pub recipes_container: Selector,
    pub recipe_link: Selector,

    pub recipe_title: Selector,
    pub main_image: Selector,
    pub image: Selector,
    pub description: Selector,
    pub author: Selector,
    pub author_name: Selector,
    pub ingredients: Selector,
    pub cooking_stages: Selector,
    pub stage_count: Selector,
    pub stage_text: Selector,
    pub portion: Selector,
}

impl SelectorSchema {
    /// Compiles every configured class into a selector
    ///
    /// # Returns
    ///
    /// * `Ok(SelectorSchema)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - A class name produced an invalid selector
    pub fn compile(config: &Config) -> Result<Self, ConfigError> {
        let categories = &config.category_classes;
        let recipes = &config.recipes_classes;
        let page = &config.recipe_page_classes;

        Ok(Self {
            category_container: class_selector("category_classes.main_category", "div", &categories.main_category)?,
            category_item: class_selector("category_classes.category_item", "a", &categories.category_item)?,
            category_text: class_selector("category_classes.category_text", "div", &categories.category_text)?,

            recipes_container: class_selector("recipes_classes.recipes_container", "div", &recipes.recipes_container)?,
            recipe_link: class_selector("recipes_classes.recipe_link", "a", &recipes.recipe_link)?,

            recipe_title: class_selector("recipe_page_classes.recipe_title", "div", &page.recipe_title)?,
            main_image: class_selector("recipe_page_classes.main_image", "div", &page.main_image)?,
            image: parse_selector("img", "img")?,
            description: class_selector("recipe_page_classes.description", "div", &page.description)?,
            author: class_selector("recipe_page_classes.author", "div", &page.author)?,
            author_name: parse_selector("recipe_page_classes.author_name", page.author_name.trim())?,
            ingredients: class_selector("recipe_page_classes.ingredients", "div", &page.ingredients)?,
            cooking_stages: class_selector("recipe_page_classes.cooking_stages", "div", &page.cooking_stages)?,
            stage_count: class_selector("recipe_page_classes.stage_count", "div", &page.stage_count)?,
            stage_text: parse_selector("p", "p")?,
            portion: class_selector("recipe_page_classes.portion", "div", &page.portion)?,
        })
    }
}

/// Builds `tag.class` from a class attribute value
///
/// A value holding several space-separated classes requires all of them, so
/// `"recipe main"` on `div` becomes `div.recipe.main`.
fn class_selector(key: &'static str, tag: &str, classes: &str) -> Result<Selector, ConfigError> {
    let classes: Vec<&str> = classes.split_whitespace().collect();
    if classes.is_empty() {
        return Err(ConfigError::Validation(format!("{} cannot be empty", key)));
    }

    let selector = format!("{}.{}", tag, classes.join("."));
    if !classes.iter().all(|class| is_css_identifier(class)) {
        return Err(ConfigError::InvalidSelector { key, selector });
    }
    parse_selector(key, &selector)
}

/// Whether a class name can be used in a selector without escaping
///
/// Letters, digits, `-`, `_` and non-ASCII characters, not starting with a digit or with
/// `-` followed by a digit.
fn is_css_identifier(class: &str) -> bool {
    let is_name_char =
        |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii();

    let mut chars = class.chars();
    let starts_ok = match (chars.next(), chars.next()) {
        (Some(first), _) if first.is_ascii_digit() => false,
        (Some('-'), Some(second)) => !second.is_ascii_digit(),
        (Some('-'), None) => false,
        (Some(_), _) => true,
        (None, _) => false,
    };

    starts_ok && class.chars().all(is_name_char)
}

fn parse_selector(key: &'static str, selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|_| ConfigError::InvalidSelector {
        key,
        selector: selector.to_string(),
    })
}
