use serde::Deserialize;

/// Main configuration structure for Recipe-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Site root every discovered href is resolved against
    ///
    /// Hrefs are joined as URLs, so a root-relative href like `/receptebi/1` drops any path
    /// given here; point this at the site root.
    pub base_url: String,

    /// Path of the category index page, relative to `base_url`
    pub categories_url: String,

    /// Display name of the category to crawl
    pub main_category_name: String,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    pub category_classes: CategoryClasses,
    pub recipes_classes: RecipesClasses,
    pub recipe_page_classes: RecipePageClasses,
    pub storage: StorageConfig,
}

fn default_user_agent() -> String {
    format!("recipe-harvest/{}", env!("CARGO_PKG_VERSION"))
}

/// Classes locating categories on an index or category page
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryClasses {
    /// Container `div` holding every category anchor
    pub main_category: String,

    /// Class of each category `a`
    pub category_item: String,

    /// Class of the `div` inside an anchor carrying the display name
    pub category_text: String,
}

/// Classes locating recipe links on a sub-category listing
#[derive(Debug, Clone, Deserialize)]
pub struct RecipesClasses {
    pub recipes_container: String,
    pub recipe_link: String,
}

/// Classes locating fields on a recipe detail page
#[derive(Debug, Clone, Deserialize)]
pub struct RecipePageClasses {
    pub recipe_title: String,
    pub main_image: String,
    pub description: String,
    pub author: String,

    /// Tag name (not a class) of the author's name inside the author container
    pub author_name: String,

    pub ingredients: String,
    pub cooking_stages: String,
    pub stage_count: String,
    pub portion: String,
}

/// Document store location
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file
    pub database_path: String,

    /// Collection the crawl results replace
    pub collection_name: String,
}
