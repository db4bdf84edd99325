//! Statistics generation from stored recipes
//!
//! Read-only aggregates over one collection: ingredient and cooking stage averages, the
//! most prolific author, and the recipe serving the most portions.

use crate::storage::{AuthorCount, PortionEntry, RecipeStore};
use crate::HarvestError;

/// The recipe with the largest numeric portion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortionLeader {
    pub name: String,
    pub url: String,
    pub portion: u32,
}

/// Recipe statistics summary
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeStatistics {
    /// Number of stored recipes
    pub total_recipes: u64,

    pub average_ingredients: Option<f64>,
    pub average_cooking_stages: Option<f64>,
    pub top_author: Option<AuthorCount>,
    pub most_portions: Option<PortionLeader>,
}

/// Loads statistics for one collection
pub fn load_statistics(
    store: &dyn RecipeStore,
    collection: &str,
) -> Result<RecipeStatistics, HarvestError> {
    let total_recipes = store.count(collection)?;
    let average_ingredients = store.average_ingredients(collection)?;
    let average_cooking_stages = store.average_cooking_stages(collection)?;
    let top_author = store.top_author(collection)?;
    let most_portions = portion_leader(&store.list_portions(collection)?);

    Ok(RecipeStatistics {
        total_recipes,
        average_ingredients,
        average_cooking_stages,
        top_author,
        most_portions,
    })
}

/// Parses the leading whitespace-separated token of a portion as a count
///
/// `"4 ულუფა"` gives 4; portions not starting with a number give `None`.
pub fn leading_portion_count(portion: &str) -> Option<u32> {
    portion.split_whitespace().next()?.parse().ok()
}

/// Picks the entry with the largest count; the earliest one wins a tie
pub fn portion_leader(entries: &[PortionEntry]) -> Option<PortionLeader> {
    let mut leader: Option<PortionLeader> = None;

    for entry in entries {
        let Some(portion) = leading_portion_count(&entry.portion) else {
            continue;
        };
        if leader.as_ref().map_or(true, |current| portion > current.portion) {
            leader = Some(PortionLeader {
                name: entry.name.clone(),
                url: entry.url.clone(),
                portion,
            });
        }
    }

    leader
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RecipeStatistics) {
    println!("=== Recipe Statistics ===\n");
    println!("Total recipes: {}", stats.total_recipes);

    match stats.average_ingredients {
        Some(average) => println!("Average ingredients: {:.2}", average),
        None => println!("Average ingredients: no recipes found"),
    }

    match stats.average_cooking_stages {
        Some(average) => println!("Average cooking stages: {:.2}", average),
        None => println!("Average cooking stages: no recipes found"),
    }

    match &stats.top_author {
        Some(author) => println!(
            "Author with the most recipes: {}, Recipe Count: {}",
            author.author_name, author.recipe_count
        ),
        None => println!("Author with the most recipes: no authors found"),
    }

    match &stats.most_portions {
        Some(leader) => {
            println!("Recipe with the most portions:");
            println!("  Name: {}", leader.name);
            println!("  URL: {}", leader.url);
            println!("  Portion: {}", leader.portion);
        }
        None => println!("Recipe with the most portions: no recipes with a valid portion"),
    }
}
