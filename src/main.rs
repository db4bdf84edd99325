//! Recipe-Harvest main entry point
//!
//! This is the command-line interface for the Recipe-Harvest crawler.

use clap::Parser;
use recipe_harvest::config::{load_config_with_hash, Config};
use recipe_harvest::crawler::crawl;
use recipe_harvest::output::{load_statistics, print_report, print_statistics, write_records_json};
use recipe_harvest::storage::{open_store, replace_collection};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Recipe-Harvest: a category-driven recipe site crawler
///
/// Recipe-Harvest resolves one category on a recipe site, walks every sub-category
/// listing under it, extracts each recipe page, prints the records as JSON and stores
/// them in a local document database.
#[derive(Parser, Debug)]
#[command(name = "recipe-harvest")]
#[command(version)]
#[command(about = "A category-driven recipe site crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics over the stored recipes and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((config, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config)?;
    } else {
        handle_crawl(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("recipe_harvest=info,warn"),
            1 => EnvFilter::new("recipe_harvest=debug,info"),
            2 => EnvFilter::new("recipe_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Recipe-Harvest Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.base_url);
    println!("  Category index: {}", config.categories_url);
    println!("  Main category: {}", config.main_category_name);
    println!("  User agent: {}", config.user_agent);

    println!("\nCategory Classes:");
    println!("  Container: {}", config.category_classes.main_category);
    println!("  Item: {}", config.category_classes.category_item);
    println!("  Text: {}", config.category_classes.category_text);

    println!("\nRecipe Listing Classes:");
    println!("  Container: {}", config.recipes_classes.recipes_container);
    println!("  Link: {}", config.recipes_classes.recipe_link);

    let page = &config.recipe_page_classes;
    println!("\nRecipe Page Classes:");
    println!("  Title: {}", page.recipe_title);
    println!("  Main image: {}", page.main_image);
    println!("  Description: {}", page.description);
    println!("  Author: {} > {}", page.author, page.author_name);
    println!("  Ingredients: {}", page.ingredients);
    println!("  Cooking stages: {} > {}", page.cooking_stages, page.stage_count);
    println!("  Portion: {}", page.portion);

    println!("\nStorage:");
    println!("  Database: {}", config.storage.database_path);
    println!("  Collection: {}", config.storage.collection_name);

    println!("\n✓ Configuration is valid");
}

/// Handles the --stats mode: runs the aggregates over the stored collection
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}", config.storage.database_path);
    println!("Collection: {}\n", config.storage.collection_name);

    let store = open_store(Path::new(&config.storage.database_path))?;
    let stats = load_statistics(&store, &config.storage.collection_name)?;
    print_statistics(&stats);

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    tracing::info!(
        "Starting crawl of '{}' on {}",
        config.main_category_name,
        config.base_url
    );

    let outcome = match crawl(config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    write_records_json(&mut std::io::stdout().lock(), &outcome.records)?;
    print_report(&outcome.report);

    let mut store = open_store(Path::new(&config.storage.database_path))?;
    replace_collection(&mut store, &config.storage.collection_name, &outcome.records)?;

    tracing::info!("Crawl completed successfully");
    Ok(())
}
