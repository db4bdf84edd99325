//! Output module for crawl results and reports
//!
//! This module handles:
//! - Rendering extracted records as JSON
//! - Printing the crawl report
//! - Computing and printing statistics over stored recipes

pub mod stats;

pub use stats::{load_statistics, print_statistics, PortionLeader, RecipeStatistics};

use crate::crawler::CrawlReport;
use crate::model::RecipeRecord;
use crate::HarvestError;
use std::io::Write;

/// Renders records as a pretty-printed JSON array
///
/// Non-ASCII text is written as-is rather than escaped.
pub fn render_records_json(records: &[RecipeRecord]) -> Result<String, HarvestError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes the JSON rendering of records followed by a newline
pub fn write_records_json<W: Write>(
    writer: &mut W,
    records: &[RecipeRecord],
) -> Result<(), HarvestError> {
    let json = render_records_json(records)?;
    writeln!(writer, "{}", json)?;
    Ok(())
}

/// Prints a crawl report to stderr, keeping stdout for the JSON records
pub fn print_report(report: &CrawlReport) {
    eprintln!("=== Crawl Report ===");
    eprintln!("  Sub-categories: {}", report.sub_categories);
    eprintln!("  Empty or failed listings: {}", report.empty_listings);
    eprintln!("  Recipe URLs: {}", report.recipe_urls);
    eprintln!("  Records extracted: {}", report.records);
    eprintln!("  Failed recipe pages: {}", report.failed_recipes);
}
