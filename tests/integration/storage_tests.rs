//! Integration tests for persisting a crawl and reporting over it

use crate::fixtures::{create_test_config, mount_page, mount_site, recipe_page};
use recipe_harvest::crawler::Coordinator;
use recipe_harvest::output::load_statistics;
use recipe_harvest::storage::{open_store, replace_collection, RecipeStore};
use tempfile::TempDir;
use wiremock::MockServer;

#[tokio::test]
async fn test_crawl_persist_and_report() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("recipes.db");

    mount_site(&server, &["/recipe/a", "/recipe/b", "/recipe/c"]).await;
    mount_page(&server, "/recipe/a", recipe_page("A", "nino", "4 ულუფა")).await;
    mount_page(&server, "/recipe/b", recipe_page("B", "nino", "ულუფა")).await;
    mount_page(&server, "/recipe/c", recipe_page("C", "ana", "10 ულუფა")).await;

    let config = create_test_config(&server.uri(), "ცომეული", db_path.to_str().unwrap());
    let outcome = Coordinator::new(&config).unwrap().run().await.unwrap();
    assert_eq!(outcome.records.len(), 3);

    let mut store = open_store(&db_path).unwrap();
    let saved = replace_collection(&mut store, "recipes", &outcome.records).unwrap();
    assert_eq!(saved, 3);

    let stored = store.load_records("recipes").unwrap();
    assert_eq!(stored, outcome.records);

    let stats = load_statistics(&store, "recipes").unwrap();
    assert_eq!(stats.total_recipes, 3);
    assert_eq!(stats.average_ingredients, Some(2.0));
    assert_eq!(stats.average_cooking_stages, Some(2.0));

    let author = stats.top_author.unwrap();
    assert_eq!(author.author_name, "nino");
    assert_eq!(author.recipe_count, 2);

    let leader = stats.most_portions.unwrap();
    assert_eq!(leader.name, "C");
    assert_eq!(leader.portion, 10);
}

#[tokio::test]
async fn test_rerun_replaces_previous_results() {
    let server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("recipes.db");

    mount_site(&server, &["/recipe/a"]).await;
    mount_page(&server, "/recipe/a", recipe_page("A", "nino", "2 ულუფა")).await;

    let config = create_test_config(&server.uri(), "ცომეული", db_path.to_str().unwrap());

    for _ in 0..2 {
        let outcome = Coordinator::new(&config).unwrap().run().await.unwrap();
        let mut store = open_store(&db_path).unwrap();
        replace_collection(&mut store, "recipes", &outcome.records).unwrap();
    }

    let store = open_store(&db_path).unwrap();
    assert_eq!(store.count("recipes").unwrap(), 1);
}
