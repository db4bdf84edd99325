//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small recipe site and run the full crawl
//! end-to-end against it.

use crate::fixtures::{
    category_page, create_test_config, listing_page, mount_page, mount_site, recipe_page,
    run_with_logs,
};
use recipe_harvest::crawler::Coordinator;
use recipe_harvest::HarvestError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_full_crawl_single_sub_category() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_site(&server, &["/recipe/khachapuri", "/recipe/lobiani"]).await;
    mount_page(&server, "/recipe/khachapuri", recipe_page("ხაჭაპური", "nino", "ულუფა")).await;
    mount_page(&server, "/recipe/lobiani", recipe_page("ლობიანი", "giorgi", "6 ულუფა")).await;

    let config = create_test_config(&base_url, "ცომეული", ":memory:");
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let outcome = coordinator.run().await.expect("Crawl failed");

    assert_eq!(outcome.main_category.name, "ცომეული");
    assert_eq!(outcome.main_category.url, format!("{}/cat/bakery", base_url));
    assert_eq!(outcome.sub_categories.len(), 1);
    assert_eq!(outcome.records.len(), 2);

    let first = &outcome.records[0];
    assert_eq!(first.name, "ხაჭაპური");
    assert_eq!(first.url, format!("{}/recipe/khachapuri", base_url));
    assert_eq!(first.main_category_name, "ცომეული");
    assert_eq!(first.main_category_url, format!("{}/cat/bakery", base_url));
    assert_eq!(first.sub_category_name, "ღვეზელები");
    assert_eq!(first.sub_category_url, format!("{}/cat/bakery/pies", base_url));
    assert_eq!(first.main_image_url, "/images/nino.jpg");
    assert_eq!(first.description, "About ხაჭაპური.");
    assert_eq!(first.author_name, "nino");
    assert_eq!(first.ingredients, vec!["flour", "cheese"]);
    assert_eq!(first.cooking_stages.len(), 2);
    assert_eq!(first.cooking_stages[1].stage, "2");
    assert_eq!(first.cooking_stages[1].text, "Bake.");
    assert_eq!(first.portion, "1 ულუფა");

    let second = &outcome.records[1];
    assert_eq!(second.name, "ლობიანი");
    assert_eq!(second.sub_category_name, "ღვეზელები");
    assert_eq!(second.portion, "6 ულუფა");

    assert_eq!(outcome.report.recipe_urls, 2);
    assert_eq!(outcome.report.records, 2);
    assert_eq!(outcome.report.failed_recipes, 0);
}

#[tokio::test]
async fn test_one_broken_recipe_does_not_affect_siblings() {
    let server = MockServer::start().await;

    mount_site(&server, &["/recipe/a", "/recipe/b", "/recipe/c"]).await;
    mount_page(&server, "/recipe/a", recipe_page("A", "nino", "2 ულუფა")).await;
    mount_page(
        &server,
        "/recipe/b",
        recipe_page("B", "nino", "2 ულუფა").replace("post__author", "post__byline"),
    )
    .await;
    mount_page(&server, "/recipe/c", recipe_page("C", "ana", "4 ულუფა")).await;

    let config = create_test_config(&server.uri(), "ცომეული", ":memory:");
    let outcome = Coordinator::new(&config).unwrap().run().await.unwrap();

    let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(outcome.report.recipe_urls, 3);
    assert_eq!(outcome.report.failed_recipes, 1);
}

#[test]
fn test_broken_recipe_is_logged_with_url_and_field() {
    let ((outcome, recipe_b), logs) = run_with_logs(tracing::Level::INFO, async {
        let server = MockServer::start().await;

        mount_site(&server, &["/recipe/a", "/recipe/b", "/recipe/c"]).await;
        mount_page(&server, "/recipe/a", recipe_page("A", "nino", "2 ულუფა")).await;
        mount_page(
            &server,
            "/recipe/b",
            recipe_page("B", "nino", "2 ულუფა").replace("post__author", "post__byline"),
        )
        .await;
        mount_page(&server, "/recipe/c", recipe_page("C", "ana", "4 ულუფა")).await;

        let config = create_test_config(&server.uri(), "ცომეული", ":memory:");
        let outcome = Coordinator::new(&config).unwrap().run().await.unwrap();
        (outcome, format!("{}/recipe/b", server.uri()))
    });

    assert_eq!(outcome.records.len(), 2);

    let warning = logs
        .lines()
        .find(|line| line.contains("WARN") && line.contains(recipe_b.as_str()))
        .unwrap_or_else(|| panic!("no warning for {} in:\n{}", recipe_b, logs));
    assert!(warning.contains("author name"), "unexpected warning: {}", warning);
}

#[test]
fn test_recipe_link_without_href_is_logged() {
    let ((outcome, listing_url), logs) = run_with_logs(tracing::Level::DEBUG, async {
        let server = MockServer::start().await;

        mount_page(&server, "/receptebi", category_page(&[("ცომეული", "/cat/bakery")])).await;
        mount_page(
            &server,
            "/cat/bakery",
            category_page(&[("ღვეზელები", "/cat/bakery/pies")]),
        )
        .await;
        mount_page(
            &server,
            "/cat/bakery/pies",
            r#"<html><body><div class="kulinaria-row">
                 <a class="box__title" href="/recipe/a">A</a>
                 <a class="box__title">no link</a>
               </div></body></html>"#
                .to_string(),
        )
        .await;
        mount_page(&server, "/recipe/a", recipe_page("A", "nino", "2 ულუფა")).await;

        let config = create_test_config(&server.uri(), "ცომეული", ":memory:");
        let outcome = Coordinator::new(&config).unwrap().run().await.unwrap();
        (outcome, format!("{}/cat/bakery/pies", server.uri()))
    });

    assert_eq!(outcome.report.recipe_urls, 1);
    assert!(
        logs.lines().any(|line| line.contains("DEBUG")
            && line.contains("Skipping recipe link")
            && line.contains(listing_url.as_str())),
        "missing skipped-link log in:\n{}",
        logs
    );
}

#[tokio::test]
async fn test_unreachable_recipe_is_skipped() {
    let server = MockServer::start().await;

    mount_site(&server, &["/recipe/a", "/recipe/gone"]).await;
    mount_page(&server, "/recipe/a", recipe_page("A", "nino", "2 ულუფა")).await;
    Mock::given(method("GET"))
        .and(path("/recipe/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let config = create_test_config(&server.uri(), "ცომეული", ":memory:");
    let outcome = Coordinator::new(&config).unwrap().run().await.unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].name, "A");
    assert_eq!(outcome.report.failed_recipes, 1);
}

#[tokio::test]
async fn test_missing_main_category_aborts() {
    let server = MockServer::start().await;
    mount_site(&server, &["/recipe/a"]).await;

    let config = create_test_config(&server.uri(), "დესერტები", ":memory:");
    let result = Coordinator::new(&config).unwrap().run().await;

    match result {
        Err(HarvestError::MainCategoryNotFound { name }) => assert_eq!(name, "დესერტები"),
        other => panic!("expected MainCategoryNotFound, got {:?}", other.map(|o| o.records)),
    }
}

#[tokio::test]
async fn test_failed_listing_yields_empty_sub_category() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/receptebi", category_page(&[("ცომეული", "/cat/bakery")])).await;
    mount_page(
        &server,
        "/cat/bakery",
        category_page(&[("ღვეზელები", "/cat/bakery/pies"), ("ნამცხვრები", "/cat/bakery/cakes")]),
    )
    .await;
    mount_page(&server, "/cat/bakery/pies", listing_page(&["/recipe/a"])).await;
    Mock::given(method("GET"))
        .and(path("/cat/bakery/cakes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_page(&server, "/recipe/a", recipe_page("A", "nino", "2 ულუფა")).await;

    let config = create_test_config(&base_url, "ცომეული", ":memory:");
    let outcome = Coordinator::new(&config).unwrap().run().await.unwrap();

    assert_eq!(outcome.sub_categories.len(), 2);
    assert_eq!(outcome.sub_categories[0].recipe_urls, vec![format!("{}/recipe/a", base_url)]);
    assert_eq!(outcome.sub_categories[1].name, "ნამცხვრები");
    assert!(outcome.sub_categories[1].recipe_urls.is_empty());
    assert_eq!(outcome.report.empty_listings, 1);
    assert_eq!(outcome.records.len(), 1);
}

#[tokio::test]
async fn test_records_follow_sub_category_then_listing_order() {
    let server = MockServer::start().await;

    mount_page(&server, "/receptebi", category_page(&[("ცომეული", "/cat/bakery")])).await;
    mount_page(
        &server,
        "/cat/bakery",
        category_page(&[("first", "/cat/one"), ("second", "/cat/two")]),
    )
    .await;
    mount_page(&server, "/cat/one", listing_page(&["/recipe/3", "/recipe/1"])).await;
    mount_page(&server, "/cat/two", listing_page(&["/recipe/2"])).await;
    for (id, title) in [("1", "one"), ("2", "two"), ("3", "three")] {
        mount_page(&server, &format!("/recipe/{}", id), recipe_page(title, "nino", "2")).await;
    }

    let config = create_test_config(&server.uri(), "ცომეული", ":memory:");
    let outcome = Coordinator::new(&config).unwrap().run().await.unwrap();

    let pairs: Vec<(&str, &str)> = outcome
        .records
        .iter()
        .map(|r| (r.sub_category_name.as_str(), r.name.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("first", "three"), ("first", "one"), ("second", "two")]
    );
}
