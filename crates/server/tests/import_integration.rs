//! `/import` tests: authorization, persistence and idempotency.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use revalis_core::catalog_client::CatalogClientError;
use revalis_core::config::ImportConfig;
use revalis_core::GameStore;
use common::{fixtures, TestFixture, IMPORT_KEY};

async fn seed_catalog(fixture: &TestFixture, count: i64) {
    for id in 1..=count {
        fixture
            .external_catalog
            .add_game(fixtures::detailed_external_game(id, &format!("Witcher {}", id)))
            .await;
    }
}

#[tokio::test]
async fn test_import_without_key_is_403() {
    let fixture = TestFixture::new();
    seed_catalog(&fixture, 1).await;

    let response = fixture.post_with_headers("/import?query=witcher", &[]).await;

    assert_status!(response, StatusCode::FORBIDDEN);
    assert_eq!(response.body["error"], "Invalid API key");
    assert!(fixture.external_catalog.recorded_queries().await.is_empty());
}

#[tokio::test]
async fn test_import_with_wrong_key_is_403() {
    let fixture = TestFixture::new();

    let response = fixture
        .post_with_headers("/import?query=witcher", &[("X-API-Key", "nope")])
        .await;

    assert_status!(response, StatusCode::FORBIDDEN);
    assert!(fixture.store.list().unwrap().is_empty());
}

#[tokio::test]
async fn test_import_persists_results() {
    let fixture = TestFixture::new();
    seed_catalog(&fixture, 3).await;

    let response = fixture
        .post_with_headers("/import?query=witcher", &[("X-API-Key", IMPORT_KEY)])
        .await;

    assert_status!(response, StatusCode::OK);
    let imported = response.body.as_array().unwrap();
    assert_eq!(imported.len(), 3);
    assert_eq!(imported[0]["developer"], "CD PROJEKT RED");
    assert!(imported[0]["platforms"][0]["icon"].is_null());

    let listed = fixture.get("/games").await;
    assert_eq!(listed.body.as_array().unwrap().len(), 3);

    let searches = fixture.external_catalog.recorded_queries().await;
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].page_size, 10);
    assert_eq!(searches[0].page, 1);
}

#[tokio::test]
async fn test_import_bearer_key_and_pages() {
    let fixture = TestFixture::new();
    seed_catalog(&fixture, 12).await;

    let bearer = format!("Bearer {}", IMPORT_KEY);
    let response = fixture
        .post_with_headers(
            "/import?query=witcher&pages=2",
            &[("Authorization", bearer.as_str())],
        )
        .await;

    assert_status!(response, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 12);

    let pages: Vec<_> = fixture
        .external_catalog
        .recorded_queries()
        .await
        .iter()
        .map(|q| q.page)
        .collect();
    assert_eq!(pages, vec![1, 2]);
}

#[tokio::test]
async fn test_import_keeps_existing_records() {
    let fixture = TestFixture::new();
    let local = fixture
        .post("/games", json!({"name": "Witcher 1", "rating": 1.0}))
        .await;
    seed_catalog(&fixture, 2).await;

    let headers = [("X-API-Key", IMPORT_KEY)];
    let first = fixture
        .post_with_headers("/import?query=witcher", &headers)
        .await;
    let second = fixture
        .post_with_headers("/import?query=witcher", &headers)
        .await;

    assert_status!(first, StatusCode::OK);
    assert_eq!(first.body[0], local.body);
    assert_eq!(first.body, second.body);
    assert_eq!(fixture.store.list().unwrap().len(), 2);
}

#[tokio::test]
async fn test_import_page_limit_is_400() {
    let fixture = TestFixture::with_import_config(ImportConfig {
        max_pages: 2,
        page_size: 10,
    });

    let response = fixture
        .post_with_headers("/import?query=witcher&pages=3", &[("X-API-Key", IMPORT_KEY)])
        .await;

    assert_status!(response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_import_catalog_failure_is_502() {
    let fixture = TestFixture::new();
    fixture
        .external_catalog
        .set_next_error(CatalogClientError::ApiError {
            status: 401,
            message: "bad key".to_string(),
        })
        .await;

    let response = fixture
        .post_with_headers("/import?query=witcher", &[("X-API-Key", IMPORT_KEY)])
        .await;

    assert_status!(response, StatusCode::BAD_GATEWAY);
}
