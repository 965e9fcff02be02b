//! Integration tests for the upstream catalog client.
//!
//! A stub upstream is spawned on an ephemeral port from the same axum
//! stack the server crate uses, so the tests exercise real HTTP round
//! trips without a live third-party dependency or a mock-server crate.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use portal_client::{CatalogClient, ClientConfig, ClientError};

/// Bind a stub upstream on an ephemeral port and serve `router`.
///
/// Returns the base URL to hand to the client. The serve task is dropped
/// with the test runtime.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/api")
}

fn client_for(base_url: String) -> CatalogClient {
    CatalogClient::new(ClientConfig {
        base_url,
        ..ClientConfig::default()
    })
    .unwrap()
}

fn episode_listing_body() -> Json<Value> {
    Json(json!({
        "info": { "count": 2, "pages": 3, "next": null, "prev": null },
        "results": [
            {
                "id": 1,
                "name": "Pilot",
                "air_date": "December 2, 2013",
                "episode": "S01E01",
                "characters": []
            },
            {
                "id": 2,
                "name": "Lawnmower Dog",
                "air_date": "December 9, 2013",
                "episode": "S01E02",
                "characters": []
            }
        ]
    }))
}

// =========================================================================
// Listing fetches
// =========================================================================

#[tokio::test]
async fn episodes_page_returns_items_and_total_pages() {
    let router = Router::new().route("/api/episode", get(|| async { episode_listing_body() }));
    let client = client_for(spawn_upstream(router).await);

    let page = client.episodes_page(1).await.unwrap();

    let page_size = client.config().page_size;
    assert!(page.items.len() <= usize::try_from(page_size).unwrap());
    assert!(page.total_pages >= 1);
    assert_eq!(page.total_pages, 3);
    assert_eq!(
        page.items.first().map(|e| e.name.as_str()),
        Some("Pilot")
    );
}

#[tokio::test]
async fn listing_failure_status_is_upstream_unavailable() {
    let router = Router::new().route(
        "/api/episode",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = client_for(spawn_upstream(router).await);

    let result = client.episodes_page(1).await;
    assert!(matches!(result, Err(ClientError::UpstreamUnavailable(_))));
}

#[tokio::test]
async fn listing_without_envelope_is_malformed() {
    let router = Router::new().route(
        "/api/location",
        get(|| async { Json(json!({ "unexpected": true })) }),
    );
    let client = client_for(spawn_upstream(router).await);

    let result = client.locations_page(1).await;
    assert!(matches!(result, Err(ClientError::MalformedResponse(_))));
}

#[tokio::test]
async fn characters_first_page_discards_pagination() {
    let router = Router::new().route(
        "/api/character",
        get(|| async {
            Json(json!({
                "info": { "count": 1, "pages": 42 },
                "results": [
                    { "id": 1, "name": "Rick Sanchez", "image": "http://img.test/1.png" }
                ]
            }))
        }),
    );
    let client = client_for(spawn_upstream(router).await);

    let characters = client.characters_first_page().await.unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(
        characters.first().map(|c| c.name.as_str()),
        Some("Rick Sanchez")
    );
}

// =========================================================================
// Detail fetches
// =========================================================================

#[tokio::test]
async fn episode_by_id_parses_the_production_code() {
    let router = Router::new().route(
        "/api/episode/{id}",
        get(|Path(id): Path<u32>| async move {
            Json(json!({
                "id": id,
                "name": "Rickmancing the Stone",
                "air_date": "July 30, 2017",
                "episode": "S03E07",
                "characters": ["http://img.test/api/character/1"]
            }))
        }),
    );
    let client = client_for(spawn_upstream(router).await);

    let detail = client.episode_by_id(27).await.unwrap();
    assert_eq!(detail.code.season, "03");
    assert_eq!(detail.code.episode, "07");
    assert_eq!(detail.characters.len(), 1);
}

#[tokio::test]
async fn episode_with_invalid_code_is_malformed() {
    let router = Router::new().route(
        "/api/episode/{id}",
        get(|Path(id): Path<u32>| async move {
            Json(json!({
                "id": id,
                "name": "Pilot",
                "air_date": "December 2, 2013",
                "episode": "0101",
                "characters": []
            }))
        }),
    );
    let client = client_for(spawn_upstream(router).await);

    let result = client.episode_by_id(1).await;
    assert!(matches!(result, Err(ClientError::MalformedResponse(_))));
}

#[tokio::test]
async fn missing_detail_record_is_upstream_unavailable() {
    let router = Router::new().route(
        "/api/location/{id}",
        get(|Path(_id): Path<u32>| async { StatusCode::NOT_FOUND }),
    );
    let client = client_for(spawn_upstream(router).await);

    let result = client.location_by_id(999).await;
    assert!(matches!(result, Err(ClientError::UpstreamUnavailable(_))));
}

// =========================================================================
// Related-resource fan-out
// =========================================================================

#[tokio::test]
async fn fetch_related_with_no_urls_makes_no_calls() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    let router = Router::new().route(
        "/api/character/{id}",
        get(move |Path(id): Path<u32>| {
            let counter = Arc::clone(&counter);
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "name": format!("Character {id}"), "image": "http://img.test/x.png" }))
            }
        }),
    );
    let client = client_for(spawn_upstream(router).await);

    let cards = client.fetch_related(&[]).await;
    assert!(cards.is_empty());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn fetch_related_single_failure_yields_single_none() {
    let router = Router::new().route(
        "/api/character/{id}",
        get(|Path(_id): Path<u32>| async { StatusCode::NOT_FOUND }),
    );
    let base = spawn_upstream(router).await;
    let client = client_for(base.clone());

    let cards = client
        .fetch_related(&[format!("{base}/character/1")])
        .await;

    assert_eq!(cards, vec![None]);
}

#[tokio::test]
async fn fetch_related_preserves_length_and_input_order() {
    let failing: [u32; 2] = [2, 4];
    let router = Router::new().route(
        "/api/character/{id}",
        get(move |Path(id): Path<u32>| async move {
            if failing.contains(&id) {
                Err(StatusCode::NOT_FOUND)
            } else {
                Ok(Json(json!({
                    "name": format!("Character {id}"),
                    "image": format!("http://img.test/{id}.png")
                })))
            }
        }),
    );
    let base = spawn_upstream(router).await;
    let client = client_for(base.clone());

    let urls: Vec<String> = (1..=5)
        .map(|id| format!("{base}/character/{id}"))
        .collect();
    let cards = client.fetch_related(&urls).await;

    assert_eq!(cards.len(), 5);
    let none_count = cards.iter().filter(|c| c.is_none()).count();
    assert_eq!(none_count, 2);

    // Survivors sit at their input positions.
    assert_eq!(
        cards.first().and_then(|c| c.as_ref()).map(|c| c.name.as_str()),
        Some("Character 1")
    );
    assert!(cards.get(1).map(Option::is_none).unwrap_or(false));
    assert_eq!(
        cards.get(2).and_then(|c| c.as_ref()).map(|c| c.name.as_str()),
        Some("Character 3")
    );
    assert!(cards.get(3).map(Option::is_none).unwrap_or(false));
    assert_eq!(
        cards.get(4).and_then(|c| c.as_ref()).map(|c| c.name.as_str()),
        Some("Character 5")
    );
}

#[tokio::test]
async fn fetch_related_malformed_body_degrades_to_none() {
    let router = Router::new().route(
        "/api/character/{id}",
        get(|Path(_id): Path<u32>| async { Json(json!({ "unexpected": true })) }),
    );
    let base = spawn_upstream(router).await;
    let client = client_for(base.clone());

    let cards = client
        .fetch_related(&[format!("{base}/character/1")])
        .await;

    assert_eq!(cards, vec![None]);
}
