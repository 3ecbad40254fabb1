mod common;

use axum::http::StatusCode;
use serde_json::json;
use series_api::routes;
use series_api::state::AppState;
use common::{empty_pool, send, setup_app};

async fn assert_every_route_fails(app: &axum::Router) {
    let payload = json!({ "nombre": "Foo" });

    let (status, body) = send(app, "GET", "/api/series", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error fetching series" }));

    let (status, body) = send(app, "GET", "/api/series/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error fetching series" }));

    let (status, body) = send(app, "POST", "/api/series", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error creating series" }));

    let (status, body) = send(app, "PUT", "/api/series/1", Some(payload)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error updating series" }));

    let (status, body) = send(app, "DELETE", "/api/series/1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error deleting series" }));
}

#[tokio::test]
async fn test_closed_pool_yields_generic_errors() {
    let (app, pool) = setup_app().await;
    pool.close().await;

    assert_every_route_fails(&app).await;
    // The router keeps serving after failures.
    assert_every_route_fails(&app).await;
}

#[tokio::test]
async fn test_missing_table_yields_generic_errors() {
    let pool = empty_pool().await;
    let app = routes::router(AppState { pool });

    assert_every_route_fails(&app).await;
}

#[tokio::test]
async fn test_unreachable_database_does_not_block_startup() {
    let pool = series_api::db::connect("sqlite:/nonexistent-dir/series.db").unwrap();
    assert!(series_api::db::probe(&pool).await.is_err());

    let app = routes::router(AppState { pool });
    let (status, body) = send(&app, "GET", "/api/series", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error fetching series" }));
}
