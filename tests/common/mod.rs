#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::{any::AnyPoolOptions, AnyPool};
use tower::ServiceExt;
use series_api::routes;
use series_api::state::AppState;

pub const SCHEMA: &str = "CREATE TABLE series (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    imagen TEXT,
    nombre TEXT,
    tipo TEXT,
    subido_hace TEXT,
    capitulo TEXT
)";

/// In-memory SQLite only lives as long as its connection, so the pool is
/// pinned to a single one.
pub async fn empty_pool() -> AnyPool {
    sqlx::any::install_default_drivers();
    AnyPoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap()
}

/// Same table with a numeric chapter column, as some deployments declare it.
pub const NUMERIC_CHAPTER_SCHEMA: &str = "CREATE TABLE series (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    imagen TEXT,
    nombre TEXT,
    tipo TEXT,
    subido_hace TEXT,
    capitulo INTEGER
)";

pub async fn setup_pool_with(schema: &str) -> AnyPool {
    let pool = empty_pool().await;
    sqlx::query(schema).execute(&pool).await.unwrap();
    pool
}

pub async fn setup_pool() -> AnyPool {
    setup_pool_with(SCHEMA).await
}

pub async fn setup_app_with(schema: &str) -> (Router, AnyPool) {
    let pool = setup_pool_with(schema).await;
    let app = routes::router(AppState { pool: pool.clone() });
    (app, pool)
}

pub async fn setup_app() -> (Router, AnyPool) {
    setup_app_with(SCHEMA).await
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
