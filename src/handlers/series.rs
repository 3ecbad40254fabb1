use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use crate::db;
use crate::models::{Series, SeriesPayload};
use crate::state::AppState;
use crate::utils::body::JsonBody;
use crate::utils::response::{ApiError, ErrorResponse, MessageResponse};

const FETCH_ERROR: &str = "Error fetching series";
const CREATE_ERROR: &str = "Error creating series";
const UPDATE_ERROR: &str = "Error updating series";
const DELETE_ERROR: &str = "Error deleting series";

#[utoipa::path(
    get,
    path = "/api/series",
    responses(
        (status = 200, description = "List every series", body = Vec<Series>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn list_series(
    State(state): State<AppState>,
) -> Result<Json<Vec<Series>>, ApiError> {
    let series = db::series::list(&state.pool)
        .await
        .map_err(ApiError::storage(FETCH_ERROR))?;

    Ok(Json(series))
}

#[utoipa::path(
    get,
    path = "/api/series/{id}",
    responses(
        (status = 200, description = "The series, or null when no row matches", body = Series),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    params(
        ("id" = String, Path, description = "Series ID")
    )
)]
pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Series>>, ApiError> {
    let series = db::series::find(&state.pool, &id)
        .await
        .map_err(ApiError::storage(FETCH_ERROR))?;

    Ok(Json(series))
}

#[utoipa::path(
    post,
    path = "/api/series",
    request_body = SeriesPayload,
    responses(
        (status = 201, description = "Assigned id merged with the submitted fields", body = Series),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
pub async fn create_series(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let payload = SeriesPayload::from_body(&body);

    let id = db::series::insert(&state.pool, &payload)
        .await
        .map_err(ApiError::storage(CREATE_ERROR))?;

    // Submitted keys are echoed as sent and win over the assigned id.
    let mut created = Map::new();
    created.insert("id".to_string(), Value::from(id));
    created.extend(body);

    Ok((StatusCode::CREATED, Json(Value::Object(created))))
}

#[utoipa::path(
    put,
    path = "/api/series/{id}",
    request_body = SeriesPayload,
    responses(
        (status = 200, description = "Series updated (also reported for unknown ids)", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    params(
        ("id" = String, Path, description = "Series ID")
    )
)]
pub async fn update_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<MessageResponse>, ApiError> {
    let payload = SeriesPayload::from_body(&body);
    let updated = db::series::update(&state.pool, &id, &payload)
        .await
        .map_err(ApiError::storage(UPDATE_ERROR))?;

    tracing::debug!("update of series {} touched {} row(s)", id, updated);

    Ok(Json(MessageResponse::new("Series updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/series/{id}",
    responses(
        (status = 200, description = "Series deleted (also reported for unknown ids)", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    params(
        ("id" = String, Path, description = "Series ID")
    )
)]
pub async fn delete_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = db::series::delete(&state.pool, &id)
        .await
        .map_err(ApiError::storage(DELETE_ERROR))?;

    tracing::debug!("delete of series {} touched {} row(s)", id, deleted);

    Ok(Json(MessageResponse::new("Series deleted successfully")))
}
