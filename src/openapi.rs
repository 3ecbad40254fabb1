use utoipa::OpenApi;
use crate::handlers;
use crate::models;
use crate::utils::response;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Series API",
        description = "A REST API to create, read, update and delete manga series entries.",
        version = "1.0.0"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        handlers::series::list_series,
        handlers::series::get_series,
        handlers::series::create_series,
        handlers::series::update_series,
        handlers::series::delete_series,
    ),
    components(
        schemas(
            models::Series,
            models::ChapterValue,
            models::SeriesPayload,
            response::MessageResponse,
            response::ErrorResponse,
        )
    )
)]
pub struct ApiDoc;
