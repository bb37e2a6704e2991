use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::app::dto;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/inventory/location/:location", get(items_by_location))
}

pub async fn items_by_location(
    Extension(services): Extension<Arc<AppServices>>,
    Path(location): Path<String>,
) -> axum::response::Response {
    let items = services.inventory().by_location(&location);
    tracing::debug!(%location, count = items.len(), "location query");
    (StatusCode::OK, Json(dto::items_to_json(&items))).into_response()
}
