use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use stockledger_core::{DomainError, ItemId};
use stockledger_inventory::NewItem;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/low-stock", get(low_stock))
        .route("/reserve", post(reserve))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/:id/adjust", post(adjust_stock))
}

/// Path segments owned by static routes; an item with one of these ids could
/// never be addressed through `/:id`.
pub const ROUTE_RESERVED_IDS: &[&str] = &["low-stock", "reserve"];

fn ensure_routable_id(id: Option<&str>) -> Result<(), axum::response::Response> {
    match id {
        Some(id) if ROUTE_RESERVED_IDS.contains(&id) => Err(errors::domain_error_to_response(
            DomainError::validation(format!("product id {id:?} is reserved")),
        )),
        _ => Ok(()),
    }
}

fn parse_item_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    ItemId::parse(raw).map_err(|_| errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid product id"))
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let items = services.inventory().get_all();
    (StatusCode::OK, Json(dto::items_to_json(&items))).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.inventory().get_by_id(&id) {
        Ok(item) => (StatusCode::OK, Json(dto::item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateItemRequest>,
) -> axum::response::Response {
    if let Err(resp) = ensure_routable_id(body.id.as_deref()) {
        return resp;
    }
    let new: NewItem = body.into();

    match services.inventory().create(new) {
        Ok(item) => {
            tracing::info!(
                item_id = %item.id_typed(),
                quantity = item.quantity(),
                location = item.location(),
                "inventory item created"
            );
            (StatusCode::CREATED, Json(dto::item_to_json(&item))).into_response()
        }
        Err(e) => {
            if let DomainError::Conflict(msg) = &e {
                tracing::warn!(reason = %msg, "inventory item create rejected");
            }
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateItemRequest>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.inventory().update(&id, body.into()) {
        Ok(item) => {
            tracing::info!(
                item_id = %id,
                quantity = item.quantity(),
                location = item.location(),
                "inventory item updated"
            );
            (StatusCode::OK, Json(dto::item_to_json(&item))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.inventory().delete(&id) {
        Ok(_) => {
            tracing::info!(item_id = %id, "inventory item deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn reserve(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ReserveRequest>,
) -> axum::response::Response {
    let id = match parse_item_id(&body.product_id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.inventory().reserve(&id, body.quantity) {
        Ok(reservation) => {
            tracing::info!(
                item_id = %id,
                reserved = reservation.reserved,
                remaining = reservation.remaining,
                "inventory reserved"
            );
            (StatusCode::OK, Json(dto::reservation_to_json(&reservation))).into_response()
        }
        Err(e) => {
            if let DomainError::InsufficientStock { requested, available } = &e {
                tracing::warn!(item_id = %id, requested, available, "reservation rejected: insufficient stock");
            }
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn adjust_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AdjustStockRequest>,
) -> axum::response::Response {
    let id = match parse_item_id(&id) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.inventory().adjust(&id, body.delta) {
        Ok(adjustment) => {
            tracing::info!(
                item_id = %id,
                delta = adjustment.delta,
                quantity = adjustment.quantity,
                "stock adjusted"
            );
            (StatusCode::OK, Json(dto::adjustment_to_json(&adjustment))).into_response()
        }
        Err(e) => {
            if let DomainError::InsufficientStock { requested, available } = &e {
                tracing::warn!(item_id = %id, requested, available, "stock adjustment rejected: would go negative");
            }
            errors::domain_error_to_response(e)
        }
    }
}

pub async fn low_stock(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::LowStockQuery>,
) -> axum::response::Response {
    let store = services.inventory();
    let threshold = query.threshold.unwrap_or(store.config().low_stock_threshold);
    let items = store.low_stock(Some(threshold));

    (
        StatusCode::OK,
        Json(serde_json::json!({
            "threshold": threshold,
            "count": items.len(),
            "items": dto::items_to_json(&items),
        })),
    )
        .into_response()
}
