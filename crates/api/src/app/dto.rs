use serde::Deserialize;

use stockledger_core::Entity;
use stockledger_inventory::{InventoryItem, ItemPatch, NewItem, Reservation, StockAdjustment};

// -------------------------
// Request DTOs (lowerCamelCase on the wire)
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(default, alias = "productId")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub location: Option<String>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(body: CreateItemRequest) -> Self {
        NewItem {
            id: body.id,
            name: body.name,
            quantity: body.quantity,
            location: body.location,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(default)]
    pub quantity: Option<u64>,
    #[serde(default)]
    pub location: Option<String>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(body: UpdateItemRequest) -> Self {
        ItemPatch {
            quantity: body.quantity,
            location: body.location,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReserveRequest {
    pub product_id: String,
    pub quantity: u64,
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub delta: i64,
}

#[derive(Debug, Deserialize)]
pub struct LowStockQuery {
    pub threshold: Option<u64>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &InventoryItem) -> serde_json::Value {
    serde_json::json!({
        "id": item.id().as_str(),
        "name": item.name(),
        "quantity": item.quantity(),
        "location": item.location(),
    })
}

pub fn items_to_json(items: &[InventoryItem]) -> serde_json::Value {
    serde_json::Value::Array(items.iter().map(item_to_json).collect())
}

pub fn reservation_to_json(r: &Reservation) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "productId": r.item_id.as_str(),
        "reserved": r.reserved,
        "remaining": r.remaining,
    })
}

pub fn adjustment_to_json(a: &StockAdjustment) -> serde_json::Value {
    serde_json::json!({
        "productId": a.item_id.as_str(),
        "delta": a.delta,
        "quantity": a.quantity,
    })
}
