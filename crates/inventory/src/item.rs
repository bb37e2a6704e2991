use serde::{Deserialize, Serialize};

use stockledger_core::{Entity, ItemId};

/// One stock-keeping unit held by the store.
///
/// Instances are only produced by `InventoryStore`; callers receive owned
/// snapshots and mutate through the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub(crate) id: ItemId,
    pub(crate) name: Option<String>,
    pub(crate) quantity: u64,
    pub(crate) location: String,
}

impl InventoryItem {
    pub fn id_typed(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Units on hand. Never negative by construction.
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input for `InventoryStore::create`.
///
/// A missing or blank `id`/`location` is filled in by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub id: Option<String>,
    pub name: Option<String>,
    pub quantity: u64,
    pub location: Option<String>,
}

impl NewItem {
    pub fn with_quantity(quantity: u64) -> Self {
        Self {
            quantity,
            ..Self::default()
        }
    }
}

/// Partial update: only provided fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub quantity: Option<u64>,
    /// Blank strings count as "not provided".
    pub location: Option<String>,
}

/// Result of a successful reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub item_id: ItemId,
    pub reserved: u64,
    pub remaining: u64,
}

/// Result of a successful stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAdjustment {
    pub item_id: ItemId,
    pub delta: i64,
    /// Quantity on hand after the delta was applied.
    pub quantity: u64,
}
