//! In-memory inventory store.
//!
//! All state lives behind a single store-wide `RwLock`:
//! - mutations (`create`, `update`, `delete`, `reserve`, `adjust`) hold the write lock for
//!   their entire read-modify-write, so two reservations against the same item
//!   can never both observe the same quantity
//! - queries hold the read lock and hand back owned snapshots
//!
//! Nothing inside the critical sections can panic, but a poisoned lock is still
//! recovered rather than propagated.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockledger_core::{DomainError, DomainResult, ItemId};

use crate::config::{DuplicatePolicy, StoreConfig};
use crate::item::{InventoryItem, ItemPatch, NewItem, Reservation, StockAdjustment};

/// First numeric suffix handed out for generated ids.
const FIRST_GENERATED_SUFFIX: u64 = 1000;

#[derive(Debug)]
struct Slot {
    /// Insertion sequence, used to list items in creation order.
    seq: u64,
    item: InventoryItem,
}

#[derive(Debug)]
struct Inner {
    items: HashMap<ItemId, Slot>,
    next_seq: u64,
    next_suffix: u64,
}

impl Inner {
    fn new() -> Self {
        Self {
            items: HashMap::new(),
            next_seq: 0,
            next_suffix: FIRST_GENERATED_SUFFIX,
        }
    }

    /// Monotonic `<prefix><n>`, skipping ids a caller already claimed explicitly.
    fn generate_id(&mut self, prefix: &str) -> ItemId {
        let prefix = prefix.trim();
        loop {
            let candidate = format!("{prefix}{}", self.next_suffix);
            self.next_suffix += 1;

            let Ok(id) = ItemId::parse(&candidate) else {
                continue;
            };
            if !self.items.contains_key(&id) {
                return id;
            }
        }
    }

    fn snapshot(&self, mut keep: impl FnMut(&InventoryItem) -> bool) -> Vec<InventoryItem> {
        let mut slots: Vec<&Slot> = self.items.values().filter(|s| keep(&s.item)).collect();
        slots.sort_by_key(|s| s.seq);
        slots.into_iter().map(|s| s.item.clone()).collect()
    }
}

/// Authoritative mapping from item id to `InventoryItem`.
///
/// Constructed explicitly and shared by reference (typically behind an `Arc`);
/// there is no process-wide instance.
#[derive(Debug)]
pub struct InventoryStore {
    config: StoreConfig,
    inner: RwLock<Inner>,
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl InventoryStore {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            inner: RwLock::new(Inner::new()),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All items, in insertion order.
    pub fn get_all(&self) -> Vec<InventoryItem> {
        self.read().snapshot(|_| true)
    }

    pub fn get_by_id(&self, id: &ItemId) -> DomainResult<InventoryItem> {
        self.read()
            .items
            .get(id)
            .map(|s| s.item.clone())
            .ok_or(DomainError::NotFound)
    }

    /// Insert a new item, filling in a generated id and/or the default location
    /// when they are missing or blank.
    ///
    /// An explicit id that is already present is handled per
    /// `StoreConfig::on_duplicate`; an overwritten item keeps its listing
    /// position.
    pub fn create(&self, new: NewItem) -> DomainResult<InventoryItem> {
        let explicit_id = match non_blank(new.id.as_deref()) {
            Some(raw) => Some(ItemId::parse(raw)?),
            None => None,
        };
        let location = non_blank(new.location.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| self.config.default_location.clone());

        let mut guard = self.write();
        let inner = &mut *guard;

        let id = match explicit_id {
            Some(id) => id,
            None => inner.generate_id(&self.config.id_prefix),
        };

        let item = InventoryItem {
            id: id.clone(),
            name: new.name,
            quantity: new.quantity,
            location,
        };

        match inner.items.entry(id) {
            Entry::Occupied(mut slot) => match self.config.on_duplicate {
                DuplicatePolicy::Reject => {
                    return Err(DomainError::conflict(format!(
                        "item {} already exists",
                        slot.key()
                    )));
                }
                DuplicatePolicy::Overwrite => {
                    slot.get_mut().item = item.clone();
                }
            },
            Entry::Vacant(slot) => {
                let seq = inner.next_seq;
                inner.next_seq += 1;
                slot.insert(Slot {
                    seq,
                    item: item.clone(),
                });
            }
        }

        Ok(item)
    }

    /// Apply the provided fields of `patch`; everything else is left as is.
    pub fn update(&self, id: &ItemId, patch: ItemPatch) -> DomainResult<InventoryItem> {
        let mut inner = self.write();
        let slot = inner.items.get_mut(id).ok_or(DomainError::NotFound)?;

        if let Some(quantity) = patch.quantity {
            slot.item.quantity = quantity;
        }
        if let Some(location) = non_blank(patch.location.as_deref()) {
            slot.item.location = location.to_string();
        }

        Ok(slot.item.clone())
    }

    /// Remove an item, returning the record that was stored.
    pub fn delete(&self, id: &ItemId) -> DomainResult<InventoryItem> {
        self.write()
            .items
            .remove(id)
            .map(|s| s.item)
            .ok_or(DomainError::NotFound)
    }

    /// Permanently take `quantity` units out of stock.
    ///
    /// All or nothing: when fewer than `quantity` units are on hand the item is
    /// left untouched and the error reports what is available.
    pub fn reserve(&self, id: &ItemId, quantity: u64) -> DomainResult<Reservation> {
        if quantity == 0 {
            return Err(DomainError::validation("reservation quantity must be positive"));
        }

        let mut inner = self.write();
        let slot = inner.items.get_mut(id).ok_or(DomainError::NotFound)?;

        let available = slot.item.quantity;
        if available < quantity {
            return Err(DomainError::insufficient_stock(quantity, available));
        }

        slot.item.quantity = available - quantity;

        Ok(Reservation {
            item_id: id.clone(),
            reserved: quantity,
            remaining: slot.item.quantity,
        })
    }

    /// Apply a signed stock delta (restock or write-off).
    ///
    /// A zero delta is malformed; a delta that would take the item below zero
    /// is rejected without mutation, same as an over-large reservation.
    pub fn adjust(&self, id: &ItemId, delta: i64) -> DomainResult<StockAdjustment> {
        if delta == 0 {
            return Err(DomainError::validation("delta cannot be zero"));
        }

        let mut inner = self.write();
        let slot = inner.items.get_mut(id).ok_or(DomainError::NotFound)?;

        let available = slot.item.quantity;
        let new_quantity = if delta < 0 {
            let take = delta.unsigned_abs();
            available
                .checked_sub(take)
                .ok_or(DomainError::insufficient_stock(take, available))?
        } else {
            available
                .checked_add(delta.unsigned_abs())
                .ok_or_else(|| DomainError::validation("stock quantity would overflow"))?
        };

        slot.item.quantity = new_quantity;

        Ok(StockAdjustment {
            item_id: id.clone(),
            delta,
            quantity: new_quantity,
        })
    }

    /// Items with `quantity < threshold` (strict). `None` uses the configured
    /// default threshold.
    pub fn low_stock(&self, threshold: Option<u64>) -> Vec<InventoryItem> {
        let threshold = threshold.unwrap_or(self.config.low_stock_threshold);
        self.read().snapshot(|item| item.quantity < threshold)
    }

    /// Items stored at exactly `location` (case-sensitive).
    pub fn by_location(&self, location: &str) -> Vec<InventoryItem> {
        self.read().snapshot(|item| item.location == location)
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of units on hand across all items.
    pub fn total_units(&self) -> u64 {
        self.read()
            .items
            .values()
            .map(|s| s.item.quantity)
            .fold(0u64, u64::saturating_add)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
