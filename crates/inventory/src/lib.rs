//! Inventory domain module.
//!
//! This crate owns the in-memory inventory ledger: item records, the
//! reservation rule, and the lock discipline that keeps concurrent mutations
//! consistent (no IO, no HTTP, no logging).

pub mod config;
pub mod item;
pub mod store;

pub use config::{DuplicatePolicy, StoreConfig};
pub use item::{InventoryItem, ItemPatch, NewItem, Reservation, StockAdjustment};
pub use store::InventoryStore;
