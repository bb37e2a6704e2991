use stockledger_inventory::{InventoryStore, StoreConfig};

use crate::config::ApiConfig;

/// Everything handlers need, shared behind an `Arc`.
#[derive(Debug)]
pub struct AppServices {
    inventory: InventoryStore,
}

impl AppServices {
    pub fn new(store_config: StoreConfig) -> Self {
        Self {
            inventory: InventoryStore::new(store_config),
        }
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    AppServices::new(config.store.clone())
}
