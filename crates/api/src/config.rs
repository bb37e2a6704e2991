//! Process configuration, read once from environment variables at startup.

use std::net::SocketAddr;

use thiserror::Error;

use stockledger_inventory::{DuplicatePolicy, StoreConfig};

pub const BIND_ADDR_ENV: &str = "INVENTORY_BIND_ADDR";
pub const ID_PREFIX_ENV: &str = "INVENTORY_ID_PREFIX";
pub const DEFAULT_LOCATION_ENV: &str = "INVENTORY_DEFAULT_LOCATION";
pub const LOW_STOCK_THRESHOLD_ENV: &str = "INVENTORY_LOW_STOCK_THRESHOLD";
pub const ON_DUPLICATE_ENV: &str = "INVENTORY_ON_DUPLICATE";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl ConfigError {
    fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
        }
    }
}

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store: StoreConfig::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup; unset keys keep their
    /// defaults, set-but-invalid keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = StoreConfig::default();

        let bind_addr = lookup(BIND_ADDR_ENV)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid(BIND_ADDR_ENV, e.to_string()))?;

        let id_prefix = lookup(ID_PREFIX_ENV).unwrap_or(defaults.id_prefix);

        let default_location = match lookup(DEFAULT_LOCATION_ENV) {
            Some(v) if v.trim().is_empty() => {
                return Err(ConfigError::invalid(DEFAULT_LOCATION_ENV, "cannot be empty"));
            }
            Some(v) => v,
            None => defaults.default_location,
        };

        let low_stock_threshold = match lookup(LOW_STOCK_THRESHOLD_ENV) {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .map_err(|e| ConfigError::invalid(LOW_STOCK_THRESHOLD_ENV, e.to_string()))?,
            None => defaults.low_stock_threshold,
        };

        let on_duplicate = match lookup(ON_DUPLICATE_ENV) {
            Some(v) => v
                .parse::<DuplicatePolicy>()
                .map_err(|e| ConfigError::invalid(ON_DUPLICATE_ENV, e.to_string()))?,
            None => defaults.on_duplicate,
        };

        Ok(Self {
            bind_addr,
            store: StoreConfig {
                id_prefix,
                default_location,
                low_stock_threshold,
                on_duplicate,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ApiConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = ApiConfig::from_lookup(lookup_from(&[
            (BIND_ADDR_ENV, "127.0.0.1:9090"),
            (ID_PREFIX_ENV, "SKU-"),
            (DEFAULT_LOCATION_ENV, "dock-7"),
            (LOW_STOCK_THRESHOLD_ENV, " 25 "),
            (ON_DUPLICATE_ENV, "overwrite"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:9090".parse().unwrap());
        assert_eq!(cfg.store.id_prefix, "SKU-");
        assert_eq!(cfg.store.default_location, "dock-7");
        assert_eq!(cfg.store.low_stock_threshold, 25);
        assert_eq!(cfg.store.on_duplicate, DuplicatePolicy::Overwrite);
    }

    #[test]
    fn invalid_threshold_names_the_key() {
        let err = ApiConfig::from_lookup(lookup_from(&[(LOW_STOCK_THRESHOLD_ENV, "-5")])).unwrap_err();
        match err {
            ConfigError::Invalid { key, .. } => assert_eq!(key, LOW_STOCK_THRESHOLD_ENV),
        }
    }

    #[test]
    fn invalid_bind_addr_and_policy_are_rejected() {
        assert!(ApiConfig::from_lookup(lookup_from(&[(BIND_ADDR_ENV, "not-an-addr")])).is_err());
        assert!(ApiConfig::from_lookup(lookup_from(&[(ON_DUPLICATE_ENV, "merge")])).is_err());
        assert!(ApiConfig::from_lookup(lookup_from(&[(DEFAULT_LOCATION_ENV, "  ")])).is_err());
    }
}
