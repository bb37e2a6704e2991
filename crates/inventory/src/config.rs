use core::str::FromStr;

use serde::{Deserialize, Serialize};
use stockledger_core::DomainError;

/// Default prefix for store-generated item ids.
pub const DEFAULT_ID_PREFIX: &str = "prod_";

/// Location assigned to items created without one.
pub const DEFAULT_LOCATION: &str = "warehouse-main";

/// Threshold used by low-stock queries when the caller supplies none.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 100;

/// What `create` does when the supplied id is already taken.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Fail with `DomainError::Conflict`.
    #[default]
    Reject,
    /// Replace the stored record in place.
    Overwrite,
}

impl FromStr for DuplicatePolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "overwrite" => Ok(Self::Overwrite),
            other => Err(DomainError::validation(format!(
                "duplicate policy must be one of: reject, overwrite (got {other:?})"
            ))),
        }
    }
}

/// Store-level defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub id_prefix: String,
    pub default_location: String,
    pub low_stock_threshold: u64,
    pub on_duplicate: DuplicatePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            on_duplicate: DuplicatePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_policy_parses_case_insensitively() {
        assert_eq!("Reject".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Reject);
        assert_eq!(" OVERWRITE ".parse::<DuplicatePolicy>().unwrap(), DuplicatePolicy::Overwrite);
    }

    #[test]
    fn duplicate_policy_rejects_unknown_values() {
        let err = "merge".parse::<DuplicatePolicy>().unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("merge") => {}
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_documented_values() {
        let cfg = StoreConfig::default();
        assert_eq!(cfg.id_prefix, "prod_");
        assert_eq!(cfg.default_location, "warehouse-main");
        assert_eq!(cfg.low_stock_threshold, 100);
        assert_eq!(cfg.on_duplicate, DuplicatePolicy::Reject);
    }
}
