//! Cache entry entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted snapshot of a prior search result, keyed by filter combination.
///
/// The recipe payload is opaque: it is stored and returned exactly as the
/// upstream provider produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCacheEntry {
    pub cache_key: String,
    pub recipes: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl SearchCacheEntry {
    /// Creates an entry stamped with the current time
    pub fn new(cache_key: impl Into<String>, recipes: serde_json::Value) -> Self {
        Self {
            cache_key: cache_key.into(),
            recipes,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_round_trip() {
        let entry = SearchCacheEntry::new("chicken__", json!([{"id": 1}]));
        let data = serde_json::to_string(&entry).unwrap();
        let back: SearchCacheEntry = serde_json::from_str(&data).unwrap();

        assert_eq!(back.cache_key, "chicken__");
        assert_eq!(back.recipes, json!([{"id": 1}]));
    }
}
