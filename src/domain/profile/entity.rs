//! User profile entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user preference record, unique per user id.
///
/// Preferences are an opaque JSON document; every save replaces the whole
/// document rather than merging fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub preferences: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a profile stamped with the current time
    pub fn new(user_id: impl Into<String>, preferences: serde_json::Value) -> Self {
        Self {
            user_id: user_id.into(),
            preferences,
            updated_at: Utc::now(),
        }
    }
}
