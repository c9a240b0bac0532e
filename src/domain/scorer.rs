//! Recommendation scorer trait

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::search::SearchFilters;
use crate::domain::DomainError;

/// Input handed to the scorer: the user's filters plus the raw candidate
/// list fetched from the upstream provider. Serialized as a single JSON
/// document in the scorer's wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub ingredients: String,
    pub diet: String,
    pub meal_type: String,
    pub recipes: serde_json::Value,
}

impl ScoreRequest {
    pub fn new(filters: &SearchFilters, recipes: serde_json::Value) -> Self {
        Self {
            ingredients: filters.ingredients_param(),
            diet: filters.diet_param().to_string(),
            meal_type: filters.meal_type_param().to_string(),
            recipes,
        }
    }
}

/// Ranks/filters candidate recipes. The scoring logic itself is opaque to
/// the gateway; implementations return exactly one JSON document.
#[async_trait]
pub trait RecipeScorer: Send + Sync + std::fmt::Debug {
    async fn score(&self, request: &ScoreRequest) -> Result<serde_json::Value, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_request_wire_format() {
        let filters =
            SearchFilters::from_params(Some("chicken,tomatoes"), Some("vegan"), Some("dinner"));
        let request = ScoreRequest::new(&filters, json!([{"id": 7}]));
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(wire["ingredients"], "chicken,tomatoes");
        assert_eq!(wire["diet"], "vegan");
        assert_eq!(wire["mealType"], "dinner");
        assert_eq!(wire["recipes"], json!([{"id": 7}]));
    }

    #[test]
    fn test_score_request_empty_filters() {
        let filters = SearchFilters::from_params(None, None, None);
        let request = ScoreRequest::new(&filters, json!([]));
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(wire["ingredients"], "");
        assert_eq!(wire["diet"], "");
        assert_eq!(wire["mealType"], "");
    }
}
