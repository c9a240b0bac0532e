//! Recipe endpoint request/response types

use serde::{Deserialize, Serialize};

/// Query parameters shared by search and recommend
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub ingredients: Option<String>,
    pub diet: Option<String>,
    pub meal_type: Option<String>,
}

/// POST /api/recipes/user body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProfileRequest {
    pub user_id: String,
    pub preferences: serde_json::Value,
}

/// Confirmation body for a saved profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSavedResponse {
    pub message: String,
}

impl ProfileSavedResponse {
    pub fn saved() -> Self {
        Self {
            message: "User profile saved".to_string(),
        }
    }
}

/// POST /api/recipes/rate body.
///
/// recipeId and rating are validated by the handler so their absence maps
/// to the endpoint's own error message rather than a body-parse rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    pub user_id: String,
    pub recipe_id: Option<i64>,
    pub rating: Option<i32>,
}

/// Confirmation body for a saved rating
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSavedResponse {
    pub status: String,
}

impl RatingSavedResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_camel_case() {
        let params: SearchParams =
            serde_json::from_str(r#"{"ingredients":"a,b","mealType":"dinner"}"#).unwrap();

        assert_eq!(params.ingredients.as_deref(), Some("a,b"));
        assert_eq!(params.meal_type.as_deref(), Some("dinner"));
        assert!(params.diet.is_none());
    }

    #[test]
    fn test_save_profile_request_camel_case() {
        let request: SaveProfileRequest =
            serde_json::from_str(r#"{"userId":"u1","preferences":{"vegan":true}}"#).unwrap();

        assert_eq!(request.user_id, "u1");
        assert_eq!(request.preferences["vegan"], true);
    }

    #[test]
    fn test_rate_request_optional_fields() {
        let request: RateRequest = serde_json::from_str(r#"{"userId":"u1"}"#).unwrap();

        assert!(request.recipe_id.is_none());
        assert!(request.rating.is_none());
    }
}
