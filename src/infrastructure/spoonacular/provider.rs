//! Spoonacular API provider

use async_trait::async_trait;

use super::http_client::HttpClientTrait;
use crate::domain::{DomainError, RecipeProvider, SearchFilters};

const DEFAULT_SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";

/// Upstream provider backed by the Spoonacular API
pub struct SpoonacularProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> std::fmt::Debug for SpoonacularProvider<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpoonacularProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl<C: HttpClientTrait> SpoonacularProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_SPOONACULAR_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn find_by_ingredients_url(&self) -> String {
        format!("{}/recipes/findByIngredients", self.base_url)
    }

    fn information_url(&self, id: &str) -> String {
        format!("{}/recipes/{}/information", self.base_url, id)
    }
}

#[async_trait]
impl<C: HttpClientTrait> RecipeProvider for SpoonacularProvider<C> {
    async fn search(
        &self,
        filters: &SearchFilters,
        number: u32,
        include_nutrition: bool,
    ) -> Result<serde_json::Value, DomainError> {
        let mut query = vec![
            ("apiKey".to_string(), self.api_key.clone()),
            ("ingredients".to_string(), filters.ingredients_param()),
            ("diet".to_string(), filters.diet_param().to_string()),
            ("type".to_string(), filters.meal_type_param().to_string()),
            ("number".to_string(), number.to_string()),
        ];

        if include_nutrition {
            query.push(("includeNutrition".to_string(), "true".to_string()));
        }

        self.client
            .get_json(&self.find_by_ingredients_url(), &query)
            .await
            .map_err(rename_provider)
    }

    async fn get_details(
        &self,
        id: &str,
        include_nutrition: bool,
    ) -> Result<serde_json::Value, DomainError> {
        let query = vec![
            ("apiKey".to_string(), self.api_key.clone()),
            (
                "includeNutrition".to_string(),
                include_nutrition.to_string(),
            ),
        ];

        self.client
            .get_json(&self.information_url(id), &query)
            .await
            .map_err(rename_provider)
    }
}

/// Attributes transport-level errors to this provider
fn rename_provider(err: DomainError) -> DomainError {
    match err {
        DomainError::Upstream { message, .. } => DomainError::upstream("spoonacular", message),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::spoonacular::http_client::MockHttpClientTrait;
    use serde_json::json;

    fn filters() -> SearchFilters {
        SearchFilters::from_params(Some("chicken,tomatoes"), Some("vegan"), Some("dinner"))
    }

    #[tokio::test]
    async fn test_search_builds_expected_request() {
        let mut client = MockHttpClientTrait::new();
        client
            .expect_get_json()
            .withf(|url, query| {
                url == "https://api.spoonacular.com/recipes/findByIngredients"
                    && query.contains(&("apiKey".to_string(), "k".to_string()))
                    && query.contains(&("ingredients".to_string(), "chicken,tomatoes".to_string()))
                    && query.contains(&("diet".to_string(), "vegan".to_string()))
                    && query.contains(&("type".to_string(), "dinner".to_string()))
                    && query.contains(&("number".to_string(), "10".to_string()))
                    && query.contains(&("includeNutrition".to_string(), "true".to_string()))
            })
            .times(1)
            .returning(|_, _| Ok(json!([{"id": 1}])));

        let provider = SpoonacularProvider::new(client, "k");
        let body = provider.search(&filters(), 10, true).await.unwrap();
        assert_eq!(body, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_search_without_nutrition_omits_param() {
        let mut client = MockHttpClientTrait::new();
        client
            .expect_get_json()
            .withf(|_, query| {
                query.contains(&("number".to_string(), "50".to_string()))
                    && !query.iter().any(|(k, _)| k == "includeNutrition")
            })
            .times(1)
            .returning(|_, _| Ok(json!([])));

        let provider = SpoonacularProvider::new(client, "k");
        provider.search(&filters(), 50, false).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_details_builds_expected_request() {
        let mut client = MockHttpClientTrait::new();
        client
            .expect_get_json()
            .withf(|url, query| {
                url == "https://api.spoonacular.com/recipes/716429/information"
                    && query.contains(&("apiKey".to_string(), "k".to_string()))
                    && query.contains(&("includeNutrition".to_string(), "true".to_string()))
            })
            .times(1)
            .returning(|_, _| Ok(json!({"id": 716429, "title": "Pasta"})));

        let provider = SpoonacularProvider::new(client, "k");
        let body = provider.get_details("716429", true).await.unwrap();
        assert_eq!(body["title"], "Pasta");
    }

    #[tokio::test]
    async fn test_errors_attributed_to_spoonacular() {
        let mut client = MockHttpClientTrait::new();
        client
            .expect_get_json()
            .returning(|_, _| Err(DomainError::upstream("http", "HTTP 500: boom")));

        let provider = SpoonacularProvider::new(client, "k");
        let err = provider.get_details("1", true).await.unwrap_err();

        match err {
            DomainError::Upstream { provider, .. } => assert_eq!(provider, "spoonacular"),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_base_url_trailing_slash_trimmed() {
        let client = MockHttpClientTrait::new();
        let provider = SpoonacularProvider::with_base_url(client, "k", "http://localhost:9000/");
        assert_eq!(
            provider.find_by_ingredients_url(),
            "http://localhost:9000/recipes/findByIngredients"
        );
    }
}
