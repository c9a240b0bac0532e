//! Upstream recipe provider trait

use async_trait::async_trait;

use crate::domain::search::SearchFilters;
use crate::domain::DomainError;

/// The upstream recipe API, as consumed by the routing layer.
///
/// Payloads are opaque JSON: the gateway never inspects or transforms the
/// recipe shape, only wraps it in cache entries or hands it to the scorer.
#[async_trait]
pub trait RecipeProvider: Send + Sync + std::fmt::Debug {
    /// Searches recipes by filter combination.
    ///
    /// `number` bounds the result count; `include_nutrition` asks the
    /// provider to attach nutrition data to each result.
    async fn search(
        &self,
        filters: &SearchFilters,
        number: u32,
        include_nutrition: bool,
    ) -> Result<serde_json::Value, DomainError>;

    /// Fetches the detail document for one recipe
    async fn get_details(
        &self,
        id: &str,
        include_nutrition: bool,
    ) -> Result<serde_json::Value, DomainError>;
}
