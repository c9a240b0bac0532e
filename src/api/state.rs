//! Application state for shared services

use std::sync::Arc;

use serde_json::Value;

use crate::domain::{
    DomainError, ProfileRepository, RatingRepository, RecipeProvider, RecipeRating, RecipeScorer,
    SearchCacheRepository, SearchFilters, UserProfile,
};
use crate::infrastructure::services::{ProfileService, RecipeService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub recipe_service: Arc<dyn RecipeServiceTrait>,
    pub profile_service: Arc<dyn ProfileServiceTrait>,
}

impl AppState {
    pub fn new(
        recipe_service: Arc<dyn RecipeServiceTrait>,
        profile_service: Arc<dyn ProfileServiceTrait>,
    ) -> Self {
        Self {
            recipe_service,
            profile_service,
        }
    }
}

/// Trait for recipe read-path operations
#[async_trait::async_trait]
pub trait RecipeServiceTrait: Send + Sync {
    async fn search(&self, filters: &SearchFilters) -> Result<Value, DomainError>;
    async fn details(&self, id: &str) -> Result<Value, DomainError>;
    async fn recommend(&self, filters: &SearchFilters) -> Result<Value, DomainError>;
    async fn store_ready(&self) -> Result<(), DomainError>;
}

/// Trait for profile and rating write-path operations
#[async_trait::async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    async fn save_profile(&self, user_id: &str, preferences: Value) -> Result<(), DomainError>;
    async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError>;
    async fn save_rating(
        &self,
        user_id: &str,
        recipe_id: i64,
        rating: i32,
    ) -> Result<(), DomainError>;
    async fn rating(
        &self,
        user_id: &str,
        recipe_id: i64,
    ) -> Result<Option<RecipeRating>, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<P, C, S> RecipeServiceTrait for RecipeService<P, C, S>
where
    P: RecipeProvider + 'static,
    C: SearchCacheRepository + 'static,
    S: RecipeScorer + 'static,
{
    async fn search(&self, filters: &SearchFilters) -> Result<Value, DomainError> {
        RecipeService::search(self, filters).await
    }

    async fn details(&self, id: &str) -> Result<Value, DomainError> {
        RecipeService::details(self, id).await
    }

    async fn recommend(&self, filters: &SearchFilters) -> Result<Value, DomainError> {
        RecipeService::recommend(self, filters).await
    }

    async fn store_ready(&self) -> Result<(), DomainError> {
        RecipeService::store_ready(self).await
    }
}

#[async_trait::async_trait]
impl<P, R> ProfileServiceTrait for ProfileService<P, R>
where
    P: ProfileRepository + 'static,
    R: RatingRepository + 'static,
{
    async fn save_profile(&self, user_id: &str, preferences: Value) -> Result<(), DomainError> {
        ProfileService::save_profile(self, user_id, preferences).await
    }

    async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError> {
        ProfileService::profile(self, user_id).await
    }

    async fn save_rating(
        &self,
        user_id: &str,
        recipe_id: i64,
        rating: i32,
    ) -> Result<(), DomainError> {
        ProfileService::save_rating(self, user_id, recipe_id, rating).await
    }

    async fn rating(
        &self,
        user_id: &str,
        recipe_id: i64,
    ) -> Result<Option<RecipeRating>, DomainError> {
        ProfileService::rating(self, user_id, recipe_id).await
    }
}
