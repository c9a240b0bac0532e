//! Rating repository trait

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::RecipeRating;

/// Repository for recipe ratings
#[async_trait]
pub trait RatingRepository: Send + Sync + std::fmt::Debug {
    /// Returns a user's rating for a recipe, if any
    async fn find(&self, user_id: &str, recipe_id: i64) -> Result<Option<RecipeRating>, DomainError>;

    /// Creates or replaces the rating for the rating's (user, recipe) pair
    async fn upsert(&self, rating: RecipeRating) -> Result<(), DomainError>;
}
