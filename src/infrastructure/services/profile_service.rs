//! User profile and rating persistence

use std::sync::Arc;

use crate::domain::{
    DomainError, ProfileRepository, RatingRepository, RecipeRating, UserProfile,
};

/// Saves user preference profiles and recipe ratings.
///
/// Profile saves are whole-document replacements stamped with the save
/// time; preferences are never merged field-by-field.
#[derive(Debug)]
pub struct ProfileService<P, R>
where
    P: ProfileRepository,
    R: RatingRepository,
{
    profiles: Arc<P>,
    ratings: Arc<R>,
}

impl<P, R> ProfileService<P, R>
where
    P: ProfileRepository,
    R: RatingRepository,
{
    pub fn new(profiles: Arc<P>, ratings: Arc<R>) -> Self {
        Self { profiles, ratings }
    }

    /// Creates or fully replaces the user's preference profile
    pub async fn save_profile(
        &self,
        user_id: &str,
        preferences: serde_json::Value,
    ) -> Result<(), DomainError> {
        self.profiles
            .upsert(UserProfile::new(user_id, preferences))
            .await
    }

    /// Returns the user's saved profile, if any
    pub async fn profile(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError> {
        self.profiles.find(user_id).await
    }

    /// Creates or replaces the user's rating for a recipe
    pub async fn save_rating(
        &self,
        user_id: &str,
        recipe_id: i64,
        rating: i32,
    ) -> Result<(), DomainError> {
        self.ratings
            .upsert(RecipeRating::new(user_id, recipe_id, rating))
            .await
    }

    /// Returns the user's rating for a recipe, if any
    pub async fn rating(
        &self,
        user_id: &str,
        recipe_id: i64,
    ) -> Result<Option<RecipeRating>, DomainError> {
        self.ratings.find(user_id, recipe_id).await
    }
}
