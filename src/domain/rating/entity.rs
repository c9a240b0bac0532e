//! Recipe rating entity

use serde::{Deserialize, Serialize};

/// A user's rating of one recipe; one row per (user, recipe) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeRating {
    pub user_id: String,
    pub recipe_id: i64,
    pub rating: i32,
}

impl RecipeRating {
    pub fn new(user_id: impl Into<String>, recipe_id: i64, rating: i32) -> Self {
        Self {
            user_id: user_id.into(),
            recipe_id,
            rating,
        }
    }
}
