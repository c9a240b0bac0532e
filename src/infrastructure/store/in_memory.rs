//! In-memory repository implementations
//!
//! Useful for testing and development. Data is lost when the process
//! terminates.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{
    DomainError, ProfileRepository, RatingRepository, RecipeRating, SearchCacheEntry,
    SearchCacheRepository, UserProfile,
};

/// Append-only in-memory search cache.
///
/// A Vec rather than a map: duplicate keys are tolerated, mirroring the
/// duplicate-tolerant cache table, and reads take the first (oldest) match.
#[derive(Debug, Default)]
pub struct InMemorySearchCacheRepository {
    entries: RwLock<Vec<SearchCacheEntry>>,
}

impl InMemorySearchCacheRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, duplicates included
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SearchCacheRepository for InMemorySearchCacheRepository {
    async fn find(&self, cache_key: &str) -> Result<Option<SearchCacheEntry>, DomainError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(entries.iter().find(|e| e.cache_key == cache_key).cloned())
    }

    async fn insert(&self, entry: SearchCacheEntry) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        entries.push(entry);
        Ok(())
    }
}

/// Thread-safe in-memory profile store
#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError> {
        let profiles = self
            .profiles
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(profiles.get(user_id).cloned())
    }

    async fn upsert(&self, profile: UserProfile) -> Result<(), DomainError> {
        let mut profiles = self
            .profiles
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        profiles.insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

/// Thread-safe in-memory rating store
#[derive(Debug, Default)]
pub struct InMemoryRatingRepository {
    ratings: RwLock<HashMap<(String, i64), RecipeRating>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn find(
        &self,
        user_id: &str,
        recipe_id: i64,
    ) -> Result<Option<RecipeRating>, DomainError> {
        let ratings = self
            .ratings
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(ratings.get(&(user_id.to_string(), recipe_id)).cloned())
    }

    async fn upsert(&self, rating: RecipeRating) -> Result<(), DomainError> {
        let mut ratings = self
            .ratings
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        ratings.insert((rating.user_id.clone(), rating.recipe_id), rating);
        Ok(())
    }
}
