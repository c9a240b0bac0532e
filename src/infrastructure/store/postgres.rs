//! PostgreSQL repositories with connection pooling
//!
//! The pool is created once at startup and injected into the repositories;
//! request paths never open their own connections.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::Row;

use crate::domain::{
    DomainError, ProfileRepository, RatingRepository, RecipeRating, SearchCacheEntry,
    SearchCacheRepository, UserProfile,
};

/// PostgreSQL connection configuration
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Minimum number of connections to maintain
    pub min_connections: u32,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Idle timeout in seconds
    pub idle_timeout_secs: u64,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: "postgres://localhost/recipe_gateway".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        }
    }
}

impl PostgresConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Creates the process-wide connection pool
pub async fn create_pool(config: &PostgresConfig) -> Result<PgPool, DomainError> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(std::time::Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(std::time::Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e)))
}

/// Ensures all gateway tables exist.
///
/// The cache table intentionally has no uniqueness constraint on
/// `cache_key`: concurrent misses may append duplicate entries and reads
/// take the oldest row.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DomainError> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS recipe_search_cache (
            id BIGSERIAL PRIMARY KEY,
            cache_key TEXT NOT NULL,
            recipes JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE INDEX IF NOT EXISTS idx_recipe_search_cache_key
            ON recipe_search_cache (cache_key)
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS user_profiles (
            user_id TEXT PRIMARY KEY,
            preferences JSONB NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS recipe_ratings (
            user_id TEXT NOT NULL,
            recipe_id BIGINT NOT NULL,
            rating INT NOT NULL,
            PRIMARY KEY (user_id, recipe_id)
        )
        "#,
    ];

    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create schema: {}", e)))?;
    }

    Ok(())
}

/// Search cache repository backed by the `recipe_search_cache` table
#[derive(Debug, Clone)]
pub struct PostgresSearchCacheRepository {
    pool: PgPool,
}

impl PostgresSearchCacheRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SearchCacheRepository for PostgresSearchCacheRepository {
    async fn find(&self, cache_key: &str) -> Result<Option<SearchCacheEntry>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT cache_key, recipes, created_at
            FROM recipe_search_cache
            WHERE cache_key = $1
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(cache_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to query cache: {}", e)))?;

        Ok(row.map(|row| SearchCacheEntry {
            cache_key: row.get("cache_key"),
            recipes: row.get("recipes"),
            created_at: row.get::<DateTime<Utc>, _>("created_at"),
        }))
    }

    async fn insert(&self, entry: SearchCacheEntry) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO recipe_search_cache (cache_key, recipes, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&entry.cache_key)
        .bind(&entry.recipes)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to insert cache entry: {}", e)))?;

        Ok(())
    }
}

/// Profile repository backed by the `user_profiles` table
#[derive(Debug, Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, preferences, updated_at
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to query profile: {}", e)))?;

        Ok(row.map(|row| UserProfile {
            user_id: row.get("user_id"),
            preferences: row.get("preferences"),
            updated_at: row.get::<DateTime<Utc>, _>("updated_at"),
        }))
    }

    async fn upsert(&self, profile: UserProfile) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_profiles (user_id, preferences, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE
                SET preferences = EXCLUDED.preferences,
                    updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(&profile.user_id)
        .bind(&profile.preferences)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to upsert profile: {}", e)))?;

        Ok(())
    }
}

/// Rating repository backed by the `recipe_ratings` table
#[derive(Debug, Clone)]
pub struct PostgresRatingRepository {
    pool: PgPool,
}

impl PostgresRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PostgresRatingRepository {
    async fn find(
        &self,
        user_id: &str,
        recipe_id: i64,
    ) -> Result<Option<RecipeRating>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT user_id, recipe_id, rating
            FROM recipe_ratings
            WHERE user_id = $1 AND recipe_id = $2
            "#,
        )
        .bind(user_id)
        .bind(recipe_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to query rating: {}", e)))?;

        Ok(row.map(|row| RecipeRating {
            user_id: row.get("user_id"),
            recipe_id: row.get("recipe_id"),
            rating: row.get("rating"),
        }))
    }

    async fn upsert(&self, rating: RecipeRating) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO recipe_ratings (user_id, recipe_id, rating)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id, recipe_id) DO UPDATE
                SET rating = EXCLUDED.rating
            "#,
        )
        .bind(&rating.user_id)
        .bind(rating.recipe_id)
        .bind(rating.rating)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to upsert rating: {}", e)))?;

        Ok(())
    }
}
