//! Recipe Gateway API
//!
//! A thin gateway over the Spoonacular recipe API with support for:
//! - Ingredient/diet/meal-type search with store-backed result caching
//! - Recipe detail pass-through
//! - Recommendation scoring via an external one-shot process
//! - User preference profiles and recipe ratings

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use api::state::{AppState, ProfileServiceTrait, RecipeServiceTrait};
use config::StorageBackend;
use infrastructure::scorer::ProcessScorer;
use infrastructure::services::{ProfileService, RecipeService};
use infrastructure::spoonacular::{HttpClient, SpoonacularProvider};
use infrastructure::store::{
    create_pool, ensure_schema, InMemoryProfileRepository, InMemoryRatingRepository,
    InMemorySearchCacheRepository, PostgresConfig, PostgresProfileRepository,
    PostgresRatingRepository, PostgresSearchCacheRepository,
};

/// Create the application state with all services initialized.
///
/// Fails fast when a required environment value is missing: the upstream
/// API key always, the store connection string when the Postgres backend
/// is selected.
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = std::env::var("SPOONACULAR_API_KEY")
        .map_err(|_| anyhow::anyhow!("SPOONACULAR_API_KEY environment variable is required"))?;

    let http_client =
        HttpClient::with_timeout(Duration::from_secs(config.spoonacular.timeout_secs))?;
    let provider = Arc::new(SpoonacularProvider::with_base_url(
        http_client,
        api_key,
        &config.spoonacular.base_url,
    ));

    let scorer = Arc::new(ProcessScorer::new(
        &config.scorer.program,
        config.scorer.args.clone(),
        Duration::from_secs(config.scorer.timeout_secs),
    ));

    info!("Storage backend: {:?}", config.storage.backend);

    let (recipe_service, profile_service) = match config.storage.backend {
        StorageBackend::Postgres => {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PostgresConfig::new(database_url)).await?;
            ensure_schema(&pool).await?;
            info!("PostgreSQL connection established");

            (
                Arc::new(RecipeService::new(
                    provider,
                    Arc::new(PostgresSearchCacheRepository::new(pool.clone())),
                    scorer,
                )) as Arc<dyn RecipeServiceTrait>,
                Arc::new(ProfileService::new(
                    Arc::new(PostgresProfileRepository::new(pool.clone())),
                    Arc::new(PostgresRatingRepository::new(pool)),
                )) as Arc<dyn ProfileServiceTrait>,
            )
        }
        StorageBackend::Memory => (
            Arc::new(RecipeService::new(
                provider,
                Arc::new(InMemorySearchCacheRepository::new()),
                scorer,
            )) as Arc<dyn RecipeServiceTrait>,
            Arc::new(ProfileService::new(
                Arc::new(InMemoryProfileRepository::new()),
                Arc::new(InMemoryRatingRepository::new()),
            )) as Arc<dyn ProfileServiceTrait>,
        ),
    };

    Ok(AppState::new(recipe_service, profile_service))
}
