//! Router assembly

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::health;
use super::recipes;
use super::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .route("/ready", get(health::ready_check))
        // Recipe API
        .nest("/api/recipes", recipes_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn recipes_router() -> Router<AppState> {
    Router::new()
        .route("/search", get(recipes::search_recipes))
        .route("/recommend", get(recipes::recommend_recipes))
        .route("/user", post(recipes::save_user_profile))
        .route("/rate", post(recipes::rate_recipe))
        .route("/{id}", get(recipes::get_recipe_details))
}

async fn root() -> &'static str {
    "Recipe Gateway API"
}
