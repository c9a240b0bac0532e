//! Recipe endpoint handlers
//!
//! Each handler is one synchronous request/response cycle: at most one
//! store read, one external call and one store write. Failures are caught
//! here and translated into the route's generic error message; the
//! underlying cause goes to the log only.

use axum::extract::{Path, Query, State};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::state::AppState;
use crate::api::types::{
    ApiError, Json, ProfileSavedResponse, RateRequest, RatingSavedResponse, SaveProfileRequest,
    SearchParams,
};
use crate::domain::{DomainError, SearchFilters};

fn filters_from(params: &SearchParams) -> SearchFilters {
    SearchFilters::from_params(
        params.ingredients.as_deref(),
        params.diet.as_deref(),
        params.meal_type.as_deref(),
    )
}

/// GET /api/recipes/search
pub async fn search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request_id = Uuid::new_v4();
    let filters = filters_from(&params);

    info!(
        request_id = %request_id,
        cache_key = %filters.cache_key(),
        "Searching recipes"
    );

    let recipes = state.recipe_service.search(&filters).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Recipe search failed");
        ApiError::internal("Failed to fetch recipes")
    })?;

    Ok(Json(recipes))
}

/// GET /api/recipes/{id}
pub async fn get_recipe_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request_id = Uuid::new_v4();

    info!(request_id = %request_id, recipe_id = %id, "Fetching recipe details");

    let details = state.recipe_service.details(&id).await.map_err(|e| {
        error!(request_id = %request_id, recipe_id = %id, error = %e, "Detail fetch failed");
        ApiError::internal("Failed to fetch recipe details")
    })?;

    Ok(Json(details))
}

/// GET /api/recipes/recommend
pub async fn recommend_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let request_id = Uuid::new_v4();
    let filters = filters_from(&params);

    info!(
        request_id = %request_id,
        ingredients = %filters.ingredients_param(),
        "Generating recommendations"
    );

    let ranked = state.recipe_service.recommend(&filters).await.map_err(|e| {
        error!(request_id = %request_id, error = %e, "Recommendation failed");
        match e {
            DomainError::Scorer { .. } => ApiError::internal("Recommendation failed"),
            _ => ApiError::internal("Failed to generate recommendations"),
        }
    })?;

    Ok(Json(ranked))
}

/// POST /api/recipes/user
pub async fn save_user_profile(
    State(state): State<AppState>,
    Json(request): Json<SaveProfileRequest>,
) -> Result<Json<ProfileSavedResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    info!(request_id = %request_id, user_id = %request.user_id, "Saving user profile");

    state
        .profile_service
        .save_profile(&request.user_id, request.preferences)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Profile save failed");
            ApiError::internal("Failed to save profile")
        })?;

    Ok(Json(ProfileSavedResponse::saved()))
}

/// POST /api/recipes/rate
pub async fn rate_recipe(
    State(state): State<AppState>,
    Json(request): Json<RateRequest>,
) -> Result<Json<RatingSavedResponse>, ApiError> {
    let request_id = Uuid::new_v4();

    let (recipe_id, rating) = match (request.recipe_id, request.rating) {
        (Some(recipe_id), Some(rating)) => (recipe_id, rating),
        _ => return Err(ApiError::bad_request("Missing required fields")),
    };

    info!(
        request_id = %request_id,
        user_id = %request.user_id,
        recipe_id,
        "Saving recipe rating"
    );

    state
        .profile_service
        .save_rating(&request.user_id, recipe_id, rating)
        .await
        .map_err(|e| {
            error!(request_id = %request_id, error = %e, "Rating save failed");
            ApiError::internal("Failed to save rating")
        })?;

    Ok(Json(RatingSavedResponse::success()))
}
