//! API wire types

pub mod error;
pub mod json;
pub mod recipes;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use recipes::{ProfileSavedResponse, RateRequest, RatingSavedResponse, SaveProfileRequest, SearchParams};
