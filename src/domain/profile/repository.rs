//! Profile repository trait

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::UserProfile;

/// Repository for user preference profiles
#[async_trait]
pub trait ProfileRepository: Send + Sync + std::fmt::Debug {
    /// Returns the profile for a user, if one has been saved
    async fn find(&self, user_id: &str) -> Result<Option<UserProfile>, DomainError>;

    /// Creates or fully replaces the profile for the profile's user id
    async fn upsert(&self, profile: UserProfile) -> Result<(), DomainError>;
}
