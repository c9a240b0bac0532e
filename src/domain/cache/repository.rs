//! Search cache repository trait

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entry::SearchCacheEntry;

/// Repository for persisted search results.
///
/// Inserts are plain appends: two concurrent misses for the same key may
/// both insert, and the store must tolerate the duplicates. Reads return
/// the oldest matching entry so the first insert wins deterministically.
#[async_trait]
pub trait SearchCacheRepository: Send + Sync + std::fmt::Debug {
    /// Returns the oldest entry for the key, if any
    async fn find(&self, cache_key: &str) -> Result<Option<SearchCacheEntry>, DomainError>;

    /// Appends a new entry; never replaces an existing one
    async fn insert(&self, entry: SearchCacheEntry) -> Result<(), DomainError>;
}
