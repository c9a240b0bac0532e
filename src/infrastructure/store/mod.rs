//! Persistence store implementations

mod in_memory;
mod postgres;

pub use in_memory::{InMemoryProfileRepository, InMemoryRatingRepository, InMemorySearchCacheRepository};
pub use postgres::{
    create_pool, ensure_schema, PostgresConfig, PostgresProfileRepository,
    PostgresRatingRepository, PostgresSearchCacheRepository,
};
