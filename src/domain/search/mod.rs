//! Search filter types and cache key derivation

mod filters;

pub use filters::SearchFilters;
