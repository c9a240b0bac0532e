//! Recipe search, detail and recommendation orchestration

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    DomainError, RecipeProvider, RecipeScorer, ScoreRequest, SearchCacheEntry,
    SearchCacheRepository, SearchFilters,
};

/// Result-count limit for cached searches
const SEARCH_RESULT_LIMIT: u32 = 10;
/// Recommendation candidates are over-fetched to give the scorer headroom
const RECOMMEND_CANDIDATE_LIMIT: u32 = 50;

/// Key probed by the readiness check; never written
const READINESS_PROBE_KEY: &str = "__readiness_probe__";

/// Orchestrates each read path: cache lookup, upstream call, scorer
/// delegation. Holds no cross-request state of its own — the cache
/// repository is the single source of truth.
#[derive(Debug)]
pub struct RecipeService<P, C, S>
where
    P: RecipeProvider,
    C: SearchCacheRepository,
    S: RecipeScorer,
{
    provider: Arc<P>,
    cache: Arc<C>,
    scorer: Arc<S>,
}

impl<P, C, S> RecipeService<P, C, S>
where
    P: RecipeProvider,
    C: SearchCacheRepository,
    S: RecipeScorer,
{
    pub fn new(provider: Arc<P>, cache: Arc<C>, scorer: Arc<S>) -> Self {
        Self {
            provider,
            cache,
            scorer,
        }
    }

    /// Searches recipes, serving from the cache when possible.
    ///
    /// A hit returns the stored payload as-is, with no freshness check and
    /// no upstream call. A miss fetches from upstream with nutrition data,
    /// appends a cache entry under the derived key, and returns the fresh
    /// payload. An upstream failure leaves the cache unwritten.
    pub async fn search(&self, filters: &SearchFilters) -> Result<serde_json::Value, DomainError> {
        let cache_key = filters.cache_key();

        if let Some(entry) = self.cache.find(&cache_key).await? {
            debug!(cache_key = %cache_key, "Serving search from cache");
            return Ok(entry.recipes);
        }

        debug!(cache_key = %cache_key, "Cache miss, fetching from upstream");
        let recipes = self
            .provider
            .search(filters, SEARCH_RESULT_LIMIT, true)
            .await?;

        self.cache
            .insert(SearchCacheEntry::new(cache_key, recipes.clone()))
            .await?;

        Ok(recipes)
    }

    /// Fetches one recipe's detail document straight from upstream.
    /// Never cached.
    pub async fn details(&self, id: &str) -> Result<serde_json::Value, DomainError> {
        self.provider.get_details(id, true).await
    }

    /// Fetches a wide candidate list from upstream and delegates ranking to
    /// the external scorer. Candidates skip nutrition data; the scorer does
    /// not use it and the larger limit keeps the response lean.
    pub async fn recommend(
        &self,
        filters: &SearchFilters,
    ) -> Result<serde_json::Value, DomainError> {
        let candidates = self
            .provider
            .search(filters, RECOMMEND_CANDIDATE_LIMIT, false)
            .await?;

        let request = ScoreRequest::new(filters, candidates);
        self.scorer.score(&request).await
    }

    /// Cheap store round-trip for the readiness probe
    pub async fn store_ready(&self) -> Result<(), DomainError> {
        self.cache.find(READINESS_PROBE_KEY).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::InMemorySearchCacheRepository;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Provider that counts calls and records the last request parameters
    #[derive(Debug, Default)]
    struct CountingProvider {
        search_calls: AtomicUsize,
        last_search: Mutex<Option<(SearchFilters, u32, bool)>>,
        fail: bool,
    }

    impl CountingProvider {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl RecipeProvider for CountingProvider {
        async fn search(
            &self,
            filters: &SearchFilters,
            number: u32,
            include_nutrition: bool,
        ) -> Result<serde_json::Value, DomainError> {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            *self.last_search.lock().unwrap() =
                Some((filters.clone(), number, include_nutrition));

            if self.fail {
                return Err(DomainError::upstream("spoonacular", "boom"));
            }
            Ok(json!([{"id": 1, "title": "Tomato Chicken"}]))
        }

        async fn get_details(
            &self,
            id: &str,
            _include_nutrition: bool,
        ) -> Result<serde_json::Value, DomainError> {
            if self.fail {
                return Err(DomainError::upstream("spoonacular", "boom"));
            }
            Ok(json!({"id": id, "title": "Detail"}))
        }
    }

    /// Scorer that records its input and returns a canned ranking
    #[derive(Debug, Default)]
    struct RecordingScorer {
        last_request: Mutex<Option<ScoreRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl RecipeScorer for RecordingScorer {
        async fn score(&self, request: &ScoreRequest) -> Result<serde_json::Value, DomainError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            if self.fail {
                return Err(DomainError::scorer("model blew up"));
            }
            Ok(json!([{"id": 1, "score": 0.9}]))
        }
    }

    fn service(
        provider: CountingProvider,
        scorer: RecordingScorer,
    ) -> (
        RecipeService<CountingProvider, InMemorySearchCacheRepository, RecordingScorer>,
        Arc<CountingProvider>,
        Arc<InMemorySearchCacheRepository>,
        Arc<RecordingScorer>,
    ) {
        let provider = Arc::new(provider);
        let cache = Arc::new(InMemorySearchCacheRepository::new());
        let scorer = Arc::new(scorer);
        let service = RecipeService::new(provider.clone(), cache.clone(), scorer.clone());
        (service, provider, cache, scorer)
    }

    fn filters() -> SearchFilters {
        SearchFilters::from_params(Some("chicken,tomatoes"), Some(""), Some(""))
    }

    #[tokio::test]
    async fn test_search_miss_fetches_and_caches() {
        let (service, provider, cache, _) =
            service(CountingProvider::default(), RecordingScorer::default());

        let payload = service.search(&filters()).await.unwrap();

        assert_eq!(payload[0]["title"], "Tomato Chicken");
        assert_eq!(provider.search_calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);

        let entry = cache.find("chicken,tomatoes__").await.unwrap().unwrap();
        assert_eq!(entry.recipes, payload);

        let (_, number, include_nutrition) =
            provider.last_search.lock().unwrap().clone().unwrap();
        assert_eq!(number, 10);
        assert!(include_nutrition);
    }

    #[tokio::test]
    async fn test_search_hit_skips_upstream() {
        let (service, provider, _, _) =
            service(CountingProvider::default(), RecordingScorer::default());

        let first = service.search(&filters()).await.unwrap();
        let second = service.search(&filters()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.search_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_search_different_filters_miss_separately() {
        let (service, provider, cache, _) =
            service(CountingProvider::default(), RecordingScorer::default());

        service.search(&filters()).await.unwrap();
        let other = SearchFilters::from_params(Some("chicken,tomatoes"), Some("vegan"), None);
        service.search(&other).await.unwrap();

        assert_eq!(provider.search_calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_search_upstream_failure_writes_nothing() {
        let (service, _, cache, _) =
            service(CountingProvider::failing(), RecordingScorer::default());

        let err = service.search(&filters()).await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream { .. }));
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_recommend_fetches_fifty_candidates_without_nutrition() {
        let (service, provider, _, scorer) =
            service(CountingProvider::default(), RecordingScorer::default());

        let ranked = service.recommend(&filters()).await.unwrap();
        assert_eq!(ranked, json!([{"id": 1, "score": 0.9}]));

        let (_, number, include_nutrition) =
            provider.last_search.lock().unwrap().clone().unwrap();
        assert_eq!(number, 50);
        assert!(!include_nutrition);

        let request = scorer.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.ingredients, "chicken,tomatoes");
        assert_eq!(request.recipes[0]["title"], "Tomato Chicken");
    }

    #[tokio::test]
    async fn test_recommend_bypasses_cache() {
        let (service, provider, cache, _) =
            service(CountingProvider::default(), RecordingScorer::default());

        service.recommend(&filters()).await.unwrap();
        service.recommend(&filters()).await.unwrap();

        // Each recommend fetches fresh candidates; nothing is cached
        assert_eq!(provider.search_calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_recommend_scorer_failure_propagates() {
        let scorer = RecordingScorer {
            fail: true,
            ..Default::default()
        };
        let (service, _, _, _) = service(CountingProvider::default(), scorer);

        let err = service.recommend(&filters()).await.unwrap_err();
        assert!(matches!(err, DomainError::Scorer { .. }));
    }

    #[tokio::test]
    async fn test_recommend_upstream_failure_skips_scorer() {
        let (service, _, _, scorer) =
            service(CountingProvider::failing(), RecordingScorer::default());

        let err = service.recommend(&filters()).await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream { .. }));
        assert!(scorer.last_request.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_details_pass_through() {
        let (service, _, cache, _) =
            service(CountingProvider::default(), RecordingScorer::default());

        let detail = service.details("716429").await.unwrap();
        assert_eq!(detail["id"], "716429");
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_details_failure_propagates() {
        let (service, _, _, _) =
            service(CountingProvider::failing(), RecordingScorer::default());

        let err = service.details("716429").await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream { .. }));
    }
}
