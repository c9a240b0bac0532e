//! HTTP client seam for the upstream provider

use async_trait::async_trait;

use crate::domain::DomainError;

/// Trait for HTTP client operations (for mocking)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpClientTrait: Send + Sync {
    /// Issues a GET request with query parameters and parses the JSON body.
    ///
    /// Non-2xx responses are errors; the status and body land in the error
    /// message so the caller can log them.
    async fn get_json(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, DomainError>;
}

/// Real HTTP client using reqwest
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Builds a client with a bounded per-request timeout so a hung
    /// upstream call fails the request instead of blocking it forever.
    pub fn with_timeout(timeout: std::time::Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClientTrait for HttpClient {
    async fn get_json(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, DomainError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| DomainError::upstream("http", format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::upstream(
                "http",
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response.json().await.map_err(|e| {
            DomainError::upstream("http", format!("Failed to parse response: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_json_forwards_query_params() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/recipes/findByIngredients"))
            .and(query_param("ingredients", "chicken"))
            .and(query_param("number", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let url = format!("{}/recipes/findByIngredients", server.uri());
        let query = vec![
            ("ingredients".to_string(), "chicken".to_string()),
            ("number".to_string(), "10".to_string()),
        ];

        let body = client.get_json(&url, &query).await.unwrap();
        assert_eq!(body, json!([{"id": 1}]));
    }

    #[tokio::test]
    async fn test_get_json_non_success_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(402).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let err = client.get_json(&server.uri(), &[]).await.unwrap_err();

        match err {
            DomainError::Upstream { message, .. } => {
                assert!(message.contains("402"));
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_json_invalid_body_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = HttpClient::new();
        let err = client.get_json(&server.uri(), &[]).await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream { .. }));
    }
}
