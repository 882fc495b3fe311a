use crate::core::retry::RetryPolicy;
use crate::domain::model::{parse_catalog, RawProduct};
use crate::utils::error::{EtlError, Result};
use reqwest::Client;
use std::time::Duration;

/// Pulls the product catalog from the HTTP endpoint.
pub struct ProductFetcher {
    client: Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl ProductFetcher {
    pub fn new(endpoint: impl Into<String>, timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            retry,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the catalog, retrying per the configured policy.
    pub async fn fetch(&self) -> Result<Vec<RawProduct>> {
        self.retry
            .run(|attempt| async move {
                self.fetch_once(attempt).await.inspect_err(|e| {
                    tracing::error!("Error fetching products (attempt {}): {}", attempt, e)
                })
            })
            .await
    }

    /// A single attempt. Non-2xx statuses, undecodable bodies and empty
    /// catalogs are all errors.
    pub async fn fetch_once(&self, attempt: u32) -> Result<Vec<RawProduct>> {
        tracing::info!(
            "Fetching products from API (attempt {}/{})...",
            attempt,
            self.retry.max_attempts()
        );
        tracing::debug!("Making API request to: {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(EtlError::HttpStatusError {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.text().await?;
        let products = parse_catalog(&body)?;

        if products.is_empty() {
            return Err(EtlError::EmptyResultError);
        }

        tracing::debug!("Decoded {} products", products.len());
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn fetcher(url: String) -> ProductFetcher {
        ProductFetcher::new(
            url,
            Duration::from_secs(5),
            RetryPolicy::new(3, Duration::from_millis(10)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_successful_api_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 1, "title": "Jacket", "price": 55.99, "category": "men's clothing"},
                    {"id": 2, "title": "Ring", "price": 9.99, "category": "jewelery"}
                ]));
        });

        let products = fetcher(server.url("/products")).fetch().await.unwrap();

        api_mock.assert();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[1].category.as_deref(), Some("jewelery"));
    }

    #[tokio::test]
    async fn test_fetch_once_reports_http_status() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(503);
        });

        let err = fetcher(server.url("/products"))
            .fetch_once(1)
            .await
            .unwrap_err();

        api_mock.assert_hits(1);
        match err {
            EtlError::HttpStatusError { status, url } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/products"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_once_rejects_empty_catalog() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([]));
        });

        let err = fetcher(server.url("/products"))
            .fetch_once(1)
            .await
            .unwrap_err();

        assert!(matches!(err, EtlError::EmptyResultError));
    }

    #[tokio::test]
    async fn test_fetch_once_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("[{\"id\": 1,");
        });

        let err = fetcher(server.url("/products"))
            .fetch_once(1)
            .await
            .unwrap_err();

        assert!(matches!(err, EtlError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_fetch_reports_connection_failure() {
        // Nothing listens on the discard port.
        let err = fetcher("http://127.0.0.1:9/products".to_string())
            .fetch_once(1)
            .await
            .unwrap_err();

        assert!(matches!(err, EtlError::NetworkError(_)));
    }
}
