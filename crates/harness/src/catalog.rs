//! Catalog API client
//!
//! Thin client over the product catalog's two read endpoints. Requests are
//! recorded into `RecordedResponse` values so assertion steps can inspect
//! status and body without holding on to the live response.

use reqwest::Client;
use tracing::{debug, info};

use storecheck_common::{ApiConfig, Error, Product, RecordedResponse, Result};

/// Client for the product catalog API
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
    fallback_url: String,
}

impl CatalogClient {
    /// Build a client from API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            fallback_url: config.fallback_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client pointed at the fallback API
    pub fn fallback(config: &ApiConfig) -> Result<Self> {
        let mut flipped = config.clone();
        flipped.base_url = config.fallback_url.clone();
        Self::new(&flipped)
    }

    /// Base URL this client targets
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether this client points at the fallback API. Schema validation and
    /// strict field assertions are skipped there.
    pub fn is_fallback(&self) -> bool {
        self.base_url == self.fallback_url
            || self.base_url.contains("jsonplaceholder.typicode.com")
    }

    /// Probe the catalog before running any scenario.
    ///
    /// Connection errors, timeouts, and other request failures are converted
    /// into a clearer `ApiUnavailable` message; a non-2xx status fails the
    /// probe too. There is no retry.
    pub async fn availability_check(&self) -> Result<()> {
        let url = format!("{}/products", self.base_url);
        debug!("Probing catalog availability at {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::from_probe(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiUnavailable {
                url,
                reason: format!("status {}", status.as_u16()),
            });
        }

        info!("Catalog is available ({})", status.as_u16());
        Ok(())
    }

    /// GET `{base}/products`
    pub async fn list_products(&self) -> Result<RecordedResponse> {
        self.get(&format!("{}/products", self.base_url)).await
    }

    /// GET `{base}/products/{id}`
    pub async fn get_product(&self, id: &str) -> Result<RecordedResponse> {
        self.get(&format!("{}/products/{}", self.base_url, id)).await
    }

    /// Decode a single product response into the typed model
    pub async fn fetch_product(&self, id: &str) -> Result<Product> {
        let recorded = self.get_product(id).await?;
        if !recorded.is_success() {
            return Err(Error::UnexpectedStatus {
                status: recorded.status,
                url: recorded.url,
            });
        }
        Ok(serde_json::from_str(&recorded.body)?)
    }

    async fn get(&self, url: &str) -> Result<RecordedResponse> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.text().await?;

        Ok(RecordedResponse {
            status,
            url: final_url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storecheck_common::ApiConfig;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = ApiConfig {
            base_url: "https://fakestoreapi.com/".to_string(),
            ..ApiConfig::default()
        };
        let client = CatalogClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "https://fakestoreapi.com");
        assert!(!client.is_fallback());
    }

    #[test]
    fn test_fallback_detection() {
        let config = ApiConfig::default();
        let client = CatalogClient::fallback(&config).unwrap();
        assert!(client.is_fallback());

        let via_env_style = ApiConfig {
            base_url: "https://jsonplaceholder.typicode.com".to_string(),
            ..ApiConfig::default()
        };
        let client = CatalogClient::new(&via_env_style).unwrap();
        assert!(client.is_fallback());
    }
}
