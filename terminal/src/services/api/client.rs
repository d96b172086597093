//! # API Client
//!
//! Main HTTP client for the public market data API.

use crate::core::error::FetchError;
use crate::core::service::MarketDataService;
use reqwest::Client;
use shared::dto::market::{GlobalStats, MarketRecord, SearchResponse, TrendingResponse};

/// Base URL for the market data API
const API_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Request header carrying the optional demo-tier API key
const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Environment variable holding the optional API key
pub const API_KEY_ENV: &str = "COINGECKO_API_KEY";

/// HTTP client for the remote market data API.
///
/// The client maintains a connection pool and applies a bounded request
/// timeout to every call. An API key is optional: without one the default
/// unauthenticated tier is used.
pub struct ApiClient {
    pub(crate) client: Client,
    api_key: Option<String>,
}

impl ApiClient {
    /// Create a new API client, reading the optional API key from the
    /// environment.
    ///
    /// The client is configured with a 10 second timeout to prevent
    /// freezing on a stalled endpoint.
    pub fn new() -> Self {
        Self::with_api_key(std::env::var(API_KEY_ENV).ok())
    }

    /// Create a client with an explicit (or explicitly absent) API key.
    pub fn with_api_key(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: api_key.filter(|key| !key.is_empty()),
        }
    }

    /// Get the base URL for API requests.
    pub(crate) fn base_url() -> &'static str {
        API_BASE_URL
    }

    /// Start a GET request, attaching the API key header when configured.
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Implement MarketDataService trait for ApiClient
#[async_trait::async_trait]
impl MarketDataService for ApiClient {
    async fn fetch_market_page(
        &self,
        params: crate::services::api::market::MarketPageParams,
    ) -> Result<Vec<MarketRecord>, FetchError> {
        crate::services::api::market::fetch_market_page(self, params).await
    }

    async fn fetch_trending(&self) -> Result<TrendingResponse, FetchError> {
        crate::services::api::market::fetch_trending(self).await
    }

    async fn fetch_global(&self) -> Result<GlobalStats, FetchError> {
        crate::services::api::market::fetch_global(self).await
    }

    async fn search_coins(&self, query: &str) -> Result<SearchResponse, FetchError> {
        crate::services::api::market::search_coins(self, query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_is_treated_as_absent() {
        let client = ApiClient::with_api_key(Some(String::new()));
        assert!(client.api_key.is_none());

        let client = ApiClient::with_api_key(Some("demo-key".to_string()));
        assert_eq!(client.api_key.as_deref(), Some("demo-key"));
    }
}
