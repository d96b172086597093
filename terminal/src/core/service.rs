//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and
//! modularity. Production code uses [`crate::services::api::ApiClient`];
//! tests can substitute a mock returning canned payloads.

use crate::core::error::FetchError;
use crate::services::api::MarketPageParams;
use async_trait::async_trait;
use shared::dto::market::{GlobalStats, MarketRecord, SearchResponse, TrendingResponse};

/// Read operations against the remote market data source.
///
/// All four are side-effect-free on their inputs, apply the client's
/// bounded timeout, and never retry: a failure surfaces immediately as
/// [`FetchError`] and the caller decides whether to retry.
#[async_trait]
pub trait MarketDataService: Send + Sync {
    /// Fetch one page of the market listing.
    async fn fetch_market_page(
        &self,
        params: MarketPageParams,
    ) -> Result<Vec<MarketRecord>, FetchError>;

    /// Fetch the trending coins, ordered by the remote trending rank.
    async fn fetch_trending(&self) -> Result<TrendingResponse, FetchError>;

    /// Fetch global aggregate market statistics.
    async fn fetch_global(&self) -> Result<GlobalStats, FetchError>;

    /// Free-text coin search; matching semantics are remote-side.
    async fn search_coins(&self, query: &str) -> Result<SearchResponse, FetchError>;
}
