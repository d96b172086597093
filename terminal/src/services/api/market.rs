//! # Market Data Endpoints
//!
//! Handles the four read-only market data queries: the paginated market
//! listing, trending coins, global aggregate stats and free-text search.
//! None of them retry; a failed call surfaces a [`FetchError`] immediately
//! and the caller keeps whatever it was displaying before.

use super::client::ApiClient;
use crate::core::error::FetchError;
use shared::dto::market::{GlobalResponse, GlobalStats, MarketRecord, SearchResponse, TrendingResponse};

/// Parameters for the paginated market listing.
///
/// Defaults mirror the dashboard's primary view: USD, ordered by market
/// cap descending, 50 rows, first page, no sparkline, 1h/24h/7d change
/// windows.
#[derive(Debug, Clone)]
pub struct MarketPageParams {
    pub vs_currency: String,
    pub order: String,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
    pub price_change_percentage: String,
}

impl Default for MarketPageParams {
    fn default() -> Self {
        Self {
            vs_currency: "usd".to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 50,
            page: 1,
            sparkline: false,
            price_change_percentage: "1h,24h,7d".to_string(),
        }
    }
}

impl MarketPageParams {
    /// Query string for `/coins/markets`. Windows are comma-joined, as the
    /// remote API expects.
    fn to_query(&self) -> String {
        format!(
            "vs_currency={}&order={}&per_page={}&page={}&sparkline={}&price_change_percentage={}",
            self.vs_currency,
            self.order,
            self.per_page,
            self.page,
            self.sparkline,
            self.price_change_percentage,
        )
    }
}

/// Fetch one page of the market listing.
#[tracing::instrument(skip(client, params), fields(page = params.page, per_page = params.per_page))]
pub async fn fetch_market_page(
    client: &ApiClient,
    params: MarketPageParams,
) -> Result<Vec<MarketRecord>, FetchError> {
    let start = std::time::Instant::now();
    let url = format!("{}/coins/markets?{}", ApiClient::base_url(), params.to_query());

    tracing::debug!("Fetching market page");

    let response = client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Market page fetch network error");
        FetchError::from_request(e)
    })?;

    let status = response.status();
    let duration = start.elapsed();

    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Market page fetch failed"
        );
        return Err(FetchError::Status(status.as_u16()));
    }

    let records = response.json::<Vec<MarketRecord>>().await.map_err(|e| {
        tracing::error!(error = %e, "Market page response parse error");
        FetchError::Parse(e.to_string())
    })?;

    tracing::debug!(
        duration_ms = duration.as_millis(),
        record_count = records.len(),
        "Market page fetched successfully"
    );
    Ok(records)
}

/// Fetch the trending coins list. Order is the remote trending rank.
#[tracing::instrument(skip(client))]
pub async fn fetch_trending(client: &ApiClient) -> Result<TrendingResponse, FetchError> {
    let url = format!("{}/search/trending", ApiClient::base_url());

    let response = client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Trending fetch network error");
        FetchError::from_request(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Trending fetch failed");
        return Err(FetchError::Status(status.as_u16()));
    }

    response.json::<TrendingResponse>().await.map_err(|e| {
        tracing::error!(error = %e, "Trending response parse error");
        FetchError::Parse(e.to_string())
    })
}

/// Fetch global aggregate market statistics.
#[tracing::instrument(skip(client))]
pub async fn fetch_global(client: &ApiClient) -> Result<GlobalStats, FetchError> {
    let start = std::time::Instant::now();
    let url = format!("{}/global", ApiClient::base_url());

    let response = client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Global stats fetch network error");
        FetchError::from_request(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Global stats fetch failed");
        return Err(FetchError::Status(status.as_u16()));
    }

    let global = response.json::<GlobalResponse>().await.map_err(|e| {
        tracing::error!(error = %e, "Global stats response parse error");
        FetchError::Parse(e.to_string())
    })?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        active_cryptocurrencies = global.data.active_cryptocurrencies,
        "Global stats fetched successfully"
    );
    Ok(global.data)
}

/// Free-text coin search. Matching is case-insensitive on the remote side;
/// results are passed through without client-side post-filtering.
#[tracing::instrument(skip(client), fields(query = %query))]
pub async fn search_coins(client: &ApiClient, query: &str) -> Result<SearchResponse, FetchError> {
    let url = format!(
        "{}/search?query={}",
        ApiClient::base_url(),
        urlencoding::encode(query)
    );

    let response = client.get(&url).send().await.map_err(|e| {
        tracing::error!(error = %e, "Search fetch network error");
        FetchError::from_request(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Search fetch failed");
        return Err(FetchError::Status(status.as_u16()));
    }

    response.json::<SearchResponse>().await.map_err(|e| {
        tracing::error!(error = %e, "Search response parse error");
        FetchError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_match_primary_view() {
        let params = MarketPageParams::default();
        assert_eq!(params.vs_currency, "usd");
        assert_eq!(params.order, "market_cap_desc");
        assert_eq!(params.per_page, 50);
        assert_eq!(params.page, 1);
        assert!(!params.sparkline);
        assert_eq!(params.price_change_percentage, "1h,24h,7d");
    }

    #[test]
    fn query_string_joins_windows_with_commas() {
        let params = MarketPageParams {
            per_page: 250,
            ..Default::default()
        };
        assert_eq!(
            params.to_query(),
            "vs_currency=usd&order=market_cap_desc&per_page=250&page=1&sparkline=false&price_change_percentage=1h,24h,7d"
        );
    }

    #[test]
    fn search_query_is_percent_encoded() {
        assert_eq!(urlencoding::encode("bit coin"), "bit%20coin");
        assert_eq!(urlencoding::encode("usd/eur"), "usd%2Feur");
        assert_eq!(urlencoding::encode("doge"), "doge");
    }
}
