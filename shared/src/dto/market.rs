//! # Market Data DTOs
//!
//! Wire types for the public CoinGecko REST API (`/coins/markets`,
//! `/search/trending`, `/global`, `/search`). The schema is consumed, not
//! owned: every field the dashboard does not strictly need to render is
//! optional so that a partially populated row degrades to a placeholder
//! instead of failing the whole batch.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One cryptocurrency's market snapshot as returned by `/coins/markets`.
///
/// `id` is the stable unique key within a fetched batch. Numeric fields are
/// independently nullable; display code renders `-` for `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketRecord {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub circulating_supply: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Response envelope for `/search/trending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub coins: Vec<TrendingCoin>,
}

/// One entry of the trending list. The remote API nests the payload under
/// an `item` key; order of the outer list is the trending rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub item: TrendingItem,
}

/// Trending coin reference. Carries no price fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingItem {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,
}

/// Response envelope for `/global`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalResponse {
    pub data: GlobalStats,
}

/// Aggregate market totals. Per-currency maps are keyed by lowercase
/// currency code ("usd", "btc", ...), dominance by lowercase symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalStats {
    #[serde(default)]
    pub total_market_cap: HashMap<String, f64>,
    #[serde(default)]
    pub total_volume: HashMap<String, f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h_usd: f64,
    #[serde(default)]
    pub market_cap_percentage: HashMap<String, f64>,
    #[serde(default)]
    pub active_cryptocurrencies: u64,
}

impl GlobalStats {
    /// Total market cap in the given currency, if the API reported it.
    pub fn market_cap_in(&self, currency: &str) -> Option<f64> {
        self.total_market_cap.get(currency).copied()
    }

    /// Total 24h volume in the given currency, if the API reported it.
    pub fn volume_in(&self, currency: &str) -> Option<f64> {
        self.total_volume.get(currency).copied()
    }

    /// Market-cap dominance of a coin symbol (e.g. "btc"), in percent.
    pub fn dominance_of(&self, symbol: &str) -> Option<f64> {
        self.market_cap_percentage.get(symbol).copied()
    }
}

/// Response envelope for `/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub coins: Vec<SearchCoin>,
}

/// One coin reference returned by the remote free-text search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub thumb: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,
}
