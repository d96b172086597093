//! # Application State Types
//!
//! All state-related types for the dashboard: the market table view, the
//! overview panels (global stats, trending, gainers/losers) and the load
//! phases that drive the loading/error affordances.

use crate::core::error::FetchError;
use crate::services::api::ApiClient;
use crate::table::TableEngine;
use shared::dto::market::{GlobalStats, MarketRecord};
use std::sync::Arc;

/// Load phase of a data-consuming view.
///
/// Only the very first load gets a blocking error affordance; once data
/// has been shown, a failed refresh keeps the previous data on screen and
/// records the error for the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    /// First load in flight, nothing to show yet.
    Loading,
    /// Data on screen.
    Ready,
    /// The first load failed; show the error with a manual retry action.
    Failed(String),
}

/// State behind the coins table.
pub struct MarketState {
    /// Sole owner of the record set and the sort/filter/page state.
    pub engine: TableEngine,
    pub phase: LoadPhase,
    /// A refresh is in flight. Display-only; overlapping refreshes are
    /// deliberately not coalesced.
    pub refreshing: bool,
    /// Most recent refresh failure while already showing data.
    pub last_error: Option<String>,
    pub last_update: Option<std::time::Instant>,
}

impl MarketState {
    pub fn new() -> Self {
        Self {
            engine: TableEngine::new(),
            phase: LoadPhase::Loading,
            refreshing: false,
            last_error: None,
            last_update: None,
        }
    }

    /// Apply a finished market page fetch. Successful results replace the
    /// record set wholesale (view state untouched); failures keep the
    /// previous data unless this was the first load.
    pub fn apply_result(&mut self, result: Result<Vec<MarketRecord>, FetchError>) {
        self.refreshing = false;
        match result {
            Ok(records) => {
                self.engine.replace_records(records);
                self.phase = LoadPhase::Ready;
                self.last_error = None;
                self.last_update = Some(std::time::Instant::now());
            }
            Err(err) => {
                if self.phase == LoadPhase::Loading {
                    self.phase = LoadPhase::Failed(err.to_string());
                } else {
                    self.last_error = Some(err.to_string());
                }
            }
        }
    }
}

impl Default for MarketState {
    fn default() -> Self {
        Self::new()
    }
}

/// One coin entry of a highlight panel (trending / gainers / losers).
#[derive(Debug, Clone)]
pub struct HighlightCoin {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub current_price: Option<f64>,
    pub change_24h: Option<f64>,
}

impl From<&MarketRecord> for HighlightCoin {
    fn from(record: &MarketRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            symbol: record.symbol.clone(),
            current_price: record.current_price,
            change_24h: record.price_change_percentage_24h,
        }
    }
}

/// Payload of one successful overview refresh.
#[derive(Debug, Clone)]
pub struct OverviewData {
    pub global: GlobalStats,
    pub trending: Vec<HighlightCoin>,
    pub top_gainers: Vec<HighlightCoin>,
    pub top_losers: Vec<HighlightCoin>,
}

/// State behind the stats cards and highlight panels.
pub struct OverviewState {
    pub phase: LoadPhase,
    pub global: Option<GlobalStats>,
    pub trending: Vec<HighlightCoin>,
    pub top_gainers: Vec<HighlightCoin>,
    pub top_losers: Vec<HighlightCoin>,
    pub last_error: Option<String>,
}

impl OverviewState {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::Loading,
            global: None,
            trending: Vec::new(),
            top_gainers: Vec::new(),
            top_losers: Vec::new(),
            last_error: None,
        }
    }

    /// Apply a finished overview fetch, with the same first-load /
    /// keep-previous-data policy as the table.
    pub fn apply_result(&mut self, result: Result<OverviewData, FetchError>) {
        match result {
            Ok(data) => {
                self.global = Some(data.global);
                self.trending = data.trending;
                self.top_gainers = data.top_gainers;
                self.top_losers = data.top_losers;
                self.phase = LoadPhase::Ready;
                self.last_error = None;
            }
            Err(err) => {
                if self.phase == LoadPhase::Loading {
                    self.phase = LoadPhase::Failed(err.to_string());
                } else {
                    self.last_error = Some(err.to_string());
                }
            }
        }
    }
}

impl Default for OverviewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level application state, shared behind `Arc<RwLock<_>>`.
pub struct AppState {
    pub market: MarketState,
    pub overview: OverviewState,
    /// Live contents of the search box; flows into the engine through the
    /// debouncer.
    pub search_input: String,
    pub api_client: Option<Arc<ApiClient>>,
}

impl AppState {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self {
            market: MarketState::new(),
            overview: OverviewState::new(),
            search_input: String::new(),
            api_client: Some(api_client),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(id: &str) -> MarketRecord {
        MarketRecord {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.to_string(),
            image: String::new(),
            market_cap_rank: None,
            current_price: Some(1.0),
            price_change_percentage_1h_in_currency: None,
            price_change_percentage_24h: None,
            price_change_percentage_7d_in_currency: None,
            total_volume: None,
            market_cap: None,
            circulating_supply: None,
            last_updated: None,
        }
    }

    #[test]
    fn first_load_failure_shows_error_affordance() {
        let mut market = MarketState::new();
        market.apply_result(Err(FetchError::Timeout));
        assert_eq!(market.phase, LoadPhase::Failed("request timed out".to_string()));
    }

    #[test]
    fn refresh_failure_keeps_previous_data() {
        let mut market = MarketState::new();
        market.apply_result(Ok(vec![sample_record("btc")]));
        assert_eq!(market.phase, LoadPhase::Ready);

        market.apply_result(Err(FetchError::Status(503)));
        // Still Ready, previous records still there, error recorded
        assert_eq!(market.phase, LoadPhase::Ready);
        assert_eq!(market.engine.records().len(), 1);
        assert!(market.last_error.is_some());
    }

    #[test]
    fn successful_refresh_clears_recorded_error() {
        let mut market = MarketState::new();
        market.apply_result(Ok(vec![sample_record("btc")]));
        market.apply_result(Err(FetchError::Timeout));
        market.apply_result(Ok(vec![sample_record("btc"), sample_record("eth")]));
        assert!(market.last_error.is_none());
        assert_eq!(market.engine.records().len(), 2);
    }

    #[test]
    fn refresh_does_not_reset_page_state() {
        let mut market = MarketState::new();
        let records: Vec<_> = (0..60).map(|i| sample_record(&format!("c{i}"))).collect();
        market.apply_result(Ok(records.clone()));
        market.engine.set_page_index(1);

        market.apply_result(Ok(records));
        assert_eq!(market.engine.state().page_index, 1);
    }
}
