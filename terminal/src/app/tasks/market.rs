//! # Market Data Tasks
//!
//! Async tasks fetching the market listing and the overview payload
//! (global stats + trending + highlight rankings). Each task is spawned
//! fire-and-forget by a scheduler tick or a user action and reports back
//! over the event channel; failures never panic and never clear state.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, HighlightCoin, OverviewData};
use crate::core::service::MarketDataService;
use crate::services::api::MarketPageParams;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::market::{MarketRecord, TrendingResponse};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::spawn;

/// Rows fetched per table refresh. More than one display page so local
/// filtering and searching have something to work with.
const TABLE_FETCH_ROWS: u32 = 250;

/// Rows fetched per overview refresh, used to rank gainers and losers.
const OVERVIEW_FETCH_ROWS: u32 = 100;

/// Entries shown per highlight panel.
const HIGHLIGHT_COUNT: usize = 8;

/// Fetch one market listing page and send the result to the main thread.
///
/// Concurrent calls are allowed: overlapping refreshes are not coalesced,
/// and the last response to arrive wins.
pub(crate) fn fetch_market_page(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let mut state = state.write();
        state.market.refreshing = true;
        state.api_client.clone()
    };

    if let Some(api_client) = api_client {
        spawn(async move {
            let params = MarketPageParams {
                per_page: TABLE_FETCH_ROWS,
                ..Default::default()
            };
            let result = api_client.fetch_market_page(params).await;

            match &result {
                Ok(records) => {
                    tracing::debug!(record_count = records.len(), "Market page refresh complete");
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Market page refresh failed - keeping previous data");
                }
            }

            let _ = event_tx.send(AppEvent::MarketPageResult(result)).await;
        });
    }
}

/// Fetch global stats, trending coins and a market page, derive the
/// highlight rankings, and send the combined result to the main thread.
pub(crate) fn fetch_overview(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let api_client = {
        let state = state.read();
        state.api_client.clone()
    };

    if let Some(api_client) = api_client {
        spawn(async move {
            let params = MarketPageParams {
                order: "gecko_desc".to_string(),
                per_page: OVERVIEW_FETCH_ROWS,
                price_change_percentage: "24h".to_string(),
                ..Default::default()
            };
            let (global, trending, market) = tokio::join!(
                api_client.fetch_global(),
                api_client.fetch_trending(),
                api_client.fetch_market_page(params),
            );

            let result = match (global, trending, market) {
                (Ok(global), Ok(trending), Ok(market)) => {
                    let (trending, top_gainers, top_losers) =
                        derive_highlights(&trending, &market);
                    tracing::debug!(
                        trending = trending.len(),
                        gainers = top_gainers.len(),
                        losers = top_losers.len(),
                        "Overview refresh complete"
                    );
                    Ok(OverviewData {
                        global,
                        trending,
                        top_gainers,
                        top_losers,
                    })
                }
                (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                    tracing::warn!(error = %e, "Overview refresh failed - keeping previous data");
                    Err(e)
                }
            };

            let _ = event_tx.send(AppEvent::OverviewResult(result)).await;
        });
    }
}

/// Derive the three highlight panels from a trending response and a
/// market page.
///
/// Trending entries are joined against the market page so the panel can
/// show prices; gainers are the best of the 24h ranking that actually
/// gained, losers the worst that actually lost (worst first). Records
/// without a 24h change are excluded from both rankings.
fn derive_highlights(
    trending: &TrendingResponse,
    market: &[MarketRecord],
) -> (Vec<HighlightCoin>, Vec<HighlightCoin>, Vec<HighlightCoin>) {
    let trending_ids: HashSet<&str> = trending
        .coins
        .iter()
        .take(HIGHLIGHT_COUNT)
        .map(|coin| coin.item.id.as_str())
        .collect();
    let trending_with_prices: Vec<HighlightCoin> = market
        .iter()
        .filter(|record| trending_ids.contains(record.id.as_str()))
        .take(HIGHLIGHT_COUNT)
        .map(HighlightCoin::from)
        .collect();

    let mut ranked: Vec<&MarketRecord> = market
        .iter()
        .filter(|record| record.price_change_percentage_24h.is_some())
        .collect();
    ranked.sort_by(|a, b| {
        b.price_change_percentage_24h
            .partial_cmp(&a.price_change_percentage_24h)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let top_gainers: Vec<HighlightCoin> = ranked
        .iter()
        .take(HIGHLIGHT_COUNT)
        .filter(|record| record.price_change_percentage_24h.unwrap_or(0.0) > 0.0)
        .map(|record| HighlightCoin::from(*record))
        .collect();

    let top_losers: Vec<HighlightCoin> = ranked
        .iter()
        .rev()
        .take(HIGHLIGHT_COUNT)
        .filter(|record| record.price_change_percentage_24h.unwrap_or(0.0) < 0.0)
        .map(|record| HighlightCoin::from(*record))
        .collect();

    (trending_with_prices, top_gainers, top_losers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::market::{TrendingCoin, TrendingItem};

    fn record(id: &str, change_24h: Option<f64>) -> MarketRecord {
        MarketRecord {
            id: id.to_string(),
            name: id.to_string(),
            symbol: id.to_string(),
            image: String::new(),
            market_cap_rank: None,
            current_price: Some(1.0),
            price_change_percentage_1h_in_currency: None,
            price_change_percentage_24h: change_24h,
            price_change_percentage_7d_in_currency: None,
            total_volume: None,
            market_cap: None,
            circulating_supply: None,
            last_updated: None,
        }
    }

    fn trending_of(ids: &[&str]) -> TrendingResponse {
        TrendingResponse {
            coins: ids
                .iter()
                .map(|id| TrendingCoin {
                    item: TrendingItem {
                        id: id.to_string(),
                        name: id.to_string(),
                        symbol: id.to_string(),
                        thumb: String::new(),
                        market_cap_rank: None,
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn gainers_and_losers_are_ranked_by_24h_change() {
        let market = vec![
            record("flat", Some(0.0)),
            record("up_small", Some(2.0)),
            record("down_big", Some(-12.0)),
            record("up_big", Some(25.0)),
            record("down_small", Some(-1.5)),
            record("no_data", None),
        ];
        let (_, gainers, losers) = derive_highlights(&trending_of(&[]), &market);

        let gainer_ids: Vec<&str> = gainers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(gainer_ids, vec!["up_big", "up_small"]);

        // Worst first, and the flat / null entries appear in neither panel
        let loser_ids: Vec<&str> = losers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(loser_ids, vec!["down_big", "down_small"]);
    }

    #[test]
    fn trending_panel_joins_against_market_prices() {
        let market = vec![record("btc", Some(1.0)), record("eth", Some(2.0))];
        let (trending, _, _) = derive_highlights(&trending_of(&["eth", "unlisted"]), &market);

        assert_eq!(trending.len(), 1);
        assert_eq!(trending[0].id, "eth");
        assert_eq!(trending[0].current_price, Some(1.0));
    }

    #[test]
    fn panels_cap_at_highlight_count() {
        let market: Vec<_> = (0..30).map(|i| record(&format!("c{i}"), Some(i as f64 + 1.0))).collect();
        let (_, gainers, losers) = derive_highlights(&trending_of(&[]), &market);
        assert_eq!(gainers.len(), HIGHLIGHT_COUNT);
        assert!(losers.is_empty());
    }
}
