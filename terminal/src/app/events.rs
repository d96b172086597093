//! # Application Events
//!
//! Event types for async task communication between background fetch
//! tasks and the main thread. Events are applied in arrival order; when
//! two refreshes overlap, the last response to arrive wins.

use crate::app::state::OverviewData;
use crate::core::error::FetchError;
use shared::dto::market::MarketRecord;

/// Async task results sent to the main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Market listing page fetched (table refresh).
    MarketPageResult(Result<Vec<MarketRecord>, FetchError>),
    /// Global stats + highlights fetched (overview refresh).
    OverviewResult(Result<OverviewData, FetchError>),
}
