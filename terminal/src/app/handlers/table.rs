//! # Table Interaction Handlers
//!
//! Sort clicks, pagination and search-query application for the coins
//! table. Everything funnels into the tabular data engine, which owns the
//! view state.

use crate::app::state::AppState;
use crate::core::error::{AppError, Result};
use crate::table::{ColumnId, PAGE_SIZES};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cycle the sort on a column header click.
pub fn handle_sort_click(state: Arc<RwLock<AppState>>, column: ColumnId) {
    state.write().market.engine.toggle_sort(column);
}

/// Apply a (debounced) search query to the engine.
pub fn apply_search_query(state: Arc<RwLock<AppState>>, query: &str) {
    state.write().market.engine.set_global_query(query);
}

/// Change the page size. The UI only offers the enumerated sizes, so a
/// validation failure here means a programming error upstream.
pub fn handle_page_size_change(state: Arc<RwLock<AppState>>, size: usize) -> Result<()> {
    if !PAGE_SIZES.contains(&size) {
        return Err(AppError::Validation(format!(
            "Unsupported page size: {size}"
        )));
    }
    state.write().market.engine.set_page_size(size);
    Ok(())
}

/// Go to the previous page, if any.
pub fn handle_page_prev(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let current = state.market.engine.state().page_index;
    if current > 0 {
        state.market.engine.set_page_index(current - 1);
    }
}

/// Go to the next page. Clamped by the engine, so over-shooting is safe.
pub fn handle_page_next(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    let current = state.market.engine.state().page_index;
    state.market.engine.set_page_index(current + 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::ApiClient;

    fn shared_state() -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState::new(Arc::new(
            ApiClient::with_api_key(None),
        ))))
    }

    #[test]
    fn page_size_change_rejects_unsupported_sizes() {
        let state = shared_state();
        assert!(handle_page_size_change(state.clone(), 33).is_err());
        assert!(handle_page_size_change(state.clone(), 25).is_ok());
        assert_eq!(state.read().market.engine.state().page_size, 25);
    }

    #[test]
    fn page_prev_stops_at_zero() {
        let state = shared_state();
        handle_page_prev(state.clone());
        assert_eq!(state.read().market.engine.state().page_index, 0);
    }
}
