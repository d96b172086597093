//! # Application Core
//!
//! Central coordinator between the UI layer (egui, main thread), the
//! async fetch tasks (tokio) and the shared state.
//!
//! ## Architecture
//!
//! The application is event-driven: background tasks send their results
//! to the main thread as [`AppEvent`] messages through an unbounded
//! channel. The UI calls [`App::on_tick`] once per frame, which drains
//! the channel non-blockingly and applies each result to the state.
//!
//! ```text
//! RefreshScheduler ──► tasks::market ──► remote API
//!        (timer)            │
//!                           ▼  AppEvent
//!                    event channel ──► on_tick() ──► AppState
//!                                                      │
//!                          user input ──► handlers ────┤
//!                                                      ▼
//!                                            TableEngine::view()
//!                                                      │
//!                                                      ▼
//!                                               ui (render)
//! ```
//!
//! ## Thread Safety
//!
//! State lives in `Arc<RwLock<AppState>>` (parking_lot). Locks are held
//! for the duration of one mutation or one render pass, never across an
//! await point.

pub mod events;
pub mod handlers;
pub mod scheduler;
pub mod state;
pub mod tasks;

pub use events::AppEvent;
pub use scheduler::RefreshScheduler;
pub use state::{AppState, HighlightCoin, LoadPhase, MarketState, OverviewData, OverviewState};

use crate::services::api::ApiClient;
use crate::table::ColumnId;
use crate::utils::debounce::Debouncer;
use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

/// Table refresh period.
const MARKET_REFRESH_PERIOD: Duration = Duration::from_secs(120);

/// Overview (global stats + highlights) refresh period.
const OVERVIEW_REFRESH_PERIOD: Duration = Duration::from_secs(300);

/// Quiet period before a typed search query is applied.
const SEARCH_DEBOUNCE_WAIT: Duration = Duration::from_millis(300);

/// Main application object, owned by the UI loop.
pub struct App {
    /// Thread-safe shared application state.
    pub state: Arc<RwLock<AppState>>,
    /// Channel receiver for async task results, polled in `on_tick()`.
    pub event_rx: Receiver<AppEvent>,
    /// Cloned into async tasks for sending results back.
    event_tx: Sender<AppEvent>,
    /// Debounces the search box into the engine's global query.
    search_debouncer: Debouncer<String>,
    market_scheduler: RefreshScheduler,
    overview_scheduler: RefreshScheduler,
}

impl App {
    /// Create the application and start both refresh schedulers; each
    /// fires its first fetch immediately. Must be called within a tokio
    /// runtime context.
    pub fn new() -> Self {
        let api_client = Arc::new(ApiClient::new());
        let state = Arc::new(RwLock::new(AppState::new(api_client)));
        let (event_tx, event_rx) = unbounded();

        let market_scheduler = {
            let state = state.clone();
            let event_tx = event_tx.clone();
            RefreshScheduler::start(MARKET_REFRESH_PERIOD, move || {
                tasks::market::fetch_market_page(state.clone(), event_tx.clone());
            })
        };
        let overview_scheduler = {
            let state = state.clone();
            let event_tx = event_tx.clone();
            RefreshScheduler::start(OVERVIEW_REFRESH_PERIOD, move || {
                tasks::market::fetch_overview(state.clone(), event_tx.clone());
            })
        };

        tracing::info!(
            market_period_secs = MARKET_REFRESH_PERIOD.as_secs(),
            overview_period_secs = OVERVIEW_REFRESH_PERIOD.as_secs(),
            "App state initialized - refresh schedulers started"
        );

        App {
            state,
            event_rx,
            event_tx,
            search_debouncer: Debouncer::new(SEARCH_DEBOUNCE_WAIT),
            market_scheduler,
            overview_scheduler,
        }
    }

    /// Called every frame: applies a matured search query, then drains and
    /// applies all pending async results. Non-blocking.
    pub fn on_tick(&mut self) {
        if let Some(query) = self.search_debouncer.poll_ready() {
            handlers::table::apply_search_query(self.state.clone(), &query);
        }

        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply one async result. Results land in arrival order; when two
    /// refreshes overlap, the last response to arrive wins.
    fn handle_event(&mut self, event: AppEvent) {
        let mut state = self.state.write();
        match event {
            AppEvent::MarketPageResult(result) => state.market.apply_result(result),
            AppEvent::OverviewResult(result) => state.overview.apply_result(result),
        }
    }

    /// Search box edited: remember the raw text and re-arm the debouncer.
    pub fn handle_search_input(&mut self, text: String) {
        self.state.write().search_input = text.clone();
        self.search_debouncer.notify(text);
    }

    /// Column header clicked.
    pub fn handle_sort_click(&mut self, column: ColumnId) {
        handlers::table::handle_sort_click(self.state.clone(), column);
    }

    /// Page size selector changed.
    pub fn handle_page_size_change(&mut self, size: usize) {
        if let Err(e) = handlers::table::handle_page_size_change(self.state.clone(), size) {
            tracing::warn!(error = %e, "Rejected page size change");
        }
    }

    pub fn handle_page_prev(&mut self) {
        handlers::table::handle_page_prev(self.state.clone());
    }

    pub fn handle_page_next(&mut self) {
        handlers::table::handle_page_next(self.state.clone());
    }

    /// Manual refresh of both views.
    pub fn handle_refresh_click(&mut self) {
        tasks::market::fetch_market_page(self.state.clone(), self.event_tx.clone());
        tasks::market::fetch_overview(self.state.clone(), self.event_tx.clone());
    }

    /// Retry after a failed first load: return the failed views to
    /// `Loading` and fetch again.
    pub fn handle_retry_click(&mut self) {
        {
            let mut state = self.state.write();
            if matches!(state.market.phase, LoadPhase::Failed(_)) {
                state.market.phase = LoadPhase::Loading;
            }
            if matches!(state.overview.phase, LoadPhase::Failed(_)) {
                state.overview.phase = LoadPhase::Loading;
            }
        }
        self.handle_refresh_click();
    }

    /// Stop both schedulers so no further ticks fire. Idempotent; called
    /// on teardown. In-flight fetches are not cancelled — their results
    /// are dropped with the event channel.
    pub fn shutdown(&mut self) {
        self.market_scheduler.stop();
        self.overview_scheduler.stop();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
