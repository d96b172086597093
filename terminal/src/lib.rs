//! # CoinWatch Terminal - Library Root
//!
//! Native desktop dashboard for cryptocurrency market data. This library
//! crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              terminal (this crate)                     │
//! ├────────────────────────────────────────────────────────┤
//! │  egui / eframe - Immediate-mode GUI                    │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTPS
//!          ▼
//! ┌─────────────────────────┐
//! │  Public market data API │
//! │  (read-only, JSON)      │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: application core — shared state, events, refresh
//!   schedulers, background fetch tasks, user-intent handlers
//! - **core**: error types and the `MarketDataService` trait
//! - **services**: the remote API client
//! - **table**: the tabular data engine (column schema, sort/filter/page
//!   state, derived view)
//! - **ui**: egui rendering (dashboard screen, widgets, theme)
//! - **utils**: debouncer and the global tokio runtime handle
//!
//! ## Core Concepts
//!
//! Event-driven: async tasks send results to the main thread over an
//! unbounded channel, drained once per frame in `App::on_tick`. State is
//! shared as `Arc<RwLock<AppState>>` and locked briefly. The tabular data
//! engine exclusively owns the record set and the sort/filter/pagination
//! state; rendering derives the visible rows from `TableEngine::view()`.

pub mod app;
pub mod core;
pub mod services;
pub mod table;
pub mod ui;
pub mod utils;

// Re-export commonly used types for convenience
pub use app::{App, AppEvent, AppState};
pub use crate::core::{AppError, FetchError, Result};
