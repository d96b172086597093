//! # Services Module
//!
//! External service integrations for the dashboard.
//!
//! ```text
//! services/
//! └── api/    - Remote market data HTTP client
//!              (market listing, trending, global stats, search)
//! ```
//!
//! ## ApiClient
//!
//! `reqwest`-based client with a bounded 10 second request timeout and an
//! optional API key header. All calls are read-only GETs returning JSON;
//! failures map to [`crate::core::error::FetchError`] and are never
//! retried by the client itself — the refresh scheduler or the user's
//! manual retry decides when to try again.
//!
//! The client is internally thread-safe (connection pooling inside
//! `reqwest::Client`), so a single `Arc<ApiClient>` is shared across all
//! fetch tasks.

pub mod api;
