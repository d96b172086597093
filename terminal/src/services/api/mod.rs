//! # Market Data API Client Module
//!
//! HTTP client for the public market data REST API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - ApiClient struct and common functionality
//! └── market.rs   - Market data endpoints (listing, trending, global, search)
//! ```

pub mod client;
pub mod market;

pub use client::ApiClient;
pub use market::*;
