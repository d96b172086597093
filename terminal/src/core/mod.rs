//! # Core Abstractions
//!
//! Foundational pieces used throughout the dashboard:
//!
//! - **[`error`]**: application error types ([`AppError`], [`FetchError`])
//! - **[`service`]**: the [`MarketDataService`] trait for dependency
//!   injection and mocking in tests

pub mod error;
pub mod service;

pub use error::{AppError, FetchError, Result};
pub use service::MarketDataService;
