//! # User Intent Handlers
//!
//! Free functions translating UI interactions into engine operations.
//! Handlers take the shared state handle, acquire the write lock briefly,
//! and return before any rendering continues.

pub mod table;
