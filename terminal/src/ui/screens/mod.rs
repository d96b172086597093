//! # Screens
//!
//! Screen-level rendering functions. Each screen borrows the shared state
//! for one frame and emits user intents back to the app.

pub mod dashboard;
