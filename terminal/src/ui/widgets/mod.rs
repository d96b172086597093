//! # UI Widgets
//!
//! Reusable components shared by the dashboard screen.

pub mod highlights;
pub mod stat_card;
pub mod tables;
