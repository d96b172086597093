//! # Background Tasks
//!
//! Fire-and-forget async tasks spawned from scheduler ticks and user
//! actions. Tasks never touch state directly beyond flagging an in-flight
//! refresh; results travel back to the main thread as [`AppEvent`]s.
//!
//! [`AppEvent`]: crate::app::events::AppEvent

pub mod market;
