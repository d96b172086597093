//! # Data Transfer Objects (DTOs)
//!
//! Wire types for the remote market data API.
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json`:
//!
//! - **Field naming**: snake_case (default serde behavior), matching the
//!   remote API's JSON keys
//! - **Optional fields**: `#[serde(default)]` on deserialize so null or
//!   missing values never fail a batch; omitted on serialize when `None`
//! - **All types**: implement both `Serialize` and `Deserialize`

pub mod market;

pub use market::*;
