//! `fare-core` — foundational types for the `rust_fare` itinerary engine.
//!
//! This crate is a dependency of every other `fare-*` crate.  It intentionally
//! has no `fare-*` dependencies and minimal external ones (only `rust_decimal`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                    |
//! |-------------|---------------------------------------------|
//! | [`ids`]     | `PlaceId`, `LegId`                          |
//! | [`plane`]   | `PlanePoint`, Manhattan distance            |
//! | [`vehicle`] | `VehicleMode` enum + green-tax table        |
//! | [`error`]   | `CoreError`, `CoreResult`                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod ids;
pub mod plane;
pub mod vehicle;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{LegId, PlaceId};
pub use plane::PlanePoint;
pub use vehicle::VehicleMode;
