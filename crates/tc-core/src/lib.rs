//! `tc-core`: foundational types for the transit catalogue workspace.
//!
//! This crate is a dependency of every other `tc-*` crate.  It has no `tc-*`
//! dependencies and only `thiserror` (plus optional `serde`) from outside.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `StopId`, `BusId`, `VertexId`, `EdgeId`                 |
//! | [`geo`]       | `GeoPoint`, great-circle distance                       |
//! | [`settings`]  | `RoutingSettings` (wait time, bus velocity)             |
//! | [`error`]     | `CoreError`, `CoreResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod settings;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{BusId, EdgeId, StopId, VertexId};
pub use settings::RoutingSettings;
