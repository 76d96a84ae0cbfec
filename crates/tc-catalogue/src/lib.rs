//! `tc-catalogue`: the transit catalogue's entity and distance model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`store`]       | `EntityStore`, `Stop`, `Bus`: append-only arenas        |
//! | [`distance`]    | `DistanceModel`: directed road distances + geo fallback |
//! | [`stats`]       | `RouteInfo`, per-route aggregate statistics              |
//! | [`stop_index`]  | `StopInfo`, sorted buses serving a stop                  |
//! | [`catalogue`]   | `MutableCatalogue` (build phase) → `Catalogue` (frozen)  |
//! | [`error`]       | `CatalogueError`, `CatalogueResult<T>`                   |
//!
//! # Build-then-query
//!
//! All mutation goes through [`MutableCatalogue`].  [`MutableCatalogue::freeze`]
//! consumes it and returns a [`Catalogue`] that only offers read access, so
//! nothing derived from a frozen catalogue (such as the transit graph in
//! `tc-router`) can go stale.
//!
//! ```
//! use tc_catalogue::MutableCatalogue;
//! use tc_core::GeoPoint;
//!
//! let mut cat = MutableCatalogue::new();
//! cat.add_stop("A", GeoPoint::new(55.60, 37.20));
//! cat.add_stop("B", GeoPoint::new(55.61, 37.21));
//! cat.set_distance("A", "B", 1_500.0).unwrap();
//! cat.add_route("14", ["A", "B", "A"], false).unwrap();
//!
//! let cat = cat.freeze();
//! let info = cat.route_info("14").unwrap();
//! assert_eq!(info.stop_count, 3);
//! assert_eq!(info.route_length, 3_000.0);
//! ```

pub mod catalogue;
pub mod distance;
pub mod error;
pub mod stats;
pub mod stop_index;
pub mod store;

#[cfg(test)]
mod tests;

pub use catalogue::{Catalogue, MutableCatalogue};
pub use distance::{DistanceModel, DistanceSource, RoadDistance};
pub use error::{CatalogueError, CatalogueResult};
pub use stats::RouteInfo;
pub use stop_index::StopInfo;
pub use store::{Bus, EntityStore, Stop};
