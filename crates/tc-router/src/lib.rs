//! `tc-router`: fastest wait-then-ride itineraries between stops.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`transit`]    | `TransitGraph`, `TransitGraphBuilder`, `EdgeTag`                |
//! | [`itinerary`]  | `Itinerary`, `Leg`, `ItineraryResolver<R>`                      |
//! | [`queryable`]  | `QueryableCatalogue<R>`, `BuildGraph` (freeze + build in one)   |
//! | [`error`]      | `RouterError`, `RouterResult<T>`                                |
//!
//! # Graph model
//!
//! Every stop owns two vertices: **arrival** (`2k`) and **departure**
//! (`2k + 1`).  A wait edge `arrival → departure` costs the fixed boarding
//! time.  For every bus and every pair of positions `i < j` on its walk there
//! is one ride edge `departure(stop[i]) → arrival(stop[j])` costing the
//! travel time over the road distance between them.  Staying on a bus is
//! therefore a single edge, and every transfer pays exactly one wait.
//!
//! Itineraries start at the origin's arrival vertex (so the first leg is the
//! wait for the first bus) and end at the destination's arrival vertex.
//!
//! # Usage
//!
//! ```
//! use tc_catalogue::MutableCatalogue;
//! use tc_core::{GeoPoint, RoutingSettings};
//! use tc_router::{BuildGraph, Leg};
//!
//! let mut cat = MutableCatalogue::new();
//! for name in ["A", "B", "C"] {
//!     cat.add_stop(name, GeoPoint::new(0.0, 0.0));
//! }
//! cat.set_distance("A", "B", 1_000.0).unwrap();
//! cat.set_distance("B", "C", 1_000.0).unwrap();
//! cat.add_route("bus", ["A", "B", "C", "B", "A"], false).unwrap();
//!
//! let q = cat.build_graph(RoutingSettings::new(6, 40.0)).unwrap();
//! let trip = q.build_route("A", "C").unwrap();
//! assert!((trip.total_time - 9.0).abs() < 1e-9);
//! assert_eq!(trip.legs[0], Leg::Wait { stop: "A", time: 6.0 });
//! ```

pub mod error;
pub mod itinerary;
pub mod queryable;
pub mod transit;


pub use error::{RouterError, RouterResult};
pub use itinerary::{Itinerary, ItineraryResolver, Leg};
pub use queryable::{BuildGraph, QueryableCatalogue};
pub use transit::{EdgeTag, StopVertices, TransitGraph, TransitGraphBuilder};
