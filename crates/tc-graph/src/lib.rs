//! `tc-graph`: directed weighted graph and shortest-path search.
//!
//! The crate knows nothing about stops or buses: it stores vertices, edges
//! and non-negative `f64` weights, and answers "cheapest path from A to B".
//! `tc-router` layers the transit semantics on top.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`graph`]  | `DirectedWeightedGraph` (CSR), `GraphBuilder`               |
//! | [`router`] | `Router` trait, `PathInfo`, `DijkstraRouter`                |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `PathInfo`.             |

pub mod error;
pub mod graph;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use graph::{DirectedWeightedGraph, Edge, GraphBuilder};
pub use router::{DijkstraRouter, PathInfo, Router};
