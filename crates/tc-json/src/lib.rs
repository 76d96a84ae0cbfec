//! `tc-json`: the JSON boundary of the transit catalogue.
//!
//! Reads one input document, populates and freezes the catalogue, builds the
//! transit graph, and answers every stat request in order.
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`request`]  | `InputDocument`, `BaseRequest`, `StatRequest`, closed walks  |
//! | [`response`] | `Response`, `RouteItem`                                      |
//! | [`handler`]  | `load_catalogue`, `answer`, `process_reader`                 |
//! | [`error`]    | `JsonError`, `JsonResult<T>`                                 |
//!
//! # Input
//!
//! ```json
//! {
//!   "base_requests": [
//!     {"type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2,
//!      "road_distances": {"B": 1200}},
//!     {"type": "Stop", "name": "B", "latitude": 55.61, "longitude": 37.21},
//!     {"type": "Bus", "name": "14", "stops": ["A", "B"], "is_roundtrip": false}
//!   ],
//!   "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
//!   "stat_requests": [
//!     {"id": 1, "type": "Bus", "name": "14"},
//!     {"id": 2, "type": "Stop", "name": "A"},
//!     {"id": 3, "type": "Route", "from": "A", "to": "B"}
//!   ]
//! }
//! ```
//!
//! # Output
//!
//! A JSON array with one object per stat request; unknown names and
//! unreachable stops answer `{"request_id": id, "error_message": "not found"}`.

pub mod error;
pub mod handler;
pub mod request;
pub mod response;


pub use error::{JsonError, JsonResult};
pub use handler::{answer, load_catalogue, process_document, process_reader};
pub use request::{expand_closed_walk, BaseRequest, InputDocument, StatRequest};
pub use response::{Response, RouteItem};
