//! Deserialized input document.

use std::collections::BTreeMap;

use serde::Deserialize;

use tc_core::RoutingSettings;

/// The whole input: catalogue contents, routing constants, and queries.
///
/// Top-level keys other than these three (e.g. `render_settings`) are
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub base_requests:    Vec<BaseRequest>,
    pub routing_settings: RoutingSettings,
    #[serde(default)]
    pub stat_requests:    Vec<StatRequest>,
}

/// A catalogue-populating command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name:           String,
        latitude:       f64,
        longitude:      f64,
        /// Road distances in metres from this stop to the named stops.
        #[serde(default)]
        road_distances: BTreeMap<String, f64>,
    },
    Bus {
        name:         String,
        /// As listed: the full loop if round-trip, one direction otherwise.
        stops:        Vec<String>,
        is_roundtrip: bool,
    },
}

/// A query.  `id` is echoed back as `request_id`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

/// The stop sequence a bus actually drives.
///
/// Round-trip input is already a loop and is returned as is.  A one-way
/// listing `A B C` becomes `A B C B A`.
pub fn expand_closed_walk(stops: &[String], is_roundtrip: bool) -> Vec<&str> {
    let forward = stops.iter().map(String::as_str);
    if is_roundtrip {
        return forward.collect();
    }
    let back = stops.iter().rev().skip(1).map(String::as_str);
    forward.chain(back).collect()
}
