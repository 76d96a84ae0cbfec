//! Serialized answers, one per stat request.

use serde::Serialize;

use tc_catalogue::{RouteInfo, StopInfo};
use tc_router::{Itinerary, Leg};

pub const NOT_FOUND: &str = "not found";

/// One answer object.  Field names are the wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Bus {
        request_id:        i64,
        curvature:         f64,
        route_length:      f64,
        stop_count:        usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses:      Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items:      Vec<RouteItem>,
    },
    Error {
        request_id:    i64,
        error_message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: usize, time: f64 },
}

impl Response {
    pub fn not_found(request_id: i64) -> Self {
        Response::Error { request_id, error_message: NOT_FOUND.to_owned() }
    }

    pub fn bus(request_id: i64, info: RouteInfo) -> Self {
        Response::Bus {
            request_id,
            curvature: info.curvature,
            route_length: info.route_length,
            stop_count: info.stop_count,
            unique_stop_count: info.unique_stop_count,
        }
    }

    pub fn stop(request_id: i64, info: StopInfo<'_>) -> Self {
        Response::Stop {
            request_id,
            buses: info.buses.into_iter().map(str::to_owned).collect(),
        }
    }

    pub fn route(request_id: i64, itinerary: Itinerary<'_>) -> Self {
        Response::Route {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary.legs.iter().map(RouteItem::from).collect(),
        }
    }

    pub fn request_id(&self) -> i64 {
        match self {
            Response::Bus { request_id, .. }
            | Response::Stop { request_id, .. }
            | Response::Route { request_id, .. }
            | Response::Error { request_id, .. } => *request_id,
        }
    }
}

impl From<&Leg<'_>> for RouteItem {
    fn from(leg: &Leg<'_>) -> Self {
        match *leg {
            Leg::Wait { stop, time } => RouteItem::Wait { stop_name: stop.to_owned(), time },
            Leg::Ride { bus, span_count, time } => RouteItem::Bus { bus: bus.to_owned(), span_count, time },
        }
    }
}
