//! Itinerary reconstruction on top of a [`Router`].

use tc_catalogue::Catalogue;
use tc_core::EdgeId;
use tc_graph::{GraphError, PathInfo, Router};

use crate::{EdgeTag, StopVertices, TransitGraph};

// ── Itinerary ─────────────────────────────────────────────────────────────────

/// One step of an itinerary.  Times are minutes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Leg<'a> {
    Wait { stop: &'a str, time: f64 },
    Ride { bus: &'a str, span_count: usize, time: f64 },
}

impl Leg<'_> {
    pub fn time(&self) -> f64 {
        match self {
            Leg::Wait { time, .. } | Leg::Ride { time, .. } => *time,
        }
    }
}

/// Fastest way from one stop to another.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Itinerary<'a> {
    /// Minutes, as reported by the router.
    pub total_time: f64,
    pub legs:       Vec<Leg<'a>>,
}

impl Itinerary<'_> {
    /// The "already there" itinerary.
    pub fn stay() -> Self {
        Self { total_time: 0.0, legs: Vec::new() }
    }
}

// ── ItineraryResolver ─────────────────────────────────────────────────────────

/// Runs the router over a [`TransitGraph`] and replays the stored edge tags
/// as legs.  No times are recomputed here.
pub struct ItineraryResolver<'a, R: Router> {
    catalogue: &'a Catalogue,
    transit:   &'a TransitGraph,
    router:    &'a R,
}

impl<'a, R: Router> ItineraryResolver<'a, R> {
    pub fn new(catalogue: &'a Catalogue, transit: &'a TransitGraph, router: &'a R) -> Self {
        Self { catalogue, transit, router }
    }

    /// Fastest itinerary from stop `from` to stop `to`.
    ///
    /// `None` if either stop is unknown or `to` is unreachable.  Identical
    /// stops give [`Itinerary::stay`] without consulting the router.
    pub fn build_route(&self, from: &str, to: &str) -> Option<Itinerary<'a>> {
        let from = self.catalogue.find_stop(from)?;
        let to = self.catalogue.find_stop(to)?;
        if from == to {
            return Some(Itinerary::stay());
        }

        let source = StopVertices::of(from).arrival;
        let target = StopVertices::of(to).arrival;
        match self.router.route(self.transit.graph(), source, target) {
            Ok(path) => self.replay(&path),
            Err(GraphError::NoRoute { .. }) => None,
            Err(e) => {
                log::error!("router failed between {from} and {to}: {e}");
                None
            }
        }
    }

    fn replay(&self, path: &PathInfo) -> Option<Itinerary<'a>> {
        let legs = path
            .edges
            .iter()
            .map(|&edge| self.leg(edge))
            .collect::<Option<Vec<_>>>()?;
        Some(Itinerary { total_time: path.weight, legs })
    }

    fn leg(&self, edge: EdgeId) -> Option<Leg<'a>> {
        let Some(tag) = self.transit.tag(edge) else {
            log::error!("router returned {edge}, which has no tag");
            return None;
        };
        Some(match *tag {
            EdgeTag::Wait { stop } => Leg::Wait {
                stop: self.catalogue.stop_name(stop),
                time: self.transit.settings().wait_minutes(),
            },
            EdgeTag::Ride { bus, span_count, time } => Leg::Ride {
                bus: self.catalogue.bus(bus).name.as_str(),
                span_count,
                time,
            },
        })
    }
}
