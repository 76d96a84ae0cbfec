//! Buses serving a stop.

use crate::{EntityStore, Stop};

/// Names of the buses that visit a stop, sorted byte-wise ascending.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StopInfo<'a> {
    pub buses: Vec<&'a str>,
}

impl StopInfo<'_> {
    pub fn is_empty(&self) -> bool {
        self.buses.is_empty()
    }
}

/// Materialize `stop`'s back-reference set.  The set already rules out
/// duplicate ids and bus names are unique, so the output has no repeats.
pub fn stop_info<'a>(store: &'a EntityStore, stop: &'a Stop) -> StopInfo<'a> {
    let mut buses: Vec<&str> = stop
        .buses
        .iter()
        .map(|&bus| store.bus(bus).name.as_str())
        .collect();
    buses.sort_unstable();
    StopInfo { buses }
}
