//! Routing settings shared by the graph builder and the itinerary resolver.
//!
//! # Units
//!
//! Wait time is whole **minutes**, velocity is **km/h**, and every travel
//! time the router reports is in fractional minutes:
//!
//!   minutes = distance_m / 1000 / velocity_kmh * 60

use crate::{CoreError, CoreResult};

/// Constants applied once, before the transit graph is built.
///
/// Loaded from the `routing_settings` object of the input document.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Boarding delay at every stop, minutes.
    pub bus_wait_time: u32,
    /// Bus speed, km/h.  Must be finite and positive.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self { bus_wait_time, bus_velocity }
    }

    /// Reject settings that would produce infinite or negative edge weights.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.bus_velocity.is_finite() || self.bus_velocity <= 0.0 {
            return Err(CoreError::InvalidSettings(format!(
                "bus_velocity must be a positive number of km/h, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Wait time as a graph weight.
    #[inline]
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Minutes needed to cover `distance_m` metres at `bus_velocity`.
    #[inline]
    pub fn travel_minutes(&self, distance_m: f64) -> f64 {
        distance_m / 1000.0 / self.bus_velocity * 60.0
    }
}
