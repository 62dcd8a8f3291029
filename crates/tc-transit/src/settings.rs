//! Routing configuration.

use crate::{TransitError, TransitResult};

/// Parameters every edge weight is derived from.
///
/// Typically parsed by the application from a `routing_settings` section and
/// passed to [`TransitPlanner::new`](crate::TransitPlanner::new) or
/// [`configure`](crate::TransitPlanner::configure).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes spent at a stop before boarding any bus.  Default: 6.
    pub bus_wait_time: u32,

    /// Bus speed in km/h.  Must be finite and positive.  Default: 40.
    pub bus_velocity: f64,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: f64) -> Self {
        Self { bus_wait_time, bus_velocity }
    }

    pub fn validate(&self) -> TransitResult<()> {
        if !(self.bus_velocity.is_finite() && self.bus_velocity > 0.0) {
            return Err(TransitError::InvalidSettings(format!(
                "bus_velocity must be a positive number of km/h, got {}",
                self.bus_velocity
            )));
        }
        Ok(())
    }

    /// Wait time as an edge weight.
    #[inline]
    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Bus speed in metres per minute.
    #[inline]
    pub fn velocity_m_per_min(&self) -> f64 {
        self.bus_velocity * 1000.0 / 60.0
    }
}

impl Default for RoutingSettings {
    fn default() -> Self {
        Self { bus_wait_time: 6, bus_velocity: 40.0 }
    }
}
