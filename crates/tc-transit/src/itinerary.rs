//! Decoded shortest paths.

/// One step of an itinerary.  Times are in minutes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Segment {
    /// Wait at `stop_name` for the next bus.
    Wait { stop_name: String, time: f64 },
    /// Ride `route_name` for `span_count` consecutive stop-to-stop legs.
    Bus { route_name: String, span_count: u32, time: f64 },
}

impl Segment {
    pub fn time(&self) -> f64 {
        match self {
            Segment::Wait { time, .. } | Segment::Bus { time, .. } => *time,
        }
    }
}

/// A minimum-time trip between two stops.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Total minutes, as reported by the router.
    pub total_time: f64,
    pub segments:   Vec<Segment>,
}

impl Itinerary {
    /// `true` for the empty trip from a stop to itself.
    pub fn is_trivial(&self) -> bool {
        self.segments.is_empty()
    }
}
