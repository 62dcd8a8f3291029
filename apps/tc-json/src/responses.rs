//! Output document schema: one JSON object per stat request, in request
//! order.

use serde::Serialize;

use tc_catalogue::RouteStat;
use tc_transit::{Itinerary, Segment};

pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Stop {
        request_id: i64,
        buses:      Vec<String>,
    },
    Bus {
        request_id:        i64,
        curvature:         f64,
        route_length:      u64,
        stop_count:        usize,
        unique_stop_count: usize,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items:      Vec<Item>,
    },
    NotFound {
        request_id:    i64,
        error_message: &'static str,
    },
}

impl Response {
    pub fn not_found(request_id: i64) -> Self {
        Response::NotFound { request_id, error_message: NOT_FOUND }
    }

    pub fn bus(request_id: i64, stat: RouteStat) -> Self {
        Response::Bus {
            request_id,
            curvature:         stat.curvature,
            route_length:      stat.route_length,
            stop_count:        stat.stop_count,
            unique_stop_count: stat.unique_stop_count,
        }
    }

    pub fn route(request_id: i64, itinerary: Itinerary) -> Self {
        Response::Route {
            request_id,
            total_time: itinerary.total_time,
            items:      itinerary.segments.into_iter().map(Item::from).collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Item {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: u32, time: f64 },
}

impl From<Segment> for Item {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Wait { stop_name, time } => Item::Wait { stop_name, time },
            Segment::Bus { route_name, span_count, time } => Item::Bus { bus: route_name, span_count, time },
        }
    }
}
