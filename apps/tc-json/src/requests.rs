//! Input document schema.
//!
//! ```json
//! {
//!   "base_requests": [
//!     {"type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2,
//!      "road_distances": {"B": 3900}},
//!     {"type": "Bus", "name": "256", "stops": ["A", "B"], "is_roundtrip": false}
//!   ],
//!   "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
//!   "stat_requests": [
//!     {"id": 1, "type": "Bus", "name": "256"},
//!     {"id": 2, "type": "Stop", "name": "A"},
//!     {"id": 3, "type": "Route", "from": "A", "to": "B"}
//!   ]
//! }
//! ```
//!
//! Unknown top-level keys (e.g. `render_settings`) are ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

use tc_transit::RoutingSettings;

#[derive(Debug, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub base_requests:    Vec<BaseRequest>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub stat_requests:    Vec<StatRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name:           String,
        latitude:       f64,
        longitude:      f64,
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name:         String,
        stops:        Vec<String>,
        is_roundtrip: bool,
    },
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Stop { id: i64, name: String },
    Bus { id: i64, name: String },
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Stop { id, .. } | StatRequest::Bus { id, .. } | StatRequest::Route { id, .. } => *id,
        }
    }
}
