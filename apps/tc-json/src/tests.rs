//! End-to-end tests: JSON document in, responses out.

use serde_json::{Value, json};

use crate::handler::process;
use crate::requests::Document;

fn run(input: Value) -> Vec<Value> {
    let document: Document = serde_json::from_value(input).unwrap();
    let responses = process(&document).unwrap();
    responses.iter().map(|r| serde_json::to_value(r).unwrap()).collect()
}

fn network(stat_requests: Value) -> Value {
    json!({
        "base_requests": [
            {"type": "Bus", "name": "297", "stops": ["A", "B", "C", "A"], "is_roundtrip": true},
            {"type": "Stop", "name": "A", "latitude": 55.574371, "longitude": 37.6517,
             "road_distances": {"B": 2600}},
            {"type": "Stop", "name": "B", "latitude": 55.581065, "longitude": 37.64839,
             "road_distances": {"C": 890}},
            {"type": "Stop", "name": "C", "latitude": 55.587655, "longitude": 37.645687,
             "road_distances": {"A": 5500}},
            {"type": "Stop", "name": "Lonely", "latitude": 55.6, "longitude": 37.6},
            {"type": "Bus", "name": "635", "stops": ["B", "C"], "is_roundtrip": false}
        ],
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
        "render_settings": {"width": 600},
        "stat_requests": stat_requests
    })
}

#[test]
fn bus_statistics() {
    let out = run(network(json!([{"id": 1, "type": "Bus", "name": "297"}])));
    assert_eq!(out[0]["request_id"], 1);
    assert_eq!(out[0]["stop_count"], 4);
    assert_eq!(out[0]["unique_stop_count"], 3);
    assert_eq!(out[0]["route_length"], 2600 + 890 + 5500);
    assert!(out[0]["curvature"].as_f64().unwrap() > 1.0);
}

#[test]
fn stop_buses_sorted() {
    let out = run(network(json!([
        {"id": 1, "type": "Stop", "name": "B"},
        {"id": 2, "type": "Stop", "name": "Lonely"}
    ])));
    assert_eq!(out[0], json!({"request_id": 1, "buses": ["297", "635"]}));
    assert_eq!(out[1], json!({"request_id": 2, "buses": []}));
}

#[test]
fn not_found_responses() {
    let out = run(network(json!([
        {"id": 1, "type": "Stop", "name": "Nowhere"},
        {"id": 2, "type": "Bus", "name": "999"},
        {"id": 3, "type": "Route", "from": "A", "to": "Nowhere"},
        {"id": 4, "type": "Route", "from": "A", "to": "Lonely"}
    ])));
    for (i, response) in out.iter().enumerate() {
        assert_eq!(
            *response,
            json!({"request_id": i + 1, "error_message": "not found"})
        );
    }
}

#[test]
fn route_items() {
    let out = run(network(json!([
        {"id": 7, "type": "Route", "from": "A", "to": "C"},
        {"id": 8, "type": "Route", "from": "C", "to": "B"}
    ])));

    // 40 km/h = 666.67 m/min.
    let m_per_min = 40_000.0 / 60.0;

    let a_to_c = &out[0];
    assert_eq!(a_to_c["request_id"], 7);
    let items = a_to_c["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], json!({"type": "Wait", "stop_name": "A", "time": 6.0}));
    assert_eq!(items[1]["type"], "Bus");
    assert_eq!(items[1]["bus"], "297");
    assert_eq!(items[1]["span_count"], 2);
    let ride = items[1]["time"].as_f64().unwrap();
    assert!((ride - 3490.0 / m_per_min).abs() < 1e-9);
    assert!((a_to_c["total_time"].as_f64().unwrap() - (6.0 + ride)).abs() < 1e-9);

    let c_to_b = out[1]["items"].as_array().unwrap();
    assert_eq!(c_to_b[1]["bus"], "635");
    assert_eq!(c_to_b[1]["span_count"], 1);
    assert!((c_to_b[1]["time"].as_f64().unwrap() - 890.0 / m_per_min).abs() < 1e-9);
}

#[test]
fn route_to_same_stop_is_empty() {
    let out = run(network(json!([{"id": 1, "type": "Route", "from": "B", "to": "B"}])));
    assert_eq!(out[0], json!({"request_id": 1, "total_time": 0.0, "items": []}));
}

#[test]
fn missing_routing_settings_use_defaults() {
    let out = run(json!({
        "base_requests": [
            {"type": "Stop", "name": "A", "latitude": 0.0, "longitude": 0.0, "road_distances": {"B": 1000}},
            {"type": "Stop", "name": "B", "latitude": 0.0, "longitude": 0.01},
            {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}
        ],
        "stat_requests": [{"id": 1, "type": "Route", "from": "A", "to": "B"}]
    }));
    assert_eq!(out[0]["items"][0]["time"], 6.0);
}

#[test]
fn empty_document() {
    assert!(run(json!({})).is_empty());
}

#[test]
fn invalid_coordinates_rejected() {
    let document: Document = serde_json::from_value(json!({
        "base_requests": [{"type": "Stop", "name": "A", "latitude": 123.0, "longitude": 0.0}]
    }))
    .unwrap();
    let err = process(&document).unwrap_err();
    assert!(format!("{err:#}").contains("\"A\""));
}

#[test]
fn invalid_velocity_rejected() {
    let mut document: Document = serde_json::from_value(network(json!([
        {"id": 1, "type": "Route", "from": "A", "to": "B"}
    ])))
    .unwrap();
    document.routing_settings = Some(tc_transit::RoutingSettings::new(6, 0.0));
    assert!(process(&document).is_err());
}

#[test]
fn unsupported_request_type_is_a_parse_error() {
    let parsed = serde_json::from_value::<Document>(json!({
        "stat_requests": [{"id": 1, "type": "Map"}]
    }));
    assert!(parsed.is_err());
}
