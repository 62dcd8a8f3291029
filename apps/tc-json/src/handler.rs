//! Maps request documents onto catalogue and planner calls.

use anyhow::{Context, Result};
use log::info;

use tc_catalogue::Catalogue;
use tc_core::GeoPoint;
use tc_transit::{TransitPlanner, TransitRouter};

use crate::requests::{BaseRequest, Document, StatRequest};
use crate::responses::Response;

/// Fill a catalogue from `base_requests`.
///
/// Stops go in first, then road distances, then buses, so the order of the
/// requests in the document does not matter.
pub fn load_catalogue(requests: &[BaseRequest]) -> Result<Catalogue> {
    let mut catalogue = Catalogue::new();

    for request in requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = request {
            let position = GeoPoint::checked(*latitude, *longitude)
                .with_context(|| format!("stop {name:?}"))?;
            catalogue.add_stop(name, position);
        }
    }

    for request in requests {
        if let BaseRequest::Stop { name, road_distances, .. } = request {
            for (to, &meters) in road_distances {
                catalogue.set_distance(name, to, meters);
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = request {
            catalogue.add_route(name, stops.as_slice(), *is_roundtrip);
        }
    }

    info!(
        "catalogue loaded: {} stops, {} routes",
        catalogue.stop_count(),
        catalogue.route_count()
    );
    Ok(catalogue)
}

/// Answer every stat request in order.
///
/// The routing graph is only built when at least one `Route` request is
/// present.
pub fn process(document: &Document) -> Result<Vec<Response>> {
    let catalogue = load_catalogue(&document.base_requests)?;

    let needs_routing = document
        .stat_requests
        .iter()
        .any(|r| matches!(r, StatRequest::Route { .. }));
    let planner = if needs_routing {
        let settings = document.routing_settings.unwrap_or_default();
        Some(TransitPlanner::new(&catalogue, settings).context("building routing graph")?)
    } else {
        None
    };
    let router = planner.as_ref().map(TransitPlanner::snapshot);

    Ok(document
        .stat_requests
        .iter()
        .map(|request| answer(&catalogue, router.as_deref(), request))
        .collect())
}

fn answer(catalogue: &Catalogue, router: Option<&TransitRouter<'_>>, request: &StatRequest) -> Response {
    let id = request.id();
    let response = match request {
        StatRequest::Stop { name, .. } => catalogue.stop_stat(name).map(|stat| Response::Stop {
            request_id: id,
            buses:      stat.buses.into_iter().map(str::to_owned).collect(),
        }),
        StatRequest::Bus { name, .. } => catalogue.route_stat(name).map(|stat| Response::bus(id, stat)),
        StatRequest::Route { from, to, .. } => router
            .and_then(|r| r.build_route(from, to))
            .map(|itinerary| Response::route(id, itinerary)),
    };
    response.unwrap_or_else(|| Response::not_found(id))
}
