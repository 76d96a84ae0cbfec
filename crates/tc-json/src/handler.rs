//! Apply an input document to a catalogue and answer its stat requests.

use std::io::{Read, Write};

use tc_catalogue::MutableCatalogue;
use tc_core::GeoPoint;
use tc_graph::Router;
use tc_router::{BuildGraph, QueryableCatalogue};

use crate::request::{expand_closed_walk, BaseRequest, InputDocument, StatRequest};
use crate::{JsonResult, Response};

// ── Build phase ───────────────────────────────────────────────────────────────

/// Populate a catalogue from base requests.
///
/// Order matters and is fixed here regardless of input order: all stops,
/// then every stop's road distances (stops in input order, each stop's
/// entries in key order), then all buses.
pub fn load_catalogue(requests: &[BaseRequest]) -> JsonResult<MutableCatalogue> {
    let mut catalogue = MutableCatalogue::new();

    for req in requests {
        if let BaseRequest::Stop { name, latitude, longitude, .. } = req {
            catalogue.add_stop(name, GeoPoint::new(*latitude, *longitude));
        }
    }

    for req in requests {
        if let BaseRequest::Stop { name, road_distances, .. } = req {
            for (to, meters) in road_distances {
                catalogue.set_distance(name, to, *meters)?;
            }
        }
    }

    for req in requests {
        if let BaseRequest::Bus { name, stops, is_roundtrip } = req {
            catalogue.add_route(name, expand_closed_walk(stops, *is_roundtrip), *is_roundtrip)?;
        }
    }

    log::debug!(
        "loaded {} stops and {} buses from {} base requests",
        catalogue.stop_count(),
        catalogue.bus_count(),
        requests.len()
    );
    Ok(catalogue)
}

// ── Query phase ───────────────────────────────────────────────────────────────

/// Answer each request in order.
pub fn answer<R: Router>(catalogue: &QueryableCatalogue<R>, requests: &[StatRequest]) -> Vec<Response> {
    requests
        .iter()
        .map(|req| {
            let id = req.id();
            let response = match req {
                StatRequest::Bus { name, .. } => catalogue
                    .route_info(name)
                    .map(|info| Response::bus(id, info)),
                StatRequest::Stop { name, .. } => catalogue
                    .stop_info(name)
                    .map(|info| Response::stop(id, info)),
                StatRequest::Route { from, to, .. } => catalogue
                    .build_route(from, to)
                    .map(|itinerary| Response::route(id, itinerary)),
            };
            response.unwrap_or_else(|| {
                log::debug!("request {id}: not found");
                Response::not_found(id)
            })
        })
        .collect()
}

/// Run a parsed document end to end.
pub fn process_document(doc: InputDocument) -> JsonResult<Vec<Response>> {
    let catalogue = load_catalogue(&doc.base_requests)?.build_graph(doc.routing_settings)?;
    Ok(answer(&catalogue, &doc.stat_requests))
}

/// Read a JSON document from `reader` and write the answer array to `writer`.
pub fn process_reader<Rd: Read, W: Write>(reader: Rd, mut writer: W, pretty: bool) -> JsonResult<()> {
    let doc: InputDocument = serde_json::from_reader(reader)?;
    log::info!(
        "processing {} base requests and {} stat requests",
        doc.base_requests.len(),
        doc.stat_requests.len()
    );

    let responses = process_document(doc)?;
    if pretty {
        serde_json::to_writer_pretty(&mut writer, &responses)?;
    } else {
        serde_json::to_writer(&mut writer, &responses)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
