use geo::Coord;
use itertools::Itertools;
use log::{info, trace, warn};

use super::config::{MAX_KEY_PRECISION, NetworkConfig};
use crate::algo::geodesic::haversine_coords;
use crate::model::{RouteEdge, RouteGraph, RoutePolyline};
use crate::postprocess::HillsZone;
use crate::Error;

/// Builds an undirected routing graph from `polylines`.
///
/// Configured corridors are inserted first, then the polylines in order.
/// Every consecutive pair of points becomes an edge weighted by the
/// haversine distance of its endpoint nodes; the first polyline to connect
/// a pair owns the edge. The same input always yields the same graph.
///
/// # Errors
///
/// Returns an error if the configuration is out of range
pub fn build_graph(polylines: &[RoutePolyline], config: &NetworkConfig) -> Result<RouteGraph, Error> {
    validate_config(config)?;

    let mut graph = RouteGraph::with_precision(config.key_precision);
    let corridors = config.corridors();

    for polyline in corridors.iter().chain(polylines) {
        add_polyline(&mut graph, polyline, config.hills_zone.as_ref());
    }

    info!(
        "Built routing graph: {} ({} corridors)",
        graph.info(),
        corridors.len()
    );
    Ok(graph)
}

fn validate_config(config: &NetworkConfig) -> Result<(), Error> {
    if config.key_precision > MAX_KEY_PRECISION {
        return Err(Error::InvalidData(format!(
            "Node key precision {} exceeds the maximum of {MAX_KEY_PRECISION}",
            config.key_precision
        )));
    }

    if let Some(zone) = &config.hills_zone {
        zone.validate()?;
    }

    Ok(())
}

fn add_polyline(graph: &mut RouteGraph, polyline: &RoutePolyline, hills: Option<&HillsZone>) {
    let route_idx = graph.routes.len();

    let points: Vec<Coord<f64>> = polyline
        .coords()
        .filter(|c| c.x.is_finite() && c.y.is_finite())
        .collect();
    if points.len() < polyline.len() {
        warn!(
            "Skipped {} non-finite points of route {}",
            polyline.len() - points.len(),
            polyline.name()
        );
    }

    for (a, b) in points.into_iter().tuple_windows() {
        let source = graph.insert_node(a);
        let target = graph.insert_node(b);

        if graph.graph.find_edge(source, target).is_some() {
            continue;
        }
        if source == target {
            trace!("Zero-length segment on route {} at {a:?}", polyline.name());
        }

        let (Some(pa), Some(pb)) = (graph.position(source), graph.position(target)) else {
            continue;
        };
        let length_km = haversine_coords(pa, pb);
        let cost = hills.map_or(length_km, |zone| zone.cost(pa, pb, length_km));

        graph.graph.add_edge(
            source,
            target,
            RouteEdge {
                length_km,
                cost,
                source_route: route_idx,
            },
        );
    }

    graph.routes.push(polyline.clone());
}
