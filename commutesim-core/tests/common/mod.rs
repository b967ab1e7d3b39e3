#![allow(dead_code)]

use commutesim_core::prelude::*;

/// Grid of `size` x `size` nodes spaced `spacing` degrees apart, wired up
/// by one polyline per row and one per column
pub fn grid_routes(origin: (f64, f64), size: usize, spacing: f64) -> Vec<RoutePolyline> {
    let point = |row: usize, col: usize| {
        (
            origin.0 + row as f64 * spacing,
            origin.1 + col as f64 * spacing,
        )
    };

    let rows = (0..size).map(|row| {
        let points: Vec<(f64, f64)> = (0..size).map(|col| point(row, col)).collect();
        RoutePolyline::from_lat_lons(format!("Row {row}"), Mode::Bus, &points)
    });
    let cols = (0..size).map(|col| {
        let points: Vec<(f64, f64)> = (0..size).map(|row| point(row, col)).collect();
        RoutePolyline::from_lat_lons(format!("Col {col}"), Mode::Bus, &points)
    });

    rows.chain(cols).collect()
}

pub fn grid_graph(origin: (f64, f64), size: usize, spacing: f64) -> RouteGraph {
    build_graph(&grid_routes(origin, size, spacing), &NetworkConfig::bare())
        .expect("bare config is valid")
}
