use std::hint::black_box;

use commutesim_core::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};

fn grid(size: usize) -> RouteGraph {
    let point = |row: usize, col: usize| (-32.0 + row as f64 * 0.005, 115.8 + col as f64 * 0.005);
    let rows = (0..size).map(|row| {
        let points: Vec<_> = (0..size).map(|col| point(row, col)).collect();
        RoutePolyline::from_lat_lons(format!("Row {row}"), Mode::Bus, &points)
    });
    let cols = (0..size).map(|col| {
        let points: Vec<_> = (0..size).map(|row| point(row, col)).collect();
        RoutePolyline::from_lat_lons(format!("Col {col}"), Mode::Bus, &points)
    });
    let routes: Vec<_> = rows.chain(cols).collect();

    build_graph(&routes, &NetworkConfig::bare()).expect("valid config")
}

fn bench_routing(c: &mut Criterion) {
    let graph = grid(60);
    let start = lat_lon(-32.0, 115.8);
    let goal = lat_lon(-31.705, 116.095);

    c.bench_function("shortest_path 60x60 grid", |b| {
        b.iter(|| shortest_path(black_box(&graph), black_box(start), black_box(goal)));
    });

    c.bench_function("nearest_node 3600 nodes", |b| {
        b.iter(|| graph.nearest_node(black_box(lat_lon(-31.85, 115.95))));
    });

    let path = shortest_path(&graph, start, goal).expect("grid is connected");
    c.bench_function("densify 0.05 km", |b| {
        b.iter(|| densify(black_box(&path), 0.05));
    });
}

criterion_group!(benches, bench_routing);
criterion_main!(benches);
