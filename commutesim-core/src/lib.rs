//! Geospatial routing engine for simulated bus and rail commutes.
//!
//! Route polylines are snapped into undirected weighted graphs, arbitrary
//! points are resolved to their nearest graph node, and Dijkstra searches
//! produce coordinate paths that can be densified, validated and composed
//! into randomized multi-leg travel plans.
//!
//! Everything here is synchronous and in-memory: graphs are built once and
//! only read afterwards.

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod postprocess;
pub mod prelude;
pub mod routing;
pub mod simulation;

pub use error::Error;
pub use loading::{NetworkConfig, build_graph, load_polylines, read_polylines};
pub use model::{
    BoundingBox, GraphNode, LatLon, Mode, NodeKey, Path, RouteEdge, RouteGraph, RoutePolyline,
    TransitNetwork, lat_lon,
};
pub use routing::shortest_path;
pub use simulation::{PlanConfig, TravelPlan, compute_wait, random_travel_plan};

/// Index of a node inside a [`RouteGraph`]
pub type NodeId = petgraph::graph::NodeIndex;

/// Distance in kilometres
pub type Km = f64;

/// Duration in minutes
pub type Minutes = f64;

/// Mean Earth radius used by every distance computation
pub const EARTH_RADIUS_KM: Km = 6371.0;

/// Decimal places used to quantize coordinates into node keys.
/// 5 places is roughly 1.1 m, enough to merge near-duplicate points
/// of different polylines into shared junctions.
pub const DEFAULT_KEY_PRECISION: u32 = 5;

/// Minimum number of distinct points in a synthesized travel plan
pub const MIN_PLAN_POINTS: usize = 3;
