pub use crate::{DEFAULT_KEY_PRECISION, EARTH_RADIUS_KM, MIN_PLAN_POINTS};

// Re-export key components
pub use crate::algo::geodesic::{haversine, haversine_coords, path_length};
pub use crate::algo::tiling::{RouteTile, route_tiles_for_bbox};
pub use crate::loading::{NetworkConfig, build_graph, load_polylines, major_roads, read_polylines};
pub use crate::model::{
    BoundingBox, LatLon, Mode, NodeKey, Path, RouteGraph, RoutePolyline, TransitNetwork, lat_lon,
};
pub use crate::postprocess::{
    HillsZone, ImplausibleSegment, SegmentValidator, densify, has_implausible_segment, reweight,
};
pub use crate::routing::{nearest_point_index, shortest_path, shortest_path_between};
pub use crate::simulation::{
    Leg, ModeTiming, PlanConfig, PlanKind, TravelPlan, compute_wait, random_travel_plan,
};

// Core scalar types
pub use crate::Km;
pub use crate::Minutes;
pub use crate::NodeId;

pub use crate::Error;
