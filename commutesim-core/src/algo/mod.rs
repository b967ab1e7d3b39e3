//! Geometric helpers shared by every other component

pub mod geodesic;
pub mod tiling;

pub use geodesic::{haversine, haversine_coords, path_length};
pub use tiling::{ROUTE_TILE_SIZE_DEG, RouteTile, route_tiles_for_bbox};
