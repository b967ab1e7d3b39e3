//! Data model for the routing engine
//!
//! Contains coordinates, route polylines, paths and the routing graphs
//! built from them.

pub mod coordinate;
pub mod network;
pub mod path;
pub mod polyline;
pub mod transit_network;

pub use coordinate::{BoundingBox, LatLon, PERTH_CBD, PERTH_CITY_CORE, PERTH_METRO, lat_lon};
pub use network::{GraphNode, NodeKey, RouteEdge, RouteGraph};
pub use path::Path;
pub use polyline::{Mode, RoutePolyline};
pub use transit_network::TransitNetwork;
