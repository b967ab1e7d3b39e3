//! Snapping and shortest-path search over a [`RouteGraph`](crate::RouteGraph)

pub mod dijkstra;
pub mod nearest;

pub use dijkstra::{shortest_path, shortest_path_between};
pub use nearest::nearest_point_index;
