//! Routing graph built from route polylines

pub mod components;
pub mod graph;

pub use components::{GraphNode, NodeKey, RouteEdge};
pub use graph::RouteGraph;
