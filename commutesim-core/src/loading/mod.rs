//! This module is responsible for turning route polylines into routing
//! graphs, including the preloaded corridor set and CSV ingestion.

mod builder;
mod config;
mod corridors;
mod polylines;

pub use builder::build_graph;
pub use config::{CorridorSpec, MAX_KEY_PRECISION, NetworkConfig};
pub use corridors::major_roads;
pub use polylines::{load_polylines, read_polylines};
