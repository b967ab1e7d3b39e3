//! Routing graph components - node keys, nodes and edges

use std::fmt;

use geo::Coord;

use crate::Km;

/// Node identity derived from a coordinate rounded to a fixed number of
/// decimal places. Two polylines sharing a rounded coordinate share a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    lat: i64,
    lon: i64,
    precision: u32,
}

impl NodeKey {
    /// Rounds `coord` to `precision` decimal places
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn quantize(coord: Coord<f64>, precision: u32) -> Self {
        let scale = scale(precision);
        Self {
            lat: (coord.y * scale).round() as i64,
            lon: (coord.x * scale).round() as i64,
            precision,
        }
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Rounded latitude
    #[allow(clippy::cast_precision_loss)]
    pub fn lat(&self) -> f64 {
        self.lat as f64 / scale(self.precision)
    }

    /// Rounded longitude
    #[allow(clippy::cast_precision_loss)]
    pub fn lon(&self) -> f64 {
        self.lon as f64 / scale(self.precision)
    }
}

#[allow(clippy::cast_possible_wrap)]
fn scale(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.precision as usize;
        write!(f, "{:.p$},{:.p$}", self.lat(), self.lon())
    }
}

/// Routing graph node
#[derive(Debug, Clone, PartialEq)]
pub struct GraphNode {
    pub key: NodeKey,
    /// First coordinate seen for this key
    pub position: Coord<f64>,
}

/// Routing graph edge, identical in both directions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteEdge {
    /// Haversine distance between the endpoint nodes
    pub length_km: Km,
    /// Search cost, equal to `length_km` outside weighted zones
    pub cost: f64,
    /// Index of the polyline that introduced this edge
    pub source_route: usize,
}
