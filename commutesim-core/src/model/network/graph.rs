//! Undirected routing graph of snapped coordinate nodes

use std::fmt::{Debug, Formatter};

use geo::Coord;
use hashbrown::HashMap;
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

use super::components::{GraphNode, NodeKey, RouteEdge};
use crate::model::RoutePolyline;
use crate::routing::nearest::nearest_by;
use crate::{Km, NodeId};

pub(crate) type GraphStructure = UnGraph<GraphNode, RouteEdge>;

/// Routing graph built once from a set of route polylines and only read
/// afterwards. Node indices follow first-seen order, which keeps linear
/// scans and searches deterministic.
#[derive(Clone)]
pub struct RouteGraph {
    pub(crate) graph: GraphStructure,
    pub(crate) index: HashMap<NodeKey, NodeId>,
    /// Source polylines, kept for metadata and debug reporting only
    pub(crate) routes: Vec<RoutePolyline>,
    pub(crate) precision: u32,
}

impl Debug for RouteGraph {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RouteGraph with {} nodes and {} edges",
            self.node_count(),
            self.edge_count()
        )
    }
}

impl RouteGraph {
    pub(crate) fn with_precision(precision: u32) -> Self {
        Self {
            graph: GraphStructure::default(),
            index: HashMap::new(),
            routes: Vec::new(),
            precision,
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn routes(&self) -> &[RoutePolyline] {
        &self.routes
    }

    /// Decimal places used to build node keys
    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn key_for(&self, coord: Coord<f64>) -> NodeKey {
        NodeKey::quantize(coord, self.precision)
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.graph.node_weight(id)
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Coord<f64>> {
        self.graph.node_weight(id).map(|node| node.position)
    }

    pub fn node_id(&self, key: &NodeKey) -> Option<NodeId> {
        self.index.get(key).copied()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &GraphNode)> {
        self.graph
            .node_indices()
            .filter_map(|id| self.graph.node_weight(id).map(|node| (id, node)))
    }

    /// Adjacent nodes with the connecting edge
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, &RouteEdge)> {
        self.graph.edges(id).map(move |edge| {
            let other = if edge.source() == id {
                edge.target()
            } else {
                edge.source()
            };
            (other, edge.weight())
        })
    }

    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&RouteEdge> {
        self.graph
            .find_edge(a, b)
            .and_then(|edge| self.graph.edge_weight(edge))
    }

    /// Closest node to `coord` by haversine distance, scanning every node.
    /// Ties go to the node inserted first. `None` only for an empty graph.
    pub fn nearest_node(&self, coord: Coord<f64>) -> Option<(NodeId, Km)> {
        nearest_by(self.nodes().map(|(id, node)| (id, node.position)), coord)
    }

    /// The `k` closest nodes in ascending distance, ties in insertion order
    pub fn nearest_nodes(&self, coord: Coord<f64>, k: usize) -> Vec<(NodeId, Km)> {
        let mut candidates: Vec<(NodeId, Km)> = self
            .nodes()
            .map(|(id, node)| (id, crate::algo::haversine_coords(coord, node.position)))
            .collect();
        // Stable sort keeps insertion order between equal distances
        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
        candidates.truncate(k);
        candidates
    }

    /// One-line summary for debug display
    pub fn info(&self) -> String {
        format!(
            "{} nodes, {} edges from {} routes",
            self.node_count(),
            self.edge_count(),
            self.routes.len()
        )
    }

    /// Returns the node for `coord`'s key, creating it on first sight
    pub(crate) fn insert_node(&mut self, coord: Coord<f64>) -> NodeId {
        let key = self.key_for(coord);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = self.graph.add_node(GraphNode {
            key,
            position: coord,
        });
        self.index.insert(key, id);
        id
    }
}
