use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use geo::Coord;
use log::debug;

use super::state::State;
use crate::{NodeId, Path, RouteGraph};

/// Shortest path between the graph nodes nearest to `start` and `goal`.
///
/// The returned path runs over snapped node coordinates, never the raw
/// query points. `None` when the graph is empty or the two snapped nodes
/// lie in disconnected components.
pub fn shortest_path(graph: &RouteGraph, start: Coord<f64>, goal: Coord<f64>) -> Option<Path> {
    let (start_node, _) = graph.nearest_node(start)?;
    let (goal_node, _) = graph.nearest_node(goal)?;
    shortest_path_between(graph, start_node, goal_node)
}

/// Dijkstra search between two nodes of `graph`, minimizing edge cost.
///
/// Frontier ties are broken by node index so repeated queries return
/// identical paths.
pub fn shortest_path_between(graph: &RouteGraph, start: NodeId, goal: NodeId) -> Option<Path> {
    let node_count = graph.node_count();
    if start.index() >= node_count || goal.index() >= node_count {
        return None;
    }

    debug!("Routing {} -> {}", start.index(), goal.index());

    let mut distances = vec![f64::INFINITY; node_count];
    let mut predecessors: Vec<Option<NodeId>> = vec![None; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count.min(1024));

    // Start node has distance 0
    distances[start.index()] = 0.0;
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Check if we've reached the target
        if node == goal {
            break;
        }

        // Skip stale entries for already settled nodes
        if settled.put(node.index()) || cost > distances[node.index()] {
            continue;
        }

        // Examine neighbors
        for (next, edge) in graph.neighbors(node) {
            let next_cost = cost + edge.cost;
            if next_cost < distances[next.index()] {
                distances[next.index()] = next_cost;
                predecessors[next.index()] = Some(node);
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }

    if goal != start && predecessors[goal.index()].is_none() {
        debug!("No route from {} to {}", start.index(), goal.index());
        return None;
    }

    // Follow predecessors backward from goal to start
    let mut node_path = vec![goal];
    let mut current = goal;
    while current != start {
        current = predecessors[current.index()]?;
        node_path.push(current);
    }
    node_path.reverse();

    node_path
        .into_iter()
        .map(|id| graph.position(id))
        .collect::<Option<Vec<_>>>()
        .map(Path::new)
}
