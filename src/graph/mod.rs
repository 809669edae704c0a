//! Dynamic weighted graph over the territory map.
//!
//! The graph is rebuilt from scratch every turn: edge weights are derived
//! from live ownership and garrison state, which changes between turns, so
//! there is nothing worth updating incrementally. Adjacency is symmetric but
//! the graph is directed, because the weight of an edge depends only on the
//! territory it points at.

pub mod dijkstra;

use std::collections::HashMap;

use crate::config::StrategyConfig;
use crate::map::{MapSnapshot, Ownership, TerritoryId};

/// A directed weighted graph keyed by territory id.
///
/// Every territory in the snapshot gets a vertex, even isolated ones, so
/// shortest-path queries against any snapshot id are well defined.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    adjacency: HashMap<TerritoryId, Vec<(TerritoryId, u32)>>,
}

/// Computes the cost of stepping onto a territory.
///
/// Enemy garrisons raise the cost in proportion to their size; friendly
/// cities are cheap waypoints; everything else pays the baseline. Weights
/// never drop below 1, which keeps "closer" well defined and guarantees
/// Dijkstra terminates.
fn entry_cost(snapshot: &MapSnapshot, into: TerritoryId, config: &StrategyConfig) -> u32 {
    let t = match snapshot.territory(into) {
        Some(t) => t,
        None => return config.base_edge_cost.max(1),
    };
    let cost = match t.owner {
        Ownership::Enemy => config.base_edge_cost.saturating_add(t.garrison),
        Ownership::Player if t.is_city() => config.friendly_city_cost,
        _ => config.base_edge_cost,
    };
    cost.max(1)
}

impl WeightedGraph {
    /// Builds the graph for one turn from a validated snapshot. O(V + E).
    pub fn build(snapshot: &MapSnapshot, config: &StrategyConfig) -> Self {
        let mut adjacency = HashMap::new();
        for t in snapshot.territories() {
            let edges: Vec<(TerritoryId, u32)> = t
                .neighbors
                .iter()
                .map(|&n| (n, entry_cost(snapshot, n, config)))
                .collect();
            adjacency.insert(t.id, edges);
        }
        WeightedGraph { adjacency }
    }

    /// Returns the outgoing edges of a vertex, empty for unknown ids.
    pub fn edges(&self, id: TerritoryId) -> &[(TerritoryId, u32)] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if the vertex exists in this graph.
    pub fn contains(&self, id: TerritoryId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Directed weight of the edge `from -> to`, if such an edge exists.
    pub fn edge_weight(&self, from: TerritoryId, to: TerritoryId) -> Option<u32> {
        self.edges(from).iter().find(|(n, _)| *n == to).map(|&(_, w)| w)
    }

    /// Sums the directed edge weights along `source -> path[0] -> ... ->
    /// path[last]`. Returns None if any hop is not an edge of this graph.
    ///
    /// This is the canonical ranking key: hop count would ignore the
    /// strategic cost differences the weighting encodes.
    pub fn path_cost(&self, source: TerritoryId, path: &[TerritoryId]) -> Option<u32> {
        let mut cost = 0u32;
        let mut at = source;
        for &hop in path {
            cost = cost.saturating_add(self.edge_weight(at, hop)?);
            at = hop;
        }
        Some(cost)
    }
}
