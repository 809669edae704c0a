//! Single-source shortest paths.
//!
//! Dijkstra over the per-turn weighted graph with a binary heap and lazy
//! deletion: decrease-key is emulated by pushing a fresh entry and skipping
//! stale ones on extraction. Heap entries are keyed `(distance, id)`, so
//! among equal-distance candidates the lowest territory id is extracted
//! first -- tie order is part of the contract, not incidental.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use super::WeightedGraph;
use crate::map::TerritoryId;

impl WeightedGraph {
    /// Returns the cheapest path from `source` to `dest`, excluding the
    /// source and including the destination.
    ///
    /// `Some(vec![])` means `source == dest`; `None` means unreachable.
    /// Callers must branch on `None` before touching hops -- "no route" is
    /// never conflated with "already there".
    pub fn shortest_path(
        &self,
        source: TerritoryId,
        dest: TerritoryId,
    ) -> Option<Vec<TerritoryId>> {
        if !self.contains(source) || !self.contains(dest) {
            return None;
        }
        if source == dest {
            return Some(Vec::new());
        }

        let mut dist: HashMap<TerritoryId, u32> = HashMap::new();
        let mut prev: HashMap<TerritoryId, TerritoryId> = HashMap::new();
        let mut heap: BinaryHeap<Reverse<(u32, TerritoryId)>> = BinaryHeap::new();

        dist.insert(source, 0);
        heap.push(Reverse((0, source)));

        while let Some(Reverse((d, u))) = heap.pop() {
            // Stale entry from an earlier, worse tentative distance.
            if dist.get(&u).copied().unwrap_or(u32::MAX) < d {
                continue;
            }
            if u == dest {
                return Some(reconstruct(&prev, source, dest));
            }
            for &(v, w) in self.edges(u) {
                let alt = d.saturating_add(w);
                // Unvisited counts as infinity; a saturated distance still
                // beats it.
                let better = match dist.get(&v) {
                    Some(&cur) => alt < cur,
                    None => true,
                };
                if better {
                    dist.insert(v, alt);
                    prev.insert(v, u);
                    heap.push(Reverse((alt, v)));
                }
            }
        }

        // Heap exhausted without settling the destination.
        None
    }
}

/// Follows predecessors from `dest` back to (but excluding) `source`,
/// then reverses into forward order.
fn reconstruct(
    prev: &HashMap<TerritoryId, TerritoryId>,
    source: TerritoryId,
    dest: TerritoryId,
) -> Vec<TerritoryId> {
    let mut path = Vec::new();
    let mut at = dest;
    while at != source {
        path.push(at);
        at = prev[&at];
    }
    path.reverse();
    path
}
