//! Route ranking and the winnability filter.
//!
//! `ranked_paths` turns a destination set into an ordered list of candidate
//! routes; `winnable_paths` keeps only the routes the source can expect to
//! win. Ranking is by summed weighted distance, so the engine always prefers
//! the cheapest winnable route rather than the most lopsided one.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::config::TiebreakPolicy;
use crate::graph::WeightedGraph;
use crate::map::{MapSnapshot, Ownership, TerritoryId};

/// One candidate route: the hops from the first step after the source up to
/// and including the destination, plus the summed edge cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePlan {
    pub dest: TerritoryId,
    pub hops: Vec<TerritoryId>,
    pub cost: u32,
}

impl RoutePlan {
    /// The first territory this route steps onto.
    pub fn first_hop(&self) -> Option<TerritoryId> {
        self.hops.first().copied()
    }
}

/// Computes the shortest path to every destination, drops the unreachable
/// ones, and returns the rest sorted ascending by cost.
///
/// Equal-cost routes are ordered by the tie-break policy before a stable
/// sort: `Shuffle` applies a uniform random permutation, `ById` sorts by
/// destination id for deterministic runs.
pub fn ranked_paths(
    graph: &WeightedGraph,
    source: TerritoryId,
    destinations: &[TerritoryId],
    policy: TiebreakPolicy,
    rng: &mut SmallRng,
) -> Vec<RoutePlan> {
    let mut plans: Vec<RoutePlan> = destinations
        .iter()
        .filter_map(|&dest| {
            let hops = graph.shortest_path(source, dest)?;
            let cost = graph.path_cost(source, &hops)?;
            Some(RoutePlan { dest, hops, cost })
        })
        .collect();

    match policy {
        TiebreakPolicy::Shuffle => plans.shuffle(rng),
        TiebreakPolicy::ById => plans.sort_by_key(|p| p.dest),
    }
    plans.sort_by_key(|p| p.cost);
    plans
}

/// Total garrison along a route belonging to the given owner. The source is
/// not on the route; the destination is.
fn strength_along(snapshot: &MapSnapshot, hops: &[TerritoryId], owner: Ownership) -> u32 {
    hops.iter()
        .filter_map(|&id| snapshot.territory(id))
        .filter(|t| t.owner == owner)
        .fold(0u32, |acc, t| acc.saturating_add(t.garrison))
}

/// Filters routes down to the ones the source can expect to win.
///
/// A route is kept when either:
/// - the attacking force projected to survive transit outnumbers resistance:
///   enemy strength along the route is less than the committable force
///   (`available - reserve`) plus friendly strength already on the route; or
/// - the destination is already vulnerable to encirclement: its garrison is
///   smaller than the combined strength of its friendly-owned neighbors.
///
/// The retained routes keep their relative order.
pub fn winnable_paths(
    snapshot: &MapSnapshot,
    source: TerritoryId,
    paths: Vec<RoutePlan>,
    reserve: u32,
) -> Vec<RoutePlan> {
    let committable = snapshot
        .territory(source)
        .map(|t| t.available.saturating_sub(reserve))
        .unwrap_or(0);

    paths
        .into_iter()
        .filter(|plan| {
            let resistance = strength_along(snapshot, &plan.hops, Ownership::Enemy);
            let escort = strength_along(snapshot, &plan.hops, Ownership::Player);
            if resistance < committable.saturating_add(escort) {
                return true;
            }
            let dest_garrison = snapshot.territory(plan.dest).map(|t| t.garrison).unwrap_or(0);
            dest_garrison < snapshot.friendly_neighbor_strength(plan.dest)
        })
        .collect()
}
