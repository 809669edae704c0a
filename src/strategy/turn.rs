//! The per-turn strategy state machine.
//!
//! `TurnPlanner::plan_turn` is the single entry point: it rebuilds the
//! weighted graph from the snapshot, runs the reinforcement pass and the
//! branch-selection pass, and returns the orders. All derived state (graph,
//! registry, within-turn commitment tracking) is created inside the call and
//! dropped with it; nothing carries over between turns.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::order::MoveOrder;
use super::registry::MoveRegistry;
use crate::config::StrategyConfig;
use crate::graph::WeightedGraph;
use crate::map::{MapSnapshot, Ownership, Territory, TerritoryId, TurnInfo};
use crate::plan::{ranked_paths, reserve, winnable_paths, RoutePlan};

/// Plans one turn's movement orders from a map snapshot.
pub struct TurnPlanner {
    config: StrategyConfig,
    rng: SmallRng,
}

/// Units already routed out of / into each territory earlier in the same
/// turn, so later decisions see the remaining force and the filled deficits.
#[derive(Default)]
struct Committed {
    out: HashMap<TerritoryId, u32>,
    into: HashMap<TerritoryId, u32>,
}

impl Committed {
    fn sent_from(&self, id: TerritoryId) -> u32 {
        self.out.get(&id).copied().unwrap_or(0)
    }

    fn routed_to(&self, id: TerritoryId) -> u32 {
        self.into.get(&id).copied().unwrap_or(0)
    }

    fn record(&mut self, order: &MoveOrder) {
        let out = self.out.entry(order.from).or_default();
        *out = out.saturating_add(order.units);
        let into = self.into.entry(order.to).or_default();
        *into = into.saturating_add(order.units);
    }
}

impl TurnPlanner {
    /// Creates a planner. A zero seed draws from entropy; any other value
    /// makes the tie-break shuffle reproducible.
    pub fn new(config: StrategyConfig) -> Self {
        let rng = if config.seed != 0 {
            SmallRng::seed_from_u64(config.seed)
        } else {
            SmallRng::from_entropy()
        };
        TurnPlanner { config, rng }
    }

    /// Computes this turn's movement orders.
    ///
    /// Pure with respect to the snapshot: territory state is never mutated,
    /// and two calls on the same snapshot differ only by the random
    /// tie-break permutation (none under `TiebreakPolicy::ById`).
    pub fn plan_turn(&mut self, snapshot: &MapSnapshot, turn: &TurnInfo) -> Vec<MoveOrder> {
        let graph = WeightedGraph::build(snapshot, &self.config);
        let mut orders = Vec::new();
        let mut committed = Committed::default();

        self.reinforce_pass(snapshot, turn, &mut orders, &mut committed);
        self.branch_pass(snapshot, turn, &graph, &mut orders, &mut committed);

        debug_assert!(orders.iter().all(|o| o.units > 0));
        orders
    }

    /// Pass A: shore up threatened friendly neighbors, weakest producers
    /// first. Territories that border a neutral city keep their units for
    /// expansion instead, and the whole pass is skipped in the endgame.
    fn reinforce_pass(
        &mut self,
        snapshot: &MapSnapshot,
        turn: &TurnInfo,
        orders: &mut Vec<MoveOrder>,
        committed: &mut Committed,
    ) {
        if turn.remaining < self.config.endgame_cutoff_turns {
            return;
        }

        let mut sources: Vec<&Territory> = snapshot.controlled().collect();
        sources.sort_by_key(|t| t.production);

        for t in sources {
            if snapshot.borders_neutral_city(t.id) {
                continue;
            }
            let held_back = reserve(snapshot, t.id, turn, &self.config);

            for &n in &t.neighbors {
                let Some(dest) = snapshot.territory(n) else {
                    continue;
                };
                if dest.owner != Ownership::Player || !snapshot.under_threat(n) {
                    continue;
                }
                let required = snapshot.enemy_neighbor_strength(n);
                let present = dest
                    .garrison
                    .saturating_add(dest.incoming)
                    .saturating_add(committed.routed_to(n));
                let deficit = required.saturating_sub(present);
                if deficit == 0 {
                    continue;
                }
                let spendable = t
                    .available
                    .saturating_sub(held_back)
                    .saturating_sub(committed.sent_from(t.id));
                let units = deficit.min(spendable);
                if units > 0 {
                    let order = MoveOrder { from: t.id, to: n, units };
                    committed.record(&order);
                    orders.push(order);
                }
            }
        }
    }

    /// Pass B: exactly one of EXPAND / ATTACK / CONSOLIDATE per controlled
    /// territory, strongest producers first.
    fn branch_pass(
        &mut self,
        snapshot: &MapSnapshot,
        turn: &TurnInfo,
        graph: &WeightedGraph,
        orders: &mut Vec<MoveOrder>,
        committed: &mut Committed,
    ) {
        let neutral_cities = snapshot.neutral_cities();
        let enemy_cities = snapshot.enemy_cities();
        let mut registry = MoveRegistry::new();

        let mut sources: Vec<&Territory> = snapshot.controlled().collect();
        sources.sort_by_key(|t| std::cmp::Reverse(t.production));

        for t in sources {
            let held_back = reserve(snapshot, t.id, turn, &self.config);
            let sent = committed.sent_from(t.id);
            let spendable = t.available.saturating_sub(sent).saturating_sub(held_back);

            let expand_routes = if turn.number < self.config.early_game_turn_limit {
                ranked_paths(
                    graph,
                    t.id,
                    &neutral_cities,
                    self.config.tiebreak,
                    &mut self.rng,
                )
            } else {
                Vec::new()
            };

            let withheld = held_back.saturating_add(sent);

            if !expand_routes.is_empty() {
                self.expand(
                    snapshot, t, expand_routes, withheld, spendable,
                    &mut registry, orders, committed,
                );
            } else if !enemy_cities.is_empty() {
                self.attack(
                    snapshot, graph, t, &enemy_cities, withheld, spendable,
                    &mut registry, orders, committed,
                );
            } else {
                self.consolidate(snapshot, graph, t, spendable, orders, committed);
            }
        }
    }

    /// EXPAND: split the spendable force across up to `expand_path_limit`
    /// cheapest winnable routes toward neutral cities. Enemy-held first hops
    /// take exclusive priority over neutral ones, and each destination is
    /// claimed in the registry so no other source doubles up on it.
    #[allow(clippy::too_many_arguments)]
    fn expand(
        &mut self,
        snapshot: &MapSnapshot,
        t: &Territory,
        routes: Vec<RoutePlan>,
        withheld: u32,
        spendable: u32,
        registry: &mut MoveRegistry,
        orders: &mut Vec<MoveOrder>,
        committed: &mut Committed,
    ) {
        if spendable == 0 {
            return;
        }
        let winnable = winnable_paths(snapshot, t.id, routes, withheld);
        let mut chosen: Vec<RoutePlan> = winnable
            .into_iter()
            .filter(|p| registry.claimed_by(p.dest).map_or(true, |s| s == t.id))
            .take(self.config.expand_path_limit)
            .collect();

        let enemy_hop = |p: &RoutePlan| {
            p.first_hop()
                .and_then(|h| snapshot.territory(h))
                .map_or(false, |h| h.owner == Ownership::Enemy)
        };
        if chosen.iter().any(enemy_hop) {
            chosen.retain(enemy_hop);
        }
        if chosen.is_empty() {
            return;
        }

        // Even split, rounding up, never exceeding the spendable total.
        let share = spendable.div_ceil(chosen.len() as u32);
        let mut remaining = spendable;
        for plan in &chosen {
            let Some(hop) = plan.first_hop() else {
                continue;
            };
            let units = share.min(remaining);
            if units == 0 {
                break;
            }
            registry.claim(plan.dest, t.id);
            let order = MoveOrder { from: t.id, to: hop, units };
            committed.record(&order);
            orders.push(order);
            remaining -= units;
        }
    }

    /// ATTACK: commit the whole spendable force along the cheapest winnable
    /// route to an enemy city whose destination is still unclaimed. A
    /// non-producing territory with no winnable target and nothing incoming
    /// instead evacuates everything toward the nearest friendly territory.
    #[allow(clippy::too_many_arguments)]
    fn attack(
        &mut self,
        snapshot: &MapSnapshot,
        graph: &WeightedGraph,
        t: &Territory,
        enemy_cities: &[TerritoryId],
        withheld: u32,
        spendable: u32,
        registry: &mut MoveRegistry,
        orders: &mut Vec<MoveOrder>,
        committed: &mut Committed,
    ) {
        let ranked = ranked_paths(graph, t.id, enemy_cities, self.config.tiebreak, &mut self.rng);
        let winnable = winnable_paths(snapshot, t.id, ranked, withheld);

        if !winnable.is_empty() {
            if spendable == 0 {
                return;
            }
            // Destinations claimed by another source are passed over.
            for plan in &winnable {
                if !registry.claim(plan.dest, t.id) {
                    continue;
                }
                if let Some(hop) = plan.first_hop() {
                    let order = MoveOrder { from: t.id, to: hop, units: spendable };
                    committed.record(&order);
                    orders.push(order);
                }
                return;
            }
            return;
        }

        // Stranded garrison: nothing winnable, no production, nothing on the
        // way. Evacuate the full available force, reserve included.
        if t.production == 0 && t.incoming == 0 {
            let friendly: Vec<TerritoryId> = snapshot
                .friendly_held()
                .into_iter()
                .filter(|&id| id != t.id)
                .collect();
            let ranked =
                ranked_paths(graph, t.id, &friendly, self.config.tiebreak, &mut self.rng);
            if let Some(plan) = ranked.first() {
                if let Some(hop) = plan.first_hop() {
                    let units = t.available.saturating_sub(committed.sent_from(t.id));
                    if units > 0 {
                        let order = MoveOrder { from: t.id, to: hop, units };
                        committed.record(&order);
                        orders.push(order);
                    }
                }
            }
        }
    }

    /// CONSOLIDATE: no enemy city is left anywhere, so push the spendable
    /// force toward the nearest enemy-held territory of any kind to finish
    /// the elimination.
    fn consolidate(
        &mut self,
        snapshot: &MapSnapshot,
        graph: &WeightedGraph,
        t: &Territory,
        spendable: u32,
        orders: &mut Vec<MoveOrder>,
        committed: &mut Committed,
    ) {
        if spendable == 0 {
            return;
        }
        let targets = snapshot.enemy_held();
        if targets.is_empty() {
            return;
        }
        let ranked = ranked_paths(graph, t.id, &targets, self.config.tiebreak, &mut self.rng);
        if let Some(plan) = ranked.first() {
            if let Some(hop) = plan.first_hop() {
                let order = MoveOrder { from: t.id, to: hop, units: spendable };
                committed.record(&order);
                orders.push(order);
            }
        }
    }
}
