use criterion::{black_box, criterion_group, criterion_main, Criterion};

use vanguard::config::{StrategyConfig, TiebreakPolicy};
use vanguard::graph::WeightedGraph;
use vanguard::map::{MapSnapshot, Ownership, Territory, TerritoryId, TurnInfo};
use vanguard::strategy::TurnPlanner;

/// Builds a ring of `n` territories with a chord every 7th node: player
/// territory every 3rd, enemy every 5th (enemy wins the overlap), neutral
/// cities sprinkled on the rest.
fn ring_snapshot(n: u16) -> MapSnapshot {
    let territories: Vec<Territory> = (0..n)
        .map(|i| {
            let mut neighbors = vec![
                TerritoryId((i + n - 1) % n),
                TerritoryId((i + 1) % n),
            ];
            if i % 7 == 0 {
                neighbors.push(TerritoryId((i + n / 2) % n));
            }
            let owner = if i % 5 == 0 {
                Ownership::Enemy
            } else if i % 3 == 0 {
                Ownership::Player
            } else {
                Ownership::Neutral
            };
            let garrison = u32::from(i % 11) + 1;
            Territory {
                id: TerritoryId(i),
                owner,
                production: u32::from(i % 4 == 1),
                garrison,
                incoming: 0,
                available: garrison,
                neighbors,
            }
        })
        .collect();
    MapSnapshot::new(territories).expect("ring snapshot must validate")
}

fn bench_graph_build(c: &mut Criterion) {
    let snap = ring_snapshot(500);
    let cfg = StrategyConfig::default();
    c.bench_function("graph_build_500", |b| {
        b.iter(|| WeightedGraph::build(black_box(&snap), black_box(&cfg)))
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let snap = ring_snapshot(500);
    let cfg = StrategyConfig::default();
    let graph = WeightedGraph::build(&snap, &cfg);
    c.bench_function("shortest_path_500_half_ring", |b| {
        b.iter(|| graph.shortest_path(black_box(TerritoryId(0)), black_box(TerritoryId(250))))
    });
}

fn bench_plan_turn(c: &mut Criterion) {
    let snap = ring_snapshot(300);
    let turn = TurnInfo { number: 5, remaining: 30 };
    let cfg = StrategyConfig {
        tiebreak: TiebreakPolicy::ById,
        seed: 1,
        ..StrategyConfig::default()
    };
    c.bench_function("plan_turn_300", |b| {
        let mut planner = TurnPlanner::new(cfg);
        b.iter(|| planner.plan_turn(black_box(&snap), black_box(&turn)))
    });
}

criterion_group!(benches, bench_graph_build, bench_shortest_path, bench_plan_turn);
criterion_main!(benches);
