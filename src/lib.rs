//! Vanguard planning library.
//!
//! Computes, once per game turn, how a player's units should move across a
//! graph of territories: dynamic weighted-graph construction from the map
//! snapshot, shortest-path search, route ranking by winnability, a defensive
//! reserve heuristic, and the per-turn strategy state machine that emits
//! movement orders.

pub mod config;
pub mod graph;
pub mod map;
pub mod plan;
pub mod protocol;
pub mod strategy;
