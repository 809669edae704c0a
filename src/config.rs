//! Strategy configuration.
//!
//! Every threshold the planner consults lives here as a named value rather
//! than an inline constant, so the surrounding engine can tune behavior
//! without touching planning code.

use serde::{Deserialize, Serialize};

/// How equal-cost routes are ordered before the stable sort by cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TiebreakPolicy {
    /// Uniform random permutation. Avoids deterministic bias between
    /// equal-cost routes across games.
    Shuffle,
    /// Order by destination id. Fully deterministic; used by tests.
    ById,
}

/// Tunable planning constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyConfig {
    /// Edge cost into a neutral territory or a friendly non-city.
    pub base_edge_cost: u32,
    /// Edge cost into a friendly city. Clamped to at least 1.
    pub friendly_city_cost: u32,
    /// EXPAND is only taken while `turn.number` is below this.
    pub early_game_turn_limit: u32,
    /// Below this many remaining turns, reserves drop to zero and the
    /// reinforcement pass is skipped: hoarding defenders no longer pays.
    pub endgame_cutoff_turns: u32,
    /// Maximum number of expansion routes a territory splits its force over.
    pub expand_path_limit: usize,
    /// Tie-break ordering among equal-cost routes.
    pub tiebreak: TiebreakPolicy,
    /// Rng seed for `TiebreakPolicy::Shuffle`; 0 seeds from entropy.
    pub seed: u64,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        StrategyConfig {
            base_edge_cost: 4,
            friendly_city_cost: 1,
            early_game_turn_limit: 12,
            endgame_cutoff_turns: 8,
            expand_path_limit: 3,
            tiebreak: TiebreakPolicy::Shuffle,
            seed: 0,
        }
    }
}
