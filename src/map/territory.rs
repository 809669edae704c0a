//! Territory definitions.
//!
//! A territory is a node in the game map graph: it has an owner, a per-turn
//! unit production rate, a garrison, and an adjacency list. The planner only
//! reads territory state; all mutation happens in the external game engine
//! after orders are submitted.

use serde::{Deserialize, Serialize};

/// A stable, opaque territory identifier assigned by the game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerritoryId(pub u16);

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Who holds a territory this turn, from the planning player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    /// Controlled by the planning player.
    Player,
    /// Controlled by any opponent.
    Enemy,
    /// Unclaimed.
    Neutral,
}

impl Ownership {
    /// Returns true for any territory not controlled by the planning player.
    pub const fn is_foreign(self) -> bool {
        !matches!(self, Ownership::Player)
    }
}

/// One territory as reported by the map snapshot.
///
/// Unit counts are this turn's values: `available` is already net of any
/// pending reinforcement accounting done by the map model, and `incoming`
/// counts units en route from previous orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub owner: Ownership,
    /// Units produced here per turn. Positive production makes this a city.
    pub production: u32,
    pub garrison: u32,
    pub incoming: u32,
    pub available: u32,
    pub neighbors: Vec<TerritoryId>,
}

impl Territory {
    /// Returns true if this territory produces units each turn.
    pub fn is_city(&self) -> bool {
        self.production > 0
    }
}
