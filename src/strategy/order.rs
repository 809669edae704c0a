//! Movement orders.

use serde::{Deserialize, Serialize};

use crate::map::TerritoryId;

/// An intended transfer of units between adjacent territories, for the game
/// engine to execute and resolve combat on. `units` is always positive:
/// non-positive counts are dropped at emission, never submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOrder {
    pub from: TerritoryId,
    pub to: TerritoryId,
    pub units: u32,
}
