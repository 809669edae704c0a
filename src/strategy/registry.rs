//! Per-turn attack claims.
//!
//! Prevents two source territories from being routed to attack the same
//! destination in the same turn. The registry is an explicit value created
//! inside `plan_turn` and discarded with it; nothing survives the turn.

use std::collections::HashMap;

use crate::map::TerritoryId;

/// Maps a claimed attack destination to the source that claimed it.
#[derive(Debug, Default)]
pub struct MoveRegistry {
    claims: HashMap<TerritoryId, TerritoryId>,
}

impl MoveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `dest` for `source`. Returns true if the claim was granted:
    /// either the destination was unclaimed, or `source` already held it.
    pub fn claim(&mut self, dest: TerritoryId, source: TerritoryId) -> bool {
        match self.claims.get(&dest) {
            Some(&holder) => holder == source,
            None => {
                self.claims.insert(dest, source);
                true
            }
        }
    }

    /// The source currently holding a claim on `dest`, if any.
    pub fn claimed_by(&self, dest: TerritoryId) -> Option<TerritoryId> {
        self.claims.get(&dest).copied()
    }
}
