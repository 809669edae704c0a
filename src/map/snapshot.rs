//! Validated map snapshots.
//!
//! A `MapSnapshot` is the read-only view of the map the planner works from.
//! Construction validates referential integrity up front: a territory whose
//! adjacency list names an unknown id is a precondition violation and is
//! rejected before any graph construction begins.

use std::collections::HashMap;

use super::territory::{Ownership, Territory, TerritoryId};

/// Errors raised while validating a map snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("duplicate territory id {0}")]
    DuplicateTerritory(TerritoryId),

    #[error("territory {territory} lists unknown neighbor {neighbor}")]
    UnknownNeighbor {
        territory: TerritoryId,
        neighbor: TerritoryId,
    },

    #[error("territory {0} lists itself as a neighbor")]
    SelfNeighbor(TerritoryId),
}

/// Turn metadata supplied by the game engine alongside the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TurnInfo {
    /// Current turn number, starting at 1.
    pub number: u32,
    /// Turns left before the game ends.
    pub remaining: u32,
}

/// An immutable, validated view of the map for one turn.
#[derive(Debug, Clone)]
pub struct MapSnapshot {
    territories: Vec<Territory>,
    index: HashMap<TerritoryId, usize>,
}

impl MapSnapshot {
    /// Validates and wraps a set of territories.
    ///
    /// Rejects duplicate ids, self-adjacency, and adjacency references to
    /// ids not present in the set.
    pub fn new(territories: Vec<Territory>) -> Result<Self, SnapshotError> {
        let mut index = HashMap::with_capacity(territories.len());
        for (i, t) in territories.iter().enumerate() {
            if index.insert(t.id, i).is_some() {
                return Err(SnapshotError::DuplicateTerritory(t.id));
            }
        }
        for t in &territories {
            for &n in &t.neighbors {
                if n == t.id {
                    return Err(SnapshotError::SelfNeighbor(t.id));
                }
                if !index.contains_key(&n) {
                    return Err(SnapshotError::UnknownNeighbor {
                        territory: t.id,
                        neighbor: n,
                    });
                }
            }
        }
        Ok(MapSnapshot { territories, index })
    }

    /// Looks up a territory by id. Ids handed out by this snapshot always
    /// resolve; foreign ids return None.
    pub fn territory(&self, id: TerritoryId) -> Option<&Territory> {
        self.index.get(&id).map(|&i| &self.territories[i])
    }

    /// Iterates over every territory in the snapshot.
    pub fn territories(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Iterates over the planning player's territories.
    pub fn controlled(&self) -> impl Iterator<Item = &Territory> {
        self.territories
            .iter()
            .filter(|t| t.owner == Ownership::Player)
    }

    /// Ids of all neutral territories with positive production.
    pub fn neutral_cities(&self) -> Vec<TerritoryId> {
        self.territories
            .iter()
            .filter(|t| t.owner == Ownership::Neutral && t.is_city())
            .map(|t| t.id)
            .collect()
    }

    /// Ids of all enemy-owned territories with positive production.
    pub fn enemy_cities(&self) -> Vec<TerritoryId> {
        self.territories
            .iter()
            .filter(|t| t.owner == Ownership::Enemy && t.is_city())
            .map(|t| t.id)
            .collect()
    }

    /// Ids of all enemy-owned territories, productive or not.
    pub fn enemy_held(&self) -> Vec<TerritoryId> {
        self.territories
            .iter()
            .filter(|t| t.owner == Ownership::Enemy)
            .map(|t| t.id)
            .collect()
    }

    /// Ids of all player-owned territories.
    pub fn friendly_held(&self) -> Vec<TerritoryId> {
        self.territories
            .iter()
            .filter(|t| t.owner == Ownership::Player)
            .map(|t| t.id)
            .collect()
    }

    /// Combined garrison of a territory's neighbors with the given owner.
    fn neighbor_strength(&self, id: TerritoryId, owner: Ownership) -> u32 {
        let Some(t) = self.territory(id) else {
            return 0;
        };
        t.neighbors
            .iter()
            .filter_map(|&n| self.territory(n))
            .filter(|n| n.owner == owner)
            .fold(0u32, |acc, n| acc.saturating_add(n.garrison))
    }

    /// Combined garrison of the enemy-owned neighbors of a territory.
    pub fn enemy_neighbor_strength(&self, id: TerritoryId) -> u32 {
        self.neighbor_strength(id, Ownership::Enemy)
    }

    /// Combined garrison of the player-owned neighbors of a territory.
    pub fn friendly_neighbor_strength(&self, id: TerritoryId) -> u32 {
        self.neighbor_strength(id, Ownership::Player)
    }

    /// Returns true if the territory has at least one enemy-owned neighbor.
    pub fn under_threat(&self, id: TerritoryId) -> bool {
        self.territory(id)
            .map(|t| {
                t.neighbors
                    .iter()
                    .filter_map(|&n| self.territory(n))
                    .any(|n| n.owner == Ownership::Enemy)
            })
            .unwrap_or(false)
    }

    /// Returns true if the territory has a neutral productive neighbor.
    pub fn borders_neutral_city(&self, id: TerritoryId) -> bool {
        self.territory(id)
            .map(|t| {
                t.neighbors
                    .iter()
                    .filter_map(|&n| self.territory(n))
                    .any(|n| n.owner == Ownership::Neutral && n.is_city())
            })
            .unwrap_or(false)
    }
}
