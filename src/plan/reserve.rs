//! Defensive reserve heuristic.
//!
//! Before any route planning commits units, each territory computes how many
//! of its available units must stay behind for defense this turn.

use crate::config::StrategyConfig;
use crate::map::{MapSnapshot, Ownership, TerritoryId, TurnInfo};

/// Units that must stay behind rather than be routed anywhere this turn.
///
/// - Zero for non-cities, in the endgame (fewer than
///   `endgame_cutoff_turns` remaining), or when a neutral city sits next
///   door: expansion takes priority over hoarding defenders.
/// - Half the combined enemy-neighbor garrison when some enemy city next
///   door could already be retaken by the forces around it without this
///   territory's help (hedge: keep some, commit the rest).
/// - Otherwise the full combined enemy-neighbor garrison: no attack should
///   be mounted from here beyond that floor.
pub fn reserve(
    snapshot: &MapSnapshot,
    id: TerritoryId,
    turn: &TurnInfo,
    config: &StrategyConfig,
) -> u32 {
    let Some(t) = snapshot.territory(id) else {
        return 0;
    };
    if !t.is_city()
        || turn.remaining < config.endgame_cutoff_turns
        || snapshot.borders_neutral_city(id)
    {
        return 0;
    }

    let threat = snapshot.enemy_neighbor_strength(id);

    // An enemy city next door that the player could retake with forces
    // already in place means this territory can afford to hedge.
    let retakeable_nearby = t
        .neighbors
        .iter()
        .filter_map(|&n| snapshot.territory(n))
        .any(|n| {
            n.owner == Ownership::Enemy
                && n.is_city()
                && n.garrison < snapshot.friendly_neighbor_strength(n.id)
        });

    if retakeable_nearby {
        threat / 2
    } else {
        threat
    }
}
