//! Line-oriented JSON protocol for the planner binary.
//!
//! Each request line carries the turn metadata and the full map snapshot;
//! the reply line is the JSON array of movement orders. The planner owns no
//! persisted state, so every line is a complete, self-contained exchange.

use serde::{Deserialize, Serialize};

use crate::map::{MapSnapshot, SnapshotError, Territory, TurnInfo};
use crate::strategy::{MoveOrder, TurnPlanner};

/// Errors surfaced while handling one protocol line.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// One planning request: turn metadata plus the map snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRequest {
    pub turn: TurnInfo,
    pub territories: Vec<Territory>,
}

/// Parses a request line, plans the turn, and renders the reply line.
pub fn handle_line(planner: &mut TurnPlanner, line: &str) -> Result<String, ProtocolError> {
    let request: TurnRequest = serde_json::from_str(line)?;
    let snapshot = MapSnapshot::new(request.territories)?;
    let orders = planner.plan_turn(&snapshot, &request.turn);
    Ok(format_orders(&orders)?)
}

/// Renders an order list as a single JSON line.
pub fn format_orders(orders: &[MoveOrder]) -> Result<String, serde_json::Error> {
    serde_json::to_string(orders)
}
