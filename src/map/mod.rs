//! Territory data model and validated map snapshots.

pub mod snapshot;
pub mod territory;

pub use snapshot::{MapSnapshot, SnapshotError, TurnInfo};
pub use territory::{Ownership, Territory, TerritoryId};
