//! The per-turn strategy state machine and its order/claim types.

pub mod order;
pub mod registry;
pub mod turn;

pub use order::MoveOrder;
pub use registry::MoveRegistry;
pub use turn::TurnPlanner;
