//! Route ranking and force-commitment heuristics.

pub mod rank;
pub mod reserve;

pub use rank::{ranked_paths, winnable_paths, RoutePlan};
pub use reserve::reserve;
