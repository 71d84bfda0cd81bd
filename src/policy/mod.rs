//! Selection policies applied to every expansion batch
//!
//! - Positional ordering: deterministic order by consumed cell
//! - Random ordering: a fresh shuffle per batch
//! - Heuristic pruning: keep the more promising half of each batch

pub mod heuristic;
pub mod selection;

pub use heuristic::HeuristicPruning;
pub use selection::{PositionalOrder, RandomOrder, SelectionPolicy};
