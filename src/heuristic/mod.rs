//! Fast approximate menu selection via score-ranked random sampling.
//!
//! Cheap and variety-preserving, but without weekly aggregate
//! guarantees — use the [`crate::milp`] path when those must hold.

mod config;
mod selector;

pub use config::SelectorConfig;
pub use selector::HeuristicSelector;
