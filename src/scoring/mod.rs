//! Multi-criteria scoring of recipes against a nutrition profile.

mod engine;

pub use engine::{ScoredRecipe, ScoringEngine};
