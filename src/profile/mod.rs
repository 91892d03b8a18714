//! Nutrition profile configuration.
//!
//! A profile bundles the scoring weights and nutritional thresholds of one
//! user goal. Four presets are provided; all fields can be overridden via
//! the `with_*` builders. Profiles are plain immutable data passed into
//! the scoring engine, the heuristic selector, and the constraint
//! formulator — there is no ambient global state.

mod config;

pub use config::{MissingRatingPolicy, NutritionProfile, ProfileKind, ScoreWeights};
