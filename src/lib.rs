//! Recipe selection and weekly menu optimization engine.
//!
//! Builds 21-slot weekly menus (7 breakfasts + 14 main meals) from a
//! recipe catalog, under per-profile nutrition constraints:
//!
//! - **Catalog**: Recipe enrichment — keyword-driven meal classification
//!   and macronutrient-based cost estimation, applied once at load.
//! - **Profile**: Nutrition profiles (weight loss, muscle gain, balanced,
//!   gourmet) bundling admission ranges, weekly bounds, and score weights.
//! - **Scoring**: Weighted linear desirability score over protein, fat,
//!   estimated cost, and rating.
//! - **Heuristic**: Ranked random sampling — score, keep the top tier,
//!   sample without replacement. Fast and diverse, no optimality claim.
//! - **MILP**: The same selection as a binary integer program behind a
//!   pluggable solver trait, with a greedy-with-repair reference backend.
//! - **Menu**: Slot assembly, structural validation, summaries, single-slot
//!   replacement, and shopping-list aggregation.
//! - **Planner**: Thin orchestration of the whole pipeline.
//!
//! # Architecture
//!
//! Every stage is pure and synchronous: the catalog is an immutable
//! snapshot, selectors take `&Catalog` and `&NutritionProfile`, and all
//! randomness flows through injected `rand` generators so any run can be
//! reproduced from a seed.

pub mod catalog;
pub mod error;
pub mod heuristic;
pub mod menu;
pub mod milp;
pub mod planner;
pub mod profile;
pub mod scoring;
