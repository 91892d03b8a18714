//! Recipe catalog: data model, classification, and cost enrichment.
//!
//! The catalog is the read-only input of every selection run. Each recipe
//! is enriched at construction with a meal category (two-phase keyword
//! classification) and an estimated cost (linear macronutrient model).
//! Profile-dependent scores are computed per run by [`crate::scoring`],
//! never cached here.

pub mod classifier;
pub mod cost;
mod recipe;

pub use recipe::{Catalog, CostTier, Macronutrients, MealCategory, Recipe, RecipeId};
