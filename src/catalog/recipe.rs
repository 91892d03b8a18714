//! Recipe data model and catalog enrichment.

use super::{classifier, cost};
use tracing::debug;

/// Unique identifier for a recipe within a catalog.
pub type RecipeId = u64;

/// Meal category assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MealCategory {
    /// Eligible for the 7 breakfast slots.
    Breakfast,
    /// Eligible for the 14 lunch/dinner slots.
    MainMeal,
    /// Matched neither keyword phase; excluded from both slot pools.
    Unclassified,
}

/// Per-serving macronutrients, as percent of daily value (%DV).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Macronutrients {
    pub protein_pct_dv: f64,
    pub fat_pct_dv: f64,
    pub carb_pct_dv: f64,
}

/// Coarse cost bracket derived from the estimated cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostTier {
    /// Estimated cost up to 3.5 units.
    Low,
    /// Estimated cost up to 10 units.
    Medium,
    /// Anything above.
    High,
}

/// A recipe with its nutritional data and enrichment-derived fields.
///
/// Recipes are immutable after construction: `category` and
/// `estimated_cost` are computed once by [`Recipe::new`]. Profile-dependent
/// scores are deliberately NOT stored here — they are recomputed per
/// optimization run and live in run-local structures.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub macros: Macronutrients,
    /// Calories per serving.
    pub calories: f64,
    /// Average user rating in 1.0–5.0, if any ratings exist.
    pub rating: Option<f64>,
    /// Derived: meal category from two-phase tag classification.
    pub category: MealCategory,
    /// Derived: approximate monetary cost from the macronutrient profile.
    pub estimated_cost: f64,
}

impl Recipe {
    /// Builds a recipe and derives its category and estimated cost.
    pub fn new(
        id: RecipeId,
        name: impl Into<String>,
        tags: Vec<String>,
        ingredients: Vec<String>,
        macros: Macronutrients,
        calories: f64,
        rating: Option<f64>,
    ) -> Self {
        let category = classifier::classify(&tags);
        let estimated_cost = cost::estimate_cost(&macros);
        Self {
            id,
            name: name.into(),
            tags,
            ingredients,
            macros,
            calories,
            rating,
            category,
            estimated_cost,
        }
    }

    /// Coarse cost bracket for presentation layers.
    pub fn cost_tier(&self) -> CostTier {
        if self.estimated_cost <= 3.5 {
            CostTier::Low
        } else if self.estimated_cost <= 10.0 {
            CostTier::Medium
        } else {
            CostTier::High
        }
    }
}

/// An immutable snapshot of enriched recipes.
///
/// The catalog is read-only shared input for every selection run.
/// Construction logs a per-category breakdown for diagnostics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalog {
    recipes: Vec<Recipe>,
}

impl Catalog {
    /// Wraps an enriched recipe collection.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let breakfasts = count_category(&recipes, MealCategory::Breakfast);
        let mains = count_category(&recipes, MealCategory::MainMeal);
        debug!(
            total = recipes.len(),
            breakfasts,
            mains,
            unclassified = recipes.len() - breakfasts - mains,
            "catalog enriched"
        );
        Self { recipes }
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Looks up a recipe by id.
    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }
}

fn count_category(recipes: &[Recipe], category: MealCategory) -> usize {
    recipes.iter().filter(|r| r.category == category).count()
}
