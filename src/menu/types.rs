//! Weekly menu structure and derived statistics.

use crate::catalog::{Catalog, Recipe, RecipeId};
use crate::profile::NutritionProfile;
use crate::scoring::ScoringEngine;
use rand::Rng;
use std::collections::HashSet;

/// Days in a planning week.
pub const DAYS_PER_WEEK: usize = 7;
/// Breakfast slots per week.
pub const BREAKFASTS_PER_WEEK: usize = 7;
/// Lunch + dinner slots per week.
pub const MAINS_PER_WEEK: usize = 14;
/// Total slots per week.
pub const SLOTS_PER_WEEK: usize = BREAKFASTS_PER_WEEK + MAINS_PER_WEEK;

/// The meal type of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// One of the 21 fixed positions in a weekly menu.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuSlot {
    /// Day of the week, 1–7.
    pub day: u8,
    pub meal: MealType,
    pub recipe: Recipe,
}

/// Aggregate statistics over one weekly menu.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuSummary {
    pub total_calories: f64,
    pub avg_daily_calories: f64,
    pub total_protein_pct: f64,
    pub avg_daily_protein_pct: f64,
    pub total_cost: f64,
    /// Sum of per-recipe scores under the summarizing profile. Recipes
    /// the missing-rating policy excludes contribute zero.
    pub total_score: f64,
}

/// A fully assembled week: 21 slots, 7 breakfasts + 14 mains, no recipe
/// repeated. Construction goes through
/// [`MenuAssembler`](crate::menu::MenuAssembler), which enforces the
/// invariants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyMenu {
    pub(crate) slots: Vec<MenuSlot>,
}

impl WeeklyMenu {
    /// All 21 slots, ordered by day then breakfast/lunch/dinner.
    pub fn slots(&self) -> &[MenuSlot] {
        &self.slots
    }

    /// The slots of one day (1–7).
    pub fn day(&self, day: u8) -> impl Iterator<Item = &MenuSlot> {
        self.slots.iter().filter(move |s| s.day == day)
    }

    pub fn recipe_ids(&self) -> HashSet<RecipeId> {
        self.slots.iter().map(|s| s.recipe.id).collect()
    }

    pub fn total_calories(&self) -> f64 {
        self.slots.iter().map(|s| s.recipe.calories).sum()
    }

    pub fn total_protein_pct(&self) -> f64 {
        self.slots.iter().map(|s| s.recipe.macros.protein_pct_dv).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.slots.iter().map(|s| s.recipe.estimated_cost).sum()
    }

    /// Aggregate statistics under the given profile.
    pub fn summary(&self, profile: &NutritionProfile) -> MenuSummary {
        let engine = ScoringEngine::new(profile);
        let total_calories = self.total_calories();
        let total_protein_pct = self.total_protein_pct();
        let total_score = self
            .slots
            .iter()
            .filter_map(|s| engine.score(&s.recipe))
            .sum();
        MenuSummary {
            total_calories,
            avg_daily_calories: total_calories / DAYS_PER_WEEK as f64,
            total_protein_pct,
            avg_daily_protein_pct: total_protein_pct / DAYS_PER_WEEK as f64,
            total_cost: self.total_cost(),
            total_score,
        }
    }

    /// Swaps the recipe in one slot for a catalog recipe of the same
    /// category that is not already on the menu, drawn uniformly at
    /// random. Returns the replacement, or `None` when the slot index is
    /// out of range or no candidate exists.
    pub fn replace_slot<R: Rng>(
        &mut self,
        slot_index: usize,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Option<&Recipe> {
        if slot_index >= self.slots.len() {
            return None;
        }
        let category = self.slots[slot_index].recipe.category;
        let used = self.recipe_ids();

        let candidates: Vec<&Recipe> = catalog
            .recipes()
            .iter()
            .filter(|r| r.category == category && !used.contains(&r.id))
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let pick = candidates[rng.random_range(0..candidates.len())].clone();
        self.slots[slot_index].recipe = pick;
        Some(&self.slots[slot_index].recipe)
    }
}
