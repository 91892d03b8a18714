//! Assembly of a validated weekly menu from an unordered selection.

use super::types::{
    MealType, MenuSlot, WeeklyMenu, BREAKFASTS_PER_WEEK, DAYS_PER_WEEK, MAINS_PER_WEEK,
};
use crate::catalog::{MealCategory, Recipe};
use crate::error::InvariantViolation;
use std::collections::HashSet;

/// The unordered output of either selection path: 7 chosen breakfasts and
/// 14 chosen mains, not yet assigned to days.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub breakfasts: Vec<Recipe>,
    pub mains: Vec<Recipe>,
}

/// How the chosen recipes are distributed over the 7 days.
///
/// The selection itself is unordered, so any distribution is valid; the
/// order only decides which day gets which recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistributionOrder {
    /// Day `d` gets breakfast `d` and mains `2d`, `2d+1` (lunch, dinner).
    #[default]
    Sequential,
    /// Lunches take the first 7 mains in order, dinners the last 7, so
    /// consecutive selection entries land on different days.
    RoundRobin,
}

/// Converts a [`Selection`] into a canonical [`WeeklyMenu`], enforcing
/// the slot-count, category, and no-duplicate invariants.
///
/// The invariant checks are defensive: both selectors and the exact
/// decoder already guarantee them, so a violation here indicates an
/// upstream contract breach, not a user error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MenuAssembler {
    order: DistributionOrder,
}

impl MenuAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: DistributionOrder) -> Self {
        self.order = order;
        self
    }

    /// Validates the selection and distributes it across the week.
    pub fn assemble(&self, selection: Selection) -> Result<WeeklyMenu, InvariantViolation> {
        validate(&selection)?;

        let Selection { breakfasts, mains } = selection;
        let mut slots = Vec::with_capacity(BREAKFASTS_PER_WEEK + MAINS_PER_WEEK);

        for day in 0..DAYS_PER_WEEK {
            let (lunch, dinner) = match self.order {
                DistributionOrder::Sequential => (2 * day, 2 * day + 1),
                DistributionOrder::RoundRobin => (day, DAYS_PER_WEEK + day),
            };
            slots.push(MenuSlot {
                day: day as u8 + 1,
                meal: MealType::Breakfast,
                recipe: breakfasts[day].clone(),
            });
            slots.push(MenuSlot {
                day: day as u8 + 1,
                meal: MealType::Lunch,
                recipe: mains[lunch].clone(),
            });
            slots.push(MenuSlot {
                day: day as u8 + 1,
                meal: MealType::Dinner,
                recipe: mains[dinner].clone(),
            });
        }

        Ok(WeeklyMenu { slots })
    }
}

fn validate(selection: &Selection) -> Result<(), InvariantViolation> {
    if selection.breakfasts.len() != BREAKFASTS_PER_WEEK {
        return Err(InvariantViolation::SlotCount {
            category: MealCategory::Breakfast,
            expected: BREAKFASTS_PER_WEEK,
            actual: selection.breakfasts.len(),
        });
    }
    if selection.mains.len() != MAINS_PER_WEEK {
        return Err(InvariantViolation::SlotCount {
            category: MealCategory::MainMeal,
            expected: MAINS_PER_WEEK,
            actual: selection.mains.len(),
        });
    }

    for recipe in &selection.breakfasts {
        if recipe.category != MealCategory::Breakfast {
            return Err(InvariantViolation::CategoryMismatch {
                id: recipe.id,
                expected: MealCategory::Breakfast,
                actual: recipe.category,
            });
        }
    }
    for recipe in &selection.mains {
        if recipe.category != MealCategory::MainMeal {
            return Err(InvariantViolation::CategoryMismatch {
                id: recipe.id,
                expected: MealCategory::MainMeal,
                actual: recipe.category,
            });
        }
    }

    let mut seen = HashSet::new();
    for recipe in selection.breakfasts.iter().chain(&selection.mains) {
        if !seen.insert(recipe.id) {
            return Err(InvariantViolation::DuplicateRecipe { id: recipe.id });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Macronutrients;
    use crate::menu::SLOTS_PER_WEEK;

    fn recipe(id: u64, category: MealCategory) -> Recipe {
        let tags = match category {
            MealCategory::Breakfast => vec!["breakfast".to_string()],
            MealCategory::MainMeal => vec!["dinner".to_string()],
            MealCategory::Unclassified => vec![],
        };
        Recipe::new(
            id,
            format!("recipe-{id}"),
            tags,
            vec![],
            Macronutrients {
                protein_pct_dv: 20.0,
                fat_pct_dv: 10.0,
                carb_pct_dv: 15.0,
            },
            400.0,
            None,
        )
    }

    fn selection() -> Selection {
        Selection {
            breakfasts: (1..=7).map(|i| recipe(i, MealCategory::Breakfast)).collect(),
            mains: (8..=21).map(|i| recipe(i, MealCategory::MainMeal)).collect(),
        }
    }

    #[test]
    fn test_assemble_sequential() {
        let menu = MenuAssembler::new().assemble(selection()).unwrap();
        assert_eq!(menu.slots().len(), SLOTS_PER_WEEK);

        // Day 1: breakfast 1, mains 8 and 9.
        let day1: Vec<u64> = menu.day(1).map(|s| s.recipe.id).collect();
        assert_eq!(day1, vec![1, 8, 9]);
        // Day 7: breakfast 7, mains 20 and 21.
        let day7: Vec<u64> = menu.day(7).map(|s| s.recipe.id).collect();
        assert_eq!(day7, vec![7, 20, 21]);
    }

    #[test]
    fn test_assemble_round_robin() {
        let menu = MenuAssembler::new()
            .with_order(DistributionOrder::RoundRobin)
            .assemble(selection())
            .unwrap();

        // Day 1: breakfast 1, lunch = mains[0] (8), dinner = mains[7] (15).
        let day1: Vec<u64> = menu.day(1).map(|s| s.recipe.id).collect();
        assert_eq!(day1, vec![1, 8, 15]);
    }

    #[test]
    fn test_no_duplicates_and_counts_hold() {
        let menu = MenuAssembler::new().assemble(selection()).unwrap();
        assert_eq!(menu.recipe_ids().len(), SLOTS_PER_WEEK);

        let breakfasts = menu
            .slots()
            .iter()
            .filter(|s| s.recipe.category == MealCategory::Breakfast)
            .count();
        assert_eq!(breakfasts, 7);
        let mains = menu
            .slots()
            .iter()
            .filter(|s| s.recipe.category == MealCategory::MainMeal)
            .count();
        assert_eq!(mains, 14);
    }

    #[test]
    fn test_wrong_breakfast_count_rejected() {
        let mut sel = selection();
        sel.breakfasts.pop();
        let err = MenuAssembler::new().assemble(sel).unwrap_err();
        assert!(matches!(
            err,
            InvariantViolation::SlotCount {
                category: MealCategory::Breakfast,
                expected: 7,
                actual: 6,
            }
        ));
    }

    #[test]
    fn test_duplicate_recipe_rejected() {
        let mut sel = selection();
        sel.mains[13] = sel.mains[0].clone();
        let err = MenuAssembler::new().assemble(sel).unwrap_err();
        assert!(matches!(err, InvariantViolation::DuplicateRecipe { id: 8 }));
    }

    #[test]
    fn test_category_mismatch_rejected() {
        let mut sel = selection();
        sel.breakfasts[0] = recipe(99, MealCategory::MainMeal);
        let err = MenuAssembler::new().assemble(sel).unwrap_err();
        assert!(matches!(
            err,
            InvariantViolation::CategoryMismatch { id: 99, .. }
        ));
    }
}
