//! Building the weekly-menu integer program.
//!
//! One binary variable per eligible recipe (classified and passing the
//! profile filter). Objective: maximize the summed profile score of the
//! chosen recipes. Four constraint families:
//!
//! - weekly calorie ceiling (aggregate, not per recipe)
//! - weekly protein floor
//! - exactly 7 breakfasts
//! - exactly 14 main meals
//!
//! Day/slot assignment is deliberately absent: the formulation is
//! unordered and [`MenuAssembler`](crate::menu::MenuAssembler)
//! distributes the chosen recipes afterwards.

use super::problem::{LinearConstraint, MilpProblem, Sense};
use crate::catalog::{Catalog, MealCategory, Recipe};
use crate::menu::{Selection, BREAKFASTS_PER_WEEK, MAINS_PER_WEEK};
use crate::profile::NutritionProfile;
use crate::scoring::ScoringEngine;
use tracing::debug;

pub const CALORIE_CEILING_LABEL: &str = "weekly-calorie-ceiling";
pub const PROTEIN_FLOOR_LABEL: &str = "weekly-protein-floor";
pub const BREAKFAST_COUNT_LABEL: &str = "breakfast-count";
pub const MAIN_MEAL_COUNT_LABEL: &str = "main-meal-count";

/// A formulated problem plus the variable-to-recipe mapping needed to
/// decode a solver assignment.
#[derive(Debug, Clone)]
pub struct Formulation<'a> {
    pub problem: MilpProblem,
    /// `variables[i]` is the recipe behind decision variable `x_i`.
    pub variables: Vec<&'a Recipe>,
}

impl Formulation<'_> {
    /// Decodes a 0/1 assignment into an unordered selection, chosen
    /// recipes in ascending id order for determinism.
    pub fn decode(&self, assignment: &[bool]) -> Selection {
        let mut chosen: Vec<&Recipe> = self
            .variables
            .iter()
            .zip(assignment)
            .filter(|&(_, &x)| x)
            .map(|(r, _)| *r)
            .collect();
        chosen.sort_by_key(|r| r.id);

        let mut breakfasts = Vec::with_capacity(BREAKFASTS_PER_WEEK);
        let mut mains = Vec::with_capacity(MAINS_PER_WEEK);
        for recipe in chosen {
            match recipe.category {
                MealCategory::Breakfast => breakfasts.push(recipe.clone()),
                MealCategory::MainMeal => mains.push(recipe.clone()),
                MealCategory::Unclassified => {}
            }
        }
        Selection { breakfasts, mains }
    }
}

/// Assembles the coefficient structures of the weekly-menu program.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstraintFormulator;

impl ConstraintFormulator {
    /// Formulates the program for one catalog/profile pair.
    ///
    /// Unclassified recipes and recipes failing the per-meal filter or
    /// the missing-rating policy never enter the variable set.
    pub fn formulate<'a>(catalog: &'a Catalog, profile: &NutritionProfile) -> Formulation<'a> {
        let engine = ScoringEngine::new(profile);
        let mut variables: Vec<&Recipe> = Vec::new();
        let mut objective = Vec::new();

        for recipe in catalog.recipes() {
            if recipe.category == MealCategory::Unclassified || !profile.admits(recipe) {
                continue;
            }
            if let Some(score) = engine.score(recipe) {
                variables.push(recipe);
                objective.push(score);
            }
        }

        let mut problem = MilpProblem::new(Sense::Maximize, objective);

        problem.add_constraint(LinearConstraint::at_most(
            CALORIE_CEILING_LABEL,
            variables
                .iter()
                .enumerate()
                .map(|(i, r)| (i, r.calories))
                .collect(),
            profile.weekly_calorie_cap(),
        ));
        problem.add_constraint(LinearConstraint::at_least(
            PROTEIN_FLOOR_LABEL,
            variables
                .iter()
                .enumerate()
                .map(|(i, r)| (i, r.macros.protein_pct_dv))
                .collect(),
            profile.weekly_protein_floor(),
        ));
        problem.add_constraint(LinearConstraint::exactly(
            BREAKFAST_COUNT_LABEL,
            category_terms(&variables, MealCategory::Breakfast),
            BREAKFASTS_PER_WEEK as f64,
        ));
        problem.add_constraint(LinearConstraint::exactly(
            MAIN_MEAL_COUNT_LABEL,
            category_terms(&variables, MealCategory::MainMeal),
            MAINS_PER_WEEK as f64,
        ));

        debug!(
            variables = variables.len(),
            calorie_cap = profile.weekly_calorie_cap(),
            protein_floor = profile.weekly_protein_floor(),
            "weekly-menu program formulated"
        );

        Formulation { problem, variables }
    }
}

fn category_terms(variables: &[&Recipe], category: MealCategory) -> Vec<(usize, f64)> {
    variables
        .iter()
        .enumerate()
        .filter(|(_, r)| r.category == category)
        .map(|(i, _)| (i, 1.0))
        .collect()
}
