//! Exact selection through an external MILP backend.

use super::formulator::ConstraintFormulator;
use super::solver::{MilpSolver, SolveStatus, SolverConfig};
use crate::catalog::Catalog;
use crate::error::OptimizeError;
use crate::menu::Selection;
use crate::profile::NutritionProfile;
use tracing::debug;

/// Formulates the weekly-menu program, delegates to a backend, and
/// interprets the returned status.
///
/// The adapter never retries: `Infeasible` and `Timeout` surface as
/// distinct [`OptimizeError`] variants and the caller decides whether to
/// relax the profile or fall back to the heuristic. A returned assignment
/// that violates any constraint family is rejected here rather than
/// assembled into a menu.
#[derive(Debug, Clone)]
pub struct ExactSelector<S: MilpSolver> {
    solver: S,
    config: SolverConfig,
}

impl<S: MilpSolver> ExactSelector<S> {
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            config: SolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Selects the score-maximal feasible week.
    pub fn select(
        &self,
        catalog: &Catalog,
        profile: &NutritionProfile,
    ) -> Result<Selection, OptimizeError> {
        let formulation = ConstraintFormulator::formulate(catalog, profile);
        let solution = self.solver.solve(&formulation.problem, &self.config);
        debug!(
            status = ?solution.status,
            solve_time_ms = solution.solve_time_ms,
            objective = ?solution.objective_value,
            "exact solve finished"
        );

        match solution.status {
            SolveStatus::Optimal | SolveStatus::Feasible => {
                if solution.assignment.len() != formulation.problem.num_vars() {
                    return Err(OptimizeError::InvalidModel(format!(
                        "backend returned {} variable values for a {}-variable problem",
                        solution.assignment.len(),
                        formulation.problem.num_vars()
                    )));
                }
                // Contract check on the backend's answer.
                for constraint in &formulation.problem.constraints {
                    if !constraint.is_satisfied(&solution.assignment) {
                        return Err(OptimizeError::Infeasible {
                            detail: format!(
                                "backend assignment violates '{}'",
                                constraint.label
                            ),
                        });
                    }
                }
                Ok(formulation.decode(&solution.assignment))
            }
            SolveStatus::Infeasible => Err(OptimizeError::Infeasible {
                detail: solution
                    .detail
                    .unwrap_or_else(|| "no assignment satisfies all constraints".into()),
            }),
            SolveStatus::Timeout => Err(OptimizeError::Timeout {
                limit_ms: self.config.time_limit_ms,
            }),
            SolveStatus::Unbounded => Err(OptimizeError::Unbounded),
            SolveStatus::ModelInvalid => Err(OptimizeError::InvalidModel(
                solution.detail.unwrap_or_else(|| "malformed model".into()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Macronutrients, Recipe};
    use crate::menu::MenuAssembler;
    use crate::milp::problem::MilpProblem;
    use crate::milp::solver::{GreedyMilpSolver, MilpSolution};

    fn recipe(id: u64, tags: &[&str], calories: f64, protein: f64, rating: f64) -> Recipe {
        Recipe::new(
            id,
            format!("recipe-{id}"),
            tags.iter().map(|s| s.to_string()).collect(),
            vec![format!("ingredient-{id}")],
            Macronutrients {
                protein_pct_dv: protein,
                fat_pct_dv: 8.0,
                carb_pct_dv: 12.0,
            },
            calories,
            Some(rating),
        )
    }

    fn feasible_catalog() -> Catalog {
        let mut recipes = Vec::new();
        for id in 0..15 {
            recipes.push(recipe(id, &["breakfast"], 320.0, 18.0, 3.0 + (id % 3) as f64 / 2.0));
        }
        for id in 100..140 {
            recipes.push(recipe(id, &["dinner"], 550.0, 30.0, 3.5));
        }
        Catalog::new(recipes)
    }

    #[test]
    fn test_exact_selection_assembles_valid_week() {
        let catalog = feasible_catalog();
        let profile = NutritionProfile::balanced();
        let selector = ExactSelector::new(GreedyMilpSolver::new());

        let selection = selector.select(&catalog, &profile).unwrap();
        assert_eq!(selection.breakfasts.len(), 7);
        assert_eq!(selection.mains.len(), 14);

        let menu = MenuAssembler::new().assemble(selection).unwrap();
        assert!(menu.total_calories() <= profile.weekly_calorie_cap() + 1e-6);
        assert!(menu.total_protein_pct() >= profile.weekly_protein_floor() - 1e-6);
    }

    #[test]
    fn test_decoded_selection_is_id_ordered_and_deterministic() {
        let catalog = feasible_catalog();
        let profile = NutritionProfile::balanced();
        let selector = ExactSelector::new(GreedyMilpSolver::new());

        let first = selector.select(&catalog, &profile).unwrap();
        let second = selector.select(&catalog, &profile).unwrap();
        assert_eq!(first, second);

        let ids: Vec<u64> = first.breakfasts.iter().map(|r| r.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_five_breakfasts_is_infeasible_not_partial() {
        let mut recipes = Vec::new();
        for id in 0..5 {
            recipes.push(recipe(id, &["breakfast"], 320.0, 18.0, 4.0));
        }
        for id in 100..130 {
            recipes.push(recipe(id, &["dinner"], 550.0, 30.0, 4.0));
        }
        let catalog = Catalog::new(recipes);
        let selector = ExactSelector::new(GreedyMilpSolver::new());

        let err = selector
            .select(&catalog, &NutritionProfile::balanced())
            .unwrap_err();
        assert!(matches!(err, OptimizeError::Infeasible { .. }));
    }

    /// Backend stub that always claims a timeout.
    struct TimeoutBackend;
    impl MilpSolver for TimeoutBackend {
        fn solve(&self, _problem: &MilpProblem, _config: &SolverConfig) -> MilpSolution {
            MilpSolution::empty(SolveStatus::Timeout)
        }
    }

    #[test]
    fn test_timeout_maps_to_error_with_limit() {
        let catalog = feasible_catalog();
        let selector = ExactSelector::new(TimeoutBackend)
            .with_config(SolverConfig::default().with_time_limit_ms(250));

        let err = selector
            .select(&catalog, &NutritionProfile::balanced())
            .unwrap_err();
        assert_eq!(err, OptimizeError::Timeout { limit_ms: 250 });
    }

    /// Backend stub that claims feasibility but returns the all-false
    /// assignment.
    struct LyingBackend;
    impl MilpSolver for LyingBackend {
        fn solve(&self, problem: &MilpProblem, _config: &SolverConfig) -> MilpSolution {
            MilpSolution {
                status: SolveStatus::Feasible,
                assignment: vec![false; problem.num_vars()],
                objective_value: Some(0.0),
                solve_time_ms: 0,
                detail: None,
            }
        }
    }

    #[test]
    fn test_violating_assignment_is_rejected() {
        let catalog = feasible_catalog();
        let selector = ExactSelector::new(LyingBackend);

        let err = selector
            .select(&catalog, &NutritionProfile::balanced())
            .unwrap_err();
        assert!(matches!(err, OptimizeError::Infeasible { .. }));
    }
}
