//! Exact menu selection as a binary integer program.
//!
//! # Key components
//!
//! - [`MilpProblem`] / [`LinearConstraint`] — generic binary linear
//!   program structure
//! - [`ConstraintFormulator`] — builds the weekly-menu program
//! - [`MilpSolver`] — backend trait (branch-and-bound lives behind it)
//! - [`ExactSelector`] — formulate, delegate, interpret
//! - [`GreedyMilpSolver`] — repair-based reference backend for tests
//!
//! # Design
//!
//! This module assembles coefficient structures and interprets solver
//! statuses only. It does NOT implement exact branch-and-bound search;
//! the [`MilpSolver`] trait allows plugging in external MILP backends
//! (HiGHS, CBC, CPLEX) or custom heuristics.

mod adapter;
mod formulator;
pub(crate) mod problem;
pub(crate) mod solver;

pub use adapter::ExactSelector;
pub use formulator::{
    ConstraintFormulator, Formulation, BREAKFAST_COUNT_LABEL, CALORIE_CEILING_LABEL,
    MAIN_MEAL_COUNT_LABEL, PROTEIN_FLOOR_LABEL,
};
pub use problem::{LinearConstraint, MilpProblem, Sense, FEASIBILITY_EPS};
pub use solver::{GreedyMilpSolver, MilpSolution, MilpSolver, SolveStatus, SolverConfig};
