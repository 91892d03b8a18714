//! MILP solver interface and a greedy reference implementation.

use super::problem::{MilpProblem, Sense, FEASIBILITY_EPS};
use std::time::Instant;
use tracing::debug;

/// Status of the solver after execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Feasible (but not necessarily optimal) solution found.
    Feasible,
    /// No feasible 0/1 assignment exists (or the backend could not find
    /// one within its search strategy).
    Infeasible,
    /// The objective is unbounded.
    Unbounded,
    /// The time limit was reached before a solution was found.
    Timeout,
    /// The problem is malformed.
    ModelInvalid,
}

/// Solution returned by a MILP backend.
#[derive(Debug, Clone, PartialEq)]
pub struct MilpSolution {
    pub status: SolveStatus,
    /// Value of each binary variable. Empty unless a solution was found.
    pub assignment: Vec<bool>,
    pub objective_value: Option<f64>,
    pub solve_time_ms: u64,
    /// Backend diagnostic note, mainly for failure statuses.
    pub detail: Option<String>,
}

impl MilpSolution {
    /// Creates an empty solution with the given status.
    pub fn empty(status: SolveStatus) -> Self {
        Self {
            status,
            assignment: Vec::new(),
            objective_value: None,
            solve_time_ms: 0,
            detail: None,
        }
    }

    fn failed(status: SolveStatus, detail: String, started: Instant) -> Self {
        Self {
            status,
            assignment: Vec::new(),
            objective_value: None,
            solve_time_ms: started.elapsed().as_millis() as u64,
            detail: Some(detail),
        }
    }

    /// Whether a feasible assignment was found.
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolveStatus::Optimal | SolveStatus::Feasible)
    }
}

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum solve time in milliseconds. The backend must return a
    /// `Timeout` status promptly instead of hanging the caller.
    pub time_limit_ms: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 60_000,
        }
    }
}

impl SolverConfig {
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }
}

/// Trait for MILP backends.
///
/// Implementors provide the actual branch-and-bound (or equivalent)
/// search. Any backend exposing binary variables, linear (in)equality
/// constraints, and a maximize/minimize objective can be plugged in;
/// this crate does not reimplement exact search itself.
pub trait MilpSolver {
    /// Solves the problem and returns an assignment with a status.
    fn solve(&self, problem: &MilpProblem, config: &SolverConfig) -> MilpSolution;
}

/// A greedy repair-based solver for tests and small catalogs.
///
/// Picks the top-gain variables of every unit-coefficient equality group
/// ("exactly k of these"), then repairs resource-bound violations by
/// swapping within groups and flipping ungrouped variables, always taking
/// the move that shrinks total infeasibility the most.
///
/// # Limitations
///
/// - Heuristic, not exact: never reports `Optimal`, and may report
///   `Infeasible` for instances a real branch-and-bound backend could
///   solve.
/// - Equality constraints must have unit coefficients and disjoint
///   variable sets (true of the weekly-menu formulation).
/// - Never returns `Unbounded` (meaningless over binary variables).
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyMilpSolver;

impl GreedyMilpSolver {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Swap(usize, usize),
    Flip(usize),
}

impl MilpSolver for GreedyMilpSolver {
    fn solve(&self, problem: &MilpProblem, config: &SolverConfig) -> MilpSolution {
        let started = Instant::now();

        if let Err(reason) = problem.validate() {
            return MilpSolution::failed(SolveStatus::ModelInvalid, reason, started);
        }

        let n = problem.num_vars();
        let gain: Vec<f64> = match problem.sense {
            Sense::Maximize => problem.objective.clone(),
            Sense::Minimize => problem.objective.iter().map(|c| -c).collect(),
        };

        // Detect "exactly k of these" selection groups.
        let mut group_of: Vec<Option<usize>> = vec![None; n];
        let mut groups: Vec<(Vec<usize>, usize)> = Vec::new();
        for constraint in &problem.constraints {
            if !constraint.is_equality() {
                continue;
            }
            let unit = constraint
                .terms
                .iter()
                .all(|&(_, w)| (w - 1.0).abs() <= FEASIBILITY_EPS);
            if !unit {
                continue;
            }
            if constraint.lower < -FEASIBILITY_EPS
                || (constraint.lower - constraint.lower.round()).abs() > FEASIBILITY_EPS
            {
                return MilpSolution::failed(
                    SolveStatus::Infeasible,
                    format!(
                        "constraint '{}' requires a count of {}, impossible over binary variables",
                        constraint.label, constraint.lower
                    ),
                    started,
                );
            }
            let members: Vec<usize> = constraint.terms.iter().map(|&(i, _)| i).collect();
            for &m in &members {
                if group_of[m].is_some() {
                    return MilpSolution::failed(
                        SolveStatus::ModelInvalid,
                        "overlapping selection groups are not supported".into(),
                        started,
                    );
                }
                group_of[m] = Some(groups.len());
            }
            let k = constraint.lower.round() as usize;
            if members.len() < k {
                return MilpSolution::failed(
                    SolveStatus::Infeasible,
                    format!(
                        "constraint '{}' requires {k} variables but only {} exist",
                        constraint.label,
                        members.len()
                    ),
                    started,
                );
            }
            groups.push((members, k));
        }

        // Initial assignment: best-gain members per group, positive-gain
        // ungrouped variables.
        let mut x = vec![false; n];
        for (members, k) in &groups {
            let mut order = members.clone();
            order.sort_by(|&a, &b| {
                gain[b]
                    .partial_cmp(&gain[a])
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.cmp(&b))
            });
            for &i in order.iter().take(*k) {
                x[i] = true;
            }
        }
        for i in 0..n {
            if group_of[i].is_none() && gain[i] > 0.0 {
                x[i] = true;
            }
        }

        // Repair loop: one group-preserving move per round.
        let max_rounds = 4 * n + 8;
        let mut rounds = 0;
        loop {
            if started.elapsed().as_millis() as u64 > config.time_limit_ms {
                return MilpSolution::failed(
                    SolveStatus::Timeout,
                    format!("repair did not finish within {} ms", config.time_limit_ms),
                    started,
                );
            }

            let current = total_violation(problem, &x);
            if current <= FEASIBILITY_EPS {
                break;
            }
            if rounds >= max_rounds {
                return MilpSolution::failed(
                    SolveStatus::Infeasible,
                    "repair exceeded its round budget".into(),
                    started,
                );
            }
            rounds += 1;

            // (violation after move, gain delta, move)
            let mut best: Option<(f64, f64, Move)> = None;

            for (members, _) in &groups {
                let selected: Vec<usize> = members.iter().copied().filter(|&i| x[i]).collect();
                let unselected: Vec<usize> = members.iter().copied().filter(|&i| !x[i]).collect();
                for &s in &selected {
                    for &u in &unselected {
                        x[s] = false;
                        x[u] = true;
                        let v = total_violation(problem, &x);
                        x[s] = true;
                        x[u] = false;
                        consider(&mut best, v, gain[u] - gain[s], Move::Swap(s, u));
                    }
                }
            }
            for i in (0..n).filter(|&i| group_of[i].is_none()) {
                x[i] = !x[i];
                let v = total_violation(problem, &x);
                let delta = if x[i] { gain[i] } else { -gain[i] };
                x[i] = !x[i];
                consider(&mut best, v, delta, Move::Flip(i));
            }

            match best {
                Some((v, _, mv)) if v < current - FEASIBILITY_EPS => match mv {
                    Move::Swap(s, u) => {
                        x[s] = false;
                        x[u] = true;
                    }
                    Move::Flip(i) => x[i] = !x[i],
                },
                _ => {
                    return MilpSolution::failed(
                        SolveStatus::Infeasible,
                        "no repair move reduces infeasibility".into(),
                        started,
                    );
                }
            }
        }

        let objective_value = problem.objective_value(&x);
        debug!(rounds, objective_value, "greedy repair converged");
        MilpSolution {
            status: SolveStatus::Feasible,
            assignment: x,
            objective_value: Some(objective_value),
            solve_time_ms: started.elapsed().as_millis() as u64,
            detail: None,
        }
    }
}

fn total_violation(problem: &MilpProblem, x: &[bool]) -> f64 {
    problem.constraints.iter().map(|c| c.violation(x)).sum()
}

/// Keeps the move with the lowest post-move violation; ties go to the
/// better gain delta.
fn consider(best: &mut Option<(f64, f64, Move)>, violation: f64, gain_delta: f64, mv: Move) {
    let better = match best {
        None => true,
        Some((v, g, _)) => {
            violation < *v - FEASIBILITY_EPS
                || ((violation - *v).abs() <= FEASIBILITY_EPS && gain_delta > *g)
        }
    };
    if better {
        *best = Some((violation, gain_delta, mv));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milp::problem::LinearConstraint;

    /// 3 "breakfast" vars (0..3) and 4 "main" vars (3..7); pick 2 + 3.
    fn selection_problem() -> MilpProblem {
        let mut problem =
            MilpProblem::new(Sense::Maximize, vec![5.0, 3.0, 1.0, 9.0, 7.0, 4.0, 2.0]);
        problem.add_constraint(LinearConstraint::exactly(
            "group-a",
            vec![(0, 1.0), (1, 1.0), (2, 1.0)],
            2.0,
        ));
        problem.add_constraint(LinearConstraint::exactly(
            "group-b",
            vec![(3, 1.0), (4, 1.0), (5, 1.0), (6, 1.0)],
            3.0,
        ));
        problem
    }

    #[test]
    fn test_greedy_picks_best_of_each_group() {
        let problem = selection_problem();
        let solution = GreedyMilpSolver::new().solve(&problem, &SolverConfig::default());

        assert_eq!(solution.status, SolveStatus::Feasible);
        assert_eq!(
            solution.assignment,
            vec![true, true, false, true, true, true, false]
        );
        assert!((solution.objective_value.unwrap() - 28.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_constraints_satisfied_after_repair() {
        // A tight resource bound forces swaps away from the greedy picks:
        // "weights" of the group members exceed the cap initially.
        let mut problem = selection_problem();
        problem.add_constraint(LinearConstraint::at_most(
            "weight",
            vec![
                (0, 10.0),
                (1, 1.0),
                (2, 1.0),
                (3, 10.0),
                (4, 10.0),
                (5, 1.0),
                (6, 1.0),
            ],
            14.0,
        ));

        let solution = GreedyMilpSolver::new().solve(&problem, &SolverConfig::default());
        assert_eq!(solution.status, SolveStatus::Feasible);
        for constraint in &problem.constraints {
            assert!(
                constraint.is_satisfied(&solution.assignment),
                "violated: {}",
                constraint.label
            );
        }
    }

    #[test]
    fn test_infeasible_when_group_too_small() {
        let mut problem = MilpProblem::new(Sense::Maximize, vec![1.0, 1.0]);
        problem.add_constraint(LinearConstraint::exactly(
            "too-big",
            vec![(0, 1.0), (1, 1.0)],
            5.0,
        ));
        let solution = GreedyMilpSolver::new().solve(&problem, &SolverConfig::default());
        assert_eq!(solution.status, SolveStatus::Infeasible);
        assert!(solution.detail.unwrap().contains("too-big"));
    }

    #[test]
    fn test_infeasible_resource_bound_not_a_partial_assignment() {
        // Every group-respecting choice violates the cap: no assignment,
        // only a status.
        let mut problem = selection_problem();
        problem.add_constraint(LinearConstraint::at_most(
            "impossible",
            (0..7).map(|i| (i, 100.0)).collect(),
            100.0,
        ));
        let solution = GreedyMilpSolver::new().solve(&problem, &SolverConfig::default());
        assert_eq!(solution.status, SolveStatus::Infeasible);
        assert!(solution.assignment.is_empty());
    }

    #[test]
    fn test_model_invalid() {
        let mut problem = MilpProblem::new(Sense::Maximize, vec![1.0]);
        problem.add_constraint(LinearConstraint::at_most("bad", vec![(5, 1.0)], 1.0));
        let solution = GreedyMilpSolver::new().solve(&problem, &SolverConfig::default());
        assert_eq!(solution.status, SolveStatus::ModelInvalid);
    }

    #[test]
    fn test_minimize_flips_gain() {
        let mut problem = MilpProblem::new(Sense::Minimize, vec![5.0, 1.0, 3.0]);
        problem.add_constraint(LinearConstraint::exactly(
            "pick-one",
            vec![(0, 1.0), (1, 1.0), (2, 1.0)],
            1.0,
        ));
        let solution = GreedyMilpSolver::new().solve(&problem, &SolverConfig::default());
        assert_eq!(solution.assignment, vec![false, true, false]);
    }

    #[test]
    fn test_ungrouped_positive_gain_selected() {
        let mut problem = MilpProblem::new(Sense::Maximize, vec![2.0, -1.0]);
        problem.add_constraint(LinearConstraint::at_most("loose", vec![(0, 1.0), (1, 1.0)], 2.0));
        let solution = GreedyMilpSolver::new().solve(&problem, &SolverConfig::default());
        assert_eq!(solution.assignment, vec![true, false]);
    }
}
