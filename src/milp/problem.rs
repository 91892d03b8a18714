//! Generic binary linear program structure.
//!
//! The formulation layer only: a linear objective over binary decision
//! variables plus labeled linear constraints with lower/upper bounds.
//! Any conforming MILP backend can consume this through the
//! [`MilpSolver`](crate::milp::MilpSolver) trait.

/// Optimization direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

/// Tolerance for feasibility checks on f64 constraint values.
pub const FEASIBILITY_EPS: f64 = 1e-6;

/// A labeled linear constraint `lower ≤ Σ terms ≤ upper`.
///
/// Terms are sparse `(variable index, coefficient)` pairs. One-sided
/// constraints use an infinite bound on the open side.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    /// Diagnostic label, surfaced in infeasibility errors.
    pub label: String,
    pub terms: Vec<(usize, f64)>,
    pub lower: f64,
    pub upper: f64,
}

impl LinearConstraint {
    /// `Σ terms ≤ upper`.
    pub fn at_most(label: impl Into<String>, terms: Vec<(usize, f64)>, upper: f64) -> Self {
        Self {
            label: label.into(),
            terms,
            lower: f64::NEG_INFINITY,
            upper,
        }
    }

    /// `Σ terms ≥ lower`.
    pub fn at_least(label: impl Into<String>, terms: Vec<(usize, f64)>, lower: f64) -> Self {
        Self {
            label: label.into(),
            terms,
            lower,
            upper: f64::INFINITY,
        }
    }

    /// `Σ terms = value`.
    pub fn exactly(label: impl Into<String>, terms: Vec<(usize, f64)>, value: f64) -> Self {
        Self {
            label: label.into(),
            terms,
            lower: value,
            upper: value,
        }
    }

    pub fn is_equality(&self) -> bool {
        self.lower == self.upper
    }

    /// Left-hand-side value under a 0/1 assignment.
    pub fn value(&self, assignment: &[bool]) -> f64 {
        self.terms
            .iter()
            .filter(|&&(i, _)| assignment[i])
            .map(|&(_, w)| w)
            .sum()
    }

    /// Amount by which the assignment violates this constraint (0 when
    /// satisfied).
    pub fn violation(&self, assignment: &[bool]) -> f64 {
        let v = self.value(assignment);
        (v - self.upper).max(0.0) + (self.lower - v).max(0.0)
    }

    pub fn is_satisfied(&self, assignment: &[bool]) -> bool {
        self.violation(assignment) <= FEASIBILITY_EPS
    }
}

/// An integer program over binary decision variables `x_i ∈ {0, 1}`.
#[derive(Debug, Clone, PartialEq)]
pub struct MilpProblem {
    pub sense: Sense,
    /// Objective coefficient per variable.
    pub objective: Vec<f64>,
    pub constraints: Vec<LinearConstraint>,
}

impl MilpProblem {
    pub fn new(sense: Sense, objective: Vec<f64>) -> Self {
        Self {
            sense,
            objective,
            constraints: Vec::new(),
        }
    }

    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Objective value under a 0/1 assignment.
    pub fn objective_value(&self, assignment: &[bool]) -> f64 {
        self.objective
            .iter()
            .zip(assignment)
            .filter(|&(_, &x)| x)
            .map(|(c, _)| c)
            .sum()
    }

    /// Validates the model for consistency.
    ///
    /// Checks coefficient finiteness, bound ordering, and that every
    /// term references an existing variable.
    pub fn validate(&self) -> Result<(), String> {
        for (i, c) in self.objective.iter().enumerate() {
            if !c.is_finite() {
                return Err(format!("objective coefficient {i} is not finite"));
            }
        }
        for constraint in &self.constraints {
            if constraint.lower > constraint.upper {
                return Err(format!(
                    "constraint '{}': lower bound exceeds upper bound",
                    constraint.label
                ));
            }
            if constraint.lower == f64::NEG_INFINITY && constraint.upper == f64::INFINITY {
                return Err(format!("constraint '{}' is vacuous", constraint.label));
            }
            for &(index, weight) in &constraint.terms {
                if index >= self.num_vars() {
                    return Err(format!(
                        "constraint '{}': undefined variable {index}",
                        constraint.label
                    ));
                }
                if !weight.is_finite() {
                    return Err(format!(
                        "constraint '{}': coefficient for variable {index} is not finite",
                        constraint.label
                    ));
                }
            }
        }
        Ok(())
    }
}
