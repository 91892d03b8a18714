//! Error taxonomy of the selection engine.
//!
//! Selection and optimization failures are recoverable: the caller may
//! widen the profile ([`crate::profile::NutritionProfile::relaxed`]) or
//! switch methods. [`InvariantViolation`] is a defensive check on the
//! assembly boundary and indicates an upstream contract breach. The
//! engine performs no internal retries; fallback is caller policy.

use crate::catalog::{MealCategory, RecipeId};
use thiserror::Error;

/// Failures of the randomized heuristic selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// A category pool cannot supply its slot quota after filtering.
    #[error("{category:?} pool exhausted: {needed} slots required, {available} candidates after filtering")]
    PoolExhausted {
        category: MealCategory,
        needed: usize,
        available: usize,
    },

    /// Bounded rejection sampling gave up on a slot.
    #[error("gave up filling a {category:?} slot after {attempts} draw attempts")]
    AttemptsExhausted {
        category: MealCategory,
        attempts: usize,
    },
}

/// Failures of the exact optimization path.
///
/// `Infeasible` and `Timeout` are the two diagnosable causes of a failed
/// optimization; they are kept distinct so the caller can pick a remedy
/// (relax constraints vs. raise the time limit or fall back).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// No 0/1 assignment satisfies all constraint families.
    #[error("optimization infeasible: {detail}")]
    Infeasible { detail: String },

    /// The solver did not finish within the configured time limit.
    #[error("solver exceeded the time limit of {limit_ms} ms")]
    Timeout { limit_ms: u64 },

    /// The objective is unbounded (cannot occur with binary variables;
    /// part of the solver contract nonetheless).
    #[error("objective is unbounded")]
    Unbounded,

    /// The formulated problem is malformed.
    #[error("invalid model: {0}")]
    InvalidModel(String),
}

/// Defensive invariant checks at the menu assembly boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Wrong number of recipes for a slot category.
    #[error("expected {expected} {category:?} recipes, got {actual}")]
    SlotCount {
        category: MealCategory,
        expected: usize,
        actual: usize,
    },

    /// The same recipe appears in more than one slot.
    #[error("recipe {id} appears more than once in the menu")]
    DuplicateRecipe { id: RecipeId },

    /// A recipe fills a slot of the wrong category.
    #[error("recipe {id} is {actual:?} but fills a {expected:?} slot")]
    CategoryMismatch {
        id: RecipeId,
        expected: MealCategory,
        actual: MealCategory,
    },
}

/// Any failure of the end-to-end planning pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Optimization(#[from] OptimizeError),

    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}
