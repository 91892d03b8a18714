//! Nutrition profiles: score weights and nutritional thresholds.

use crate::catalog::Recipe;

/// The four supported profile presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileKind {
    /// Tight per-meal calorie cap, fat penalized.
    WeightLoss,
    /// Protein prioritized 2:1 over fat (Phillips & Van Loon, 2011).
    MuscleGain,
    /// Moderate thresholds, protein slightly favored.
    Balanced,
    /// User rating dominates, thresholds wide open.
    Gourmet,
}

/// Weights of the linear scoring function
/// `S = w_protein·P − w_fat·F − w_cost·C + w_rating·R`.
///
/// Weights are stored as magnitudes; the sign convention (fat and cost
/// penalized, protein and rating rewarded) lives in the formula.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    pub protein: f64,
    pub fat: f64,
    pub cost: f64,
    pub rating: f64,
}

/// Policy for recipes without any user rating.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissingRatingPolicy {
    /// Substitute a fixed neutral rating value.
    Neutral(f64),
    /// Treat unrated recipes as ineligible for selection.
    Exclude,
}

impl Default for MissingRatingPolicy {
    fn default() -> Self {
        MissingRatingPolicy::Neutral(0.0)
    }
}

/// An immutable configuration bundle of weights and thresholds.
///
/// Per-meal bounds (`min_meal_calories`, `max_meal_calories`,
/// `min_protein_pct`) gate the heuristic candidate filter. Daily caps
/// (`max_daily_calories`, `min_daily_protein_pct`) scale to the weekly
/// aggregate bounds of the exact formulation (× 7).
///
/// # Examples
///
/// ```
/// use menuplan::profile::NutritionProfile;
///
/// let profile = NutritionProfile::balanced().with_meal_calories(250.0, 600.0);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NutritionProfile {
    pub kind: ProfileKind,
    pub weights: ScoreWeights,
    /// Per-meal calorie floor for candidate filtering.
    pub min_meal_calories: f64,
    /// Per-meal calorie ceiling for candidate filtering.
    pub max_meal_calories: f64,
    /// Per-meal protein floor (%DV) for candidate filtering.
    pub min_protein_pct: f64,
    /// Daily calorie cap; the weekly MILP ceiling is this × 7.
    pub max_daily_calories: f64,
    /// Daily protein floor (%DV); the weekly MILP floor is this × 7.
    pub min_daily_protein_pct: f64,
    pub missing_rating: MissingRatingPolicy,
}

impl NutritionProfile {
    /// 200–500 kcal per meal, 15 %DV protein minimum, fat penalized.
    pub fn weight_loss() -> Self {
        Self {
            kind: ProfileKind::WeightLoss,
            weights: ScoreWeights {
                protein: 1.0,
                fat: 2.0,
                cost: 1.0,
                rating: 0.0,
            },
            min_meal_calories: 200.0,
            max_meal_calories: 500.0,
            min_protein_pct: 15.0,
            max_daily_calories: 1500.0,
            min_daily_protein_pct: 45.0,
            missing_rating: MissingRatingPolicy::default(),
        }
    }

    /// 300–900 kcal per meal, 20 %DV protein minimum, protein weighted
    /// 2:1 over fat.
    pub fn muscle_gain() -> Self {
        Self {
            kind: ProfileKind::MuscleGain,
            weights: ScoreWeights {
                protein: 3.0,
                fat: 1.5,
                cost: 0.5,
                rating: 0.0,
            },
            min_meal_calories: 300.0,
            max_meal_calories: 900.0,
            min_protein_pct: 20.0,
            max_daily_calories: 2000.0,
            min_daily_protein_pct: 80.0,
            missing_rating: MissingRatingPolicy::default(),
        }
    }

    /// 300–800 kcal per meal, 10 %DV protein minimum.
    pub fn balanced() -> Self {
        Self {
            kind: ProfileKind::Balanced,
            weights: ScoreWeights {
                protein: 1.5,
                fat: 0.5,
                cost: 1.0,
                rating: 0.0,
            },
            min_meal_calories: 300.0,
            max_meal_calories: 800.0,
            min_protein_pct: 10.0,
            max_daily_calories: 2000.0,
            min_daily_protein_pct: 50.0,
            missing_rating: MissingRatingPolicy::default(),
        }
    }

    /// Rating-driven scoring, essentially unconstrained thresholds.
    pub fn gourmet() -> Self {
        Self {
            kind: ProfileKind::Gourmet,
            weights: ScoreWeights {
                protein: 0.0,
                fat: 0.0,
                cost: 0.0,
                rating: 20.0,
            },
            min_meal_calories: 0.0,
            max_meal_calories: 1500.0,
            min_protein_pct: 0.0,
            max_daily_calories: 2500.0,
            min_daily_protein_pct: 30.0,
            missing_rating: MissingRatingPolicy::default(),
        }
    }

    /// Returns the preset for the given kind.
    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::WeightLoss => Self::weight_loss(),
            ProfileKind::MuscleGain => Self::muscle_gain(),
            ProfileKind::Balanced => Self::balanced(),
            ProfileKind::Gourmet => Self::gourmet(),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_meal_calories(mut self, min: f64, max: f64) -> Self {
        self.min_meal_calories = min;
        self.max_meal_calories = max;
        self
    }

    pub fn with_min_protein_pct(mut self, pct: f64) -> Self {
        self.min_protein_pct = pct;
        self
    }

    pub fn with_daily_limits(mut self, max_calories: f64, min_protein_pct: f64) -> Self {
        self.max_daily_calories = max_calories;
        self.min_daily_protein_pct = min_protein_pct;
        self
    }

    pub fn with_missing_rating(mut self, policy: MissingRatingPolicy) -> Self {
        self.missing_rating = policy;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_meal_calories < 0.0 {
            return Err("min_meal_calories must be non-negative".into());
        }
        if self.max_meal_calories <= self.min_meal_calories {
            return Err("max_meal_calories must exceed min_meal_calories".into());
        }
        if self.min_protein_pct < 0.0 {
            return Err("min_protein_pct must be non-negative".into());
        }
        if self.max_daily_calories <= 0.0 {
            return Err("max_daily_calories must be positive".into());
        }
        if self.min_daily_protein_pct < 0.0 {
            return Err("min_daily_protein_pct must be non-negative".into());
        }
        if let MissingRatingPolicy::Neutral(v) = self.missing_rating {
            if !(0.0..=5.0).contains(&v) {
                return Err(format!("neutral rating must be in 0..=5, got {v}"));
            }
        }
        Ok(())
    }

    /// Whether a recipe passes the per-meal calorie and protein filter.
    pub fn admits(&self, recipe: &Recipe) -> bool {
        recipe.calories >= self.min_meal_calories
            && recipe.calories <= self.max_meal_calories
            && recipe.macros.protein_pct_dv >= self.min_protein_pct
    }

    /// A widened copy of this profile for callers that hit an infeasible
    /// or exhausted outcome: calorie ceilings × 1.5, protein floors × 0.8.
    pub fn relaxed(&self) -> Self {
        let mut relaxed = self.clone();
        relaxed.max_meal_calories *= 1.5;
        relaxed.min_protein_pct *= 0.8;
        relaxed.max_daily_calories *= 1.5;
        relaxed.min_daily_protein_pct *= 0.8;
        relaxed
    }

    /// Weekly aggregate calorie ceiling for the exact formulation.
    pub fn weekly_calorie_cap(&self) -> f64 {
        self.max_daily_calories * 7.0
    }

    /// Weekly aggregate protein floor for the exact formulation.
    pub fn weekly_protein_floor(&self) -> f64 {
        self.min_daily_protein_pct * 7.0
    }
}
