//! Profile-weighted scalar scoring of recipes.

use crate::catalog::Recipe;
use crate::profile::{MissingRatingPolicy, NutritionProfile};

/// A recipe paired with its score under one specific profile.
///
/// Scores are valid only for the profile that produced them; they are
/// recomputed from scratch on every run and never cached on the recipe.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecipe<'a> {
    pub recipe: &'a Recipe,
    pub score: f64,
}

/// Computes `S = w_protein·P − w_fat·F − w_cost·C + w_rating·R` per recipe.
///
/// `P`/`F` are percent daily value, `C` is the enrichment-derived cost,
/// and `R` is the average user rating resolved through the profile's
/// missing-rating policy.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    profile: &'a NutritionProfile,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(profile: &'a NutritionProfile) -> Self {
        Self { profile }
    }

    /// Scores one recipe. Returns `None` when the missing-rating policy
    /// excludes an unrated recipe from selection.
    pub fn score(&self, recipe: &Recipe) -> Option<f64> {
        let rating = match recipe.rating {
            Some(r) => r,
            None => match self.profile.missing_rating {
                MissingRatingPolicy::Neutral(value) => value,
                MissingRatingPolicy::Exclude => return None,
            },
        };

        let w = &self.profile.weights;
        Some(
            w.protein * recipe.macros.protein_pct_dv - w.fat * recipe.macros.fat_pct_dv
                - w.cost * recipe.estimated_cost
                + w.rating * rating,
        )
    }

    /// Scores a pool of recipes, dropping the ones the policy excludes.
    pub fn score_pool(&self, recipes: impl IntoIterator<Item = &'a Recipe>) -> Vec<ScoredRecipe<'a>> {
        recipes
            .into_iter()
            .filter_map(|recipe| self.score(recipe).map(|score| ScoredRecipe { recipe, score }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Macronutrients, Recipe};
    use crate::profile::{MissingRatingPolicy, NutritionProfile};

    fn recipe(id: u64, protein: f64, fat: f64, rating: Option<f64>) -> Recipe {
        Recipe::new(
            id,
            format!("recipe-{id}"),
            vec!["dinner".into()],
            vec![],
            Macronutrients {
                protein_pct_dv: protein,
                fat_pct_dv: fat,
                carb_pct_dv: 10.0,
            },
            400.0,
            rating,
        )
    }

    #[test]
    fn test_score_formula() {
        let profile = NutritionProfile::muscle_gain();
        let engine = ScoringEngine::new(&profile);
        let r = recipe(1, 40.0, 10.0, Some(4.0));

        // 3.0*40 - 1.5*10 - 0.5*cost + 0.0*4
        let expected = 3.0 * 40.0 - 1.5 * 10.0 - 0.5 * r.estimated_cost;
        let score = engine.score(&r).unwrap();
        assert!((score - expected).abs() < 1e-9, "got {score}, want {expected}");
    }

    #[test]
    fn test_gourmet_rating_dominates() {
        // Two recipes identical except for the rating: under Gourmet
        // (w_rating = 20, all else 0) the higher-rated one strictly wins.
        let profile = NutritionProfile::gourmet();
        let engine = ScoringEngine::new(&profile);
        let high = recipe(1, 20.0, 20.0, Some(5.0));
        let low = recipe(2, 20.0, 20.0, Some(1.0));

        assert!(engine.score(&high).unwrap() > engine.score(&low).unwrap());
    }

    #[test]
    fn test_missing_rating_neutral_default() {
        let profile = NutritionProfile::gourmet();
        let engine = ScoringEngine::new(&profile);
        let unrated = recipe(1, 20.0, 20.0, None);

        // Neutral(0.0) default: unrated recipe scores 20 * 0.0 = 0.
        assert!((engine.score(&unrated).unwrap() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_rating_exclude_policy() {
        let profile =
            NutritionProfile::gourmet().with_missing_rating(MissingRatingPolicy::Exclude);
        let engine = ScoringEngine::new(&profile);

        assert!(engine.score(&recipe(1, 20.0, 20.0, None)).is_none());
        assert!(engine.score(&recipe(2, 20.0, 20.0, Some(3.0))).is_some());
    }

    #[test]
    fn test_score_pool_drops_excluded() {
        let profile =
            NutritionProfile::balanced().with_missing_rating(MissingRatingPolicy::Exclude);
        let engine = ScoringEngine::new(&profile);
        let pool = vec![
            recipe(1, 20.0, 10.0, Some(4.0)),
            recipe(2, 20.0, 10.0, None),
            recipe(3, 20.0, 10.0, Some(2.0)),
        ];

        let scored = engine.score_pool(pool.iter());
        let ids: Vec<u64> = scored.iter().map(|s| s.recipe.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_scores_differ_across_profiles() {
        let lean = recipe(1, 50.0, 5.0, Some(2.0));
        let muscle = NutritionProfile::muscle_gain();
        let gourmet = NutritionProfile::gourmet();

        let s_muscle = ScoringEngine::new(&muscle).score(&lean).unwrap();
        let s_gourmet = ScoringEngine::new(&gourmet).score(&lean).unwrap();
        assert!((s_muscle - s_gourmet).abs() > 1.0);
    }
}
