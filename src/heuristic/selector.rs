//! Randomized heuristic menu selection.
//!
//! Two separable phases per category pool:
//!
//! 1. **Ranking**: stable sort by score descending, ascending recipe id
//!    as the tie-break, truncated to the configured top tier.
//! 2. **Sampling**: uniform draws without replacement from the top tier,
//!    rejecting ids already used anywhere in the menu, with a bounded
//!    attempt count per slot.
//!
//! This trades optimality for variety: any recipe of the high-scoring
//! subset can appear, not just the single best. Weekly aggregate bounds
//! (total calories/protein) are NOT enforced here; only the per-recipe
//! profile filter is. The exact path covers the aggregate constraints.

use super::config::SelectorConfig;
use crate::catalog::{Catalog, MealCategory};
use crate::error::SelectionError;
use crate::menu::{Selection, BREAKFASTS_PER_WEEK, MAINS_PER_WEEK};
use crate::profile::NutritionProfile;
use crate::scoring::{ScoredRecipe, ScoringEngine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tracing::debug;

/// Score-ranked random sampler over the filtered catalog.
#[derive(Debug, Clone, Default)]
pub struct HeuristicSelector {
    config: SelectorConfig,
}

impl HeuristicSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Selects 7 breakfasts and 14 mains, seeding the RNG from the
    /// configuration (entropy when unseeded).
    pub fn select(
        &self,
        catalog: &Catalog,
        profile: &NutritionProfile,
    ) -> Result<Selection, SelectionError> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        self.select_with_rng(catalog, profile, &mut rng)
    }

    /// Selects with an injected random source. Identical inputs and RNG
    /// state produce an identical selection.
    pub fn select_with_rng<R: Rng>(
        &self,
        catalog: &Catalog,
        profile: &NutritionProfile,
        rng: &mut R,
    ) -> Result<Selection, SelectionError> {
        let engine = ScoringEngine::new(profile);
        let eligible = engine.score_pool(
            catalog.recipes().iter().filter(|r| profile.admits(r)),
        );

        let mut breakfast_pool = Vec::new();
        let mut main_pool = Vec::new();
        for scored in eligible {
            match scored.recipe.category {
                MealCategory::Breakfast => breakfast_pool.push(scored),
                MealCategory::MainMeal => main_pool.push(scored),
                MealCategory::Unclassified => {}
            }
        }

        let breakfast_tier = self.rank(breakfast_pool);
        let main_tier = self.rank(main_pool);
        debug!(
            breakfast_tier = breakfast_tier.len(),
            main_tier = main_tier.len(),
            profile = ?profile.kind,
            "heuristic pools ranked"
        );

        let mut used = HashSet::new();
        let breakfasts = self.sample(
            &breakfast_tier,
            BREAKFASTS_PER_WEEK,
            MealCategory::Breakfast,
            &mut used,
            rng,
        )?;
        let mains = self.sample(
            &main_tier,
            MAINS_PER_WEEK,
            MealCategory::MainMeal,
            &mut used,
            rng,
        )?;

        Ok(Selection { breakfasts, mains })
    }

    /// Ranking phase: stable score-descending order with ascending-id
    /// tie-break, truncated to the top tier.
    pub fn rank<'a>(&self, mut pool: Vec<ScoredRecipe<'a>>) -> Vec<ScoredRecipe<'a>> {
        pool.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.recipe.id.cmp(&b.recipe.id))
        });
        pool.truncate(self.config.top_tier);
        pool
    }

    /// Sampling phase: uniform draws without replacement, rejecting ids
    /// already used elsewhere in the menu.
    fn sample<R: Rng>(
        &self,
        tier: &[ScoredRecipe<'_>],
        needed: usize,
        category: MealCategory,
        used: &mut HashSet<crate::catalog::RecipeId>,
        rng: &mut R,
    ) -> Result<Vec<crate::catalog::Recipe>, SelectionError> {
        let available = tier
            .iter()
            .filter(|s| !used.contains(&s.recipe.id))
            .count();
        if available < needed {
            return Err(SelectionError::PoolExhausted {
                category,
                needed,
                available,
            });
        }

        let mut chosen = Vec::with_capacity(needed);
        while chosen.len() < needed {
            let mut attempts = 0;
            loop {
                if attempts >= self.config.max_attempts {
                    return Err(SelectionError::AttemptsExhausted {
                        category,
                        attempts,
                    });
                }
                attempts += 1;

                let pick = &tier[rng.random_range(0..tier.len())];
                if used.insert(pick.recipe.id) {
                    chosen.push(pick.recipe.clone());
                    break;
                }
            }
        }
        Ok(chosen)
    }
}
