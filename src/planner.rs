//! End-to-end pipeline orchestration.
//!
//! One planner invocation is a synchronous batch pass over an immutable
//! catalog snapshot: score, select (heuristic or exact), assemble,
//! aggregate. No state is shared across invocations and nothing retries
//! internally; when a run fails, the caller picks the fallback (relaxed
//! profile, other method, longer time limit).

use crate::catalog::Catalog;
use crate::error::PlanError;
use crate::heuristic::{HeuristicSelector, SelectorConfig};
use crate::menu::{
    DistributionOrder, MenuAssembler, ShoppingList, WeeklyMenu, DEFAULT_TOP_N,
};
use crate::milp::{ExactSelector, MilpSolver, SolverConfig};
use crate::profile::NutritionProfile;
use rand::Rng;

/// Generates weekly menus for one nutrition profile.
///
/// # Examples
///
/// ```
/// use menuplan::catalog::{Catalog, Macronutrients, Recipe};
/// use menuplan::heuristic::SelectorConfig;
/// use menuplan::planner::MenuPlanner;
/// use menuplan::profile::NutritionProfile;
///
/// let mut recipes = Vec::new();
/// for id in 0..10 {
///     recipes.push(Recipe::new(
///         id, format!("porridge {id}"), vec!["oatmeal".into()], vec!["oats".into()],
///         Macronutrients { protein_pct_dv: 15.0, fat_pct_dv: 5.0, carb_pct_dv: 25.0 },
///         350.0, Some(4.0),
///     ));
/// }
/// for id in 10..40 {
///     recipes.push(Recipe::new(
///         id, format!("stew {id}"), vec!["stew".into()], vec!["beef".into()],
///         Macronutrients { protein_pct_dv: 30.0, fat_pct_dv: 15.0, carb_pct_dv: 20.0 },
///         550.0, Some(3.5),
///     ));
/// }
/// let catalog = Catalog::new(recipes);
///
/// let planner = MenuPlanner::new(NutritionProfile::balanced())
///     .with_selector_config(SelectorConfig::default().with_seed(42));
/// let menu = planner.heuristic_menu(&catalog).unwrap();
/// let list = planner.shopping_list(&menu);
/// assert_eq!(menu.slots().len(), 21);
/// assert!(!list.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MenuPlanner {
    profile: NutritionProfile,
    selector_config: SelectorConfig,
    solver_config: SolverConfig,
    order: DistributionOrder,
    top_n: usize,
}

impl MenuPlanner {
    pub fn new(profile: NutritionProfile) -> Self {
        Self {
            profile,
            selector_config: SelectorConfig::default(),
            solver_config: SolverConfig::default(),
            order: DistributionOrder::default(),
            top_n: DEFAULT_TOP_N,
        }
    }

    pub fn with_selector_config(mut self, config: SelectorConfig) -> Self {
        self.selector_config = config;
        self
    }

    pub fn with_solver_config(mut self, config: SolverConfig) -> Self {
        self.solver_config = config;
        self
    }

    pub fn with_order(mut self, order: DistributionOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_shopping_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn profile(&self) -> &NutritionProfile {
        &self.profile
    }

    /// Heuristic path: ranked random sampling, assembled into a week.
    pub fn heuristic_menu(&self, catalog: &Catalog) -> Result<WeeklyMenu, PlanError> {
        let selector = HeuristicSelector::new(self.selector_config.clone());
        let selection = selector.select(catalog, &self.profile)?;
        Ok(self.assembler().assemble(selection)?)
    }

    /// Heuristic path with an injected random source.
    pub fn heuristic_menu_with_rng<R: Rng>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<WeeklyMenu, PlanError> {
        let selector = HeuristicSelector::new(self.selector_config.clone());
        let selection = selector.select_with_rng(catalog, &self.profile, rng)?;
        Ok(self.assembler().assemble(selection)?)
    }

    /// Exact path: MILP formulation solved by the given backend.
    pub fn exact_menu<S: MilpSolver>(
        &self,
        catalog: &Catalog,
        solver: S,
    ) -> Result<WeeklyMenu, PlanError> {
        let selector = ExactSelector::new(solver).with_config(self.solver_config.clone());
        let selection = selector.select(catalog, &self.profile)?;
        Ok(self.assembler().assemble(selection)?)
    }

    /// Shopping list for an assembled menu.
    pub fn shopping_list(&self, menu: &WeeklyMenu) -> ShoppingList {
        ShoppingList::aggregate(menu, self.top_n)
    }

    fn assembler(&self) -> MenuAssembler {
        MenuAssembler::new().with_order(self.order)
    }
}
