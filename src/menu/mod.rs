//! Menu assembly and derived views.
//!
//! Both selection paths produce an unordered [`Selection`]; the
//! [`MenuAssembler`] validates the weekly invariants (7 breakfasts, 14
//! mains, no repeated recipe) and distributes the recipes over the 7 days.
//! The [`ShoppingList`] is a pure aggregation over the assembled menu.

mod assembler;
mod shopping;
mod types;

pub use assembler::{DistributionOrder, MenuAssembler, Selection};
pub use shopping::{ShoppingItem, ShoppingList, DEFAULT_TOP_N};
pub use types::{
    MealType, MenuSlot, MenuSummary, WeeklyMenu, BREAKFASTS_PER_WEEK, DAYS_PER_WEEK,
    MAINS_PER_WEEK, SLOTS_PER_WEEK,
};
