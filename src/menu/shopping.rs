//! Shopping list aggregation over an assembled menu.

use super::types::WeeklyMenu;
use std::collections::HashMap;

/// Default cap on the number of listed ingredients.
pub const DEFAULT_TOP_N: usize = 30;

/// One consolidated ingredient line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShoppingItem {
    /// Lowercase-normalized ingredient name.
    pub name: String,
    /// Number of menu recipes using this ingredient.
    pub count: usize,
}

/// Ingredient occurrence counts across the 21 menu recipes, in descending
/// count order (ties broken by first appearance), capped at `top_n`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    /// How many distinct ingredients fell below the cap.
    pub truncated: usize,
}

impl ShoppingList {
    /// Flattens, counts, sorts, and truncates the menu's ingredients.
    ///
    /// Pure and deterministic: the same menu always yields the same list.
    pub fn aggregate(menu: &WeeklyMenu, top_n: usize) -> Self {
        // name -> (count, first-seen rank)
        let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
        let mut next_rank = 0usize;

        for slot in menu.slots() {
            for ingredient in &slot.recipe.ingredients {
                let name = ingredient.trim().to_lowercase();
                if name.is_empty() {
                    continue;
                }
                let entry = counts.entry(name).or_insert_with(|| {
                    let rank = next_rank;
                    next_rank += 1;
                    (0, rank)
                });
                entry.0 += 1;
            }
        }

        let distinct = counts.len();
        let mut entries: Vec<(String, usize, usize)> = counts
            .into_iter()
            .map(|(name, (count, rank))| (name, count, rank))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        entries.truncate(top_n);

        Self {
            truncated: distinct - entries.len(),
            items: entries
                .into_iter()
                .map(|(name, count, _)| ShoppingItem { name, count })
                .collect(),
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
