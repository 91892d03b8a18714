//! Two-phase keyword classification of recipes into meal categories.
//!
//! Phase 1 (exclusion): any tag hit in [`MAIN_MEAL_KEYWORDS`] classifies
//! the recipe as a main meal immediately. Phase 2 (inclusion): any tag hit
//! in [`BREAKFAST_KEYWORDS`] classifies it as a breakfast. Recipes that
//! match neither phase stay unclassified and are excluded from both slot
//! pools. Exclusion always dominates: a recipe tagged both "dinner" and
//! "breakfast" is a main meal.
//!
//! Classification is a pure function of the tag set. Matching is
//! case-insensitive, against either the whole tag or any of its
//! hyphen/whitespace-delimited tokens, so "main-dish" hits "main-dish"
//! and "low-fat-breakfast" hits "breakfast".

use super::recipe::MealCategory;
use tracing::trace;

/// Tags that mark a recipe as a main meal (phase 1, exclusion).
///
/// Keyword list derived from tag-frequency analysis of the Food.com
/// dataset: meat/fish terms, dish types, savory staples, and
/// non-meal items (mixes, pure desserts).
pub const MAIN_MEAL_KEYWORDS: &[&str] = &[
    // Meat & fish
    "chicken", "poultry", "beef", "steak", "pork", "lamb", "sheep", "meat",
    "fish", "salmon", "tuna", "shrimp", "seafood", "cod", "tilapia", "halibut",
    "crab", "burger", "wings", "thighs", "roast", "brisket", "ribs", "venison",
    "duck",
    // Dish types
    "dinner", "supper", "lunch", "main-dish", "soup", "stew", "chili", "curry",
    "pasta", "pizza", "lasagna", "spaghetti", "noodle", "ravioli", "risotto",
    "casserole", "taco", "burrito", "enchilada", "quesadilla", "sandwich",
    // Savory staples
    "onion", "garlic", "rice", "potato", "beans", "gravy", "soy", "mustard",
    // Not a meal on its own
    "jello", "dessert", "cookie", "cake", "brownie", "cupcake", "frosting",
    "candy", "snack", "mix", "seasoning", "rub", "sauce", "dip",
];

/// Tags that mark a recipe as a breakfast (phase 2, inclusion).
pub const BREAKFAST_KEYWORDS: &[&str] = &[
    "breakfast", "brunch", "pancakes", "waffles", "omelet", "scramble",
    "cereal", "morning", "yogurt", "oatmeal", "granola", "porridge", "toast",
    "muffins", "crepes", "smoothie", "coffee", "latte", "egg",
];

/// Classifies a recipe from its tag set.
pub fn classify(tags: &[String]) -> MealCategory {
    let lowered: Vec<String> = tags.iter().map(|t| t.trim().to_lowercase()).collect();

    let main_hit = lowered.iter().any(|t| hits(t, MAIN_MEAL_KEYWORDS));
    let breakfast_hit = lowered.iter().any(|t| hits(t, BREAKFAST_KEYWORDS));

    if main_hit {
        if breakfast_hit {
            trace!(tags = ?tags, "ambiguous tags, exclusion phase wins");
        }
        MealCategory::MainMeal
    } else if breakfast_hit {
        MealCategory::Breakfast
    } else {
        MealCategory::Unclassified
    }
}

/// Whether a lowercased tag matches any keyword, either as the whole tag
/// or as one of its tokens.
fn hits(tag: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        tag == *kw || tag.split(['-', ' ']).any(|token| token == *kw)
    })
}
