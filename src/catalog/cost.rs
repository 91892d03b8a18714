//! Linear cost estimation from macronutrient percentages.
//!
//! `C = BASE_COST + 0.035·P + 0.015·F + 0.005·Carb`, rounded to cents.
//! Protein-heavy foods (meat, fish, dairy) tend to be the most expensive,
//! hence the factor ordering. All coefficients are non-negative and the
//! base is positive, so the estimate is always at least [`BASE_COST`].

use super::recipe::Macronutrients;

/// Base cost per recipe, in arbitrary monetary units.
pub const BASE_COST: f64 = 0.50;
/// Cost per %DV of protein.
pub const PROTEIN_FACTOR: f64 = 0.035;
/// Cost per %DV of fat.
pub const FAT_FACTOR: f64 = 0.015;
/// Cost per %DV of carbohydrates.
pub const CARB_FACTOR: f64 = 0.005;

/// Estimates the monetary cost of one serving.
pub fn estimate_cost(macros: &Macronutrients) -> f64 {
    let raw = BASE_COST
        + macros.protein_pct_dv * PROTEIN_FACTOR
        + macros.fat_pct_dv * FAT_FACTOR
        + macros.carb_pct_dv * CARB_FACTOR;
    round_cents(raw)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
