//! Criterion benchmarks for menuplan selection paths.
//!
//! Uses a synthetic deterministic catalog to measure selection overhead
//! independent of any real recipe data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use menuplan::catalog::{Catalog, Macronutrients, Recipe};
use menuplan::heuristic::{HeuristicSelector, SelectorConfig};
use menuplan::milp::{ConstraintFormulator, ExactSelector, GreedyMilpSolver};
use menuplan::profile::NutritionProfile;

// ===========================================================================
// Synthetic catalog: n recipes, ~1/3 breakfasts, deterministic macros
// ===========================================================================

fn synthetic_catalog(n: u64) -> Catalog {
    let recipes = (0..n)
        .map(|id| {
            let tag = if id % 3 == 0 { "breakfast" } else { "dinner" };
            Recipe::new(
                id,
                format!("recipe-{id}"),
                vec![tag.to_string()],
                vec![
                    format!("ingredient-{}", id % 40),
                    format!("ingredient-{}", id % 17),
                ],
                Macronutrients {
                    protein_pct_dv: 12.0 + (id % 30) as f64,
                    fat_pct_dv: 4.0 + (id % 20) as f64,
                    carb_pct_dv: 10.0 + (id % 35) as f64,
                },
                320.0 + (id % 40) as f64 * 10.0,
                Some(3.0 + (id % 5) as f64 * 0.5),
            )
        })
        .collect();
    Catalog::new(recipes)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_heuristic_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("heuristic_select");
    group.sample_size(20);

    let profile = NutritionProfile::balanced();
    for &n in &[200u64, 1_000, 5_000] {
        let catalog = synthetic_catalog(n);
        let selector = HeuristicSelector::new(SelectorConfig::default().with_seed(42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, cat| {
            b.iter(|| {
                let selection = selector.select(black_box(cat), black_box(&profile));
                black_box(selection)
            })
        });
    }
    group.finish();
}

fn bench_milp_formulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("milp_formulate");
    group.sample_size(20);

    let profile = NutritionProfile::balanced();
    for &n in &[200u64, 1_000, 5_000] {
        let catalog = synthetic_catalog(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, cat| {
            b.iter(|| {
                let formulation =
                    ConstraintFormulator::formulate(black_box(cat), black_box(&profile));
                black_box(formulation)
            })
        });
    }
    group.finish();
}

fn bench_exact_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_select_greedy");
    group.sample_size(10);

    let profile = NutritionProfile::balanced();
    for &n in &[200u64, 1_000, 5_000] {
        let catalog = synthetic_catalog(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, cat| {
            b.iter(|| {
                let selector = ExactSelector::new(GreedyMilpSolver::new());
                let selection = selector.select(black_box(cat), black_box(&profile));
                black_box(selection)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_heuristic_select,
    bench_milp_formulate,
    bench_exact_select
);
criterion_main!(benches);
