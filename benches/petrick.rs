//! Minimization pipeline benchmarks.
//!
//! Run with:
//! ```bash
//! cargo bench --bench petrick
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use qm_rs::config::{ColumnRule, Config};
use qm_rs::minimize::{Minimizer, Problem};
use qm_rs::primes::prime_implicants;
use qm_rs::types::{Minterm, Width};

// ============================================================================
// Class-material cases
// ============================================================================

fn bench_class_cases(c: &mut Criterion) {
    let cases: [(&str, u32, &[i64], &[i64]); 5] = [
        ("material_1", 4, &[0, 4, 8, 10, 11, 12], &[13, 15]),
        ("cyclic", 3, &[0, 1, 2, 5, 6, 7], &[]),
        ("material_3", 4, &[0, 2, 5, 6, 7, 8, 10, 12, 13, 14, 15], &[]),
        ("material_4", 4, &[0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13], &[]),
        ("wikipedia", 4, &[4, 8, 10, 11, 12, 15], &[9, 14]),
    ];

    let mut group = c.benchmark_group("class_cases");
    for petrick_only in [false, true] {
        let minimizer = Minimizer::new(Config {
            petrick_only,
            column_rule: ColumnRule::Dominating,
            ..Config::default()
        });
        let mode = if petrick_only { "petrick_only" } else { "reduce" };
        for (name, width, minterms, dont_cares) in cases {
            let problem = Problem::new(width, minterms.iter().copied(), dont_cares.iter().copied())
                .expect("valid case");
            group.bench_with_input(BenchmarkId::new(mode, name), &problem, |b, problem| {
                b.iter(|| black_box(minimizer.minimize(black_box(problem))))
            });
        }
    }
    group.finish();
}

// ============================================================================
// Scaling with the number of variables
// ============================================================================

/// Minterms `t` with `t % 3 != 0`: many overlapping primes at every width.
fn not_divisible_by_three(width: u32) -> Vec<i64> {
    (0..1i64 << width).filter(|t| t % 3 != 0).collect()
}

fn bench_prime_implicants(c: &mut Criterion) {
    let mut group = c.benchmark_group("prime_implicants");
    for width in [4u32, 6, 8, 10] {
        let minterms = not_divisible_by_three(width)
            .into_iter()
            .map(|t| t as Minterm)
            .collect();
        let dont_cares = Default::default();
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, &width| {
            b.iter(|| black_box(prime_implicants(Width::new(width), &minterms, &dont_cares)))
        });
    }
    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let minimizer = Minimizer::new(Config {
        column_rule: ColumnRule::Dominating,
        ..Config::default()
    });

    let mut group = c.benchmark_group("full_pipeline");
    group.sample_size(20);
    for width in [4u32, 5, 6, 7] {
        let problem = Problem::new(width, not_divisible_by_three(width), []).expect("valid case");
        group.bench_with_input(BenchmarkId::from_parameter(width), &problem, |b, problem| {
            b.iter(|| black_box(minimizer.minimize(black_box(problem))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_class_cases, bench_prime_implicants, bench_full_pipeline);
criterion_main!(benches);
