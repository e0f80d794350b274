use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sat::*;

/// Uniform random 3-SAT near the satisfiability threshold.
fn random_3sat(rng: &mut StdRng, num_vars: usize, num_clauses: usize) -> Formula {
    let clauses = (0..num_clauses)
        .map(|_| {
            (0..3)
                .map(|_| {
                    let var = rng.gen_range(1, num_vars as isize + 1);
                    if rng.gen() {
                        var
                    } else {
                        -var
                    }
                })
                .collect::<Vec<isize>>()
        })
        .collect::<Vec<_>>();
    Formula::from(clauses)
}

pub fn uniform(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5a7);
    let formulas = (0..10)
        .map(|_| random_3sat(&mut rng, 40, 170))
        .collect::<Vec<_>>();

    c.bench_function("random 3-sat v40 c170", |b| {
        b.iter(|| {
            for formula in formulas.iter() {
                Solver::new(formula.clone()).solve().unwrap();
            }
        })
    });

    c.bench_function("random 3-sat v40 c170 watched", |b| {
        let config = Config {
            learned_clauses: LearnedClauses::Watch,
            ..Config::default()
        };
        b.iter(|| {
            for formula in formulas.iter() {
                Solver::with_config(formula.clone(), config.clone())
                    .solve()
                    .unwrap();
            }
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = uniform
}
criterion_main!(benches);
