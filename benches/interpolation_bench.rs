//! Benchmarks for the two components whose whole reason for existing
//! is speed: SP interpolation (C7) and output-sensitive multiplication
//! (C9). Both are compared across a handful of term counts to show the
//! roughly-linear-in-`T` behaviour the sparse representation promises.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spoly::{primes, sp_interp, support};

fn bench_sp_interp(c: &mut Criterion) {
    for &terms in &[10usize, 50, 200] {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let degree = BigUint::from(1_000_000u32);
        let height = BigUint::from(1_000u32);
        let p = support::randtest(terms, &degree, &height, &mut rng);
        let basis = primes::sp_basis_params(terms, &height, &degree, &mut rng);
        let eval = sp_interp::sp_eval(&basis, &p);

        c.bench_function(&format!("sp_interp_terms_{terms}"), |b| {
            b.iter(|| sp_interp::sp_interp(black_box(&basis), black_box(&eval)).unwrap())
        });
    }
}

fn bench_mul_os(c: &mut Criterion) {
    for &terms in &[10usize, 50, 200] {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let degree = BigUint::from(1_000_000u32);
        let height = BigUint::from(1_000u32);
        let f = support::randtest(terms, &degree, &height, &mut rng);
        let g = support::randtest(terms, &degree, &height, &mut rng);

        c.bench_function(&format!("mul_os_terms_{terms}"), |b| {
            b.iter(|| spoly::mul_os(black_box(&f), black_box(&g), &mut rng.clone()).unwrap())
        });
    }
}

criterion_group!(benches, bench_sp_interp, bench_mul_os);
criterion_main!(benches);
