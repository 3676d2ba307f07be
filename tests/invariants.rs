//! Cross-module checks for the quantified invariants that don't belong
//! to any single component: additive inverses, shift exactness,
//! multiplicative distributivity, the dense round trip, and the
//! transposed-Vandermonde worked example.

use num_bigint::{BigInt, BigUint};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use spoly::field::element::Zq;
use spoly::field::poly::subproduct::{transp_vandermonde_inv, transp_vandermonde};
use spoly::poly::SpPoly;
use spoly::support;

fn poly_strategy(max_terms: u32, max_degree: u32, max_height: u32) -> impl Strategy<Value = SpPoly> {
    prop::collection::vec(
        (
            (-(max_height as i64)..=(max_height as i64)),
            0u32..=max_degree,
        ),
        0..=max_terms as usize,
    )
    .prop_map(|terms| {
        let terms: Vec<(BigInt, BigInt)> = terms
            .into_iter()
            .filter(|(c, _)| *c != 0)
            .map(|(c, e)| (BigInt::from(c), BigInt::from(e)))
            .collect();
        SpPoly::from_terms(terms)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn add_then_sub_is_identity(p in poly_strategy(10, 2000, 500), q in poly_strategy(10, 2000, 500)) {
        prop_assert_eq!(p.add(&q).sub(&q), p.clone());
        prop_assert_eq!(p.sub(&q).add(&q), p);
    }

    #[test]
    fn shift_left_translates_every_exponent_exactly(p in poly_strategy(10, 2000, 500), n in -500i64..=500) {
        let shifted = p.shift(&BigInt::from(n));
        for (e, e_shifted) in p.expons().iter().zip(shifted.expons().iter()) {
            prop_assert_eq!(e_shifted, &(e + n));
        }
    }

    #[test]
    fn mul_distributes_over_add(
        f in poly_strategy(6, 500, 100),
        g in poly_strategy(6, 500, 100),
        h in poly_strategy(6, 500, 100),
    ) {
        let lhs = f.mul_classical(&g.add(&h));
        let rhs = f.mul_classical(&g).add(&f.mul_classical(&h));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn dense_round_trip_holds_when_within_bounds(p in poly_strategy(20, 10_000, 1_000)) {
        let dense = p.to_dense(20_000).unwrap();
        prop_assert_eq!(SpPoly::from_dense(&dense), p);
    }

    #[test]
    fn rem_cyc_is_idempotent(p in poly_strategy(10, 5000, 500), e in 1u32..200) {
        let modulus = BigUint::from(e);
        let once = support::rem_cyc(&p, &modulus);
        let twice = support::rem_cyc(&once, &modulus);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn s5_large_polynomial_exceeding_the_bound_is_rejected() {
    let mut rng = ChaCha8Rng::seed_from_u64(55);
    let p = support::randtest(100, &BigUint::from(2_000_000u32), &BigUint::from(2u32).pow(199), &mut rng);
    match p.to_dense(1_000_000) {
        Ok(dense) => assert_eq!(SpPoly::from_dense(&dense), p),
        Err(spoly::SpolyError::DegreeTooLarge) => {}
        Err(other) => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn s6_transposed_vandermonde_worked_example() {
    let modulus = BigUint::from(11u32);
    let v = vec![
        Zq::new(BigUint::from(3u32), modulus.clone()),
        Zq::new(BigUint::from(5u32), modulus.clone()),
        Zq::new(BigUint::from(7u32), modulus.clone()),
    ];
    let x = vec![
        Zq::new(BigUint::from(1u32), modulus.clone()),
        Zq::new(BigUint::from(2u32), modulus.clone()),
        Zq::new(BigUint::from(4u32), modulus.clone()),
    ];

    let b = transp_vandermonde(&v, &x, 3, &modulus);
    assert_eq!(b[0].value(), &BigUint::from(7u32));
    assert_eq!(b[1].value(), &BigUint::from(8u32));
    assert_eq!(b[2].value(), &BigUint::from(2u32));

    let recovered = transp_vandermonde_inv(&v, &b, &modulus);
    assert_eq!(recovered, x);
}
