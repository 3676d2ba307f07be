use super::PolyZq;
use crate::field::element::Zq;
use num_bigint::BigUint;

fn q() -> BigUint {
    BigUint::from(7919u32)
}

#[test]
fn from_coeffs_trims_trailing_zeros() {
    let p = PolyZq::from_coeffs(vec![BigUint::from(1u32), BigUint::from(0u32)], q());
    assert_eq!(p.degree(), Some(0));
}

#[test]
fn zero_poly_has_no_degree() {
    let p = PolyZq::zero(q());
    assert!(p.is_zero());
    assert_eq!(p.degree(), None);
}

#[test]
fn add_mul_against_evaluate() {
    let modulus = q();
    let a = PolyZq::from_coeffs(vec![BigUint::from(1u32), BigUint::from(2u32)], modulus.clone()); // 1 + 2x
    let b = PolyZq::from_coeffs(vec![BigUint::from(3u32), BigUint::from(4u32)], modulus.clone()); // 3 + 4x
    let sum = a.add(&b);
    let prod = a.mul(&b);
    let x = Zq::new(BigUint::from(5u32), modulus.clone());
    assert_eq!(sum.evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
    assert_eq!(prod.evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
}

#[test]
fn div_rem_reconstructs_dividend() {
    let modulus = q();
    let dividend = PolyZq::from_coeffs(
        vec![BigUint::from(1u32), BigUint::from(2u32), BigUint::from(1u32)],
        modulus.clone(),
    ); // (x+1)^2
    let divisor = PolyZq::from_coeffs(vec![BigUint::from(1u32), BigUint::from(1u32)], modulus.clone());
    let (quot, rem) = dividend.div_rem(&divisor).unwrap();
    assert!(rem.is_zero());
    let reconstructed = quot.mul(&divisor);
    assert_eq!(reconstructed.coefficients(), dividend.coefficients());
}

#[test]
fn gcd_of_shared_factor() {
    let modulus = q();
    let shared = PolyZq::from_coeffs(vec![BigUint::from(1u32), BigUint::from(1u32)], modulus.clone()); // x + 1
    let other_a = PolyZq::from_coeffs(vec![BigUint::from(2u32), BigUint::from(1u32)], modulus.clone()); // x + 2
    let other_b = PolyZq::from_coeffs(vec![BigUint::from(3u32), BigUint::from(1u32)], modulus.clone()); // x + 3
    let a = shared.mul(&other_a);
    let b = shared.mul(&other_b);
    let g = a.gcd(&b).unwrap();
    assert_eq!(g.degree(), Some(1));
}
