use super::SpPoly;
use num_bigint::BigInt;

fn t(c: i64, e: i64) -> (BigInt, BigInt) {
    (BigInt::from(c), BigInt::from(e))
}

#[test]
fn from_terms_sorts_and_combines() {
    let p = SpPoly::from_terms(vec![t(1, 2), t(3, 5), t(-1, 2)]);
    // (1x^2 - 1x^2) cancels, leaving only 3x^5.
    assert_eq!(p.term_count(), 1);
    assert_eq!(p.degree(), Some(&BigInt::from(5)));
}

#[test]
fn zero_poly_invariants() {
    let z = SpPoly::zero();
    assert!(z.is_zero());
    assert_eq!(z.degree(), None);
    assert_eq!(z.low_degree(), None);
}

#[test]
fn add_matches_pointwise_evaluation() {
    let a = SpPoly::from_terms(vec![t(1, 0), t(2, 1), t(3, 2)]);
    let b = SpPoly::from_terms(vec![t(3, 0), t(4, 1), t(5, 11)]);
    let sum = a.add(&b);
    let x = BigInt::from(2);
    assert_eq!(sum.evaluate(&x), a.evaluate(&x) + b.evaluate(&x));
}

#[test]
fn scalar_addmul_no_overlap_append() {
    let base = SpPoly::from_terms(vec![t(1, 10), t(2, 9)]);
    let low = SpPoly::from_terms(vec![t(5, 1)]);
    let result = base.scalar_addmul(&BigInt::from(3), &low);
    assert_eq!(result.term_count(), 3);
    assert_eq!(result.coeff_at(&BigInt::from(1)), BigInt::from(15));
}

#[test]
fn scalar_addmul_no_overlap_prepend() {
    let base = SpPoly::from_terms(vec![t(1, 1)]);
    let high = SpPoly::from_terms(vec![t(2, 10)]);
    let result = base.scalar_addmul(&BigInt::from(2), &high);
    assert_eq!(result.term_count(), 2);
    assert_eq!(result.coeff_at(&BigInt::from(10)), BigInt::from(4));
}

#[test]
fn mul_classical_matches_evaluation() {
    let a = SpPoly::from_terms(vec![t(5, 0), t(2, 2)]);
    let b = SpPoly::from_terms(vec![t(6, 0), t(2, 1)]);
    let prod = a.mul_classical(&b);
    let x = BigInt::from(3);
    assert_eq!(prod.evaluate(&x), a.evaluate(&x) * b.evaluate(&x));
}

#[test]
fn shift_translates_exponents() {
    let p = SpPoly::from_terms(vec![t(1, 0), t(2, 3)]);
    let shifted = p.shift(&BigInt::from(5));
    assert_eq!(shifted.degree(), Some(&BigInt::from(8)));
    assert_eq!(shifted.low_degree(), Some(&BigInt::from(5)));
}

#[test]
fn set_coeff_inserts_and_removes() {
    let mut p = SpPoly::from_terms(vec![t(1, 2)]);
    p.set_coeff(BigInt::from(5), BigInt::from(7));
    assert_eq!(p.term_count(), 2);
    p.set_coeff(BigInt::from(2), BigInt::from(0));
    assert_eq!(p.term_count(), 1);
    assert_eq!(p.coeff_at(&BigInt::from(2)), BigInt::from(0));
}

#[test]
fn height_is_max_abs_coefficient() {
    let p = SpPoly::from_terms(vec![t(-7, 0), t(3, 1)]);
    assert_eq!(p.height(), Some(num_bigint::BigUint::from(7u32)));
}
