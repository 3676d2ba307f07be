//! Big-prime (BP) interpolation engine (C6).
//!
//! Evaluates a sparse polynomial at the first `2T` powers of a
//! primitive `2^k`-th root of unity `ω` modulo a prime `q`, then
//! recovers the polynomial from that evaluation vector via
//! Berlekamp–Massey (the "Prony polynomial", C5), the power-of-
//! generator root finder (C4), and the transposed Vandermonde inverse
//! (C3). Grounded on `fmpz_spoly/bp_interp_eval.c` and
//! `fmpz_spoly_bp_interp.c`.

use crate::error::{SpolyError, SpolyResult};
use crate::field::element::Zq;
use crate::field::poly::algorithms::minpoly;
use crate::field::poly::subproduct::transp_vandermonde_inv;
use crate::numutil;
use crate::poly::SpPoly;
use crate::primes::BpBasis;
use crate::roots::power_of_generator_roots;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// The evaluation vector a BP basis produces: `evals[i] = P(ω^i) mod
/// q` for `i = 0..basis.num_points`.
#[derive(Clone, Debug)]
pub struct BpEval {
    pub evals: Vec<Zq>,
}

/// Evaluates `p` at the basis's sample points `1, ω, ω², …,
/// ω^{num_points - 1} mod q`.
///
/// Grounded on `fmpz_spoly_bp_interp_eval`: each sample is
/// `Σ_i c_i · ω^{e_i · j} mod q`, computed term-by-term via modular
/// exponentiation (this is `evaluate_mod` from C10, specialized to a
/// `Zq` base rather than a raw integer).
pub fn bp_eval(basis: &BpBasis, p: &SpPoly) -> BpEval {
    let order = num_bigint::BigUint::one() << basis.k;
    let evals = (0..basis.num_points)
        .map(|i| {
            let point = basis.omega.pow(&num_bigint::BigUint::from(i as u64));
            evaluate_at(p, &point, &basis.q, &order)
        })
        .collect();
    BpEval { evals }
}

/// `Σ c_i * point^{e_i} mod q`. Exponents are reduced modulo `order`
/// (omega's multiplicative order) before the modular power, not
/// modulo `q` — `point` is a power of `omega`, so `point^order = 1`
/// and only `e mod order` affects the result; `q` is typically far
/// larger than `order` and reducing by it instead would be wrong.
fn evaluate_at(p: &SpPoly, point: &Zq, q: &num_bigint::BigUint, order: &num_bigint::BigUint) -> Zq {
    let order_signed = BigInt::from(order.clone());
    let mut acc = Zq::zero(q.clone());
    for (c, e) in p.terms() {
        let e_mod = ((e % &order_signed) + &order_signed) % &order_signed;
        let exp = e_mod.to_biguint().expect("non-negative after reduction");
        let term = Zq::from_signed(c, q.clone()) * point.pow(&exp);
        acc = acc + term;
    }
    acc
}

/// Recovers the unique sparse polynomial consistent with `eval`, given
/// that it has at most `basis.num_points / 2` terms (the `T` the basis
/// was built for) and height below the bound the basis's prime `q`
/// was chosen to exceed twice over.
///
/// Returns [`SpolyError::EstimateTooLow`] if Berlekamp–Massey finds
/// more terms than the basis was sized for — the caller's sparsity
/// estimate was too small and it should retry with a larger `T`.
pub fn bp_interp(basis: &BpBasis, eval: &BpEval) -> SpolyResult<SpPoly> {
    debug_assert_eq!(eval.evals.len(), basis.num_points);

    let lambda = minpoly(&eval.evals, &basis.q);
    let t = lambda.degree().unwrap_or(0);
    if t > basis.num_points / 2 {
        return Err(SpolyError::EstimateTooLow);
    }
    if t == 0 {
        return Ok(SpPoly::zero());
    }

    let roots = power_of_generator_roots(&lambda, &basis.omega, basis.k)?;

    // Recover each root's discrete log as the term's exponent, and
    // solve the (inverse) transposed Vandermonde system against the
    // first t evaluations to recover coefficients.
    let mut ordered_roots: Vec<(Zq, u64)> = roots;
    ordered_roots.sort_by(|a, b| a.1.cmp(&b.1));

    let points: Vec<Zq> = ordered_roots.iter().map(|(r, _)| r.clone()).collect();
    let b: Vec<Zq> = eval.evals[..t].to_vec();
    let coeffs = transp_vandermonde_inv(&points, &b, &basis.q);

    let q_signed = BigInt::from(basis.q.clone());
    let mut terms = Vec::with_capacity(t);
    for ((_, log), coeff) in ordered_roots.iter().zip(coeffs.iter()) {
        let c = numutil::to_symmetric(&BigInt::from(coeff.value().clone()), &q_signed);
        if !c.is_zero() {
            terms.push((c, BigInt::from(*log)));
        }
    }
    Ok(SpPoly::from_terms(terms))
}
