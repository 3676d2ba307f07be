//! Support primitives (C10): exponent reduction, evaluation, and the
//! random-polynomial generators the rest of the crate's test suite
//! leans on.
//!
//! Grounded on `fmpz_spoly/evaluate_mod.c`, `fmpz_spoly_rem_cyc.c`, and
//! `fmpz_spoly_randtest.c`/`randtest_kron.c`.

use crate::field::element::Zq;
use crate::field::poly::subproduct::transp_vandermonde;
use crate::poly::SpPoly;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Signed, ToPrimitive, Zero};
use rand::Rng;

/// Below this many evaluation points, [`evaluate_powers`] evaluates
/// each point directly; at or above, it batches through the
/// subproduct-tree transposed Vandermonde map.
const EVAL_XOVER: usize = 32;

/// Reduces every exponent of `p` modulo `e` (wrapping negative
/// exponents into `[0, e)`), combining like terms and re-normalising.
pub fn rem_cyc(p: &SpPoly, e: &BigUint) -> SpPoly {
    let e_signed = BigInt::from(e.clone());
    let terms: Vec<(BigInt, BigInt)> = p
        .terms()
        .map(|(c, exp)| (c.clone(), reduce_nonneg(exp, &e_signed)))
        .collect();
    SpPoly::from_terms(terms)
}

/// Reduces `p` into a dense vector of length `e` indexed by exponent
/// mod `e`, each bucket holding the (unreduced, signed) sum of every
/// coefficient landing there.
pub fn rem_cyc_dense(p: &SpPoly, e: usize) -> Vec<BigInt> {
    let mut out = vec![BigInt::zero(); e];
    let e_big = BigInt::from(e as u64);
    for (c, exp) in p.terms() {
        let idx = reduce_nonneg(exp, &e_big)
            .to_usize()
            .expect("reduced exponent fits in usize");
        out[idx] += c;
    }
    out
}

/// Reduces `p` into a dense vector of length `exponent_modulus`,
/// indexed by exponent mod `exponent_modulus`, each bucket holding the
/// sum of contributing coefficients mod `coeff_modulus`.
///
/// When `shift` is not `1`, each term is additionally scaled by
/// `shift^{e mod (coeff_modulus - 1)}` before being folded in — the
/// "diversification" multiplier the SP interpolation engine's group
/// leaders apply so that colliding exponents only coincidentally
/// collide in their (scaled) coefficients too.
pub fn rem_cyc_mod_diverse(
    p: &SpPoly,
    exponent_modulus: &BigUint,
    coeff_modulus: &BigUint,
    shift: &BigUint,
) -> Vec<Zq> {
    let len = exponent_modulus
        .to_usize()
        .expect("exponent modulus fits in usize for any realistic basis");
    let mut out = vec![Zq::zero(coeff_modulus.clone()); len];
    let em_signed = BigInt::from(exponent_modulus.clone());
    let diversify = shift != &BigUint::one();
    let cm_minus_one = coeff_modulus - BigUint::one();
    let shift_zq = Zq::new(shift.clone(), coeff_modulus.clone());

    for (c, exp) in p.terms() {
        let e_mod = reduce_nonneg(exp, &em_signed);
        let idx = e_mod.to_usize().expect("reduced exponent fits in usize");
        let mut term = Zq::from_signed(c, coeff_modulus.clone());
        if diversify {
            let e_nonneg = e_mod.to_biguint().expect("non-negative after reduction");
            let shift_exp = &e_nonneg % &cm_minus_one;
            term = term * shift_zq.pow(&shift_exp);
        }
        out[idx] = out[idx].clone() + term;
    }
    out
}

/// Evaluates `p` at a single field element, handling negative (Laurent)
/// exponents by inverting `point` lazily and only once.
pub fn evaluate_mod(p: &SpPoly, point: &Zq) -> Zq {
    let modulus = point.modulus().clone();
    let mut point_inv: Option<Zq> = None;
    let mut acc = Zq::zero(modulus.clone());
    for (c, exp) in p.terms() {
        let base = if exp.is_negative() {
            if point_inv.is_none() {
                point_inv = Some(
                    point
                        .inverse()
                        .expect("evaluation point must be a unit to evaluate at a Laurent exponent"),
                );
            }
            let e_abs = (-exp).to_biguint().expect("negated negative exponent is non-negative");
            point_inv.as_ref().unwrap().pow(&e_abs)
        } else {
            let e_abs = exp.to_biguint().expect("non-negative exponent");
            point.pow(&e_abs)
        };
        acc = acc + Zq::from_signed(c, modulus.clone()) * base;
    }
    acc
}

/// Evaluates `p` at `w^0, w^1, ..., w^{len-1}`, the three-regime
/// dispatcher: direct per-point evaluation below [`EVAL_XOVER`] terms,
/// otherwise the batched transposed Vandermonde map, run either in
/// panels of `len` terms (when `p` has more terms than `len`) or as a
/// single pass (otherwise).
///
/// Each term `c_j x^{e_j}` contributes `c_j * w^{e_j * i}` to `res[i]`,
/// so the transposed Vandermonde map is fed `w^{e_j}` as the "point"
/// for term `j` directly — not a dense bucket indexed by exponent mod
/// `len`, which would only agree with `P(w^i)` when every exponent is
/// already less than `len`. Grounded on `fmpz_spoly/evaluate_powers.c`.
pub fn evaluate_powers(p: &SpPoly, w: &Zq, len: usize) -> Vec<Zq> {
    let modulus = w.modulus().clone();
    if len == 0 {
        return Vec::new();
    }
    if p.term_count() < EVAL_XOVER {
        let mut res = Vec::with_capacity(len);
        let mut wpow = Zq::one(modulus.clone());
        for _ in 0..len {
            res.push(evaluate_mod(p, &wpow));
            wpow = wpow * w.clone();
        }
        return res;
    }

    let terms: Vec<(&BigInt, &BigInt)> = p.terms().collect();

    if len < terms.len() {
        let mut res = vec![Zq::zero(modulus.clone()); len];
        for chunk in terms.chunks(len) {
            let panel_points: Vec<Zq> = chunk.iter().copied().map(|(_, e)| term_power(w, e)).collect();
            let panel_coeffs: Vec<Zq> = chunk
                .iter()
                .copied()
                .map(|(c, _)| Zq::from_signed(c, modulus.clone()))
                .collect();
            let panel = transp_vandermonde(&panel_points, &panel_coeffs, len, &modulus);
            for (slot, term) in res.iter_mut().zip(panel.into_iter()) {
                *slot = slot.clone() + term;
            }
        }
        res
    } else {
        let points: Vec<Zq> = terms.iter().copied().map(|(_, e)| term_power(w, e)).collect();
        let coeffs: Vec<Zq> = terms
            .iter()
            .copied()
            .map(|(c, _)| Zq::from_signed(c, modulus.clone()))
            .collect();
        transp_vandermonde(&points, &coeffs, len, &modulus)
    }
}

/// Computes `w^e`, inverting `w` first when `e` is negative.
fn term_power(w: &Zq, e: &BigInt) -> Zq {
    if e.is_negative() {
        let e_abs = (-e).to_biguint().expect("negated negative exponent is non-negative");
        w.inverse()
            .expect("generator must be a unit to evaluate at a Laurent exponent")
            .pow(&e_abs)
    } else {
        let e_abs = e.to_biguint().expect("non-negative exponent");
        w.pow(&e_abs)
    }
}

/// Kronecker-substitution packing: maps a multivariate exponent tuple
/// into a single univariate exponent via mixed-radix weights `bounds`,
/// `e = sum_i tuple[i] * prod_{j<i} bounds[j]`.
///
/// Grounded on `fmpz_spoly_randtest_kron`'s substitution scheme, used
/// by this crate's test generators to build multivariate-flavored test
/// vectors without a dedicated multivariate representation.
pub fn pack(tuple: &[BigInt], bounds: &[BigUint]) -> BigInt {
    debug_assert_eq!(tuple.len(), bounds.len());
    let mut acc = BigInt::zero();
    let mut weight = BigInt::one();
    for (t, b) in tuple.iter().zip(bounds.iter()) {
        acc += t * &weight;
        weight *= BigInt::from(b.clone());
    }
    acc
}

/// Inverse of [`pack`]: recovers the mixed-radix tuple from a packed
/// exponent.
pub fn unpack(mut e: BigInt, bounds: &[BigUint]) -> Vec<BigInt> {
    let mut out = Vec::with_capacity(bounds.len());
    for b in bounds {
        let b_signed = BigInt::from(b.clone());
        let digit = reduce_nonneg(&e, &b_signed);
        e = (e - &digit) / &b_signed;
        out.push(digit);
    }
    out
}

/// Builds a random sparse polynomial with at most `terms` nonzero
/// terms, exponents in `[0, degree]`, and coefficients with absolute
/// value at most `height`.
///
/// Grounded on `fmpz_spoly_randtest.c`.
pub fn randtest(terms: usize, degree: &BigUint, height: &BigUint, rng: &mut impl Rng) -> SpPoly {
    use num_bigint::RandBigInt;
    let mut built = std::collections::BTreeMap::new();
    let two_h = height * BigUint::from(2u32) + BigUint::one();
    for _ in 0..terms {
        let e = rng.gen_biguint_below(&(degree + BigUint::one()));
        let raw = rng.gen_biguint_below(&two_h);
        let c = BigInt::from(raw) - BigInt::from(height.clone());
        if !c.is_zero() {
            built.insert(BigInt::from(e), c);
        }
    }
    SpPoly::from_terms(built.into_iter().collect())
}

/// Builds a random sparse polynomial intended to be read as a
/// Kronecker-packed multivariate polynomial in `nvars` variables, each
/// with degree bound `var_degree`, via [`pack`].
pub fn randtest_kron(
    terms: usize,
    nvars: usize,
    var_degree: &BigUint,
    height: &BigUint,
    rng: &mut impl Rng,
) -> SpPoly {
    use num_bigint::RandBigInt;
    let bounds: Vec<BigUint> = vec![var_degree + BigUint::one(); nvars];
    let two_h = height * BigUint::from(2u32) + BigUint::one();
    let mut built = std::collections::BTreeMap::new();
    for _ in 0..terms {
        let tuple: Vec<BigInt> = bounds
            .iter()
            .map(|b| BigInt::from(rng.gen_biguint_below(b)))
            .collect();
        let e = pack(&tuple, &bounds);
        let raw = rng.gen_biguint_below(&two_h);
        let c = BigInt::from(raw) - BigInt::from(height.clone());
        if !c.is_zero() {
            built.insert(e, c);
        }
    }
    SpPoly::from_terms(built.into_iter().collect())
}

fn reduce_nonneg(x: &BigInt, modulus: &BigInt) -> BigInt {
    ((x % modulus) + modulus) % modulus
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn rem_cyc_wraps_and_combines() {
        let p = SpPoly::from_terms(vec![
            (BigInt::from(3), BigInt::from(5)),
            (BigInt::from(4), BigInt::from(2)),
        ]);
        // e=5 and e=2 both reduce to 2 mod 3, so they combine.
        let r = rem_cyc(&p, &BigUint::from(3u32));
        assert_eq!(r.term_count(), 1);
        assert_eq!(r.coeff_at(&BigInt::from(2)), BigInt::from(7));
    }

    #[test]
    fn rem_cyc_dense_matches_rem_cyc() {
        let p = SpPoly::from_terms(vec![
            (BigInt::from(3), BigInt::from(5)),
            (BigInt::from(-4), BigInt::from(2)),
            (BigInt::from(1), BigInt::from(8)),
        ]);
        let dense = rem_cyc_dense(&p, 3);
        let sparse = rem_cyc(&p, &BigUint::from(3u32));
        for (i, v) in dense.iter().enumerate() {
            assert_eq!(*v, sparse.coeff_at(&BigInt::from(i as u64)));
        }
    }

    #[test]
    fn evaluate_mod_matches_direct_horner() {
        let p = SpPoly::from_terms(vec![
            (BigInt::from(2), BigInt::from(3)),
            (BigInt::from(5), BigInt::from(1)),
            (BigInt::from(-1), BigInt::from(0)),
        ]);
        let modulus = BigUint::from(101u32);
        let point = Zq::new(BigUint::from(7u32), modulus.clone());
        let got = evaluate_mod(&p, &point);
        // 2*7^3 + 5*7 - 1 = 686 + 35 - 1 = 720; 720 mod 101 = 13.
        assert_eq!(got.value(), &BigUint::from(13u32));
    }

    #[test]
    fn evaluate_mod_handles_negative_exponents() {
        let p = SpPoly::from_terms_laurent(vec![(BigInt::from(1), BigInt::from(-1))]);
        let modulus = BigUint::from(11u32);
        let point = Zq::new(BigUint::from(3u32), modulus.clone());
        let got = evaluate_mod(&p, &point);
        let expected = point.inverse().unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn pack_unpack_round_trips() {
        let bounds = vec![BigUint::from(10u32), BigUint::from(20u32), BigUint::from(5u32)];
        let tuple = vec![BigInt::from(3), BigInt::from(17), BigInt::from(4)];
        let packed = pack(&tuple, &bounds);
        let unpacked = unpack(packed, &bounds);
        assert_eq!(unpacked, tuple);
    }

    #[test]
    fn evaluate_powers_matches_pointwise_above_xover() {
        // A polynomial with enough terms to clear EVAL_XOVER and force
        // the batched transposed-Vandermonde path, and more terms than
        // the requested length so the panel (len < terms) branch runs.
        let modulus = BigUint::from(10007u32);
        let terms: Vec<(BigInt, BigInt)> = (0u32..40)
            .map(|i| (BigInt::from(3 * i as i64 + 1), BigInt::from(i)))
            .collect();
        let p = SpPoly::from_terms(terms);
        let w = Zq::new(BigUint::from(5u32), modulus.clone());
        let len = 25;
        let batched = evaluate_powers(&p, &w, len);
        let mut wpow = Zq::one(modulus.clone());
        for got in batched.iter() {
            assert_eq!(evaluate_mod(&p, &wpow), *got);
            wpow = wpow * w.clone();
        }
    }

    #[test]
    fn evaluate_powers_matches_pointwise_when_len_exceeds_terms() {
        // Fewer terms than the requested length exercises the
        // single-pass transposed-Vandermonde branch instead of panels.
        let modulus = BigUint::from(10007u32);
        let terms: Vec<(BigInt, BigInt)> = (0u32..40)
            .map(|i| (BigInt::from(2 * i as i64 + 3), BigInt::from(i)))
            .collect();
        let p = SpPoly::from_terms(terms);
        let w = Zq::new(BigUint::from(7u32), modulus.clone());
        let len = 50;
        let batched = evaluate_powers(&p, &w, len);
        let mut wpow = Zq::one(modulus.clone());
        for got in batched.iter() {
            assert_eq!(evaluate_mod(&p, &wpow), *got);
            wpow = wpow * w.clone();
        }
    }

    #[test]
    fn evaluate_powers_direct_regime_matches_pointwise() {
        // Below EVAL_XOVER terms, evaluate_powers takes the direct path.
        let p = SpPoly::from_terms(vec![
            (BigInt::from(3), BigInt::from(4)),
            (BigInt::from(-2), BigInt::from(1)),
        ]);
        let modulus = BigUint::from(10007u32);
        let w = Zq::new(BigUint::from(9u32), modulus.clone());
        let len = 5;
        let batched = evaluate_powers(&p, &w, len);
        let mut wpow = Zq::one(modulus.clone());
        for got in batched.iter() {
            assert_eq!(evaluate_mod(&p, &wpow), *got);
            wpow = wpow * w.clone();
        }
    }

    #[test]
    fn randtest_respects_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let degree = BigUint::from(1000u32);
        let height = BigUint::from(50u32);
        let p = randtest(10, &degree, &height, &mut rng);
        assert!(p.term_count() <= 10);
        for (c, e) in p.terms() {
            assert!(e >= &BigInt::zero() && e.to_biguint().unwrap() <= degree);
            assert!(c.abs().to_biguint().unwrap() <= height);
        }
    }
}
