//! Sumset estimator (C8): the support of a sparse product `f·g` — the
//! set of exponents `{eᵢ + e'ⱼ : cᵢ ≠ 0, c'ⱼ ≠ 0}` — recovered via BP
//! interpolation over modular images rather than combinatorial
//! enumeration of every `(i, j)` pair.
//!
//! Grounded on `fmpz_spoly/sumset.c`: build 0/1 "shadow" indicator
//! polynomials `f₁ = Σ x^{eᵢ}`, `g₁ = Σ x^{e'ⱼ}` in place of `f` and
//! `g`'s real coefficients, then recover `h₁ = f₁·g₁` via the BP
//! engine (evaluate both shadows at the same sample points, multiply
//! pointwise, interpolate). Because this crate's BP interpolation
//! recovers each term's *exact* exponent directly (via the power-of-
//! generator root finder's discrete logs, §C4) rather than leaving it
//! behind an opaque modular residue, `h₁`'s own recovered exponents
//! already *are* the sumset — the original "exponent-weighted marker
//! polynomial + ceiling-division" trick FLINT uses to extract exponents
//! from residue-only data is therefore redundant here and is dropped;
//! see `DESIGN.md`. `h₁`'s coefficients (always positive pair-counts)
//! are otherwise discarded.
//!
//! The distilled spec's stability-loop size estimate ("run 10 trials,
//! grow on improvement, double at the end") is documented there as a
//! substitutable engineering heuristic. This crate folds estimation
//! and verification into one loop: the BP engine's own
//! [`SpolyError::EstimateTooLow`] signal doubles the candidate size
//! directly, which is both simpler and exact, and a bounded retry
//! count guards against the otherwise-unbounded loop such a strategy
//! implies — falling back, if every attempt is exhausted, to direct
//! combinatorial enumeration so the function always terminates with a
//! correct answer rather than spinning forever on bad luck.

use crate::bp_interp::{bp_eval, bp_interp, BpEval};
use crate::poly::SpPoly;
use crate::primes::bp_basis_params;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use rand::Rng;
use std::collections::BTreeSet;

/// Growth-loop retry budget before falling back to direct enumeration.
const MAX_GROWTH_ROUNDS: u32 = 24;

/// Returns, with high probability (and always correctly once the
/// fallback triggers), the sorted set of exponents of the product
/// `f·g`.
pub fn sumset(f: &SpPoly, g: &SpPoly, rng: &mut impl Rng) -> Vec<BigInt> {
    if f.is_zero() || g.is_zero() {
        return Vec::new();
    }

    let f1 = indicator(f);
    let g1 = indicator(g);

    let degree_bound = (f.degree().unwrap() + g.degree().unwrap())
        .to_biguint()
        .unwrap_or_else(BigUint::zero)
        .max(BigUint::one());
    let max_pairs = BigUint::from(f.term_count() as u64) * BigUint::from(g.term_count() as u64);

    let mut estimate = BigUint::one();
    for _ in 0..MAX_GROWTH_ROUNDS {
        let terms = estimate.to_u64_digits().first().copied().unwrap_or(u64::MAX) as usize;
        let basis = bp_basis_params(terms.max(1), &degree_bound, &max_pairs, false, rng);

        let eval_f1 = bp_eval(&basis, &f1);
        let eval_g1 = bp_eval(&basis, &g1);
        let h1_eval = pointwise_mul(&eval_f1, &eval_g1);

        if let Ok(h1) = bp_interp(&basis, &h1_eval) {
            let mut out: Vec<BigInt> = h1.expons().to_vec();
            out.sort();
            return out;
        }

        estimate = (&estimate * BigUint::from(2u32)).min(max_pairs.clone()).max(BigUint::one());
    }

    sumset_direct(f, g)
}

/// Replaces every coefficient of `p` with `1`, keeping only its
/// exponents.
fn indicator(p: &SpPoly) -> SpPoly {
    let terms = p.terms().map(|(_, e)| (BigInt::one(), e.clone())).collect();
    SpPoly::from_terms(terms)
}

fn pointwise_mul(a: &BpEval, b: &BpEval) -> BpEval {
    debug_assert_eq!(a.evals.len(), b.evals.len());
    BpEval {
        evals: a
            .evals
            .iter()
            .zip(b.evals.iter())
            .map(|(x, y)| x.clone() * y.clone())
            .collect(),
    }
}

/// Direct `O(|f|·|g|)` fallback: enumerates every exponent pair. Only
/// reached if the BP-based recovery above exhausts its retry budget,
/// which at `estimate == max_pairs` would require a run of
/// improbable bad luck in random root-of-unity selection.
fn sumset_direct(f: &SpPoly, g: &SpPoly) -> Vec<BigInt> {
    let mut set = BTreeSet::new();
    for (_, e1) in f.terms() {
        for (_, e2) in g.terms() {
            set.insert(e1 + e2);
        }
    }
    set.into_iter().collect()
}
