//! Output-sensitive sparse multiplication (C9).
//!
//! Grounded on `fmpz_spoly/mul_OS.c` and `mul_coeffs.c`: recovers the
//! support of `f*g` via the sumset estimator ([`crate::sumset`]), then
//! resolves each coefficient directly — without ever expanding the
//! `|f|*|g|` term-pair product — by repeated random-prime
//! exponent-class-sum convolution, and finally verifies the candidate
//! against one fresh random prime and evaluation point before
//! returning it.

use crate::error::{SpolyError, SpolyResult};
use crate::numutil;
use crate::poly::SpPoly;
use crate::sumset::sumset;
use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::Zero;
use rand::Rng;
use std::collections::{BTreeSet, HashMap};

/// Below this term count on either side, classical `O(t1*t2)`
/// multiplication is cheaper than standing up the sumset/mul_coeffs
/// machinery — mirrors the teacher's small-input shortcuts.
const MUL_OS_XOVER: usize = 4;

/// Bounded retry budget for `mul_coeffs`'s prime-resolution loop.
const MAX_COEFF_ROUNDS: u32 = 64;

/// Bounded retry budget for the outer sumset/verify loop. Unlike
/// FLINT's `mul_OS` (which retries unboundedly and never surfaces a
/// verification failure to its caller), this crate bounds the retry
/// and returns [`SpolyError::VerificationExhausted`] once exhausted —
/// see `DESIGN.md` for why an unbounded loop is not an acceptable
/// library contract here.
const MAX_VERIFY_ROUNDS: u32 = 8;

const MR_ROUNDS: u32 = 40;

/// Precondition: the caller is expected to pass nonzero `f`, `g` (as
/// the distilled spec states), but zero inputs are handled directly
/// rather than treated as an invariant violation, since "multiply by
/// zero" has an obvious, cheap answer.
///
/// Computes `f * g` in work roughly proportional to the term count of
/// the *result* rather than `|f|*|g|`.
pub fn mul_os(f: &SpPoly, g: &SpPoly, rng: &mut impl Rng) -> SpolyResult<SpPoly> {
    if f.is_zero() || g.is_zero() {
        return Ok(SpPoly::zero());
    }
    if f.term_count() <= MUL_OS_XOVER || g.term_count() <= MUL_OS_XOVER {
        return Ok(f.mul_classical(g));
    }

    for _ in 0..MAX_VERIFY_ROUNDS {
        let support = sumset(f, g, rng);
        if support.is_empty() {
            return Ok(SpPoly::zero());
        }

        let coeffs = match mul_coeffs(f, g, &support, rng) {
            Some(c) => c,
            None => continue,
        };

        let terms: Vec<(BigInt, BigInt)> = support
            .iter()
            .cloned()
            .zip(coeffs.into_iter())
            .map(|(e, c)| (c, e))
            .collect();
        let candidate = SpPoly::from_terms(terms);

        if verify(f, g, &candidate, rng) {
            return Ok(candidate);
        }
    }

    Err(SpolyError::VerificationExhausted {
        attempts: MAX_VERIFY_ROUNDS,
    })
}

/// Resolves the coefficient of `f*g` at each exponent in `support`
/// (any order), returning `None` if the bounded prime-search budget is
/// exhausted before every coefficient is known — the caller should
/// retry with a fresh `support` from a new `sumset` call, since a
/// stuck residue collision is an artifact of the particular primes
/// tried, not of the support itself.
///
/// Grounded on `fmpz_spoly/mul_coeffs.c`: reduce both inputs modulo
/// `x^p - 1` by summing coefficients within each residue class (exact
/// integer sums, not a modular reduction of the sums themselves), take
/// the cyclic convolution of the two dense length-`p` vectors, and
/// read off `h(s_k)` directly from class `s_k mod p` whenever `s_k` is
/// the only known-support exponent landing there (after subtracting
/// any already-resolved contributions sharing that class).
fn mul_coeffs(f: &SpPoly, g: &SpPoly, support: &[BigInt], rng: &mut impl Rng) -> Option<Vec<BigInt>> {
    let n = support.len();
    let mut known: Vec<Option<BigInt>> = vec![None; n];
    let mut used_primes: BTreeSet<u64> = BTreeSet::new();
    let mut remaining = n;

    let mut p = next_unused_prime(2 * n as u64, &mut used_primes, rng);

    for _ in 0..MAX_COEFF_ROUNDS {
        if remaining == 0 {
            break;
        }

        let f_dense = exponent_class_sums(f, p);
        let g_dense = exponent_class_sums(g, p);
        let h_dense = cyclic_convolution(&f_dense, &g_dense, p);

        let mut classes: HashMap<usize, Vec<usize>> = HashMap::new();
        for (idx, e) in support.iter().enumerate() {
            classes.entry(reduce_class(e, p)).or_default().push(idx);
        }

        let mut resolved_this_round = 0usize;
        for (class, idxs) in classes.iter() {
            let mut known_sum = BigInt::zero();
            let mut unknown_idx = None;
            let mut unknown_count = 0;
            for &idx in idxs {
                match &known[idx] {
                    Some(c) => known_sum += c,
                    None => {
                        unknown_count += 1;
                        unknown_idx = Some(idx);
                    }
                }
            }
            if unknown_count == 1 {
                let idx = unknown_idx.unwrap();
                known[idx] = Some(&h_dense[*class] - &known_sum);
                resolved_this_round += 1;
                remaining -= 1;
            }
        }

        if remaining == 0 {
            break;
        }
        p = if resolved_this_round > 0 {
            next_unused_prime(2 * remaining as u64, &mut used_primes, rng)
        } else {
            next_unused_prime(p + 1, &mut used_primes, rng)
        };
    }

    if remaining == 0 {
        Some(known.into_iter().map(|c| c.unwrap_or_else(BigInt::zero)).collect())
    } else {
        None
    }
}

/// The smallest probable prime `>= start` not already in `used`, added
/// to `used` before being returned — "never reuse a prime already in
/// the cumulative product" from the distilled spec's `mul_coeffs`
/// description.
fn next_unused_prime(start: u64, used: &mut BTreeSet<u64>, rng: &mut impl Rng) -> u64 {
    let mut candidate = BigUint::from(start.max(2));
    loop {
        if numutil::is_probable_prime(&candidate, MR_ROUNDS, rng) {
            let as_u64 = candidate.iter_u64_digits().next().unwrap_or(2);
            if !used.contains(&as_u64) {
                used.insert(as_u64);
                return as_u64;
            }
        }
        candidate += BigUint::from(1u32);
    }
}

/// `out[j] = Σ_{e ≡ j (mod p)} c_e`, the exact (unreduced) integer sum
/// of coefficients whose exponent falls in residue class `j`.
fn exponent_class_sums(p_poly: &SpPoly, p: u64) -> Vec<BigInt> {
    let mut out = vec![BigInt::zero(); p as usize];
    for (c, e) in p_poly.terms() {
        out[reduce_class(e, p)] += c;
    }
    out
}

/// `out[j] = Σ_a f[a] * g[(j - a) mod p]`, the cyclic convolution that
/// computing mod `x^p - 1` commutes with: reducing `f` and `g`
/// modulo `x^p - 1` and multiplying gives the same thing as
/// multiplying `f*g` and then reducing modulo `x^p - 1`.
fn cyclic_convolution(f: &[BigInt], g: &[BigInt], p: u64) -> Vec<BigInt> {
    let p = p as usize;
    let mut out = vec![BigInt::zero(); p];
    for (a, fa) in f.iter().enumerate() {
        if fa.is_zero() {
            continue;
        }
        for (b, gb) in g.iter().enumerate() {
            if gb.is_zero() {
                continue;
            }
            out[(a + b) % p] += fa * gb;
        }
    }
    out
}

fn reduce_class(e: &BigInt, p: u64) -> usize {
    let p_big = BigInt::from(p);
    let r = ((e % &p_big) + &p_big) % &p_big;
    r.to_string().parse::<u64>().expect("reduced exponent fits in u64") as usize
}

/// Checks `f(x)*g(x) ≡ h(x) (mod p')` at one fresh random prime `p'`
/// and random point `x`, the cheap probabilistic check `mul_os` uses
/// before trusting a candidate support/coefficient recovery.
fn verify(f: &SpPoly, g: &SpPoly, h: &SpPoly, rng: &mut impl Rng) -> bool {
    let modulus = numutil::random_prime_bits(61, MR_ROUNDS, rng);
    let m = BigInt::from(modulus);
    let x = rng.gen_bigint_range(&BigInt::zero(), &m);

    let lhs = (f.evaluate_mod(&x, &m) * g.evaluate_mod(&x, &m)) % &m;
    let rhs = h.evaluate_mod(&x, &m);
    ((lhs - rhs) % &m + &m) % &m == BigInt::zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::support;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(17)
    }

    #[test]
    fn matches_classical_s1_scenario() {
        // S1: f = 20x^4913 + 65x^3631 + 16x^2520 + 26x^1238,
        //     g = 60x^4316 - 48x^1923 + 78x^641.
        let f = SpPoly::from_terms(vec![
            (BigInt::from(20), BigInt::from(4913)),
            (BigInt::from(65), BigInt::from(3631)),
            (BigInt::from(16), BigInt::from(2520)),
            (BigInt::from(26), BigInt::from(1238)),
        ]);
        let g = SpPoly::from_terms(vec![
            (BigInt::from(60), BigInt::from(4316)),
            (BigInt::from(-48), BigInt::from(1923)),
            (BigInt::from(78), BigInt::from(641)),
        ]);
        let expected = f.mul_classical(&g);
        assert_eq!(expected.term_count(), 12);
        assert_eq!(expected.coeff_at(&BigInt::from(9229)), BigInt::from(3900));
        assert_eq!(expected.coeff_at(&BigInt::from(4443)), BigInt::from(-768));

        // f has only 4 terms (<= MUL_OS_XOVER), so exercise mul_coeffs
        // directly on its exact support rather than going through the
        // xover shortcut.
        let mut r = rng();
        let support: Vec<BigInt> = {
            let mut s = expected.expons().to_vec();
            s.sort();
            s
        };
        let coeffs = mul_coeffs(&f, &g, &support, &mut r).expect("resolves within budget");
        let terms: Vec<(BigInt, BigInt)> = support.into_iter().zip(coeffs).map(|(e, c)| (c, e)).collect();
        let recovered = SpPoly::from_terms(terms);
        assert_eq!(recovered, expected);
    }

    #[test]
    fn mul_os_matches_mul_classical_for_random_inputs() {
        let mut r = rng();
        let f = support::randtest(10, &BigUint::from(5000u32), &BigUint::from(1000u32), &mut r);
        let g = support::randtest(10, &BigUint::from(5000u32), &BigUint::from(1000u32), &mut r);
        let expected = f.mul_classical(&g);
        let got = mul_os(&f, &g, &mut r).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn mul_os_with_zero_input_is_zero() {
        let mut r = rng();
        let f = SpPoly::zero();
        let g = support::randtest(5, &BigUint::from(100u32), &BigUint::from(10u32), &mut r);
        assert!(mul_os(&f, &g, &mut r).unwrap().is_zero());
    }

    #[test]
    fn small_inputs_take_the_classical_shortcut() {
        let mut r = rng();
        let f = SpPoly::from_terms(vec![(BigInt::from(2), BigInt::from(3))]);
        let g = SpPoly::from_terms(vec![(BigInt::from(5), BigInt::from(7))]);
        let got = mul_os(&f, &g, &mut r).unwrap();
        assert_eq!(got, f.mul_classical(&g));
    }
}
