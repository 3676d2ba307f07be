//! Power-of-generator root finder (C4).
//!
//! Grounded on `fmpz_spoly/bp_interp.c`'s `_fmpz_mod_poly_binary_roots`:
//! given a monic polynomial over `Z/qZ` that is promised to split
//! completely into distinct linear factors whose roots are all powers
//! of a generator `θ` of order `2^k`, recover every root together with
//! its discrete log base `θ`, by recursively separating even-power
//! roots (a `gcd` with `x^{2^{k-1}} - 1`) from odd-power roots (handled
//! by substituting `x ← θ·x` so they become even-power roots of a
//! smaller-order generator).

use crate::error::{SpolyError, SpolyResult};
use crate::field::element::Zq;
use crate::field::poly::PolyZq;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

/// Finds every root of `f` as a power of `theta`, returning
/// `(root, discrete_log)` pairs. `theta` must have multiplicative
/// order exactly `2^k`, and `f` must split completely into distinct
/// linear factors whose roots are all powers of `theta` — the caller
/// (C6, the BP interpolation engine) guarantees this via the
/// structure of the Prony polynomial it passes in.
///
/// Returns [`SpolyError::NoRootFound`] if `f` does not factor this way
/// (for instance if Berlekamp–Massey returned a degenerate polynomial
/// from a corrupted evaluation sequence).
pub fn power_of_generator_roots(f: &PolyZq, theta: &Zq, k: u32) -> SpolyResult<Vec<(Zq, u64)>> {
    let modulus = f.modulus().clone();
    if f.is_zero() {
        return Err(SpolyError::NoRootFound);
    }
    let n = f.degree().unwrap_or(0);
    let order = BigUint::one() << k;
    if !theta.has_order_exactly(&order) {
        return Err(SpolyError::NoRootFound);
    }

    let roots = binary_roots(f, theta, k, &modulus)?;
    if roots.len() != n {
        return Err(SpolyError::NoRootFound);
    }
    Ok(roots)
}

/// The recursive split. `theta` has order exactly `2^k`; `f` is
/// assumed monic of degree `<= 2^k`.
fn binary_roots(
    f: &PolyZq,
    theta: &Zq,
    k: u32,
    modulus: &BigUint,
) -> SpolyResult<Vec<(Zq, u64)>> {
    let n = f.degree().unwrap_or(0);
    let order = 1u64 << k;

    if n as u64 >= order {
        // Every power of theta is a root by the promise in the
        // caller's contract: f has degree >= the generator's order,
        // so f must be (a divisor of) x^order - 1 itself.
        return Ok((0..order)
            .map(|i| (theta.pow(&BigUint::from(i)), i))
            .collect());
    }

    if k == 0 {
        // Order 1: the only power of theta is 1 itself.
        return if n == 0 {
            Ok(Vec::new())
        } else {
            Err(SpolyError::NoRootFound)
        };
    }

    // g = gcd(f, x^{2^{k-1}} - 1): the factor whose roots are the
    // even powers of theta (since (theta^{2j})^{2^{k-1}} = theta^{j *
    // 2^k} = 1).
    let half_order = BigUint::one() << (k - 1);
    let x_to_half_minus_one = x_to_power_minus_one(&half_order, modulus);
    let g = f.gcd(&x_to_half_minus_one)?;
    let (odd_factor, _) = f.div_rem(&g)?;

    let mut roots = Vec::with_capacity(n);

    if !g.is_zero() && g.degree().unwrap_or(0) > 0 {
        let theta_sq = theta.clone() * theta.clone();
        let even_roots = binary_roots(&g, &theta_sq, k - 1, modulus)?;
        roots.extend(even_roots.into_iter().map(|(r, log)| (r, 2 * log)));
    }

    if !odd_factor.is_zero() && odd_factor.degree().unwrap_or(0) > 0 {
        // Substitute x <- theta * x in odd_factor, then renormalize to
        // monic: this maps each odd-power root r = theta^{2j+1} to
        // r/theta = theta^{2j}, an even power, recoverable by the same
        // recursion at order 2^{k-1}.
        let substituted = substitute_scale(&odd_factor, theta, modulus);
        let theta_sq = theta.clone() * theta.clone();
        let odd_roots = binary_roots(&substituted, &theta_sq, k - 1, modulus)?;
        roots.extend(odd_roots.into_iter().map(|(r, log)| (r * theta.clone(), 2 * log + 1)));
    }

    Ok(roots)
}

/// Builds `x^e - 1` as a monic dense polynomial over `Z/qZ`.
fn x_to_power_minus_one(e: &BigUint, modulus: &BigUint) -> PolyZq {
    let e = e.to_usize().expect("exponent fits in usize for any realistic degree bound");
    let mut coeffs = vec![num_bigint::BigUint::from(0u32); e + 1];
    coeffs[0] = modulus - BigUint::one();
    coeffs[e] = BigUint::one();
    PolyZq::from_coeffs(coeffs, modulus.clone())
}

/// Substitutes `x <- theta * x` into `p`, then divides through by
/// `theta^deg` to restore a monic leading coefficient.
///
/// Grounded on the same routine in `bp_interp.c`: scaling coefficient
/// `i` by `theta^i`, then scaling the whole result by `theta^{-deg}`.
fn substitute_scale(p: &PolyZq, theta: &Zq, modulus: &BigUint) -> PolyZq {
    let deg = p.degree().unwrap_or(0);
    let mut pow = Zq::one(modulus.clone());
    let mut coeffs = Vec::with_capacity(p.coefficients().len());
    for c in p.coefficients().iter() {
        let scaled = Zq::new(c.clone(), modulus.clone()) * pow.clone();
        coeffs.push(scaled.value().clone());
        pow = pow * theta.clone();
    }
    let scaled_poly = PolyZq::from_coeffs(coeffs, modulus.clone());
    let theta_deg_inv = theta
        .pow(&BigUint::from(deg as u64))
        .inverse()
        .expect("theta is a unit (it generates a nontrivial subgroup)");
    scaled_poly.scale(&theta_deg_inv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::poly::algorithms::minpoly;
    use num_bigint::BigUint;

    /// Builds a monic polynomial whose roots are exactly `theta^e` for
    /// `e` in `exponents`, by directly multiplying out the linear
    /// factors — the reference construction the root finder's output
    /// is checked against.
    fn poly_with_roots(theta: &Zq, exponents: &[u64], modulus: &BigUint) -> PolyZq {
        let mut p = PolyZq::constant(Zq::one(modulus.clone()));
        for &e in exponents {
            let root = theta.pow(&BigUint::from(e));
            p = p.mul(&PolyZq::x_minus_a(&root));
        }
        p
    }

    #[test]
    fn recovers_roots_and_logs_small_order() {
        // q = 17, order 8 (17 - 1 = 16, so an order-8 subgroup exists).
        let modulus = BigUint::from(17u32);
        let generator = Zq::new(BigUint::from(2u32), modulus.clone()); // order 8 mod 17
        assert!(generator.has_order_exactly(&BigUint::from(8u32)));

        let exponents = [1u64, 3, 6];
        let f = poly_with_roots(&generator, &exponents, &modulus);

        let roots = power_of_generator_roots(&f, &generator, 3).unwrap();
        assert_eq!(roots.len(), exponents.len());
        for (root, log) in &roots {
            assert!(f.evaluate(root).is_zero());
            assert_eq!(*root, generator.pow(&BigUint::from(*log)));
        }
        let mut logs: Vec<u64> = roots.iter().map(|(_, l)| *l).collect();
        logs.sort_unstable();
        assert_eq!(logs, vec![1, 3, 6]);
    }

    #[test]
    fn integrates_with_berlekamp_massey_sequence() {
        // Build a geometric sequence b_i = sum of theta^{e_j * i} for
        // known exponents e_j, recover the Prony polynomial via
        // minpoly, then recover the exponents via the root finder.
        let modulus = BigUint::from(97u32); // 97 - 1 = 96 = 32 * 3, order-32 subgroup exists
        let mut generator = None;
        for cand in 2u32..97 {
            let g = Zq::new(BigUint::from(cand), modulus.clone());
            if g.has_order_exactly(&BigUint::from(32u32)) {
                generator = Some(g);
                break;
            }
        }
        let theta = generator.expect("order-32 element exists mod 97");
        let exponents = [2u64, 5, 11];

        let seq: Vec<Zq> = (0..2 * exponents.len())
            .map(|i| {
                exponents
                    .iter()
                    .fold(Zq::zero(modulus.clone()), |acc, &e| {
                        acc + theta.pow(&BigUint::from(e)).pow(&BigUint::from(i as u64))
                    })
            })
            .collect();

        let lambda = minpoly(&seq, &modulus);
        assert_eq!(lambda.degree(), Some(exponents.len()));

        let roots = power_of_generator_roots(&lambda, &theta, 5).unwrap();
        let mut logs: Vec<u64> = roots.iter().map(|(_, l)| *l).collect();
        logs.sort_unstable();
        assert_eq!(logs, vec![2, 5, 11]);
    }
}
